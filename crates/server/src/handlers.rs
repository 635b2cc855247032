//! HTTP handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::Uri,
    response::Html,
};
use clockwork_domain::{ClockFormat, FormattedTime, TimezoneEntry, WorldclockTime};

use crate::error::ApiError;
use crate::page::render_page;
use crate::state::AppState;

/// Raw query pairs in request order.
///
/// Repeated keys are legal; the first occurrence wins.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`, if any.
#[must_use]
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// `GET /`: the clock page with an initial 12-hour snapshot.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.format_now().execute(ClockFormat::TwelveHour);
    Html(render_page(&snapshot, state.catalog().entries()))
}

/// `GET /time?format=12|24`; anything else means 12.
pub async fn time(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Json<FormattedTime> {
    let format = ClockFormat::from_param(first_param(&query, "format"));
    Json(state.format_now().execute(format))
}

/// `GET /worldclock?timezone=<IANA id>`; UTC when absent.
pub async fn worldclock(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<WorldclockTime>, ApiError> {
    let time = state
        .worldclock_now()
        .execute(first_param(&query, "timezone"))?;
    Ok(Json(time))
}

/// `GET /timezones`: the selector catalog.
pub async fn timezones(State(state): State<AppState>) -> Json<&'static [TimezoneEntry]> {
    Json(state.catalog().entries())
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_first_param_takes_first_occurrence() {
        let query = pairs(&[("format", "24"), ("other", "x"), ("format", "12")]);
        assert_eq!(first_param(&query, "format"), Some("24"));
        assert_eq!(first_param(&query, "timezone"), None);
    }
}
