//! Integration tests for the HTTP endpoint layer.
//!
//! These drive the router in-process with `tower::ServiceExt::oneshot`,
//! using a frozen clock so responses are deterministic.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, TimeZone, Utc};
use clockwork_application::ports::Clock;
use clockwork_infrastructure::{ChronoTzResolver, SystemClock};
use clockwork_server::{AppState, build_router};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct BrokenClock;

impl Clock for BrokenClock {
    fn now(&self) -> DateTime<Utc> {
        panic!("clock unavailable")
    }
}

fn known_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 13, 5, 9).single().unwrap()
}

fn fixed_state() -> AppState {
    AppState::new(
        Arc::new(FixedClock(known_instant())),
        Arc::new(ChronoTzResolver::new()),
        Some("UTC"),
    )
    .unwrap()
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = build_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(state, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn is_digits(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}

#[tokio::test]
async fn test_time_twenty_four_hour_at_known_instant() {
    let (status, body) = get_json(fixed_state(), "/time?format=24").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"date": "Friday, January 05, 2024", "time": "13:05:09"})
    );
}

#[tokio::test]
async fn test_time_twelve_hour_at_known_instant() {
    let (status, body) = get_json(fixed_state(), "/time?format=12").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time"], "01:05:09 PM");
}

#[tokio::test]
async fn test_time_unknown_or_missing_format_defaults_to_twelve_hour() {
    for uri in ["/time", "/time?format=25", "/time?format="] {
        let (status, body) = get_json(fixed_state(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["time"], "01:05:09 PM", "{uri}");
    }
}

#[tokio::test]
async fn test_live_time_patterns() {
    let state = AppState::new(
        Arc::new(SystemClock::new()),
        Arc::new(ChronoTzResolver::new()),
        None,
    )
    .unwrap();

    let (_, body) = get_json(state.clone(), "/time?format=24").await;
    let time = body["time"].as_str().unwrap();
    let parts: Vec<&str> = time.split(':').collect();
    assert_eq!(parts.len(), 3, "{time}");
    assert!(parts.iter().all(|p| is_digits(p)), "{time}");
    assert!(parts[0].parse::<u32>().unwrap() <= 23);

    let (_, body) = get_json(state, "/time?format=12").await;
    let time = body["time"].as_str().unwrap();
    let (clock, meridiem) = time.split_once(' ').unwrap();
    assert!(meridiem == "AM" || meridiem == "PM", "{time}");
    let hour: u32 = clock[..2].parse().unwrap();
    assert!((1..=12).contains(&hour), "{time}");
}

#[tokio::test]
async fn test_worldclock_converts_zone() {
    let (status, body) = get_json(fixed_state(), "/worldclock?timezone=Asia%2FTokyo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"time": "10:05:09 PM"}));
}

#[tokio::test]
async fn test_worldclock_defaults_to_utc() {
    let (status, body) = get_json(fixed_state(), "/worldclock").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time"], "01:05:09 PM");
}

#[tokio::test]
async fn test_worldclock_utc_tracks_server_instant() {
    let state = AppState::new(
        Arc::new(SystemClock::new()),
        Arc::new(ChronoTzResolver::new()),
        None,
    )
    .unwrap();

    let before = Utc::now();
    let (status, body) = get_json(state, "/worldclock?timezone=UTC").await;
    let after = Utc::now();
    assert_eq!(status, StatusCode::OK);

    let reported = body["time"].as_str().unwrap().to_string();
    let window = [before, after];
    let matches = window.iter().any(|t| {
        (-2..=2).any(|delta| {
            let candidate = *t + chrono::Duration::seconds(delta);
            candidate.format("%I:%M:%S %p").to_string() == reported
        })
    });
    assert!(matches, "{reported} not within 2s of {before}..{after}");
}

#[tokio::test]
async fn test_worldclock_unknown_timezone_is_bad_request() {
    let (status, body) = get_json(fixed_state(), "/worldclock?timezone=Mars/Phobos").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "unknown_timezone");
    assert_eq!(body["error"]["message"], "unknown timezone: Mars/Phobos");
}

#[tokio::test]
async fn test_worldclock_empty_timezone_is_bad_request() {
    let (status, body) = get_json(fixed_state(), "/worldclock?timezone=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "unknown_timezone");
}

#[tokio::test]
async fn test_worldclock_identifier_case_is_ignored() {
    let (status, body) = get_json(fixed_state(), "/worldclock?timezone=asia/tokyo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"time": "10:05:09 PM"}));

    let (status, body) = get_json(fixed_state(), "/worldclock?timezone=utc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"time": "01:05:09 PM"}));
}

#[tokio::test]
async fn test_repeated_query_keys_use_first_value() {
    let (status, body) = get_json(fixed_state(), "/time?format=24&format=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time"], "13:05:09");

    let (status, body) =
        get_json(fixed_state(), "/worldclock?timezone=UTC&timezone=Mars/Phobos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"time": "01:05:09 PM"}));

    let (status, body) =
        get_json(fixed_state(), "/worldclock?timezone=Mars/Phobos&timezone=UTC").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "unknown_timezone");
}

#[tokio::test]
async fn test_index_embeds_snapshot_and_catalog() {
    let response = build_router(fixed_state())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Friday, January 05, 2024"));
    assert!(html.contains("01:05:09 PM"));
    assert!(html.contains(r#"<option value="Australia/Sydney">Australia (Sydney)</option>"#));
}

#[tokio::test]
async fn test_timezones_lists_catalog() {
    let (status, body) = get_json(fixed_state(), "/timezones").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[0], json!({"id": "UTC", "label": "UTC"}));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = get_json(fixed_state(), "/moon").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_handler_panic_is_internal_error() {
    let state = AppState::new(
        Arc::new(BrokenClock),
        Arc::new(ChronoTzResolver::new()),
        None,
    )
    .unwrap();
    let (status, body) = get_json(state, "/time?format=24").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": {"code": "internal", "message": "internal error"}})
    );
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = build_router(fixed_state())
        .oneshot(Request::builder().uri("/time").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let (_, first) = get_json(fixed_state(), "/time?format=24").await;
    let (_, second) = get_json(fixed_state(), "/time?format=24").await;
    assert_eq!(first, second);
}

#[test]
fn test_invalid_display_timezone_rejected() {
    let result = AppState::new(
        Arc::new(FixedClock(known_instant())),
        Arc::new(ChronoTzResolver::new()),
        Some("Mars/Phobos"),
    );
    assert!(result.is_err());
}
