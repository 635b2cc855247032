//! Time server client using reqwest.
//!
//! This adapter implements the `ClockApi` port against the HTTP routes the
//! server exposes (`/time`, `/worldclock`, `/timezones`).

use std::time::Duration;

use async_trait::async_trait;
use clockwork_application::ports::{ClockApi, ClockApiError, RemoteTimezone};
use clockwork_domain::{ClockFormat, FormattedTime, WorldclockTime};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct TimezoneDto {
    id: String,
    label: String,
}

/// `ClockApi` implementation using reqwest.
pub struct ReqwestClockApi {
    client: Client,
    base_url: Url,
}

impl ReqwestClockApi {
    /// Creates a client for the server at `base_url`.
    ///
    /// Default configuration:
    /// - Request timeout: 5 seconds
    /// - User-Agent: "Clockwork/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new(base_url: Url) -> Result<Self, ClockApiError> {
        let client = Client::builder()
            .user_agent(concat!("Clockwork/", env!("CARGO_PKG_VERSION")))
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ClockApiError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a client with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, mut base_url: Url) -> Self {
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    /// The server this client talks to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ClockApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClockApiError::Transport(format!("invalid URL: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClockApiError> {
        tracing::trace!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::map_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClockApiError::Decode(e.to_string()))
    }

    async fn status_error(response: Response) -> ClockApiError {
        let status = response.status();
        let (code, message) = match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => (envelope.error.code, envelope.error.message),
            Err(_) => (
                "unknown".to_string(),
                status.canonical_reason().unwrap_or("unknown status").to_string(),
            ),
        };
        ClockApiError::Status {
            status: status.as_u16(),
            code,
            message,
        }
    }

    fn map_error(error: reqwest::Error) -> ClockApiError {
        if error.is_timeout() {
            return ClockApiError::Transport(format!(
                "request timed out after {}s",
                DEFAULT_TIMEOUT.as_secs()
            ));
        }
        ClockApiError::Transport(error.to_string())
    }
}

#[async_trait]
impl ClockApi for ReqwestClockApi {
    async fn fetch_time(&self, format: ClockFormat) -> Result<FormattedTime, ClockApiError> {
        let url = self.endpoint("time", &[("format", format.as_param())])?;
        self.get_json(url).await
    }

    async fn fetch_worldclock(&self, timezone: &str) -> Result<WorldclockTime, ClockApiError> {
        let url = self.endpoint("worldclock", &[("timezone", timezone)])?;
        self.get_json(url).await
    }

    async fn fetch_timezones(&self) -> Result<Vec<RemoteTimezone>, ClockApiError> {
        let url = self.endpoint("timezones", &[])?;
        let entries: Vec<TimezoneDto> = self.get_json(url).await?;
        Ok(entries
            .into_iter()
            .map(|e| RemoteTimezone {
                id: e.id,
                label: e.label,
            })
            .collect())
    }
}
