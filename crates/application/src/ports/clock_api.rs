//! Clock API port
//!
//! Client-side view of the time server. The client timer loop talks to the
//! server only through this trait.

use async_trait::async_trait;
use clockwork_domain::{ClockFormat, FormattedTime, WorldclockTime};

/// Errors returned by a `ClockApi` implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockApiError {
    /// The server answered with a non-success status.
    #[error("server returned {status} ({code}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code from the body.
        code: String,
        /// Human-readable message from the body.
        message: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClockApiError {
    /// Returns true if the server rejected the timezone identifier.
    #[must_use]
    pub fn is_unknown_timezone(&self) -> bool {
        matches!(self, Self::Status { code, .. } if code == "unknown_timezone")
    }
}

/// Timezone entry as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTimezone {
    /// IANA identifier.
    pub id: String,
    /// Display label.
    pub label: String,
}

/// Port for querying the time server.
#[async_trait]
pub trait ClockApi: Send + Sync {
    /// Fetches the current date and time in the given format.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is malformed.
    async fn fetch_time(&self, format: ClockFormat) -> Result<FormattedTime, ClockApiError>;

    /// Fetches the current time in the given timezone.
    ///
    /// # Errors
    /// Returns `ClockApiError::Status` with code `unknown_timezone` for
    /// identifiers the server does not recognise.
    async fn fetch_worldclock(&self, timezone: &str) -> Result<WorldclockTime, ClockApiError>;

    /// Fetches the timezone catalog.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is malformed.
    async fn fetch_timezones(&self) -> Result<Vec<RemoteTimezone>, ClockApiError>;
}
