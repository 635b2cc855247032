//! Application error types

use clockwork_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The requested timezone is not in the timezone database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::UnknownTimezone(id) => Self::UnknownTimezone(id),
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
