//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during time conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The timezone identifier is not part of the timezone database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
