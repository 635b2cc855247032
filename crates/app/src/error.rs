//! Terminal client errors.

use clockwork_application::ports::ClockApiError;
use thiserror::Error;

/// Errors that stop the terminal client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The server client could not be built.
    #[error(transparent)]
    Api(#[from] ClockApiError),

    /// Reading commands or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
