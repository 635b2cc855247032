//! Server configuration.
//!
//! Values come from `CLOCKWORK_*` environment variables layered over
//! built-in defaults.

use config::{Config, Environment, Map};
use serde::Deserialize;

use crate::error::ServerError;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "CLOCKWORK";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8888;

/// Configuration for the time server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Host or IP to bind (`CLOCKWORK_HOST`).
    pub host: String,
    /// Port to bind (`CLOCKWORK_PORT`); 0 picks an ephemeral port.
    pub port: u16,
    /// IANA timezone for the main clock (`CLOCKWORK_DISPLAY_TIMEZONE`).
    /// Host local time when unset.
    #[serde(default)]
    pub display_timezone: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            display_timezone: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if a variable cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ServerError> {
        Self::from_env(None)
    }

    /// Loads configuration from an explicit variable map instead of the
    /// process environment when `vars` is `Some`.
    ///
    /// # Errors
    /// Returns an error if a variable cannot be parsed or a value is invalid.
    pub fn from_env(vars: Option<Map<String, String>>) -> Result<Self, ServerError> {
        let settings = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()
    }

    fn validate(mut self) -> Result<Self, ServerError> {
        if self.host.trim().is_empty() {
            return Err(ServerError::InvalidConfig("host must not be empty".to_string()));
        }
        // An empty variable means "not set".
        if self
            .display_timezone
            .as_deref()
            .is_some_and(|tz| tz.trim().is_empty())
        {
            self.display_timezone = None;
        }
        Ok(self)
    }
}
