//! Terminal client configuration.

use config::{Config, Environment, Map};
use serde::Deserialize;
use url::Url;

use crate::error::ClientError;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "CLOCKWORK";

/// Server the client talks to when nothing is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8888";

/// Configuration for the terminal client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the time server (`CLOCKWORK_SERVER_URL`).
    pub server_url: Url,
}

impl ClientConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if the server URL is malformed or not HTTP.
    pub fn load() -> Result<Self, ClientError> {
        Self::from_env(None)
    }

    /// Loads configuration from `vars` instead of the process environment
    /// when given.
    ///
    /// # Errors
    /// Returns an error if the server URL is malformed or not HTTP.
    pub fn from_env(vars: Option<Map<String, String>>) -> Result<Self, ClientError> {
        let settings = Config::builder()
            .set_default("server_url", DEFAULT_SERVER_URL)?
            .add_source(Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ClientError> {
        match self.server_url.scheme() {
            "http" | "https" => Ok(self),
            other => Err(ClientError::InvalidConfig(format!(
                "server_url must use http or https, got {other}"
            ))),
        }
    }
}
