//! Shared, read-only request state.

use std::sync::Arc;

use clockwork_application::ApplicationResult;
use clockwork_application::ports::{Clock, TimezoneResolver};
use clockwork_application::use_cases::{FormatNow, WorldclockNow};
use clockwork_domain::TimezoneCatalog;
use clockwork_infrastructure::{ChronoTzResolver, SystemClock};

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Clock shared across handlers.
pub type SharedClock = Arc<dyn Clock>;

/// Timezone resolver shared across handlers.
pub type SharedResolver = Arc<dyn TimezoneResolver>;

/// State handed to every handler. Nothing in it is mutable.
#[derive(Clone)]
pub struct AppState {
    format_now: Arc<FormatNow<SharedClock, SharedResolver>>,
    worldclock_now: Arc<WorldclockNow<SharedClock, SharedResolver>>,
    catalog: TimezoneCatalog,
}

impl AppState {
    /// Builds state from explicit ports.
    ///
    /// # Errors
    /// Returns `ApplicationError::UnknownTimezone` if `display_timezone` is
    /// not a known timezone.
    pub fn new(
        clock: SharedClock,
        resolver: SharedResolver,
        display_timezone: Option<&str>,
    ) -> ApplicationResult<Self> {
        let mut format_now = FormatNow::new(Arc::clone(&clock), Arc::clone(&resolver));
        if let Some(tz) = display_timezone {
            format_now = format_now.with_display_timezone(tz)?;
        }

        Ok(Self {
            format_now: Arc::new(format_now),
            worldclock_now: Arc::new(WorldclockNow::new(clock, resolver)),
            catalog: TimezoneCatalog::new(),
        })
    }

    /// Builds state backed by the system clock and the bundled timezone database.
    ///
    /// # Errors
    /// Returns `ServerError::InvalidConfig` if the configured display
    /// timezone is unknown.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ServerError> {
        Self::new(
            Arc::new(SystemClock::new()),
            Arc::new(ChronoTzResolver::new()),
            config.display_timezone.as_deref(),
        )
        .map_err(|e| ServerError::InvalidConfig(format!("display_timezone: {e}")))
    }

    /// Main clock use case.
    #[must_use]
    pub fn format_now(&self) -> &FormatNow<SharedClock, SharedResolver> {
        &self.format_now
    }

    /// World clock use case.
    #[must_use]
    pub fn worldclock_now(&self) -> &WorldclockNow<SharedClock, SharedResolver> {
        &self.worldclock_now
    }

    /// Timezone catalog.
    #[must_use]
    pub const fn catalog(&self) -> TimezoneCatalog {
        self.catalog
    }
}
