//! World clock use case

use clockwork_domain::{DEFAULT_TIMEZONE, WorldclockTime, format_worldclock};

use crate::ApplicationResult;
use crate::ports::{Clock, TimezoneResolver};

/// Formats the current time in a requested timezone.
pub struct WorldclockNow<C, R> {
    clock: C,
    resolver: R,
}

impl<C: Clock, R: TimezoneResolver> WorldclockNow<C, R> {
    /// Creates a new `WorldclockNow` use case.
    pub const fn new(clock: C, resolver: R) -> Self {
        Self { clock, resolver }
    }

    /// Executes the use case. A missing timezone means UTC.
    ///
    /// # Errors
    /// Returns `ApplicationError::UnknownTimezone` if the identifier is not
    /// in the timezone database. An empty identifier counts as unknown.
    pub fn execute(&self, timezone: Option<&str>) -> ApplicationResult<WorldclockTime> {
        let timezone = timezone.unwrap_or(DEFAULT_TIMEZONE);
        let local = self
            .resolver
            .to_zone(timezone, self.clock.now())
            .inspect_err(|e| tracing::debug!(timezone, error = %e, "worldclock lookup failed"))?;

        Ok(format_worldclock(&local))
    }
}
