//! Format-now use case

use chrono::NaiveDateTime;
use clockwork_domain::{ClockFormat, FormattedTime, format_snapshot};

use crate::ports::{Clock, TimezoneResolver};
use crate::{ApplicationError, ApplicationResult};

/// Formats the current wall-clock time for the main clock display.
///
/// The wall clock is the host's local time unless a display timezone was
/// configured with [`FormatNow::with_display_timezone`].
pub struct FormatNow<C, R> {
    clock: C,
    resolver: R,
    display_timezone: Option<String>,
}

impl<C: Clock, R: TimezoneResolver> FormatNow<C, R> {
    /// Creates a new `FormatNow` use case reading host local time.
    pub const fn new(clock: C, resolver: R) -> Self {
        Self {
            clock,
            resolver,
            display_timezone: None,
        }
    }

    /// Pins the display to an IANA timezone instead of host local time.
    ///
    /// # Errors
    /// Returns `ApplicationError::UnknownTimezone` if the identifier is not
    /// in the timezone database.
    pub fn with_display_timezone(mut self, timezone: impl Into<String>) -> ApplicationResult<Self> {
        let timezone = timezone.into();
        if !self.resolver.is_known(&timezone) {
            return Err(ApplicationError::UnknownTimezone(timezone));
        }
        self.display_timezone = Some(timezone);
        Ok(self)
    }

    /// The configured display timezone, if any.
    #[must_use]
    pub fn display_timezone(&self) -> Option<&str> {
        self.display_timezone.as_deref()
    }

    /// Executes the use case.
    #[must_use]
    pub fn execute(&self, format: ClockFormat) -> FormattedTime {
        format_snapshot(&self.local_now(), format)
    }

    fn local_now(&self) -> NaiveDateTime {
        let now = self.clock.now();
        match &self.display_timezone {
            Some(tz) => self
                .resolver
                .to_zone(tz, now)
                .unwrap_or_else(|_| self.resolver.to_host_local(now)),
            None => self.resolver.to_host_local(now),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FixedClock, OffsetResolver};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_instant_in_display_timezone() {
        let use_case = FormatNow::new(FixedClock::at(2024, 1, 5, 13, 5, 9), OffsetResolver::new())
            .with_display_timezone("UTC")
            .unwrap();

        let result = use_case.execute(ClockFormat::TwentyFourHour);

        assert_eq!(result.date, "Friday, January 05, 2024");
        assert_eq!(result.time, "13:05:09");
    }

    #[test]
    fn test_host_local_by_default() {
        let use_case = FormatNow::new(FixedClock::at(2024, 1, 5, 13, 5, 9), OffsetResolver::new());

        assert_eq!(use_case.display_timezone(), None);
        assert_eq!(use_case.execute(ClockFormat::TwelveHour).time, "02:05:09 PM");
    }

    #[test]
    fn test_display_timezone_crossing_midnight() {
        let use_case = FormatNow::new(FixedClock::at(2024, 1, 5, 20, 0, 0), OffsetResolver::new())
            .with_display_timezone("Asia/Tokyo")
            .unwrap();

        let result = use_case.execute(ClockFormat::TwentyFourHour);

        assert_eq!(result.date, "Saturday, January 06, 2024");
        assert_eq!(result.time, "05:00:00");
    }

    #[test]
    fn test_unknown_display_timezone_rejected() {
        let result = FormatNow::new(FixedClock::at(2024, 1, 5, 0, 0, 0), OffsetResolver::new())
            .with_display_timezone("Mars/Phobos");

        assert!(matches!(
            result,
            Err(ApplicationError::UnknownTimezone(ref tz)) if tz == "Mars/Phobos"
        ));
    }
}
