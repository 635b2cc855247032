//! Timezone resolver backed by the IANA database bundled in `chrono-tz`.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clockwork_application::ports::TimezoneResolver;
use clockwork_domain::{DomainError, DomainResult};

/// Resolves IANA identifiers with `chrono-tz` and host time with `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzResolver;

impl ChronoTzResolver {
    /// Creates a new resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses an identifier into a `chrono-tz` zone. Case is ignored when
    /// there is no exact match, so `asia/tokyo` resolves to `Asia/Tokyo`.
    ///
    /// # Errors
    /// Returns `DomainError::UnknownTimezone` for identifiers outside the
    /// database, including the empty string.
    pub fn parse(timezone: &str) -> DomainResult<Tz> {
        timezone
            .parse::<Tz>()
            .or_else(|_| Tz::from_str_insensitive(timezone))
            .map_err(|_| DomainError::UnknownTimezone(timezone.to_string()))
    }
}

impl TimezoneResolver for ChronoTzResolver {
    fn to_zone(&self, timezone: &str, instant: DateTime<Utc>) -> DomainResult<NaiveDateTime> {
        let tz = Self::parse(timezone)?;
        Ok(instant.with_timezone(&tz).naive_local())
    }

    fn to_host_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&Local).naive_local()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clockwork_domain::TimezoneCatalog;
    use pretty_assertions::assert_eq;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 13, 5, 9).single().unwrap()
    }

    #[test]
    fn test_every_catalog_entry_resolves() {
        let resolver = ChronoTzResolver::new();
        for entry in TimezoneCatalog::new().entries() {
            assert!(resolver.is_known(entry.id), "{}", entry.id);
        }
    }

    #[test]
    fn test_conversion_applies_offset() {
        let resolver = ChronoTzResolver::new();
        let utc = resolver.to_zone("UTC", instant()).unwrap();
        let tokyo = resolver.to_zone("Asia/Tokyo", instant()).unwrap();
        let kolkata = resolver.to_zone("Asia/Kolkata", instant()).unwrap();

        assert_eq!(utc, instant().naive_utc());
        assert_eq!(tokyo.format("%H:%M:%S").to_string(), "22:05:09");
        assert_eq!(kolkata.format("%H:%M:%S").to_string(), "18:35:09");
    }

    #[test]
    fn test_daylight_saving_is_applied() {
        let resolver = ChronoTzResolver::new();
        let july = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).single().unwrap();
        let london = resolver.to_zone("Europe/London", july).unwrap();
        assert_eq!(london.format("%H").to_string(), "13");
    }

    #[test]
    fn test_unknown_identifiers() {
        let resolver = ChronoTzResolver::new();
        assert_eq!(
            resolver.to_zone("Mars/Phobos", instant()),
            Err(DomainError::UnknownTimezone("Mars/Phobos".to_string()))
        );
        assert!(!resolver.is_known(""));
    }

    #[test]
    fn test_identifiers_are_case_insensitive() {
        let resolver = ChronoTzResolver::new();
        assert_eq!(ChronoTzResolver::parse("utc").unwrap(), Tz::UTC);
        assert_eq!(ChronoTzResolver::parse("asia/tokyo").unwrap(), Tz::Asia__Tokyo);
        assert_eq!(
            resolver.to_zone("EUROPE/LONDON", instant()).unwrap(),
            resolver.to_zone("Europe/London", instant()).unwrap()
        );
        assert!(!resolver.is_known("mars/phobos"));
    }

    #[test]
    fn test_host_local_matches_chrono_local() {
        let expected = instant().with_timezone(&Local).naive_local();
        assert_eq!(ChronoTzResolver::new().to_host_local(instant()), expected);
    }
}
