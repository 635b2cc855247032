//! Timezone resolver port
//!
//! Converts instants into wall-clock readings. The timezone database itself
//! lives behind this port.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use clockwork_domain::DomainResult;

/// Port for converting instants to local time.
pub trait TimezoneResolver: Send + Sync {
    /// Converts `instant` into local time in the named IANA timezone.
    ///
    /// # Errors
    /// Returns `DomainError::UnknownTimezone` if the identifier is not in the
    /// timezone database.
    fn to_zone(&self, timezone: &str, instant: DateTime<Utc>) -> DomainResult<NaiveDateTime>;

    /// Converts `instant` into the host's local time.
    fn to_host_local(&self, instant: DateTime<Utc>) -> NaiveDateTime;

    /// Returns true if the identifier names a known timezone.
    fn is_known(&self, timezone: &str) -> bool {
        self.to_zone(timezone, DateTime::<Utc>::UNIX_EPOCH).is_ok()
    }
}

impl<T: TimezoneResolver + ?Sized> TimezoneResolver for Arc<T> {
    fn to_zone(&self, timezone: &str, instant: DateTime<Utc>) -> DomainResult<NaiveDateTime> {
        (**self).to_zone(timezone, instant)
    }

    fn to_host_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        (**self).to_host_local(instant)
    }
}
