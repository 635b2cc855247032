//! Timezone catalog
//!
//! The fixed list of timezones offered in the world clock selector.

use serde::Serialize;

/// Identifier used when a world clock request names no timezone.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A selectable timezone: IANA identifier plus a human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneEntry {
    /// IANA timezone identifier (e.g. `Europe/London`).
    pub id: &'static str,
    /// Label shown in the selector.
    pub label: &'static str,
}

impl TimezoneEntry {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

const ENTRIES: &[TimezoneEntry] = &[
    TimezoneEntry::new("UTC", "UTC"),
    TimezoneEntry::new("US/Eastern", "USA (Eastern)"),
    TimezoneEntry::new("US/Central", "USA (Central)"),
    TimezoneEntry::new("US/Pacific", "USA (Pacific)"),
    TimezoneEntry::new("Europe/London", "UK (London)"),
    TimezoneEntry::new("Europe/Berlin", "Germany (Berlin)"),
    TimezoneEntry::new("Asia/Tokyo", "Japan (Tokyo)"),
    TimezoneEntry::new("Asia/Kolkata", "India (Kolkata)"),
    TimezoneEntry::new("Australia/Sydney", "Australia (Sydney)"),
];

/// Read-only view over the timezone entries, in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimezoneCatalog;

impl TimezoneCatalog {
    /// Returns the catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// All entries in display order.
    #[must_use]
    pub const fn entries(&self) -> &'static [TimezoneEntry] {
        ENTRIES
    }
}
