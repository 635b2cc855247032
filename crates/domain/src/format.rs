//! Time formatting
//!
//! Pure conversion from a wall-clock reading to the strings the clock
//! display shows. Callers resolve the timezone first; everything here works
//! on local `NaiveDateTime` values.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const DATE_PATTERN: &str = "%A, %B %d, %Y";
const TWELVE_HOUR_PATTERN: &str = "%I:%M:%S %p";
const TWENTY_FOUR_HOUR_PATTERN: &str = "%H:%M:%S";

/// Clock display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    /// `hh:mm:ss AM|PM` (default).
    #[default]
    #[serde(rename = "12")]
    TwelveHour,
    /// `HH:MM:SS`.
    #[serde(rename = "24")]
    TwentyFourHour,
}

impl ClockFormat {
    /// Parses the `format` query value. `"24"` selects the 24-hour clock;
    /// anything else, including absence, falls back to 12-hour.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("24") => Self::TwentyFourHour,
            _ => Self::TwelveHour,
        }
    }

    /// The query value that selects this format.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::TwelveHour => "12",
            Self::TwentyFourHour => "24",
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::TwelveHour => TWELVE_HOUR_PATTERN,
            Self::TwentyFourHour => TWENTY_FOUR_HOUR_PATTERN,
        }
    }
}

/// Date and time strings for the main clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTime {
    /// e.g. "Friday, January 05, 2024".
    pub date: String,
    /// e.g. "01:05:09 PM" or "13:05:09".
    pub time: String,
}

/// Time string for the world clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldclockTime {
    /// Always 12-hour, e.g. "01:05:09 PM".
    pub time: String,
}

/// Formats the date portion: full weekday, full month, zero-padded day, year.
#[must_use]
pub fn format_date(local: &NaiveDateTime) -> String {
    local.format(DATE_PATTERN).to_string()
}

/// Formats the time portion in the given clock format.
#[must_use]
pub fn format_time(local: &NaiveDateTime, format: ClockFormat) -> String {
    local.format(format.pattern()).to_string()
}

/// Formats both date and time.
#[must_use]
pub fn format_snapshot(local: &NaiveDateTime, format: ClockFormat) -> FormattedTime {
    FormattedTime {
        date: format_date(local),
        time: format_time(local, format),
    }
}

/// Formats a world clock reading (12-hour).
#[must_use]
pub fn format_worldclock(local: &NaiveDateTime) -> WorldclockTime {
    WorldclockTime {
        time: format_time(local, ClockFormat::TwelveHour),
    }
}

/// Formats a whole number of seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped, so 100 hours renders as `100:00:00`.
#[must_use]
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
