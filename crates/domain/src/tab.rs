//! Display tabs and the panels each one shows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format::ClockFormat;

/// One of four mutually exclusive display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// 12-hour clock (default).
    #[default]
    #[serde(rename = "12hour")]
    TwelveHour,
    /// 24-hour clock.
    #[serde(rename = "24hour")]
    TwentyFourHour,
    /// Stopwatch with start/stop/reset controls.
    Stopwatch,
    /// World clock with timezone selector.
    #[serde(rename = "worldclock")]
    WorldClock,
}

impl Tab {
    /// All tabs in header order.
    pub const ALL: [Self; 4] = [
        Self::TwelveHour,
        Self::TwentyFourHour,
        Self::Stopwatch,
        Self::WorldClock,
    ];

    /// The clock format polled while this tab is active, if it is a clock tab.
    #[must_use]
    pub const fn clock_format(self) -> Option<ClockFormat> {
        match self {
            Self::TwelveHour => Some(ClockFormat::TwelveHour),
            Self::TwentyFourHour => Some(ClockFormat::TwentyFourHour),
            Self::Stopwatch | Self::WorldClock => None,
        }
    }

    /// Returns true for the 12- and 24-hour tabs.
    #[must_use]
    pub const fn is_clock(self) -> bool {
        self.clock_format().is_some()
    }

    /// Header title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TwelveHour => "12-hour Clock",
            Self::TwentyFourHour => "24-hour Clock",
            Self::Stopwatch => "Stopwatch",
            Self::WorldClock => "World Clock",
        }
    }

    /// Stable identifier (`12hour`, `24hour`, `stopwatch`, `worldclock`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::TwelveHour => "12hour",
            Self::TwentyFourHour => "24hour",
            Self::Stopwatch => "stopwatch",
            Self::WorldClock => "worldclock",
        }
    }

    /// Which panels are visible while this tab is active.
    #[must_use]
    pub const fn panels(self) -> Panels {
        Panels {
            clock: true,
            stopwatch: matches!(self, Self::Stopwatch),
            stopwatch_controls: matches!(self, Self::Stopwatch),
            worldclock: matches!(self, Self::WorldClock),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12hour" | "12" => Ok(Self::TwelveHour),
            "24hour" | "24" => Ok(Self::TwentyFourHour),
            "stopwatch" => Ok(Self::Stopwatch),
            "worldclock" | "world" => Ok(Self::WorldClock),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// Panel visibility for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Panels {
    /// Date and clock text.
    pub clock: bool,
    /// Stopwatch readout.
    pub stopwatch: bool,
    /// Start/Stop/Reset buttons.
    pub stopwatch_controls: bool,
    /// Timezone selector and world clock readout.
    pub worldclock: bool,
}
