//! UI Bridge Module
//!
//! Defines the communication protocol between a front end (terminal, test
//! harness) and the client runtime.

use std::str::FromStr;

use clockwork_application::ports::RemoteTimezone;
use clockwork_domain::{FormattedTime, HandAngles, Panels, Tab};

/// Commands sent from the front end to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// User clicked a tab header.
    SwitchTab(Tab),

    /// User clicked Start.
    StartStopwatch,

    /// User clicked Stop.
    StopStopwatch,

    /// User clicked Reset.
    ResetStopwatch,

    /// User picked a timezone in the world clock selector.
    SelectTimezone(String),

    /// Front end wants the selector contents.
    ListTimezones,

    /// Shut the runtime down.
    Quit,
}

impl FromStr for ClientCommand {
    type Err = String;

    /// Parses one line of terminal input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_ascii_lowercase().as_str() {
            "start" => Ok(Self::StartStopwatch),
            "stop" => Ok(Self::StopStopwatch),
            "reset" => Ok(Self::ResetStopwatch),
            "zones" | "timezones" => Ok(Self::ListTimezones),
            "quit" | "exit" => Ok(Self::Quit),
            "tz" if !rest.is_empty() => Ok(Self::SelectTimezone(rest.to_string())),
            "tz" => Err("usage: tz <IANA timezone>".to_string()),
            "" => Err("empty command".to_string()),
            other => other.parse::<Tab>().map(Self::SwitchTab),
        }
    }
}

/// Updates sent from the runtime to the front end.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientUpdate {
    /// The active tab changed. The contents of the newly visible panels
    /// follow as separate updates.
    TabChanged {
        /// New active tab.
        tab: Tab,
        /// Panels now visible.
        panels: Panels,
    },

    /// New date/time text for the main clock.
    ClockText(FormattedTime),

    /// New analog hand angles.
    Hands(HandAngles),

    /// New stopwatch readout.
    Stopwatch(String),

    /// New world clock readout.
    Worldclock {
        /// Selected timezone, if any.
        timezone: Option<String>,
        /// Its current time, or the selection placeholder.
        time: String,
    },

    /// Timezone selector contents.
    Timezones(Vec<RemoteTimezone>),

    /// Something went wrong; the loop keeps running.
    Error(String),
}
