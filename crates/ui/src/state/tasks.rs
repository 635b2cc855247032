//! Per-tick update tasks.
//!
//! Each task owns its own state and reacts to the tick independently.

use chrono::NaiveTime;
use clockwork_domain::{ClockFormat, FormattedTime, HandAngles, Stopwatch, Tab};

/// Keeps the main clock text and decides when to poll the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockTextTask {
    format: Option<ClockFormat>,
    text: Option<FormattedTime>,
}

impl ClockTextTask {
    /// Creates the task polling for `tab`.
    #[must_use]
    pub const fn for_tab(tab: Tab) -> Self {
        Self {
            format: tab.clock_format(),
            text: None,
        }
    }

    /// Follows a tab switch. Keeps the last text on screen.
    pub const fn follow(&mut self, tab: Tab) {
        self.format = tab.clock_format();
    }

    /// The format to request on this tick, if a clock tab is active.
    #[must_use]
    pub const fn on_tick(&self) -> Option<ClockFormat> {
        self.format
    }

    /// Stores a server response.
    pub fn apply(&mut self, text: FormattedTime) {
        self.text = Some(text);
    }

    /// Last text received, if any.
    #[must_use]
    pub const fn text(&self) -> Option<&FormattedTime> {
        self.text.as_ref()
    }
}

/// Recomputes analog hand angles from the local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalogHandsTask {
    angles: HandAngles,
}

impl AnalogHandsTask {
    /// Updates the angles for the given wall-clock time.
    pub fn on_tick(&mut self, local: &NaiveTime) -> HandAngles {
        self.angles = HandAngles::at(local);
        self.angles
    }

    /// Current angles.
    #[must_use]
    pub const fn angles(&self) -> HandAngles {
        self.angles
    }
}

/// Advances the stopwatch once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopwatchTask {
    stopwatch: Stopwatch,
}

impl StopwatchTask {
    /// Returns the new readout if the counter moved.
    pub fn on_tick(&mut self) -> Option<String> {
        self.stopwatch.tick().then(|| self.stopwatch.display())
    }

    /// Mutable access for start/stop/reset.
    pub const fn stopwatch_mut(&mut self) -> &mut Stopwatch {
        &mut self.stopwatch
    }

    /// Current stopwatch.
    #[must_use]
    pub const fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }
}
