//! Client UI state.
//!
//! A synchronous state machine: commands and ticks go in, and the caller
//! learns which server requests to issue. No I/O happens here.

use chrono::NaiveTime;
use clockwork_domain::{
    ClockFormat, FormattedTime, HandAngles, Panels, Stopwatch, Tab, WorldclockTime,
};

use super::tasks::{AnalogHandsTask, ClockTextTask, StopwatchTask};

/// Placeholder shown before a timezone is picked.
pub const WORLDCLOCK_PLACEHOLDER: &str = "Select a timezone";

/// Work produced by one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Clock text request to issue, if a clock tab is active.
    pub fetch_time: Option<ClockFormat>,
    /// Fresh hand angles.
    pub hands: HandAngles,
    /// New stopwatch readout, if it advanced.
    pub stopwatch: Option<String>,
}

/// World clock selector and readout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorldclockPanel {
    selected: Option<String>,
    time: Option<String>,
}

impl WorldclockPanel {
    /// Selected timezone, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Text shown in the readout.
    #[must_use]
    pub fn display(&self) -> &str {
        self.time.as_deref().unwrap_or(WORLDCLOCK_PLACEHOLDER)
    }
}

/// Complete client state.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    active_tab: Tab,
    clock_text: ClockTextTask,
    hands: AnalogHandsTask,
    stopwatch: StopwatchTask,
    worldclock: WorldclockPanel,
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientState {
    /// Fresh state on the 12-hour tab.
    #[must_use]
    pub fn new() -> Self {
        let active_tab = Tab::default();
        Self {
            active_tab,
            clock_text: ClockTextTask::for_tab(active_tab),
            hands: AnalogHandsTask::default(),
            stopwatch: StopwatchTask::default(),
            worldclock: WorldclockPanel::default(),
        }
    }

    /// Activates `tab`. Returns the clock format to refresh immediately when
    /// `tab` is a clock tab. Switching to the active tab changes nothing.
    pub const fn switch_tab(&mut self, tab: Tab) -> Option<ClockFormat> {
        self.active_tab = tab;
        self.clock_text.follow(tab);
        tab.clock_format()
    }

    /// Starts the stopwatch. Returns false if it was already running.
    pub const fn start_stopwatch(&mut self) -> bool {
        self.stopwatch.stopwatch_mut().start()
    }

    /// Stops the stopwatch, keeping the elapsed time.
    pub const fn stop_stopwatch(&mut self) {
        self.stopwatch.stopwatch_mut().stop();
    }

    /// Stops and zeroes the stopwatch. Returns the new readout.
    pub fn reset_stopwatch(&mut self) -> String {
        self.stopwatch.stopwatch_mut().reset();
        self.stopwatch.stopwatch().display()
    }

    /// Records a timezone selection. The caller fetches its time.
    pub fn select_timezone(&mut self, timezone: impl Into<String>) {
        let timezone = timezone.into();
        if self.worldclock.selected.as_deref() != Some(timezone.as_str()) {
            self.worldclock.time = None;
        }
        self.worldclock.selected = Some(timezone);
    }

    /// Fans one tick out to the update tasks.
    pub fn on_tick(&mut self, local: &NaiveTime) -> TickOutcome {
        TickOutcome {
            fetch_time: self.clock_text.on_tick(),
            hands: self.hands.on_tick(local),
            stopwatch: self.stopwatch.on_tick(),
        }
    }

    /// Recomputes the hand angles without advancing anything else.
    pub fn refresh_hands(&mut self, local: &NaiveTime) -> HandAngles {
        self.hands.on_tick(local)
    }

    /// Stores a `/time` response.
    pub fn apply_time(&mut self, text: FormattedTime) {
        self.clock_text.apply(text);
    }

    /// Stores a `/worldclock` response. Returns false and ignores it when
    /// `timezone` is no longer the selection.
    pub fn apply_worldclock(&mut self, timezone: &str, time: WorldclockTime) -> bool {
        if self.worldclock.selected.as_deref() != Some(timezone) {
            return false;
        }
        self.worldclock.time = Some(time.time);
        true
    }

    /// Active tab.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Visible panels.
    #[must_use]
    pub const fn panels(&self) -> Panels {
        self.active_tab.panels()
    }

    /// Last clock text received.
    #[must_use]
    pub const fn clock_text(&self) -> Option<&FormattedTime> {
        self.clock_text.text()
    }

    /// Current hand angles.
    #[must_use]
    pub const fn hands(&self) -> HandAngles {
        self.hands.angles()
    }

    /// Stopwatch.
    #[must_use]
    pub const fn stopwatch(&self) -> &Stopwatch {
        self.stopwatch.stopwatch()
    }

    /// World clock panel.
    #[must_use]
    pub const fn worldclock(&self) -> &WorldclockPanel {
        &self.worldclock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
    }

    #[test]
    fn test_initial_state() {
        let state = ClientState::new();
        assert_eq!(state.active_tab(), Tab::TwelveHour);
        assert_eq!(state.worldclock().display(), WORLDCLOCK_PLACEHOLDER);
        assert_eq!(state.stopwatch().display(), "00:00:00");
        assert!(state.clock_text().is_none());
    }

    #[test]
    fn test_switching_to_same_tab_is_idempotent() {
        let mut state = ClientState::new();
        state.switch_tab(Tab::Stopwatch);
        let once = state.clone();
        state.switch_tab(Tab::Stopwatch);
        assert_eq!(state, once);
    }

    #[test]
    fn test_clock_tabs_request_immediate_refresh() {
        let mut state = ClientState::new();
        assert_eq!(
            state.switch_tab(Tab::TwentyFourHour),
            Some(ClockFormat::TwentyFourHour)
        );
        assert_eq!(state.switch_tab(Tab::WorldClock), None);
        assert!(state.panels().worldclock);
    }

    #[test]
    fn test_ticks_poll_only_on_clock_tabs() {
        let mut state = ClientState::new();
        assert_eq!(state.on_tick(&noon()).fetch_time, Some(ClockFormat::TwelveHour));

        state.switch_tab(Tab::Stopwatch);
        assert_eq!(state.on_tick(&noon()).fetch_time, None);
    }

    #[test]
    fn test_hands_update_on_every_tab() {
        let mut state = ClientState::new();
        state.switch_tab(Tab::WorldClock);
        let time = NaiveTime::from_hms_opt(3, 0, 0).unwrap_or_default();
        assert_eq!(state.on_tick(&time).hands.hour, 90.0);
        assert_eq!(state.hands().hour, 90.0);
    }

    #[test]
    fn test_refresh_hands_leaves_stopwatch_alone() {
        let mut state = ClientState::new();
        state.start_stopwatch();
        let time = NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default();
        assert!((state.refresh_hands(&time).hour - 180.0).abs() < f64::EPSILON);
        assert_eq!(state.stopwatch().elapsed_seconds(), 0);
    }

    #[test]
    fn test_stopwatch_three_ticks_then_reset() {
        let mut state = ClientState::new();
        state.switch_tab(Tab::Stopwatch);
        assert!(state.start_stopwatch());

        let readouts: Vec<_> = (0..3).filter_map(|_| state.on_tick(&noon()).stopwatch).collect();
        state.stop_stopwatch();
        assert_eq!(state.on_tick(&noon()).stopwatch, None);

        assert_eq!(readouts, vec!["00:00:01", "00:00:02", "00:00:03"]);
        assert_eq!(state.stopwatch().elapsed_seconds(), 3);
        assert_eq!(state.stopwatch().display(), "00:00:03");

        assert_eq!(state.reset_stopwatch(), "00:00:00");
        assert_eq!(state.stopwatch().elapsed_seconds(), 0);
    }

    #[test]
    fn test_stopwatch_keeps_running_across_tabs() {
        let mut state = ClientState::new();
        state.start_stopwatch();
        state.switch_tab(Tab::TwelveHour);
        state.on_tick(&noon());
        assert_eq!(state.stopwatch().elapsed_seconds(), 1);
    }

    #[test]
    fn test_stale_worldclock_response_is_ignored() {
        let mut state = ClientState::new();
        state.select_timezone("Asia/Tokyo");
        state.select_timezone("Europe/London");

        let stale = WorldclockTime {
            time: "10:00:00 PM".to_string(),
        };
        assert!(!state.apply_worldclock("Asia/Tokyo", stale));
        assert_eq!(state.worldclock().display(), WORLDCLOCK_PLACEHOLDER);

        let fresh = WorldclockTime {
            time: "01:00:00 PM".to_string(),
        };
        assert!(state.apply_worldclock("Europe/London", fresh));
        assert_eq!(state.worldclock().display(), "01:00:00 PM");
        assert_eq!(state.worldclock().selected(), Some("Europe/London"));
    }
}
