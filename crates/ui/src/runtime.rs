//! Client timer loop.
//!
//! A cooperative scheduler: one tick per second plus front-end commands,
//! handled one at a time on a single task. Server requests are awaited
//! inline, so at most one is in flight.

use std::time::Duration;

use chrono::NaiveTime;
use clockwork_application::ports::{Clock, ClockApi, TimezoneResolver};
use clockwork_domain::{ClockFormat, Tab};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::bridge::{ClientCommand, ClientUpdate};
use crate::state::ClientState;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Drives a [`ClientState`] from ticks and commands.
pub struct ClientRuntime<A, C, R> {
    api: A,
    clock: C,
    resolver: R,
    state: ClientState,
    period: Duration,
}

impl<A: ClockApi, C: Clock, R: TimezoneResolver> ClientRuntime<A, C, R> {
    /// Creates a runtime with a fresh state.
    pub fn new(api: A, clock: C, resolver: R) -> Self {
        Self {
            api,
            clock,
            resolver,
            state: ClientState::new(),
            period: TICK_PERIOD,
        }
    }

    /// Overrides the tick period.
    #[must_use]
    pub const fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ClientState {
        &self.state
    }

    /// Runs until `Quit` arrives or the command channel closes, then returns
    /// the final state.
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<ClientCommand>,
        updates: mpsc::UnboundedSender<ClientUpdate>,
    ) -> ClientState {
        // First tick one period from now, like a browser interval.
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(period_ms = self.period.as_millis(), "client loop started");

        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick(&updates).await,
                command = commands.recv() => match command {
                    Some(ClientCommand::Quit) | None => break,
                    Some(command) => self.handle(command, &updates).await,
                },
            }
        }

        tracing::debug!("client loop stopped");
        self.state
    }

    fn local_time(&self) -> NaiveTime {
        self.resolver.to_host_local(self.clock.now()).time()
    }

    /// Handles one tick.
    pub async fn tick(&mut self, updates: &mpsc::UnboundedSender<ClientUpdate>) {
        let local = self.local_time();
        let outcome = self.state.on_tick(&local);

        let _ = updates.send(ClientUpdate::Hands(outcome.hands));
        if let Some(readout) = outcome.stopwatch {
            let _ = updates.send(ClientUpdate::Stopwatch(readout));
        }
        if let Some(format) = outcome.fetch_time {
            self.refresh_time(format, updates).await;
        }
    }

    /// Handles one command. `Quit` is a no-op here; [`Self::run`] handles it.
    pub async fn handle(
        &mut self,
        command: ClientCommand,
        updates: &mpsc::UnboundedSender<ClientUpdate>,
    ) {
        match command {
            ClientCommand::SwitchTab(tab) => {
                let refresh = self.state.switch_tab(tab);
                self.publish_panels(tab, updates);
                if let Some(format) = refresh {
                    self.refresh_time(format, updates).await;
                }
            }
            ClientCommand::StartStopwatch => {
                if !self.state.start_stopwatch() {
                    tracing::debug!("stopwatch already running");
                }
            }
            ClientCommand::StopStopwatch => self.state.stop_stopwatch(),
            ClientCommand::ResetStopwatch => {
                let readout = self.state.reset_stopwatch();
                let _ = updates.send(ClientUpdate::Stopwatch(readout));
            }
            ClientCommand::SelectTimezone(timezone) => {
                self.state.select_timezone(timezone.clone());
                self.refresh_worldclock(&timezone, updates).await;
            }
            ClientCommand::ListTimezones => match self.api.fetch_timezones().await {
                Ok(zones) => {
                    let _ = updates.send(ClientUpdate::Timezones(zones));
                }
                Err(e) => {
                    let _ = updates.send(ClientUpdate::Error(e.to_string()));
                }
            },
            ClientCommand::Quit => {}
        }
    }

    /// Announces `tab` and replays what its panels currently show.
    fn publish_panels(&mut self, tab: Tab, updates: &mpsc::UnboundedSender<ClientUpdate>) {
        let panels = self.state.panels();
        let _ = updates.send(ClientUpdate::TabChanged { tab, panels });

        let local = self.local_time();
        let _ = updates.send(ClientUpdate::Hands(self.state.refresh_hands(&local)));
        if panels.stopwatch {
            let readout = self.state.stopwatch().display();
            let _ = updates.send(ClientUpdate::Stopwatch(readout));
        }
        if panels.worldclock {
            let panel = self.state.worldclock();
            let _ = updates.send(ClientUpdate::Worldclock {
                timezone: panel.selected().map(str::to_string),
                time: panel.display().to_string(),
            });
        }
    }

    async fn refresh_time(
        &mut self,
        format: ClockFormat,
        updates: &mpsc::UnboundedSender<ClientUpdate>,
    ) {
        match self.api.fetch_time(format).await {
            Ok(text) => {
                self.state.apply_time(text.clone());
                let _ = updates.send(ClientUpdate::ClockText(text));
            }
            Err(e) => {
                tracing::warn!(error = %e, "time refresh failed");
                let _ = updates.send(ClientUpdate::Error(e.to_string()));
            }
        }
    }

    async fn refresh_worldclock(
        &mut self,
        timezone: &str,
        updates: &mpsc::UnboundedSender<ClientUpdate>,
    ) {
        match self.api.fetch_worldclock(timezone).await {
            Ok(time) => {
                let display = time.time.clone();
                if self.state.apply_worldclock(timezone, time) {
                    let _ = updates.send(ClientUpdate::Worldclock {
                        timezone: Some(timezone.to_string()),
                        time: display,
                    });
                }
            }
            Err(e) => {
                tracing::warn!(timezone, error = %e, "world clock refresh failed");
                let _ = updates.send(ClientUpdate::Error(e.to_string()));
            }
        }
    }
}
