//! Plain-text rendering of client updates.

use clockwork_domain::{HandAngles, Panels, Tab};
use clockwork_ui::ClientUpdate;

/// Turns updates into terminal lines.
///
/// Only updates for visible panels are printed. On clock tabs the hand
/// angles ride along with the clock text; elsewhere they get their own line.
#[derive(Debug)]
pub struct Renderer {
    hands: HandAngles,
    tab: Tab,
    panels: Panels,
}

impl Default for Renderer {
    fn default() -> Self {
        let tab = Tab::default();
        Self {
            hands: HandAngles::default(),
            tab,
            panels: tab.panels(),
        }
    }
}

impl Renderer {
    /// Creates a renderer for the starting tab.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one update, or nothing if it only changes remembered state
    /// or targets a hidden panel.
    pub fn render(&mut self, update: &ClientUpdate) -> Option<String> {
        match update {
            ClientUpdate::TabChanged { tab, panels } => {
                self.tab = *tab;
                self.panels = *panels;
                Some(format!("== {} ==", tab.title()))
            }
            ClientUpdate::ClockText(text) => Some(format!(
                "{}  {}  ({})",
                text.date,
                text.time,
                self.hands_text()
            )),
            ClientUpdate::Hands(angles) => {
                self.hands = *angles;
                (!self.tab.is_clock()).then(|| self.hands_text())
            }
            ClientUpdate::Stopwatch(readout) => {
                self.panels.stopwatch.then(|| format!("stopwatch {readout}"))
            }
            ClientUpdate::Worldclock { timezone, time } => {
                self.panels.worldclock.then(|| match timezone {
                    Some(zone) => format!("{zone}: {time}"),
                    None => format!("world clock: {time}"),
                })
            }
            ClientUpdate::Timezones(zones) => Some(
                zones
                    .iter()
                    .map(|zone| format!("  {:<20} {}", zone.id, zone.label))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            ClientUpdate::Error(message) => Some(format!("error: {message}")),
        }
    }

    fn hands_text(&self) -> String {
        format!(
            "hands {:.1}/{:.1}/{:.1}",
            self.hands.hour, self.hands.minute, self.hands.second
        )
    }
}
