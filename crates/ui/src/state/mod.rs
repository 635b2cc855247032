//! Client-side UI state.

mod client_state;
mod tasks;

pub use client_state::{ClientState, TickOutcome, WORLDCLOCK_PLACEHOLDER, WorldclockPanel};
pub use tasks::{AnalogHandsTask, ClockTextTask, StopwatchTask};
