//! Clockwork UI - Client timer loop
//!
//! Front-end agnostic client: the state machine behind the tabbed clock
//! display and the once-per-second loop that drives it.

pub mod bridge;
pub mod runtime;
pub mod state;

pub use bridge::{ClientCommand, ClientUpdate};
pub use runtime::{ClientRuntime, TICK_PERIOD};
pub use state::{
    AnalogHandsTask, ClientState, ClockTextTask, StopwatchTask, TickOutcome,
    WORLDCLOCK_PLACEHOLDER, WorldclockPanel,
};
