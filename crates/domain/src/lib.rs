//! Clockwork Domain - Core clock types
//!
//! This crate defines the domain model for the Clockwork clock display.
//! All types here are pure Rust with no I/O dependencies.

pub mod catalog;
pub mod clock_face;
pub mod error;
pub mod format;
pub mod stopwatch;
pub mod tab;

pub use catalog::{DEFAULT_TIMEZONE, TimezoneCatalog, TimezoneEntry};
pub use clock_face::HandAngles;
pub use error::{DomainError, DomainResult};
pub use format::{
    ClockFormat, FormattedTime, WorldclockTime, format_date, format_elapsed, format_snapshot,
    format_time, format_worldclock,
};
pub use stopwatch::Stopwatch;
pub use tab::{Panels, Tab};
