//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod clock_api;
mod timezone_resolver;

pub use clock::Clock;
pub use clock_api::{ClockApi, ClockApiError, RemoteTimezone};
pub use timezone_resolver::TimezoneResolver;
