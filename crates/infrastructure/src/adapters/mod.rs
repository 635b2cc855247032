//! Adapter implementations of the application ports.

mod chrono_tz_resolver;
mod reqwest_clock_api;
mod system_clock;

pub use chrono_tz_resolver::ChronoTzResolver;
pub use reqwest_clock_api::ReqwestClockApi;
pub use system_clock::SystemClock;
