//! Application use cases (business logic orchestration).

mod format_now;
mod worldclock_now;

pub use format_now::*;
pub use worldclock_now::*;
