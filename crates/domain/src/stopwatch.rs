//! Stopwatch state machine.
//!
//! The stopwatch counts whole seconds. It is advanced by the client's
//! one-second tick, never by wall-clock differences.

use serde::{Deserialize, Serialize};

use crate::format::format_elapsed;

/// Client-side stopwatch: `{idle, running}` plus an elapsed-seconds counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stopwatch {
    elapsed_seconds: u64,
    running: bool,
}

impl Stopwatch {
    /// Creates an idle stopwatch at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Starts counting. Returns false if it was already running.
    pub const fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stops counting, keeping the elapsed time.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Stops and zeroes the counter.
    pub const fn reset(&mut self) {
        self.stop();
        self.elapsed_seconds = 0;
    }

    /// Advances by one second if running. Returns true when the counter moved.
    pub const fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
        self.running
    }

    /// Whole seconds accumulated while running.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Returns true while counting.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Zero-padded `HH:MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}
