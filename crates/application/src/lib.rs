//! Clockwork Application - Use cases and ports
//!
//! This crate contains the application logic that orchestrates
//! domain types and defines ports for external systems.

mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
