//! Centralized user-facing messages and the console/logging macros that print them.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
