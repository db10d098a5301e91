//! Core error type and logger initialization. Transport-agnostic.

pub mod error;
pub mod logger;

pub use error::{BotError, Result};
pub use logger::init_tracing;
