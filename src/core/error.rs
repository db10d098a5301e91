//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; user-facing failures stay plain usage text
//! in the handlers and never carry these variants into chat replies.

use thiserror::Error;

/// Top-level error for the forward bot (storage, forwarding, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Forward error: {0}")]
    Forward(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
