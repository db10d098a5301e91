//! Telegram access layer: command parsing and the repl dispatch loop.

mod runner;

pub use runner::{dispatch, run_repl, Command};
