//! # Telegram forward-scheduler bot
//!
//! Lets an operator register (source channel, message id) pairs via chat commands,
//! persists the list to a JSON file, and forwards each referenced message into a
//! fixed destination channel once per day at 10:00 local time.
//! Core (ScheduleStore, handlers, Forwarder, daily job) is transport-thin; Telegram
//! access goes through teloxide in the telegram module.

pub mod cli;
pub mod config;
pub mod core;
pub mod forwarder;
pub mod handlers;
pub mod keyboard;
pub mod runner;
pub mod scheduler;
pub mod store;
pub mod telegram;

// Re-export CLI
pub use cli::{load_config, Cli, Commands};

// Re-export core (error + logger)
pub use core::{init_tracing, BotError, Result};

pub use config::BotConfig;
pub use forwarder::{parse_recipient, Forwarder, TelegramForwarder};
pub use runner::run_bot;
pub use scheduler::{next_run_at, run_daily_forward, spawn_daily, FORWARD_HOUR, FORWARD_MINUTE};
pub use store::{ScheduleRecord, ScheduleStore};
pub use telegram::{dispatch, run_repl, Command};
