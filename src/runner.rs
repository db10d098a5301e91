use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::forwarder::{Forwarder, TelegramForwarder};
use crate::scheduler;
use crate::store::ScheduleStore;
use crate::telegram::run_repl;

/// Main entry: validate config, init logging, load the schedule, spawn the daily
/// job, then run the repl until the process is terminated.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    std::fs::create_dir_all("logs")?;
    init_tracing(&config.log_file)?;

    let store = Arc::new(ScheduleStore::load(&config.schedule_file)?);
    info!(
        schedule_file = %config.schedule_file,
        records = store.len().await,
        "Schedule loaded"
    );

    let bot = build_teloxide_bot(&config);
    let forwarder: Arc<dyn Forwarder> =
        Arc::new(TelegramForwarder::new(bot.clone(), &config.channel_id)?);

    scheduler::spawn_daily(store.clone(), forwarder);

    info!(destination = %config.channel_id, "Bot started successfully");

    run_repl(bot, store).await
}

/// Builds the teloxide Bot, honoring the optional API URL override (used to point
/// the bot at a mock server).
fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}
