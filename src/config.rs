use anyhow::Result;
use std::env;

/// Bot configuration, loaded from environment variables.
pub struct BotConfig {
    pub bot_token: String,
    /// Destination channel for forwards (`@handle` or numeric chat id).
    pub channel_id: String,
    pub schedule_file: String,
    pub log_file: String,
    /// Optional Telegram Bot API base URL override (e.g. a mock server in tests).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads configuration from the environment. When `token` is given it overrides
    /// `BOT_TOKEN`. Required values are checked in [`BotConfig::validate`], not here.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .unwrap_or_default();
        let channel_id = env::var("CHANNEL_ID").unwrap_or_default();
        let schedule_file =
            env::var("SCHEDULE_FILE").unwrap_or_else(|_| "schedule_list.json".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/forward-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            channel_id,
            schedule_file,
            log_file,
            telegram_api_url,
        })
    }

    /// Fails fast on missing required values instead of surfacing them later as
    /// opaque Telegram client errors.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() {
            anyhow::bail!("BOT_TOKEN not set");
        }
        if self.channel_id.is_empty() {
            anyhow::bail!("CHANNEL_ID not set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BOT_TOKEN");
        env::remove_var("CHANNEL_ID");
        env::remove_var("SCHEDULE_FILE");
        env::remove_var("LOG_FILE");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("CHANNEL_ID", "@dest");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.channel_id, "@dest");
        assert_eq!(config.schedule_file, "schedule_list.json");
        assert_eq!(config.log_file, "logs/forward-bot.log");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("CHANNEL_ID", "-1009999");
        env::set_var("SCHEDULE_FILE", "/tmp/custom_schedule.json");
        env::set_var("LOG_FILE", "/tmp/custom.log");
        env::set_var("TELEGRAM_API_URL", "http://localhost:8081");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "custom_token");
        assert_eq!(config.channel_id, "-1009999");
        assert_eq!(config.schedule_file, "/tmp/custom_schedule.json");
        assert_eq!(config.log_file, "/tmp/custom.log");
        assert_eq!(
            config.telegram_api_url,
            Some("http://localhost:8081".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("CHANNEL_ID", "@dest");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_validate_fails_fast_on_missing_required() {
        clear_env();

        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        env::set_var("BOT_TOKEN", "t");
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        env::set_var("CHANNEL_ID", "@dest");
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_api_url_falls_back_to_teloxide_var() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("CHANNEL_ID", "@dest");
        env::set_var("TELOXIDE_API_URL", "http://localhost:9000");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(
            config.telegram_api_url,
            Some("http://localhost:9000".to_string())
        );
    }
}
