//! Forwarder: re-posts a referenced message into the fixed destination channel.
//!
//! [`Forwarder`] is the seam the daily job talks to; [`TelegramForwarder`] implements
//! it via teloxide. Tests substitute a recording implementation.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{MessageId, Recipient};

use crate::core::{BotError, Result};

/// Forwards one message (by reference) into the destination channel.
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Forwards `message_id` from `channel` into the destination. The caller decides
    /// what to do with a failure; this never retries.
    async fn forward(&self, channel: &str, message_id: i32) -> Result<()>;
}

/// Teloxide-based implementation of [`Forwarder`] with a fixed destination.
pub struct TelegramForwarder {
    bot: teloxide::Bot,
    destination: Recipient,
}

impl TelegramForwarder {
    /// Creates a forwarder that forwards into `destination` (a `@handle` or numeric chat id).
    pub fn new(bot: teloxide::Bot, destination: &str) -> Result<Self> {
        Ok(Self {
            bot,
            destination: parse_recipient(destination)?,
        })
    }
}

#[async_trait]
impl Forwarder for TelegramForwarder {
    async fn forward(&self, channel: &str, message_id: i32) -> Result<()> {
        let from = parse_recipient(channel)?;
        self.bot
            .forward_message(self.destination.clone(), from, MessageId(message_id))
            .await
            .map_err(|e| BotError::Forward(e.to_string()))?;
        Ok(())
    }
}

/// Maps a chat identifier string to a teloxide [`Recipient`]: `@handle` stays a
/// channel username, anything else must parse as a numeric chat id.
pub fn parse_recipient(s: &str) -> Result<Recipient> {
    if let Some(rest) = s.strip_prefix('@') {
        if rest.is_empty() {
            return Err(BotError::InvalidArgument(
                "Empty channel username".to_string(),
            ));
        }
        return Ok(Recipient::ChannelUsername(s.to_string()));
    }
    s.parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|_| BotError::InvalidArgument(format!("Invalid chat identifier: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipient_channel_username() {
        assert_eq!(
            parse_recipient("@mychannel").unwrap(),
            Recipient::ChannelUsername("@mychannel".to_string())
        );
    }

    #[test]
    fn test_parse_recipient_numeric_id() {
        assert_eq!(
            parse_recipient("-1001234567890").unwrap(),
            Recipient::Id(ChatId(-1001234567890))
        );
    }

    #[test]
    fn test_parse_recipient_rejects_garbage() {
        assert!(parse_recipient("not-a-chat").is_err());
        assert!(parse_recipient("@").is_err());
        assert!(parse_recipient("").is_err());
    }

    #[test]
    fn test_telegram_forwarder_new_rejects_bad_destination() {
        let bot = teloxide::Bot::new("dummy_token");
        assert!(TelegramForwarder::new(bot, "nonsense").is_err());
    }
}
