//! Inline keyboard helper: join-channel / DM buttons.
//!
//! Available but not attached to any outgoing message in the current wiring.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::core::{BotError, Result};

/// Builds a two-row inline keyboard with a join-channel button and a DM button.
pub fn join_buttons(channel_url: &str, dm_url: &str) -> Result<InlineKeyboardMarkup> {
    let channel_url = reqwest::Url::parse(channel_url)
        .map_err(|e| BotError::InvalidArgument(format!("Invalid channel URL: {}", e)))?;
    let dm_url = reqwest::Url::parse(dm_url)
        .map_err(|e| BotError::InvalidArgument(format!("Invalid DM URL: {}", e)))?;

    Ok(InlineKeyboardMarkup::new([
        vec![InlineKeyboardButton::url("🔥 Join Now", channel_url)],
        vec![InlineKeyboardButton::url("💬 DM Me", dm_url)],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_buttons_builds_two_rows() {
        let markup = join_buttons("https://t.me/SomeChannel", "https://t.me/SomeUser").unwrap();
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 1);
        assert_eq!(markup.inline_keyboard[1].len(), 1);
    }

    #[test]
    fn test_join_buttons_rejects_invalid_url() {
        assert!(join_buttons("not a url", "https://t.me/SomeUser").is_err());
    }
}
