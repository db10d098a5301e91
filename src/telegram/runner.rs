//! Repl runner: parses chat commands with teloxide and dispatches them to the handlers.
//! Calls get_me before starting so `/cmd@botname` forms parse correctly.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::handlers;
use crate::store::ScheduleStore;

/// The chat-command surface. `Add` and `Remove` capture the raw argument tail;
/// the handlers split and validate it themselves so argument errors reply with
/// the usage line instead of failing at the parser.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Add(String),
    List,
    Remove(String),
}

/// Maps a parsed command to its handler and returns the reply text.
pub async fn dispatch(store: &ScheduleStore, command: Command) -> String {
    match command {
        Command::Start => handlers::start(),
        Command::Add(args) => handlers::add(store, &args).await,
        Command::List => handlers::list(store).await,
        Command::Remove(args) => handlers::remove(store, &args).await,
    }
}

/// Starts the long-polling repl: each text message that parses as a [`Command`]
/// is dispatched against the store and answered with the handler's reply text.
/// Non-commands and unknown commands are ignored.
pub async fn run_repl(bot: teloxide::Bot, store: Arc<ScheduleStore>) -> Result<()> {
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().unwrap_or_default();
            info!(username = %username, "Bot username resolved before repl");
            username
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; commands addressed as /cmd@botname will not parse");
            String::new()
        }
    };

    teloxide::repl(bot, move |bot: Bot, msg: teloxide::types::Message| {
        let store = store.clone();
        let bot_username = bot_username.clone();

        async move {
            if let Some(text) = msg.text() {
                match Command::parse(text, &bot_username) {
                    Ok(command) => {
                        info!(
                            chat_id = msg.chat.id.0,
                            command = ?command,
                            "Received command"
                        );
                        let reply = dispatch(&store, command).await;
                        bot.send_message(msg.chat.id, reply).await?;
                    }
                    Err(_) => {
                        debug!(chat_id = msg.chat.id.0, "Ignoring non-command message");
                    }
                }
            }
            Ok(())
        }
    })
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_captures_argument_tail() {
        let cmd = Command::parse("/add @chan 101", "mybot").unwrap();
        assert_eq!(cmd, Command::Add("@chan 101".to_string()));
    }

    #[test]
    fn test_parse_with_bot_suffix() {
        let cmd = Command::parse("/list@mybot", "mybot").unwrap();
        assert_eq!(cmd, Command::List);
    }

    #[test]
    fn test_parse_unknown_command_is_err() {
        assert!(Command::parse("/frobnicate", "mybot").is_err());
        assert!(Command::parse("hello there", "mybot").is_err());
    }
}
