//! Command handlers: start, add, list, remove.
//!
//! Each handler takes the shared [`ScheduleStore`] and the raw argument string and
//! returns the reply text. Bad arguments get the fixed usage line and leave the
//! list untouched; persist failures are logged and reported as a generic failure
//! instead of crashing the process.

use tracing::{error, info};

use crate::store::{ScheduleRecord, ScheduleStore};

/// Reply for `/start`.
pub const START_TEXT: &str = "Welcome! Use /add, /list, /remove to manage scheduled posts.";
/// Usage line for `/add` argument errors.
pub const ADD_USAGE: &str = "Usage: /add @ChannelUsername message_id";
/// Usage line for `/remove` argument errors.
pub const REMOVE_USAGE: &str = "Usage: /remove index_number (see /list)";
/// Reply for `/list` on an empty schedule.
pub const EMPTY_LIST_TEXT: &str = "No scheduled messages.";
/// Generic reply when a mutation could not be written to disk.
pub const PERSIST_FAILED_TEXT: &str = "Could not save the schedule, nothing was changed.";

/// `/start`: fixed welcome/usage text, no side effects.
pub fn start() -> String {
    START_TEXT.to_string()
}

/// `/add <channel> <message_id>`: appends a record and persists.
pub async fn add(store: &ScheduleStore, args: &str) -> String {
    let mut parts = args.split_whitespace();
    let (channel, message_id) = match (parts.next(), parts.next()) {
        (Some(channel), Some(id)) => match id.parse::<i32>() {
            Ok(message_id) => (channel.to_string(), message_id),
            Err(_) => return ADD_USAGE.to_string(),
        },
        _ => return ADD_USAGE.to_string(),
    };

    let record = ScheduleRecord {
        channel: channel.clone(),
        message_id,
    };
    match store.add(record).await {
        Ok(()) => {
            info!(channel = %channel, message_id, "Record added to schedule");
            format!("Added to schedule: {} | {}", channel, message_id)
        }
        Err(e) => {
            error!(error = %e, channel = %channel, message_id, "Failed to persist schedule after add");
            PERSIST_FAILED_TEXT.to_string()
        }
    }
}

/// `/list`: one line per record, 1-based, in insertion order.
pub async fn list(store: &ScheduleStore) -> String {
    let records = store.snapshot().await;
    if records.is_empty() {
        return EMPTY_LIST_TEXT.to_string();
    }
    let lines: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {} | {}", i + 1, r.channel, r.message_id))
        .collect();
    format!("Scheduled Messages:\n{}", lines.join("\n"))
}

/// `/remove <index>`: removes the record at the 1-based index and persists.
///
/// Zero and negative indices are rejected with the usage line rather than wrapping
/// from the end of the list.
pub async fn remove(store: &ScheduleStore, args: &str) -> String {
    let mut parts = args.split_whitespace();
    let index = match parts.next().and_then(|s| s.parse::<i64>().ok()) {
        Some(i) if i >= 1 => i as usize,
        _ => return REMOVE_USAGE.to_string(),
    };

    match store.remove(index).await {
        Ok(Some(removed)) => {
            info!(channel = %removed.channel, message_id = removed.message_id, "Record removed from schedule");
            format!("Removed: {} | {}", removed.channel, removed.message_id)
        }
        Ok(None) => REMOVE_USAGE.to_string(),
        Err(e) => {
            error!(error = %e, index, "Failed to persist schedule after remove");
            PERSIST_FAILED_TEXT.to_string()
        }
    }
}
