//! Schedule store: the ordered list of (channel, message id) records and its JSON persistence.
//!
//! One in-memory list behind a mutex is the source of truth; every mutation persists
//! the full list before the lock is released, so the file always matches memory as of
//! the last successful mutation. Missing file on load means an empty list.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::core::{BotError, Result};

/// One scheduled forward: source channel (handle or numeric id) and message id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub channel: String,
    pub message_id: i32,
}

/// Owns the record list and the schedule file. All mutations go through the mutex
/// so command handlers and the daily job never race on read-modify-persist.
pub struct ScheduleStore {
    path: PathBuf,
    records: Mutex<Vec<ScheduleRecord>>,
}

impl ScheduleStore {
    /// Loads the store from `path`. A missing file yields an empty list; unreadable
    /// or malformed JSON is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                BotError::Storage(format!("Malformed schedule file {}: {}", path.display(), e))
            })?
        } else {
            Vec::new()
        };
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    /// Appends a record and persists. On persist failure the append is rolled back
    /// so memory and disk never diverge.
    pub async fn add(&self, record: ScheduleRecord) -> Result<()> {
        let mut records = self.records.lock().await;
        records.push(record);
        if let Err(e) = self.persist(&records) {
            records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Removes the record at the given 1-based index and persists.
    ///
    /// Returns `Ok(None)` when the index is 0 or past the end of the list (non-positive
    /// indices are rejected, never wrapped). On persist failure the record is put back
    /// at its old position and the error is returned.
    pub async fn remove(&self, one_based: usize) -> Result<Option<ScheduleRecord>> {
        let mut records = self.records.lock().await;
        if one_based == 0 || one_based > records.len() {
            return Ok(None);
        }
        let removed = records.remove(one_based - 1);
        if let Err(e) = self.persist(&records) {
            records.insert(one_based - 1, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Clone of the current list, for display and for the daily sweep.
    pub async fn snapshot(&self) -> Vec<ScheduleRecord> {
        self.records.lock().await.clone()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// True when no records are held.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    /// Serializes the full list to the schedule file, overwriting prior contents.
    fn persist(&self, records: &[ScheduleRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| BotError::Storage(format!("Failed to serialize schedule: {}", e)))?;
        std::fs::write(&self.path, json).map_err(|e| {
            BotError::Storage(format!(
                "Failed to write schedule file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
