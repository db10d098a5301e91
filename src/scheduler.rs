//! Daily job: sleeps until the next 10:00 local time, then sweeps the schedule.
//!
//! Each record is forwarded as its own spawned task so one slow or failing forward
//! never delays or fails the others; the sweep does not wait for them to finish.

use std::sync::Arc;

use chrono::{DateTime, Days, Local, LocalResult, TimeZone};
use tracing::{error, info};

use crate::forwarder::Forwarder;
use crate::store::ScheduleStore;

/// Hour of the daily sweep (process-local time). Not configurable.
pub const FORWARD_HOUR: u32 = 10;
/// Minute of the daily sweep.
pub const FORWARD_MINUTE: u32 = 0;

/// Next occurrence of `hour:minute` strictly after `after`, in `after`'s timezone.
///
/// Local times skipped by a DST jump move to the next day; ambiguous ones resolve
/// to the earliest valid instant.
pub fn next_run_at<Tz: TimeZone>(hour: u32, minute: u32, after: DateTime<Tz>) -> DateTime<Tz> {
    let tz = after.timezone();
    let mut date = after.date_naive();
    loop {
        if let Some(naive) = date.and_hms_opt(hour, minute, 0) {
            let candidate = match tz.from_local_datetime(&naive) {
                LocalResult::Single(t) => Some(t),
                LocalResult::Ambiguous(earliest, _) => Some(earliest),
                LocalResult::None => None,
            };
            if let Some(t) = candidate {
                if t > after {
                    return t;
                }
            }
        }
        date = date + Days::new(1);
    }
}

/// One sweep: logs the run, snapshots the store, and dispatches one fire-and-forget
/// forward per record in list order.
pub async fn run_daily_forward(store: &ScheduleStore, forwarder: Arc<dyn Forwarder>) {
    let records = store.snapshot().await;
    info!(
        timestamp = %Local::now().format("%Y-%m-%d %H:%M:%S"),
        records = records.len(),
        "Running scheduled forward sweep"
    );

    for record in records {
        let forwarder = forwarder.clone();
        tokio::spawn(async move {
            match forwarder.forward(&record.channel, record.message_id).await {
                Ok(()) => {
                    info!(
                        channel = %record.channel,
                        message_id = record.message_id,
                        "Forwarded message"
                    );
                }
                Err(e) => {
                    error!(
                        error = %e,
                        channel = %record.channel,
                        message_id = record.message_id,
                        "Failed to forward message"
                    );
                }
            }
        });
    }
}

/// Spawns the scheduler loop: sleep until the next 10:00 local time, sweep, repeat.
pub fn spawn_daily(
    store: Arc<ScheduleStore>,
    forwarder: Arc<dyn Forwarder>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = Local::now();
            let next = next_run_at(FORWARD_HOUR, FORWARD_MINUTE, now);
            info!(next_run = %next.format("%Y-%m-%d %H:%M:%S"), "Daily forward sweep scheduled");
            let wait = (next - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;
            run_daily_forward(&store, forwarder.clone()).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_next_run_before_trigger_is_same_day() {
        let next = next_run_at(10, 0, at(2024, 3, 5, 8, 30));
        assert_eq!(next, at(2024, 3, 5, 10, 0));
    }

    #[test]
    fn test_next_run_after_trigger_is_next_day() {
        let next = next_run_at(10, 0, at(2024, 3, 5, 10, 0));
        assert_eq!(next, at(2024, 3, 6, 10, 0));

        let next = next_run_at(10, 0, at(2024, 3, 5, 23, 59));
        assert_eq!(next, at(2024, 3, 6, 10, 0));
    }

    #[test]
    fn test_next_run_crosses_month_boundary() {
        let next = next_run_at(10, 0, at(2024, 1, 31, 12, 0));
        assert_eq!(next, at(2024, 2, 1, 10, 0));
    }
}
