/// Updates sent from the pipeline thread to the UI thread.
///
/// Each value is built completely on the background thread and handed
/// over by value; the UI applies it without touching the filesystem.
use chrono::{DateTime, Local};

use crate::model::snapshot::StatsError;
use crate::model::{DisplayMessage, FileEventKind, StorageSnapshot};

#[derive(Debug)]
pub enum DashboardUpdate {
    /// One file event, formatted, with freshly read statistics.
    Event {
        kind: FileEventKind,
        message: DisplayMessage,
        /// `Err` when the count or volume query failed for this refresh;
        /// the UI keeps whatever it showed before.
        snapshot: Result<StorageSnapshot, StatsError>,
        received_at: DateTime<Local>,
    },
    /// The watcher failed or closed. No further `Event`s follow.
    WatchStopped { reason: String },
}
