/// Event pipeline — watcher events in, display updates out.
///
/// A dedicated thread drains the [`watcher`](crate::watcher) channel,
/// formats each event, reads a fresh [`StorageSnapshot`] and publishes a
/// [`DashboardUpdate`] for the UI thread. The UI never touches the
/// filesystem and background threads never touch UI state.
pub mod update;

use crate::format::format_event;
use crate::model::{FileEvent, StorageSnapshot};
use crate::watcher::{start_watcher, WatchError, WatchMessage, WatcherHandle};
use update::DashboardUpdate;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Maximum number of updates that may queue up for the UI.
///
/// The UI drains once per frame. If it falls behind (hidden window) the
/// pipeline blocks, which in turn back-pressures the watcher channel.
pub const UPDATE_CHANNEL_CAPACITY: usize = 1_024;

/// How often the pipeline thread re-checks its cancel flag while idle.
const CANCEL_POLL: Duration = Duration::from_millis(200);

/// Callback run after each published update, typically
/// `egui::Context::request_repaint`.
pub type WakeFn = Arc<dyn Fn() + Send + Sync>;

/// Handle to the running pipeline.
pub struct PipelineHandle {
    /// Receiver for updates, drained on the UI thread.
    pub update_rx: Receiver<DashboardUpdate>,
    root: PathBuf,
    cancel_flag: Arc<AtomicBool>,
    _thread: Option<thread::JoinHandle<()>>,
}

impl PipelineHandle {
    /// Request the pipeline (and its watcher) to stop. Non-blocking.
    pub fn stop(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Drop for PipelineHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Validate `root`, start the watcher and spawn the pipeline thread.
///
/// Fails only when the watcher cannot be started (missing root, not a
/// directory, or the OS refused the watch).
pub fn start_pipeline(root: PathBuf, wake: WakeFn) -> Result<PipelineHandle, WatchError> {
    let watcher = start_watcher(root.clone())?;

    let (update_tx, update_rx) =
        crossbeam_channel::bounded::<DashboardUpdate>(UPDATE_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("nasbot-pipeline".into())
        .spawn(move || run_pipeline(watcher, update_tx, cancel_clone, wake))
        .expect("failed to spawn pipeline thread");

    Ok(PipelineHandle {
        update_rx,
        root,
        cancel_flag,
        _thread: Some(thread),
    })
}

/// Format `event` and read fresh statistics for `root`.
pub fn process_event(root: &Path, event: &FileEvent) -> DashboardUpdate {
    let message = format_event(event);
    debug!("Pipeline: {}", message);

    let snapshot = StorageSnapshot::capture(root);
    if let Err(ref e) = snapshot {
        warn!("Pipeline: keeping previous statistics: {}", e);
    }

    DashboardUpdate::Event {
        kind: event.kind,
        message,
        snapshot,
        received_at: chrono::Local::now(),
    }
}

// ─── Background thread ──────────────────────────────────────────────────────

fn run_pipeline(
    mut watcher: WatcherHandle,
    tx: Sender<DashboardUpdate>,
    cancel: Arc<AtomicBool>,
    wake: WakeFn,
) {
    let root = watcher.root().to_path_buf();
    info!("Pipeline: started for {:?}", root);

    pump(&root, &watcher.receiver, &tx, &cancel, &wake);

    watcher.stop();
    info!("Pipeline: stopped for {:?}", root);
}

/// Turn watcher messages into updates until cancelled, the watcher fails
/// or closes, or the UI receiver is gone.
fn pump(
    root: &Path,
    rx: &Receiver<WatchMessage>,
    tx: &Sender<DashboardUpdate>,
    cancel: &AtomicBool,
    wake: &WakeFn,
) {
    loop {
        if cancel.load(Ordering::Relaxed) {
            break;
        }

        let update = match rx.recv_timeout(CANCEL_POLL) {
            Ok(WatchMessage::Event(event)) => process_event(root, &event),
            Ok(WatchMessage::Failed(reason)) => {
                let _ = tx.send(DashboardUpdate::WatchStopped { reason });
                wake();
                break;
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                let _ = tx.send(DashboardUpdate::WatchStopped {
                    reason: "watcher closed".to_owned(),
                });
                wake();
                break;
            }
        };

        if tx.send(update).is_err() {
            debug!("Pipeline: UI receiver gone");
            break;
        }
        wake();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileEventKind;
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn test_process_event_counts_top_level_entries() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("notes.txt"), b"hello").unwrap();
        std::fs::create_dir(tmp.path().join("photos")).unwrap();

        let event = FileEvent::new(tmp.path().join("notes.txt"), FileEventKind::Created);
        match process_event(tmp.path(), &event) {
            DashboardUpdate::Event {
                kind,
                message,
                snapshot,
                ..
            } => {
                assert_eq!(kind, FileEventKind::Created);
                assert_eq!(message.as_str(), "File added: notes.txt (Type: .txt)");
                assert_eq!(snapshot.unwrap().file_count, 2);
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[test]
    fn test_process_event_tolerates_vanished_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("share");
        let event = FileEvent::new(root.join("report"), FileEventKind::Deleted);

        match process_event(&root, &event) {
            DashboardUpdate::Event {
                message, snapshot, ..
            } => {
                assert_eq!(message.as_str(), "File removed: report (Type: Unknown)");
                assert!(snapshot.is_err());
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[test]
    fn test_start_pipeline_rejects_missing_root() {
        let tmp = TempDir::new().unwrap();
        let result = start_pipeline(tmp.path().join("missing"), Arc::new(|| {}));
        assert!(matches!(result, Err(WatchError::RootMissing(_))));
    }

    #[test]
    fn test_watcher_failure_becomes_watch_stopped() {
        let tmp = TempDir::new().unwrap();
        let (watch_tx, watch_rx) = crossbeam_channel::bounded(8);
        let (update_tx, update_rx) = crossbeam_channel::bounded(8);
        let cancel = AtomicBool::new(false);
        let wake: WakeFn = Arc::new(|| {});

        watch_tx
            .send(WatchMessage::Event(FileEvent::new(
                tmp.path().join("a.txt"),
                FileEventKind::Created,
            )))
            .unwrap();
        watch_tx
            .send(WatchMessage::Failed("queue overflow".to_owned()))
            .unwrap();
        // Anything after the failure must not be forwarded.
        watch_tx
            .send(WatchMessage::Event(FileEvent::new(
                tmp.path().join("late.txt"),
                FileEventKind::Created,
            )))
            .unwrap();

        pump(tmp.path(), &watch_rx, &update_tx, &cancel, &wake);

        match update_rx.try_recv().unwrap() {
            DashboardUpdate::Event { message, .. } => {
                assert_eq!(message.as_str(), "File added: a.txt (Type: .txt)")
            }
            other => panic!("expected Event, got {other:?}"),
        }
        match update_rx.try_recv().unwrap() {
            DashboardUpdate::WatchStopped { reason } => assert_eq!(reason, "queue overflow"),
            other => panic!("expected WatchStopped, got {other:?}"),
        }
        assert!(update_rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_watcher_becomes_watch_stopped() {
        let tmp = TempDir::new().unwrap();
        let (watch_tx, watch_rx) = crossbeam_channel::bounded::<WatchMessage>(1);
        let (update_tx, update_rx) = crossbeam_channel::bounded(1);
        drop(watch_tx);

        pump(
            tmp.path(),
            &watch_rx,
            &update_tx,
            &AtomicBool::new(false),
            &(Arc::new(|| {}) as WakeFn),
        );

        assert!(matches!(
            update_rx.try_recv(),
            Ok(DashboardUpdate::WatchStopped { .. })
        ));
    }

    #[test]
    fn test_dropping_handle_ends_pipeline_thread() {
        let tmp = TempDir::new().unwrap();
        // The thread owns one clone of the wake hook; it is released when
        // the thread exits.
        let wake: WakeFn = Arc::new(|| {});
        let handle = start_pipeline(tmp.path().to_path_buf(), wake.clone()).unwrap();
        assert!(Arc::strong_count(&wake) > 1);

        drop(handle);

        let deadline = Instant::now() + Duration::from_secs(10);
        while Arc::strong_count(&wake) > 1 {
            assert!(
                Instant::now() < deadline,
                "pipeline thread still running after its handle was dropped"
            );
            thread::sleep(Duration::from_millis(20));
        }
    }
}
