/// Directory watcher — recursive create/modify/delete notifications for one
/// root, delivered over a bounded channel.
///
/// Wraps `notify::RecommendedWatcher` (inotify, FSEvents, or
/// `ReadDirectoryChangesW` depending on the platform).
///
/// # Usage
///
/// ```ignore
/// let handle = start_watcher(PathBuf::from("/srv/share"))?;
/// // receive events on handle.receiver
/// handle.stop();
/// ```
///
/// # Failure
///
/// A missing or non-directory root fails [`start_watcher`]. An error
/// reported by the OS backend after startup ends the watch: one
/// [`WatchMessage::Failed`] is sent and every later notification is dropped.
use crossbeam_channel::{bounded, Receiver, Sender};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::model::FileEvent;

/// Capacity of the watcher-to-pipeline channel.
pub const WATCH_CHANNEL_CAPACITY: usize = 2048;

/// Errors from starting the watcher.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("watched path {0} does not exist")]
    RootMissing(PathBuf),

    #[error("watched path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("cannot watch {path}: {source}")]
    WatchFailed {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

/// Message sent from the watcher backend thread to the pipeline.
#[derive(Debug)]
pub enum WatchMessage {
    /// A classified change somewhere under the root.
    Event(FileEvent),
    /// The backend reported an error; no further events follow.
    Failed(String),
}

/// Handle to a running directory watcher.
///
/// Dropping the handle (or calling [`WatcherHandle::stop`]) releases the OS
/// watch and closes the channel.
pub struct WatcherHandle {
    /// Receive [`WatchMessage`]s from the backend thread.
    pub receiver: Receiver<WatchMessage>,
    root: PathBuf,
    watcher: Option<RecommendedWatcher>,
}

impl WatcherHandle {
    /// The directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Release the OS watch. Idempotent.
    ///
    /// The receiver is closed first: the backend thread may be blocked
    /// sending into a full channel, and `unwatch` waits on that thread.
    pub fn stop(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            drop(std::mem::replace(&mut self.receiver, crossbeam_channel::never()));
            if let Err(e) = watcher.unwatch(&self.root) {
                debug!("Watcher: unwatch {:?} failed: {}", self.root, e);
            }
            debug!("Watcher: stopped for {:?}", self.root);
        }
    }

    pub fn is_running(&self) -> bool {
        self.watcher.is_some()
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), WatchError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(WatchError::NotADirectory(root.to_path_buf())),
        Err(_) => Err(WatchError::RootMissing(root.to_path_buf())),
    }
}

/// Start watching `root` recursively.
///
/// Returns once the OS watch is registered; events arrive on
/// `handle.receiver` from notify's own background thread.
pub fn start_watcher(root: PathBuf) -> Result<WatcherHandle, WatchError> {
    validate_root(&root)?;

    let (tx, rx) = bounded::<WatchMessage>(WATCH_CHANNEL_CAPACITY);
    let failed = Arc::new(AtomicBool::new(false));

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        forward(res, &tx, &failed);
    })
    .map_err(|source| WatchError::WatchFailed {
        path: root.clone(),
        source,
    })?;

    watcher
        .watch(&root, RecursiveMode::Recursive)
        .map_err(|source| WatchError::WatchFailed {
            path: root.clone(),
            source,
        })?;

    info!("Watcher: watching {:?} recursively", root);

    Ok(WatcherHandle {
        receiver: rx,
        root,
        watcher: Some(watcher),
    })
}

// ─── Backend callback ───────────────────────────────────────────────────────

/// Classify one backend result and push it to the pipeline.
///
/// Runs on notify's thread. Uses a blocking send so no event is lost; the
/// pipeline drains continuously so this only waits under extreme bursts.
fn forward(res: notify::Result<notify::Event>, tx: &Sender<WatchMessage>, failed: &AtomicBool) {
    if failed.load(Ordering::Relaxed) {
        return;
    }

    match res {
        Ok(event) => {
            let kind = event.kind;
            let classified = FileEvent::from_notify(event);
            if classified.is_empty() {
                debug!("Watcher: ignoring {:?}", kind);
            }
            for file_event in classified {
                if tx.send(WatchMessage::Event(file_event)).is_err() {
                    return;
                }
            }
        }
        Err(e) => {
            error!("Watcher: backend failure, live updates stop: {}", e);
            failed.store(true, Ordering::Relaxed);
            let _ = tx.send(WatchMessage::Failed(e.to_string()));
        }
    }
}
