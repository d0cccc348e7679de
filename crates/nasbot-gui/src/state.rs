/// Dashboard state.
///
/// The single model every widget reads from. Background threads never
/// touch it: the pipeline and animation producers publish values over
/// channels, and `process_*` drains them once per frame on the UI thread.
use anyhow::Context as _;
use chrono::{DateTime, Local};
use nasbot_core::animation::robot::robot_frame;
use nasbot_core::animation::{start_animation, AnimationFrame, AnimationHandle, Pane};
use nasbot_core::config::DashboardConfig;
use nasbot_core::model::{FileEventKind, StorageSnapshot};
use nasbot_core::pipeline::update::DashboardUpdate;
use nasbot_core::pipeline::{start_pipeline, PipelineHandle, WakeFn};
use nasbot_core::watcher::validate_root;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Maximum pipeline updates applied per frame.
///
/// Only the last message is visible, so a burst just needs to settle
/// quickly; the remainder is picked up next frame.
const MAX_UPDATES_PER_FRAME: usize = 200;

/// Maximum animation frames applied per frame.
const MAX_FRAMES_PER_FRAME: usize = 32;

/// Whether live updates are still arriving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchStatus {
    Live,
    /// The watcher failed or closed; the reason is shown to the user.
    Stopped(String),
}

/// All dashboard state.
pub struct DashboardState {
    // ── Configuration ──────────────────────────────────
    pub title: String,
    pub watch_path: PathBuf,

    // ── Latest event ───────────────────────────────────
    /// Most recent formatted message. No history is kept.
    pub message: Option<String>,
    pub last_kind: Option<FileEventKind>,
    pub last_event_at: Option<DateTime<Local>>,
    pub events_seen: u64,

    // ── Statistics ─────────────────────────────────────
    /// Last successfully read snapshot.
    pub snapshot: StorageSnapshot,
    /// True when the most recent refresh failed and `snapshot` is older
    /// than `message`.
    pub stats_stale: bool,

    pub watch_status: WatchStatus,

    // ── Decoration ─────────────────────────────────────
    pub rain_left: String,
    pub rain_right: String,
    pub mouth_open: bool,

    // ── Background producers ───────────────────────────
    pipeline: Option<PipelineHandle>,
    animation: Option<AnimationHandle>,
}

impl DashboardState {
    /// State with no background producers attached.
    pub fn new(title: impl Into<String>, watch_path: PathBuf, snapshot: StorageSnapshot) -> Self {
        Self {
            title: title.into(),
            watch_path,
            message: None,
            last_kind: None,
            last_event_at: None,
            events_seen: 0,
            snapshot,
            stats_stale: false,
            watch_status: WatchStatus::Live,
            rain_left: String::new(),
            rain_right: String::new(),
            mouth_open: false,
            pipeline: None,
            animation: None,
        }
    }

    /// Start the watcher pipeline and animation producers for `watch_path`.
    ///
    /// Fails if the path is missing, not a directory, or cannot be read;
    /// the caller must not open the window in that case.
    pub fn start(
        config: &DashboardConfig,
        watch_path: PathBuf,
        wake: WakeFn,
    ) -> anyhow::Result<Self> {
        validate_root(&watch_path)
            .with_context(|| format!("cannot watch {}", watch_path.display()))?;

        let snapshot = StorageSnapshot::capture(&watch_path)
            .with_context(|| format!("cannot read statistics for {}", watch_path.display()))?;

        let pipeline = start_pipeline(watch_path.clone(), wake.clone())
            .with_context(|| format!("cannot watch {}", watch_path.display()))?;

        tracing::info!(
            "Watching {} ({} entries, {})",
            watch_path.display(),
            snapshot.file_count,
            snapshot.storage_line()
        );

        let animation = start_animation(config.animation(), wake);

        let mut state = Self::new(config.title.clone(), watch_path, snapshot);
        state.pipeline = Some(pipeline);
        state.animation = Some(animation);
        Ok(state)
    }

    pub fn watch_path(&self) -> &Path {
        &self.watch_path
    }

    pub fn is_live(&self) -> bool {
        self.watch_status == WatchStatus::Live
    }

    /// Apply one pipeline update.
    pub fn apply_update(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::Event {
                kind,
                message,
                snapshot,
                received_at,
            } => {
                self.message = Some(message.into_string());
                self.last_kind = Some(kind);
                self.last_event_at = Some(received_at);
                self.events_seen += 1;
                match snapshot {
                    Ok(snapshot) => {
                        self.snapshot = snapshot;
                        self.stats_stale = false;
                    }
                    Err(_) => self.stats_stale = true,
                }
            }
            DashboardUpdate::WatchStopped { reason } => {
                tracing::error!("Live updates stopped: {}", reason);
                self.watch_status = WatchStatus::Stopped(reason);
            }
        }
    }

    /// Apply one animation frame.
    pub fn apply_frame(&mut self, frame: AnimationFrame) {
        match frame {
            AnimationFrame::Rain {
                pane: Pane::Left,
                text,
            } => self.rain_left = text,
            AnimationFrame::Rain {
                pane: Pane::Right,
                text,
            } => self.rain_right = text,
            AnimationFrame::Mouth { open } => self.mouth_open = open,
        }
    }

    /// Drain pending pipeline updates. Returns `true` if anything changed.
    pub fn process_pipeline_messages(&mut self) -> bool {
        let handle = match &self.pipeline {
            Some(h) => h,
            None => return false,
        };

        let mut updates = Vec::new();
        let mut disconnected = false;
        for _ in 0..MAX_UPDATES_PER_FRAME {
            match handle.update_rx.try_recv() {
                Ok(update) => updates.push(update),
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let changed = !updates.is_empty();
        for update in updates {
            self.apply_update(update);
        }

        if disconnected {
            self.pipeline = None;
            if self.is_live() {
                self.apply_update(DashboardUpdate::WatchStopped {
                    reason: "event pipeline exited".to_owned(),
                });
            }
            return true;
        }
        changed
    }

    /// Drain pending animation frames. Returns `true` if anything changed.
    pub fn process_animation_frames(&mut self) -> bool {
        let frames: Vec<AnimationFrame> = match &self.animation {
            Some(h) => h.frame_rx.try_iter().take(MAX_FRAMES_PER_FRAME).collect(),
            None => return false,
        };
        let changed = !frames.is_empty();
        for frame in frames {
            self.apply_frame(frame);
        }
        changed
    }

    /// Stop every background producer. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(pipeline) = self.pipeline.take() {
            pipeline.stop();
        }
        if let Some(animation) = self.animation.take() {
            animation.stop();
        }
    }

    pub fn file_count_line(&self) -> String {
        self.snapshot.file_count_line()
    }

    pub fn storage_line(&self) -> String {
        self.snapshot.storage_line()
    }

    /// Percentage of the volume in use (0.0 – 100.0).
    pub fn usage_percent(&self) -> f32 {
        if self.snapshot.total_bytes == 0 {
            return 0.0;
        }
        (self.snapshot.used_bytes as f64 / self.snapshot.total_bytes as f64 * 100.0) as f32
    }

    pub fn robot_text(&self) -> Cow<'static, str> {
        robot_frame(self.mouth_open)
    }
}

impl Drop for DashboardState {
    fn drop(&mut self) {
        self.shutdown();
    }
}
