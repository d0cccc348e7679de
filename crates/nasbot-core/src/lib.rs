/// NasBot Core — directory watching, event formatting and storage
/// statistics.
///
/// This crate has no UI dependencies. Everything it produces reaches the
/// frontend as plain values over channels.
///
/// # Modules
///
/// - [`model`] — File events, display messages, storage snapshots.
/// - [`format`] — The total event-to-message formatter.
/// - [`watcher`] — Recursive directory watcher built on `notify`.
/// - [`pipeline`] — Background thread turning watcher events into updates.
/// - [`animation`] — Cosmetic binary-rain and mouth producers.
/// - [`platform`] — Volume capacity queries (Windows and Unix).
/// - [`config`] — JSON configuration with defaults.
pub mod animation;
pub mod config;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod platform;
pub mod watcher;

pub use model::snapshot::StatsError;
pub use watcher::WatchError;
