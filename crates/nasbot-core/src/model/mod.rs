/// Data model — the three transient entities that flow through one
/// event-handling step, plus byte-unit helpers.
pub mod event;
pub mod size;
pub mod snapshot;

pub use event::{DisplayMessage, FileEvent, FileEventKind};
pub use snapshot::StorageSnapshot;
