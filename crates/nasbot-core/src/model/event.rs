/// File events and the messages derived from them.
///
/// A [`FileEvent`] is produced by the watcher and consumed immediately by
/// the formatter; nothing here is stored beyond one pipeline step.
use std::fmt;
use std::path::PathBuf;

use notify::event::{EventKind, ModifyKind, RenameMode};

/// What happened to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileEventKind {
    Created,
    Modified,
    Deleted,
}

impl FileEventKind {
    /// Verb used in the display template.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Created => "added",
            Self::Modified => "modified",
            Self::Deleted => "removed",
        }
    }
}

/// A classified filesystem change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub path: PathBuf,
    pub kind: FileEventKind,
}

impl FileEvent {
    pub fn new(path: impl Into<PathBuf>, kind: FileEventKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Classify a raw `notify` event into zero or more file events.
    ///
    /// Renames are reported as a removal of the old name and an addition of
    /// the new one. Access notifications and unclassifiable kinds yield
    /// nothing.
    pub fn from_notify(event: notify::Event) -> Vec<FileEvent> {
        let notify::Event { kind, paths, .. } = event;

        match kind {
            EventKind::Create(_) => with_kind(paths, FileEventKind::Created),
            EventKind::Remove(_) => with_kind(paths, FileEventKind::Deleted),
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                with_kind(paths, FileEventKind::Deleted)
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                with_kind(paths, FileEventKind::Created)
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) if paths.len() == 2 => {
                let mut paths = paths.into_iter();
                let mut events = Vec::with_capacity(2);
                if let Some(from) = paths.next() {
                    events.push(FileEvent::new(from, FileEventKind::Deleted));
                }
                if let Some(to) = paths.next() {
                    events.push(FileEvent::new(to, FileEventKind::Created));
                }
                events
            }
            EventKind::Modify(_) => with_kind(paths, FileEventKind::Modified),
            EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
        }
    }
}

fn with_kind(paths: Vec<PathBuf>, kind: FileEventKind) -> Vec<FileEvent> {
    paths
        .into_iter()
        .map(|path| FileEvent { path, kind })
        .collect()
}

/// The single line of text shown for the most recent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage(String);

impl DisplayMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
