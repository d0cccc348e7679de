/// Event formatter — turns a [`FileEvent`] into the one-line message the
/// dashboard shows.
///
/// Total over every path: a missing extension is reported as `Unknown`
/// and a path without a final segment is shown as-is.
use std::path::Path;

use crate::model::{DisplayMessage, FileEvent, FileEventKind};

/// Type label used when a file has no extension.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Build the display message for `event`.
pub fn format_event(event: &FileEvent) -> DisplayMessage {
    let name = base_name(&event.path);
    let file_type = file_type(&name);
    let text = match event.kind {
        FileEventKind::Created => format!("File added: {name} (Type: {file_type})"),
        FileEventKind::Modified => format!("File modified: {name} (Type: {file_type})"),
        FileEventKind::Deleted => format!("File removed: {name} (Type: {file_type})"),
    };
    DisplayMessage::new(text)
}

/// Final path segment, or the whole path when there is none (`/`, `..`).
pub fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Extension of `name` including its leading dot, or [`UNKNOWN_TYPE`].
///
/// Leading dots are part of the stem, so `.bashrc` has no extension while
/// `archive.tar.gz` reports `.gz` and `notes.` reports `.`.
pub fn file_type(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(dot) => &name[stem_start + dot..],
        None => UNKNOWN_TYPE,
    }
}
