/// Point-in-time file count and volume usage for the watched directory.
///
/// Always a fresh read: nothing is cached between calls.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::size::whole_gib;
use crate::platform;

/// Errors from reading directory statistics.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("cannot list {path}: {source}")]
    ListFailed { path: PathBuf, source: io::Error },

    #[error("cannot read volume usage for {path}: {source}")]
    VolumeFailed { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageSnapshot {
    /// Immediate entries (files and subdirectories) of the watched directory.
    pub file_count: u64,
    /// Bytes in use on the volume holding the watched directory.
    pub used_bytes: u64,
    /// Capacity of that volume in bytes.
    pub total_bytes: u64,
}

impl StorageSnapshot {
    /// Read the current count and usage for `path`.
    pub fn capture(path: &Path) -> Result<Self, StatsError> {
        let file_count = count_entries(path).map_err(|source| StatsError::ListFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let usage = platform::volume_usage(path).map_err(|source| StatsError::VolumeFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            file_count,
            used_bytes: usage.used_bytes,
            total_bytes: usage.total_bytes,
        })
    }

    pub fn used_gib(&self) -> u64 {
        whole_gib(self.used_bytes)
    }

    pub fn total_gib(&self) -> u64 {
        whole_gib(self.total_bytes)
    }

    /// `Number of files: {n}`
    pub fn file_count_line(&self) -> String {
        format!("Number of files: {}", self.file_count)
    }

    /// `Storage: {used}GB used of {total}GB`
    pub fn storage_line(&self) -> String {
        format!(
            "Storage: {}GB used of {}GB",
            self.used_gib(),
            self.total_gib()
        )
    }
}

/// Count the immediate entries of `dir`. Not recursive.
///
/// Entries that fail to read mid-listing (e.g. deleted between the
/// directory read and the entry read) are skipped rather than failing the
/// whole count.
pub fn count_entries(dir: &Path) -> io::Result<u64> {
    let mut count = 0u64;
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(_) => count += 1,
            Err(e) => tracing::debug!("Skipping unreadable entry in {:?}: {}", dir, e),
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::size::GIB;
    use tempfile::TempDir;

    #[test]
    fn test_storage_line_truncates() {
        let snap = StorageSnapshot {
            file_count: 0,
            used_bytes: GIB * 5 / 2,
            total_bytes: GIB * 10,
        };
        assert_eq!(snap.storage_line(), "Storage: 2GB used of 10GB");
    }

    #[test]
    fn test_storage_line_below_one_gib() {
        let snap = StorageSnapshot {
            file_count: 3,
            used_bytes: GIB - 1,
            total_bytes: GIB + GIB / 2,
        };
        assert_eq!(snap.storage_line(), "Storage: 0GB used of 1GB");
        assert_eq!(snap.file_count_line(), "Number of files: 3");
    }

    #[test]
    fn test_count_entries_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        fs::write(tmp.path().join("b"), b"b").unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("nested.txt"), b"n").unwrap();
        fs::write(sub.join("nested2.txt"), b"n").unwrap();

        assert_eq!(count_entries(tmp.path()).unwrap(), 3);
    }

    #[test]
    fn test_count_entries_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(count_entries(tmp.path()).unwrap(), 0);
    }

    #[test]
    fn test_capture_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let err = StorageSnapshot::capture(&missing).unwrap_err();
        assert!(matches!(err, StatsError::ListFailed { .. }));
    }

    #[test]
    fn test_capture_real_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("one.bin"), vec![0u8; 16]).unwrap();
        let snap = StorageSnapshot::capture(tmp.path()).unwrap();
        assert_eq!(snap.file_count, 1);
        assert!(snap.total_bytes > 0);
        assert!(snap.used_bytes <= snap.total_bytes);
    }
}
