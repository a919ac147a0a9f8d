//! Local filesystem Storage implementation for the desktop emulator.
//!
//! `LocalDirStorage` implements `platform::Storage` using `std::fs`.
//! Used when the `std` feature is enabled (emulator and xtask builds only).
//! Store paths (`/`, `/Album`) are resolved relative to the `music_root`
//! provided at construction.

use std::fs;
use std::path::PathBuf;

use crate::storage::{DirEntry, Storage};

/// Error type for local filesystem operations.
#[derive(Debug)]
pub struct LocalStorageError {
    /// Host path that failed.
    pub path: PathBuf,
    /// Underlying I/O failure.
    pub source: std::io::Error,
}

impl core::fmt::Display for LocalStorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "cannot list {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for LocalStorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A `platform::Storage` implementation backed by `std::fs`.
///
/// # Example
/// ```no_run
/// # async fn example() {
/// use platform::storage_local::LocalDirStorage;
/// use platform::Storage;
/// let mut storage = LocalDirStorage::new("/home/user/Music");
/// let entries = storage.open_directory("/").await.unwrap();
/// # }
/// ```
pub struct LocalDirStorage {
    root: PathBuf,
}

impl LocalDirStorage {
    /// Create a new storage rooted at `music_root`.
    #[must_use]
    pub fn new(music_root: impl Into<PathBuf>) -> Self {
        Self { root: music_root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl Storage for LocalDirStorage {
    type Error = LocalStorageError;

    async fn open_directory(&mut self, path: &str) -> Result<Vec<DirEntry>, Self::Error> {
        let full = self.resolve(path);
        let fail = |source| LocalStorageError { path: full.clone(), source };
        let mut entries = Vec::new();
        for entry in fs::read_dir(&full).map_err(fail)? {
            let entry = entry.map_err(fail)?;
            let is_dir = entry.file_type().map_err(fail)?.is_dir();
            // Names that are not valid UTF-8 cannot be addressed through the store.
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(dir = %full.display(), "skipping non UTF-8 entry");
                continue;
            };
            entries.push(DirEntry { name, is_dir });
        }
        Ok(entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sorted(mut entries: Vec<DirEntry>) -> Vec<DirEntry> {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    #[tokio::test]
    async fn local_storage_lists_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.mp3"), b"x").unwrap();
        fs::create_dir(tmp.path().join("Album")).unwrap();
        let mut storage = LocalDirStorage::new(tmp.path());
        let entries = sorted(storage.open_directory("/").await.unwrap());
        assert_eq!(entries, vec![DirEntry::dir("Album"), DirEntry::file("a.mp3")]);
    }

    #[tokio::test]
    async fn local_storage_lists_subdirectory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Album")).unwrap();
        fs::write(tmp.path().join("Album").join("b.wav"), b"x").unwrap();
        let mut storage = LocalDirStorage::new(tmp.path());
        let entries = storage.open_directory("/Album").await.unwrap();
        assert_eq!(entries, vec![DirEntry::file("b.wav")]);
    }

    #[tokio::test]
    async fn local_storage_missing_directory_errors() {
        let tmp = TempDir::new().unwrap();
        let mut storage = LocalDirStorage::new(tmp.path().join("absent"));
        let err = storage.open_directory("/").await.unwrap_err();
        assert!(err.to_string().contains("absent"));
    }

    #[tokio::test]
    async fn local_storage_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let mut storage = LocalDirStorage::new(tmp.path());
        assert!(storage.open_directory("/").await.unwrap().is_empty());
    }
}
