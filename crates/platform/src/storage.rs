//! Storage abstraction for the media store

use alloc::string::String;
use alloc::vec::Vec;

/// Directory-enumeration access to the media store.
///
/// Paths are absolute within the store and use `/` as separator; the store
/// root is `/`. Entries come back in the store's own enumeration order.
pub trait Storage {
    /// Error type
    type Error: core::fmt::Debug + core::fmt::Display;

    /// List the direct children of the directory at `path`.
    fn open_directory(
        &mut self,
        path: &str,
    ) -> impl core::future::Future<Output = Result<Vec<DirEntry>, Self::Error>>;
}

/// One child of an enumerated directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name without any path component.
    pub name: String,
    /// `true` for sub-directories.
    pub is_dir: bool,
}

impl DirEntry {
    /// A regular file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: false }
    }

    /// A directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: true }
    }
}

/// Failure reported by the built-in storage backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// The medium is absent or could not be mounted.
    #[error("storage medium unavailable")]
    Unavailable,
    /// The path does not name a directory.
    #[error("no such directory")]
    NotFound,
    /// Low-level read failure while enumerating.
    #[error("read failure")]
    Io,
}
