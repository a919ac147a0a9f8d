//! Catalog Builder - turns a storage enumeration into a [`Catalog`].
//!
//! Only one level is walked: the root's files become folder 0 and each
//! visible sub-directory of the root becomes one more folder. Deeper
//! directories are ignored. Enumeration order is preserved throughout.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use platform::config::STORAGE_ROOT;
use platform::{DirEntry, Storage};
use rand::Rng;

use crate::catalog::Catalog;
use crate::scanner::Scanner;
use crate::track::FileEntry;

/// Error type for catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The store root could not be opened; nothing can be played.
    #[error("storage unavailable: {reason}")]
    StorageUnavailable {
        /// Backend description of the failure.
        reason: String,
    },
}

/// Build a catalog from `storage`, drawing shuffle orders from `rng`.
///
/// A sub-folder that fails to open is kept as an empty folder so the failure
/// of one directory does not hide the rest of the store.
///
/// # Errors
///
/// Returns [`CatalogError::StorageUnavailable`] if the root cannot be opened.
pub async fn build<S, R>(storage: &mut S, rng: &mut R) -> Result<Catalog, CatalogError>
where
    S: Storage,
    R: Rng + ?Sized,
{
    let root_entries = storage
        .open_directory(STORAGE_ROOT)
        .await
        .map_err(|e| CatalogError::StorageUnavailable {
            reason: e.to_string(),
        })?;

    let root_files = eligible_files(STORAGE_ROOT, &root_entries);

    let mut sub_folders: Vec<(String, Vec<FileEntry>)> = Vec::new();
    for entry in root_entries.iter().filter(|e| Scanner::accepts_folder(e)) {
        let path = format!("/{}", entry.name);
        let files = match storage.open_directory(&path).await {
            Ok(children) => eligible_files(&path, &children),
            Err(e) => {
                tracing::warn!(folder = %path, error = %e, "folder unreadable, catalogued as empty");
                Vec::new()
            }
        };
        tracing::debug!(folder = %path, files = files.len(), "folder scanned");
        sub_folders.push((path, files));
    }

    let catalog = Catalog::assemble(root_files, sub_folders, rng);
    tracing::info!(
        folders = catalog.folder_count(),
        tracks = catalog.total_tracks(),
        "catalog built"
    );
    Ok(catalog)
}

fn eligible_files(folder: &str, entries: &[DirEntry]) -> Vec<FileEntry> {
    entries
        .iter()
        .filter_map(|e| Scanner::file_entry(folder, e))
        .collect()
}
