//! xtask scan-library - build the player's catalog for a local folder.
//!
//! Runs the same Catalog Builder the player uses at boot, over a
//! `LocalDirStorage`, and prints what the player would see: folder order,
//! eligible files, and optionally the shuffle orders drawn for this seed.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use library::Catalog;
use platform::storage_local::LocalDirStorage;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Entry point called from main.rs
pub fn run(music_dir: &Path, seed: Option<u64>, shuffle: bool) -> Result<()> {
    println!("Scanning: {}", music_dir.display());
    let catalog = scan(music_dir, seed)?;
    print!("{}", render(&catalog, shuffle));
    Ok(())
}

/// Build a catalog from `music_dir`.
pub(crate) fn scan(music_dir: &Path, seed: Option<u64>) -> Result<Catalog> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("starting runtime")?;
    let mut storage = LocalDirStorage::new(music_dir);
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    runtime
        .block_on(library::build(&mut storage, &mut rng))
        .with_context(|| format!("scanning {}", music_dir.display()))
}

/// Human-readable listing, one folder header followed by its files.
pub(crate) fn render(catalog: &Catalog, shuffle: bool) -> String {
    let mut out = String::new();
    for (index, folder) in catalog.folders().iter().enumerate() {
        let header = format!("[{index}] {} ({} files)", folder.name(), folder.file_count());
        if folder.is_empty() {
            let _ = writeln!(out, "{}", header.dimmed());
            continue;
        }
        let _ = writeln!(out, "{}", header.cyan().bold());
        for (file, entry) in folder.files().iter().enumerate() {
            let _ = writeln!(out, "    {file:>3}  {}  {}", entry.format.tag().yellow(), entry.name);
        }
        if shuffle {
            let order: Vec<String> = folder.shuffle_order().iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "    shuffle: {}", order.join(" "));
        }
    }
    if shuffle {
        let order: Vec<String> = catalog
            .global_shuffle()
            .iter()
            .map(|t| format!("{}:{}", t.folder, t.file))
            .collect();
        let _ = writeln!(out, "global shuffle: {}", order.join(" "));
    }
    let summary = format!(
        "{} folders, {} playable files",
        catalog.folder_count(),
        catalog.total_tracks()
    );
    if catalog.is_empty() {
        let _ = writeln!(out, "{}", format!("{summary}: no playable media").red().bold());
    } else {
        let _ = writeln!(out, "{}", summary.green());
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_card(dir: &TempDir) {
        fs::write(dir.path().join("intro.mp3"), b"FAKE").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"FAKE").unwrap();
        let album = dir.path().join("Album");
        fs::create_dir_all(album.join("Nested")).unwrap();
        fs::write(album.join("01.wav"), b"FAKE").unwrap();
        fs::write(album.join("02.M4A"), b"FAKE").unwrap();
        fs::write(album.join("Nested").join("deep.mp3"), b"FAKE").unwrap();
        fs::create_dir_all(dir.path().join(".Trash")).unwrap();
        fs::write(dir.path().join(".Trash").join("gone.mp3"), b"FAKE").unwrap();
    }

    #[test]
    fn scan_collects_root_and_one_level() {
        let tmp = TempDir::new().unwrap();
        create_fake_card(&tmp);
        let catalog = scan(tmp.path(), Some(1)).unwrap();
        assert_eq!(catalog.folder_count(), 2);
        assert_eq!(catalog.folders()[0].file_count(), 1);
        assert_eq!(catalog.folders()[1].name(), "/Album");
        assert_eq!(catalog.folders()[1].file_count(), 2);
        assert_eq!(catalog.total_tracks(), 3);
    }

    #[test]
    fn scan_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(scan(&tmp.path().join("absent"), Some(1)).is_err());
    }

    #[test]
    fn render_lists_every_file() {
        colored::control::set_override(false);
        let tmp = TempDir::new().unwrap();
        create_fake_card(&tmp);
        let catalog = scan(tmp.path(), Some(1)).unwrap();
        let text = render(&catalog, true);
        assert!(text.contains("[0] / (1 files)"));
        assert!(text.contains("intro.mp3"));
        assert!(text.contains("[1] /Album (2 files)"));
        assert!(text.contains("global shuffle:"));
        assert!(text.contains("2 folders, 3 playable files"));
    }

    #[test]
    fn render_reports_empty_card() {
        colored::control::set_override(false);
        let tmp = TempDir::new().unwrap();
        let catalog = scan(tmp.path(), Some(1)).unwrap();
        assert!(render(&catalog, false).contains("no playable media"));
    }
}
