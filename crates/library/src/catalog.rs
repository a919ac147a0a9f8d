//! Catalog - ordered folders of playable files, root first.
//!
//! The catalog is an arena: one owned `Vec<Folder>`, each folder owning its
//! files and its shuffle order. It is assembled in one go and never mutated
//! afterwards; a rebuild replaces the whole value. Navigation keeps its own
//! cursor and only reads from here.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::shuffle::shuffle;
use crate::track::FileEntry;

/// Index of the root folder; it is always present, possibly empty.
pub const ROOT_FOLDER: usize = 0;

/// Coordinate of one file: folder index, then file index inside the folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackRef {
    /// Folder index in [`Catalog::folders`].
    pub folder: usize,
    /// File index in [`Folder::files`].
    pub file: usize,
}

impl TrackRef {
    /// Shorthand constructor.
    pub const fn new(folder: usize, file: usize) -> Self {
        Self { folder, file }
    }
}

/// One slot of the whole-library shuffle order.
pub type GlobalShuffleEntry = TrackRef;

/// A catalogued directory.
///
/// `files` and `shuffle_order` are built together, so the order is always a
/// permutation of the file indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    files: Vec<FileEntry>,
    shuffle_order: Vec<usize>,
}

impl Folder {
    /// Create a folder and draw its shuffle order.
    pub fn new<R: Rng + ?Sized>(name: impl Into<String>, files: Vec<FileEntry>, rng: &mut R) -> Self {
        let shuffle_order = shuffle(files.len(), rng);
        Self {
            name: name.into(),
            files,
            shuffle_order,
        }
    }

    /// `/` for the root, `/<dir>` otherwise.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folder name without the leading `/`; empty for the root.
    pub fn display_name(&self) -> &str {
        self.name.trim_start_matches('/')
    }

    /// Files in enumeration order.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Number of files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// `true` when the folder has nothing to play.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The file at `index`, if any.
    pub fn file(&self, index: usize) -> Option<&FileEntry> {
        self.files.get(index)
    }

    /// Permutation of `0..file_count()` used by per-folder shuffle.
    pub fn shuffle_order(&self) -> &[usize] {
        &self.shuffle_order
    }
}

/// The whole media store as seen by navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    folders: Vec<Folder>,
    global_shuffle: Vec<GlobalShuffleEntry>,
}

impl Catalog {
    /// Assemble a catalog from the root's files and the sub-folders in order.
    ///
    /// Every folder gets its own shuffle order, then the global order is drawn
    /// over all files. Empty sub-folders are kept so folder indices match the
    /// store's enumeration.
    pub fn assemble<R: Rng + ?Sized>(
        root_files: Vec<FileEntry>,
        sub_folders: Vec<(String, Vec<FileEntry>)>,
        rng: &mut R,
    ) -> Self {
        let mut folders = Vec::with_capacity(sub_folders.len().saturating_add(1));
        folders.push(Folder::new("/", root_files, rng));
        for (name, files) in sub_folders {
            folders.push(Folder::new(name, files, rng));
        }

        let all: Vec<TrackRef> = folders
            .iter()
            .enumerate()
            .flat_map(|(f, folder)| (0..folder.file_count()).map(move |i| TrackRef::new(f, i)))
            .collect();
        let global_shuffle = shuffle(all.len(), rng)
            .into_iter()
            .filter_map(|i| all.get(i).copied())
            .collect();

        Self {
            folders,
            global_shuffle,
        }
    }

    /// A catalog with only an empty root; what the player holds before boot.
    pub fn empty() -> Self {
        Self {
            folders: alloc::vec![Folder {
                name: String::from("/"),
                files: Vec::new(),
                shuffle_order: Vec::new(),
            }],
            global_shuffle: Vec::new(),
        }
    }

    /// All folders, root first.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The folder at `index`, if any.
    pub fn folder(&self, index: usize) -> Option<&Folder> {
        self.folders.get(index)
    }

    /// Number of folders including the root.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Sum of every folder's file count.
    pub fn total_tracks(&self) -> usize {
        self.folders.iter().map(Folder::file_count).sum()
    }

    /// `true` when no folder has a playable file.
    pub fn is_empty(&self) -> bool {
        self.folders.iter().all(Folder::is_empty)
    }

    /// The file at `at`, if the coordinate is valid.
    pub fn file(&self, at: TrackRef) -> Option<&FileEntry> {
        self.folder(at.folder).and_then(|f| f.file(at.file))
    }

    /// `true` when `at` names an existing file.
    pub fn contains(&self, at: TrackRef) -> bool {
        self.file(at).is_some()
    }

    /// Whole-library shuffle order; a permutation of every coordinate.
    pub fn global_shuffle(&self) -> &[GlobalShuffleEntry] {
        &self.global_shuffle
    }

    /// First file of the first folder that has files.
    pub fn first_playable(&self) -> Option<TrackRef> {
        self.folders
            .iter()
            .position(|f| !f.is_empty())
            .map(|folder| TrackRef::new(folder, 0))
    }

    /// Nearest folder after `from` (wrapping) that has files.
    ///
    /// Returns `from` itself when it is the only folder with files, `None`
    /// when the catalog is empty.
    pub fn next_folder_with_files(&self, from: usize) -> Option<usize> {
        let count = self.folder_count();
        (1..=count)
            .filter_map(|step| from.checked_add(step).and_then(|i| i.checked_rem(count)))
            .find(|&i| self.folder(i).is_some_and(|f| !f.is_empty()))
    }

    /// Nearest folder before `from` (wrapping) that has files.
    pub fn previous_folder_with_files(&self, from: usize) -> Option<usize> {
        let count = self.folder_count();
        (1..=count)
            .filter_map(|step| {
                // from + count - step stays non-negative for step <= count
                from.checked_add(count)
                    .and_then(|i| i.checked_sub(step))
                    .and_then(|i| i.checked_rem(count))
            })
            .find(|&i| self.folder(i).is_some_and(|f| !f.is_empty()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::shuffle::is_permutation;
    use crate::track::AudioFormat;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn files(folder: &str, names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|n| FileEntry::new(folder, n, AudioFormat::Mp3))
            .collect()
    }

    fn sample() -> Catalog {
        let mut rng = SmallRng::seed_from_u64(3);
        Catalog::assemble(
            vec![],
            vec![
                ("/A".into(), files("/A", &["a.mp3", "b.mp3"])),
                ("/B".into(), vec![]),
                ("/C".into(), files("/C", &["c.mp3"])),
            ],
            &mut rng,
        )
    }

    #[test]
    fn test_root_is_first() {
        let catalog = sample();
        assert_eq!(catalog.folder(ROOT_FOLDER).map(Folder::name), Some("/"));
        assert_eq!(catalog.folder_count(), 4);
    }

    #[test]
    fn test_counts() {
        let catalog = sample();
        assert_eq!(catalog.total_tracks(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.global_shuffle().len(), 3);
    }

    #[test]
    fn test_shuffle_orders_are_permutations() {
        let catalog = sample();
        for folder in catalog.folders() {
            assert_eq!(folder.shuffle_order().len(), folder.file_count());
            assert!(is_permutation(folder.shuffle_order()));
        }
        for entry in catalog.global_shuffle() {
            assert!(catalog.contains(*entry));
        }
    }

    #[test]
    fn test_first_playable_skips_empty_root() {
        assert_eq!(sample().first_playable(), Some(TrackRef::new(1, 0)));
    }

    #[test]
    fn test_folder_scans_wrap_and_skip_empty() {
        let catalog = sample();
        assert_eq!(catalog.next_folder_with_files(1), Some(3));
        assert_eq!(catalog.next_folder_with_files(3), Some(1));
        assert_eq!(catalog.previous_folder_with_files(3), Some(1));
        assert_eq!(catalog.previous_folder_with_files(1), Some(3));
    }

    #[test]
    fn test_single_nonempty_folder_finds_itself() {
        let mut rng = SmallRng::seed_from_u64(0);
        let catalog = Catalog::assemble(files("/", &["x.mp3"]), vec![], &mut rng);
        assert_eq!(catalog.next_folder_with_files(0), Some(0));
        assert_eq!(catalog.previous_folder_with_files(0), Some(0));
    }

    #[test]
    fn test_empty_catalog() {
        let mut rng = SmallRng::seed_from_u64(0);
        let catalog = Catalog::assemble(vec![], vec![("/A".into(), vec![])], &mut rng);
        assert!(catalog.is_empty());
        assert_eq!(catalog.first_playable(), None);
        assert_eq!(catalog.next_folder_with_files(0), None);
        assert!(catalog.global_shuffle().is_empty());
    }

    #[test]
    fn test_empty_catalog_has_root() {
        let catalog = Catalog::empty();
        assert_eq!(catalog.folder_count(), 1);
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_tracks(), 0);
    }

    #[test]
    fn test_display_name() {
        let catalog = sample();
        assert_eq!(catalog.folder(0).map(Folder::display_name), Some(""));
        assert_eq!(catalog.folder(1).map(Folder::display_name), Some("A"));
    }
}
