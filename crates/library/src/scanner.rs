//! Scanner - decides which enumerated entries make it into the catalog.

use platform::config::{HIDDEN_MARKER, SUPPORTED_EXTENSIONS};
use platform::DirEntry;

use crate::track::{AudioFormat, FileEntry};

/// Format for each entry of [`SUPPORTED_EXTENSIONS`], position for position.
const FORMATS: [AudioFormat; SUPPORTED_EXTENSIONS.len()] =
    [AudioFormat::Mp3, AudioFormat::Wav, AudioFormat::Aac, AudioFormat::M4a];

/// Stateless helper for hidden-entry and extension filtering.
pub struct Scanner;

impl Scanner {
    /// Returns `true` when `ext` is a supported audio file extension.
    ///
    /// The comparison is **case-insensitive** and does not allocate.
    ///
    /// Supported extensions: `mp3`, `wav`, `aac`, `m4a`.
    pub fn is_supported_extension(ext: &str) -> bool {
        Self::format_for_extension(ext).is_some()
    }

    /// Derive an [`AudioFormat`] from a file extension, or return `None`.
    pub fn format_for_extension(ext: &str) -> Option<AudioFormat> {
        SUPPORTED_EXTENSIONS
            .iter()
            .zip(FORMATS)
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|(_, format)| format)
    }

    /// Text after the last `.`, or `None` when there is no extension.
    pub fn extension_of(name: &str) -> Option<&str> {
        match name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Hidden entries (dot-files, `.Trashes`, `._foo.mp3`) are never catalogued.
    pub fn is_hidden(name: &str) -> bool {
        name.starts_with(HIDDEN_MARKER)
    }

    /// `true` for a directory that becomes a catalog folder.
    pub fn accepts_folder(entry: &DirEntry) -> bool {
        entry.is_dir && !Self::is_hidden(&entry.name)
    }

    /// Turn an enumerated child of `folder` into a catalog entry, if eligible.
    pub fn file_entry(folder: &str, entry: &DirEntry) -> Option<FileEntry> {
        if entry.is_dir || Self::is_hidden(&entry.name) {
            return None;
        }
        let format = Self::extension_of(&entry.name).and_then(Self::format_for_extension)?;
        Some(FileEntry::new(folder, &entry.name, format))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_recognises_m4a_extension() {
        assert!(Scanner::is_supported_extension("m4a"));
    }

    #[test]
    fn test_scanner_recognises_mp3() {
        assert!(Scanner::is_supported_extension("mp3"));
    }

    #[test]
    fn test_every_allowed_extension_has_its_format() {
        for ext in SUPPORTED_EXTENSIONS {
            let format = Scanner::format_for_extension(ext).unwrap();
            assert!(format.tag().eq_ignore_ascii_case(ext), "{ext} -> {format}");
        }
        assert_eq!(Scanner::format_for_extension("M4A"), Some(AudioFormat::M4a));
        assert_eq!(Scanner::format_for_extension("ogg"), None);
    }

    #[test]
    fn test_scanner_rejects_flac() {
        assert!(!Scanner::is_supported_extension("flac"));
    }

    #[test]
    fn test_scanner_rejects_empty() {
        assert!(!Scanner::is_supported_extension(""));
    }

    #[test]
    fn test_scanner_extension_case_insensitive() {
        assert!(Scanner::is_supported_extension("AAC"));
        assert!(Scanner::is_supported_extension("Mp3"));
        assert!(Scanner::is_supported_extension("WAV"));
    }

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(Scanner::extension_of("a.b.wav"), Some("wav"));
        assert_eq!(Scanner::extension_of("noext"), None);
        assert_eq!(Scanner::extension_of("trailing."), None);
    }

    #[test]
    fn test_hidden_file_skipped() {
        assert!(Scanner::file_entry("/", &DirEntry::file("._a.mp3")).is_none());
        assert!(!Scanner::accepts_folder(&DirEntry::dir(".Spotlight")));
    }

    #[test]
    fn test_directory_is_not_a_file_entry() {
        assert!(Scanner::file_entry("/", &DirEntry::dir("x.mp3")).is_none());
    }

    #[test]
    fn test_file_entry_built_with_format() {
        let entry = Scanner::file_entry("/A", &DirEntry::file("Song.MP3")).expect("eligible");
        assert_eq!(entry.path, "/A/Song.MP3");
        assert_eq!(entry.format, AudioFormat::Mp3);
    }
}
