//! FileEntry - core data type representing a single playable file.

use alloc::string::String;

/// Audio container/codec format, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    /// MPEG Audio Layer III
    Mp3,
    /// Waveform Audio File Format
    Wav,
    /// Raw AAC (ADTS) stream
    Aac,
    /// AAC in an MPEG-4 container
    M4a,
}

impl AudioFormat {
    /// Upper-case tag shown next to the track on the status display.
    pub fn tag(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "MP3",
            AudioFormat::Wav => "WAV",
            AudioFormat::Aac => "AAC",
            AudioFormat::M4a => "M4A",
        }
    }
}

impl core::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single catalogued file.
///
/// The storage path is resolved once when the catalog is built, so loading a
/// track never re-derives it from the folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name as enumerated (no directory component).
    pub name: String,
    /// Absolute store path, e.g. `/Album/a.mp3` or `/a.mp3` for the root.
    pub path: String,
    /// Format implied by the extension.
    pub format: AudioFormat,
}

impl FileEntry {
    /// Create an entry inside the folder named `folder` (`/` or `/<dir>`).
    pub fn new(folder: &str, name: &str, format: AudioFormat) -> Self {
        let mut path = String::with_capacity(folder.len().saturating_add(name.len()).saturating_add(1));
        path.push_str(folder.trim_end_matches('/'));
        path.push('/');
        path.push_str(name);
        FileEntry {
            name: String::from(name),
            path,
            format,
        }
    }

}
