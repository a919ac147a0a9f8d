//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests. Every mock records what it was
//! asked to do so tests can assert on the side effects.

#![cfg(any(test, feature = "std"))]

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// In-memory media store.
///
/// Directories are registered with their entries in enumeration order; any
/// other path, or a path marked with [`MockStorage::fail`], reports an error.
#[derive(Default)]
pub struct MockStorage {
    dirs: BTreeMap<String, Vec<DirEntry>>,
    failing: Vec<String>,
    opened: Vec<String>,
}

impl MockStorage {
    /// Create an empty store with no directories (the root is missing too).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` with the given children.
    #[must_use]
    pub fn with_dir(mut self, path: &str, entries: Vec<DirEntry>) -> Self {
        self.dirs.insert(String::from(path), entries);
        self
    }

    /// Make `path` fail to open even if it is registered.
    #[must_use]
    pub fn fail(mut self, path: &str) -> Self {
        self.failing.push(String::from(path));
        self
    }

    /// Paths passed to `open_directory`, in call order.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }
}

impl Storage for MockStorage {
    type Error = StorageError;

    async fn open_directory(&mut self, path: &str) -> Result<Vec<DirEntry>, Self::Error> {
        self.opened.push(String::from(path));
        if self.failing.iter().any(|p| p == path) {
            return Err(StorageError::Io);
        }
        self.dirs.get(path).cloned().ok_or(StorageError::NotFound)
    }
}

/// Mock input device
pub struct MockInput {
    events: heapless::Deque<ControlEvent, 16>,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: heapless::Deque::new(),
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: ControlEvent) -> Result<(), ControlEvent> {
        self.events.push_back(event)
    }

    /// Number of events not yet polled.
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for MockInput {
    fn poll_event(&mut self) -> Option<ControlEvent> {
        self.events.pop_front()
    }
}

/// Mock audio transport
///
/// Elapsed and duration are whatever the test last set; loads, toggles and
/// volume changes are recorded.
pub struct MockAudio {
    loads: Vec<String>,
    volume: Option<VolumeLevel>,
    toggles: usize,
    elapsed: u32,
    duration: u32,
}

impl MockAudio {
    /// Create new mock audio transport
    pub fn new() -> Self {
        Self {
            loads: Vec::new(),
            volume: None,
            toggles: 0,
            elapsed: 0,
            duration: 0,
        }
    }

    /// Paths passed to `load`, in call order.
    pub fn loads(&self) -> &[String] {
        &self.loads
    }

    /// Most recent load, if any.
    pub fn last_load(&self) -> Option<&str> {
        self.loads.last().map(String::as_str)
    }

    /// Last volume applied, `None` before the first `set_volume`.
    pub fn volume(&self) -> Option<VolumeLevel> {
        self.volume
    }

    /// Number of pause/resume toggles.
    pub fn toggles(&self) -> usize {
        self.toggles
    }

    /// Set the value reported by `elapsed_seconds`.
    pub fn set_elapsed(&mut self, secs: u32) {
        self.elapsed = secs;
    }

    /// Set the value reported by `duration_seconds`.
    pub fn set_duration(&mut self, secs: u32) {
        self.duration = secs;
    }
}

impl Default for MockAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioTransport for MockAudio {
    type Error = core::convert::Infallible;

    async fn load(&mut self, path: &str) -> Result<(), Self::Error> {
        self.loads.push(String::from(path));
        self.elapsed = 0;
        Ok(())
    }

    #[allow(clippy::arithmetic_side_effects)] // Mock counter; overflow not a concern in tests
    async fn pause_resume(&mut self) -> Result<(), Self::Error> {
        self.toggles += 1;
        Ok(())
    }

    async fn set_volume(&mut self, level: VolumeLevel) -> Result<(), Self::Error> {
        self.volume = Some(level);
        Ok(())
    }

    fn elapsed_seconds(&mut self) -> u32 {
        self.elapsed
    }

    fn duration_seconds(&mut self) -> u32 {
        self.duration
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_storage_records_opens() {
        let mut storage = MockStorage::new().with_dir("/", vec![DirEntry::dir("A")]);
        assert_eq!(storage.open_directory("/").await.unwrap().len(), 1);
        assert_eq!(storage.open_directory("/A").await, Err(StorageError::NotFound));
        assert_eq!(storage.opened(), ["/", "/A"]);
    }

    #[tokio::test]
    async fn test_mock_storage_forced_failure() {
        let mut storage = MockStorage::new().with_dir("/", vec![]).fail("/");
        assert_eq!(storage.open_directory("/").await, Err(StorageError::Io));
    }

    #[tokio::test]
    async fn test_mock_audio_load_resets_elapsed() {
        let mut audio = MockAudio::new();
        audio.set_elapsed(42);
        audio.load("/a.mp3").await.unwrap();
        assert_eq!(audio.elapsed_seconds(), 0);
        assert_eq!(audio.last_load(), Some("/a.mp3"));
    }

    #[test]
    fn test_mock_input_fifo() {
        let mut input = MockInput::new();
        input.add_event(ControlEvent::Next).unwrap();
        input.add_event(ControlEvent::VolumeUp).unwrap();
        assert_eq!(input.poll_event(), Some(ControlEvent::Next));
        assert_eq!(input.poll_event(), Some(ControlEvent::VolumeUp));
        assert_eq!(input.poll_event(), None);
    }
}
