//! Audio transport abstraction
//!
//! The transport owns decoding and output. The control engine only tells it
//! what to play and asks how far along it is; a load is fire-and-forget and
//! its success is observed later through [`AudioTransport::elapsed_seconds`].

use crate::audio_types::VolumeLevel;

/// Decode/output engine driven by the player loop.
pub trait AudioTransport {
    /// Error type
    type Error: core::fmt::Debug;

    /// Start playing the file at `path` (a catalog path such as `/Album/a.mp3`).
    ///
    /// Returns once the request is issued, not once audio is flowing.
    fn load(&mut self, path: &str) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Toggle between paused and playing.
    fn pause_resume(&mut self) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Apply an output volume step.
    fn set_volume(
        &mut self,
        level: VolumeLevel,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Whole seconds played of the current track.
    fn elapsed_seconds(&mut self) -> u32;

    /// Total length of the current track in seconds, `0` when unknown.
    fn duration_seconds(&mut self) -> u32;
}
