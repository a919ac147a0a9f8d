//! Transport state machine.
//!
//! `Transport` mirrors what the audio collaborator is doing so the player can
//! decide whether the stall watchdog should sample. It is a pure state
//! machine: it never drives the collaborator itself.

/// Current transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    /// Nothing has been loaded yet, or the player halted.
    #[default]
    Stopped,
    /// A track was loaded and is expected to be producing audio.
    Playing,
    /// The user paused playback; elapsed time is expected to stand still.
    Paused,
}

/// Errors returned by `Transport` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Pause/resume needs a loaded track.
    #[error("nothing loaded")]
    NothingLoaded,
}

/// Tracks playing/paused across loads and toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transport {
    state: TransportState,
}

impl Transport {
    /// Create a transport in the `Stopped` state.
    pub const fn new() -> Self {
        Self {
            state: TransportState::Stopped,
        }
    }

    /// A track load was issued. Loading always resumes playback.
    ///
    /// Transitions:
    /// - `Stopped → Playing`
    /// - `Paused  → Playing`
    /// - `Playing → Playing`
    pub fn loaded(&mut self) {
        self.state = TransportState::Playing;
    }

    /// Flip between playing and paused.
    ///
    /// # Errors
    ///
    /// Returns `Err(TransportError::NothingLoaded)` in the `Stopped` state.
    pub fn toggle(&mut self) -> Result<TransportState, TransportError> {
        self.state = match self.state {
            TransportState::Stopped => return Err(TransportError::NothingLoaded),
            TransportState::Playing => TransportState::Paused,
            TransportState::Paused => TransportState::Playing,
        };
        Ok(self.state)
    }

    /// Stop for good (fatal storage error, empty catalog).
    pub fn halt(&mut self) {
        self.state = TransportState::Stopped;
    }

    /// Return the current [`TransportState`].
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// `true` only while playing; gates the stall watchdog.
    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stopped() {
        let t = Transport::new();
        assert_eq!(t.state(), TransportState::Stopped);
        assert!(!t.is_playing());
    }

    #[test]
    fn test_toggle_needs_a_load() {
        let mut t = Transport::new();
        assert_eq!(t.toggle(), Err(TransportError::NothingLoaded));
        assert_eq!(t.state(), TransportState::Stopped);
    }

    #[test]
    fn test_toggle_flips() {
        let mut t = Transport::new();
        t.loaded();
        assert_eq!(t.toggle(), Ok(TransportState::Paused));
        assert!(!t.is_playing());
        assert_eq!(t.toggle(), Ok(TransportState::Playing));
        assert!(t.is_playing());
    }

    #[test]
    fn test_load_resumes_from_pause() {
        let mut t = Transport::new();
        t.loaded();
        t.toggle().ok();
        t.loaded();
        assert_eq!(t.state(), TransportState::Playing);
    }

    #[test]
    fn test_halt_stops() {
        let mut t = Transport::new();
        t.loaded();
        t.halt();
        assert_eq!(t.state(), TransportState::Stopped);
        assert!(t.toggle().is_err());
    }
}
