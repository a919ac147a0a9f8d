//! Screen identifier enum - every top-level screen the status display shows.

/// What the status display is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Catalog is being built.
    #[default]
    Booting,
    /// Main playback view.
    NowPlaying,
    /// The store has no playable file.
    NoMedia,
    /// The store could not be opened; the player has halted.
    StorageError,
}

impl Screen {
    /// Single-line message for the non-playback screens.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Screen::Booting => Some("Reading card..."),
            Screen::NowPlaying => None,
            Screen::NoMedia => Some("No playable media"),
            Screen::StorageError => Some("Storage error"),
        }
    }

    /// `true` on screens the player never leaves.
    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::NoMedia | Screen::StorageError)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::Screen;

    #[test]
    fn test_default_is_booting() {
        assert_eq!(Screen::default(), Screen::Booting);
    }

    #[test]
    fn test_now_playing_has_no_message() {
        assert_eq!(Screen::NowPlaying.message(), None);
        assert_eq!(Screen::NoMedia.message(), Some("No playable media"));
    }

    #[test]
    fn test_terminal_screens() {
        assert!(Screen::StorageError.is_terminal());
        assert!(Screen::NoMedia.is_terminal());
        assert!(!Screen::NowPlaying.is_terminal());
        assert!(!Screen::Booting.is_terminal());
    }

    #[test]
    fn test_screen_is_copy() {
        let a = Screen::NowPlaying;
        let b = a;
        assert_eq!(a, b);
    }
}
