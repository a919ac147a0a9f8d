//! Status display collaborator.
//!
//! The player hands the display a [`Screen`] plus the now-playing view model
//! at the display cadence. How that turns into pixels (e-ink panel, OLED,
//! console line) is up to the implementation.

use ui::{NowPlayingState, Screen};

/// Renders the player's status.
pub trait StatusDisplay {
    /// Draw `screen`. `state` is only meaningful on [`Screen::NowPlaying`].
    fn show(&mut self, screen: Screen, state: &NowPlayingState);
}

pub use recording::{RecordedFrame, RecordingDisplay};

mod recording {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{NowPlayingState, Screen, StatusDisplay};

    /// One call to [`StatusDisplay::show`], reduced to what tests assert on.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedFrame {
        /// Screen requested.
        pub screen: Screen,
        /// Folder label at the time.
        pub folder: String,
        /// File name at the time.
        pub file_name: String,
        /// Policy label at the time.
        pub policy: &'static str,
        /// Volume step at the time.
        pub volume: u8,
        /// Playing flag at the time.
        pub playing: bool,
    }

    /// Display that keeps every frame it is asked to draw.
    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        frames: Vec<RecordedFrame>,
    }

    impl RecordingDisplay {
        /// Empty recorder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Every frame, oldest first.
        pub fn frames(&self) -> &[RecordedFrame] {
            &self.frames
        }

        /// Most recent frame.
        pub fn last(&self) -> Option<&RecordedFrame> {
            self.frames.last()
        }
    }

    impl StatusDisplay for RecordingDisplay {
        fn show(&mut self, screen: Screen, state: &NowPlayingState) {
            self.frames.push(RecordedFrame {
                screen,
                folder: String::from(state.folder_label()),
                file_name: String::from(state.file_name.as_str()),
                policy: state.policy,
                volume: state.volume,
                playing: state.playing,
            });
        }
    }
}
