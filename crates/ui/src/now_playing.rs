//! Now-playing screen state - position, volume, format tag, folder, name, times.
//!
//! The player fills this in; the display collaborator reads the labels.
//! Text fields are fixed-capacity and truncated on a character boundary when
//! a name is longer than the field.

use core::fmt::Write;

use crate::marquee::Marquee;
use crate::time::{format_seconds, TimeString};

/// Label buffer for short fields such as `12 of 340` or `V:07`.
pub type Label = heapless::String<24>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::NowPlayingState;

    fn sample() -> NowPlayingState {
        let mut state = NowPlayingState::default();
        state.set_track("Album", "01 - Intro.mp3", "MP3", 0, 12);
        state
    }

    #[test]
    fn test_now_playing_state_default() {
        let state = NowPlayingState::default();
        assert!(!state.playing);
        assert_eq!(state.volume, 1);
        assert_eq!(state.elapsed_secs, 0);
    }

    #[test]
    fn test_position_label_is_one_based() {
        assert_eq!(sample().position_label().as_str(), "1 of 12");
    }

    #[test]
    fn test_volume_label_two_digits() {
        let mut state = sample();
        assert_eq!(state.volume_label().as_str(), "V:01");
        state.set_volume(21);
        assert_eq!(state.volume_label().as_str(), "V:21");
    }

    #[test]
    fn test_root_folder_label() {
        let mut state = sample();
        state.set_track("", "a.mp3", "MP3", 0, 1);
        assert_eq!(state.folder_label(), "/");
    }

    #[test]
    fn test_time_labels() {
        let mut state = sample();
        state.set_times(65, 3_700);
        assert_eq!(state.elapsed_label().as_str(), "1:05");
        assert_eq!(state.duration_label().as_str(), "1:01:40");
    }

    #[test]
    fn test_new_track_clears_both_times() {
        let mut state = sample();
        state.set_times(95, 240);
        state.set_track("Album", "02 - Next.mp3", "MP3", 1, 12);
        assert_eq!(state.elapsed_label().as_str(), "0:00");
        assert_eq!(state.duration_label().as_str(), "0:00");
        assert!(!state.progress_visible());
    }

    #[test]
    fn test_now_playing_progress_ratio() {
        let mut state = sample();
        state.set_times(50, 100);
        let ratio = state.progress();
        assert!((ratio - 0.5_f32).abs() < 1e-6, "expected ~0.5, got {ratio}");
        assert!(state.progress_visible());
    }

    #[test]
    fn test_now_playing_progress_zero_duration() {
        let mut state = sample();
        state.set_times(10, 0);
        assert_eq!(state.progress(), 0.0_f32);
        assert!(!state.progress_visible());
    }

    #[test]
    fn test_progress_capped_at_one() {
        let mut state = sample();
        state.set_times(120, 100);
        assert_eq!(state.progress(), 1.0_f32);
    }

    #[test]
    fn test_long_names_truncate() {
        let mut state = NowPlayingState::default();
        let long = "x".repeat(300);
        state.set_track(&long, &long, "MP3", 0, 1);
        assert_eq!(state.file_name.len(), state.file_name.capacity());
        assert_eq!(state.folder.len(), state.folder.capacity());
    }

    #[test]
    fn test_new_track_rewinds_marquee() {
        let mut state = NowPlayingState::default();
        state.set_track("A", &"n".repeat(40), "WAV", 0, 1);
        state.refresh_tick();
        assert_ne!(state.name_x(), 0);
        state.set_track("A", &"n".repeat(40), "WAV", 1, 2);
        assert_eq!(state.name_x(), 0);
    }
}

/// State for the now-playing screen.
#[derive(Debug, Clone)]
pub struct NowPlayingState {
    /// Whether audio is currently playing (vs. paused).
    pub playing: bool,
    /// Transport volume step.
    pub volume: u8,
    /// Seconds played of the current track.
    pub elapsed_secs: u32,
    /// Total track duration in seconds (0 when unknown).
    pub duration_secs: u32,
    /// Zero-based file index inside its folder.
    pub position: usize,
    /// Number of files in the current folder.
    pub total: usize,
    /// Folder name without the leading `/`; empty for the root.
    pub folder: heapless::String<64>,
    /// File name as enumerated.
    pub file_name: heapless::String<128>,
    /// Upper-case format tag such as `MP3`.
    pub format_tag: heapless::String<4>,
    /// Short label of the active traversal policy.
    pub policy: &'static str,
    marquee: Marquee,
}

impl NowPlayingState {
    /// Show a newly loaded track and rewind the name scroller.
    ///
    /// Both times read zero until the next refresh reports the new track.
    pub fn set_track(&mut self, folder: &str, file_name: &str, format_tag: &str, position: usize, total: usize) {
        self.folder = truncated(folder);
        self.file_name = truncated(file_name);
        self.format_tag = truncated(format_tag);
        self.position = position;
        self.total = total;
        self.elapsed_secs = 0;
        self.duration_secs = 0;
        self.marquee.reset(self.file_name.chars().count());
    }

    /// Set whether audio is playing.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Set the volume step shown in the header.
    pub fn set_volume(&mut self, v: u8) {
        self.volume = v;
    }

    /// Set elapsed and total seconds.
    pub fn set_times(&mut self, elapsed_secs: u32, duration_secs: u32) {
        self.elapsed_secs = elapsed_secs;
        self.duration_secs = duration_secs;
    }

    /// Set the policy label.
    pub fn set_policy(&mut self, label: &'static str) {
        self.policy = label;
    }

    /// Advance per-refresh animation (the name marquee).
    pub fn refresh_tick(&mut self) {
        self.marquee.tick();
    }

    /// X offset for drawing the file name this refresh.
    pub fn name_x(&self) -> i32 {
        self.marquee.x()
    }

    /// `3 of 12`, one-based.
    pub fn position_label(&self) -> Label {
        let mut out = Label::new();
        let _ = write!(out, "{} of {}", self.position.saturating_add(1), self.total);
        out
    }

    /// `V:07`
    pub fn volume_label(&self) -> Label {
        let mut out = Label::new();
        let _ = write!(out, "V:{:02}", self.volume);
        out
    }

    /// Folder name, `/` for the root.
    pub fn folder_label(&self) -> &str {
        if self.folder.is_empty() {
            "/"
        } else {
            self.folder.as_str()
        }
    }

    /// Elapsed time string.
    pub fn elapsed_label(&self) -> TimeString {
        format_seconds(self.elapsed_secs)
    }

    /// Total time string.
    pub fn duration_label(&self) -> TimeString {
        format_seconds(self.duration_secs)
    }

    /// The progress bar is drawn only once both times are known.
    pub fn progress_visible(&self) -> bool {
        self.elapsed_secs != 0 && self.duration_secs != 0
    }

    /// Return a `0.0..=1.0` progress ratio.
    ///
    /// Returns `0.0` when `duration_secs` is zero.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        (self.elapsed_secs as f32 / self.duration_secs as f32).min(1.0)
    }
}

impl Default for NowPlayingState {
    fn default() -> Self {
        NowPlayingState {
            playing: false,
            volume: 1,
            elapsed_secs: 0,
            duration_secs: 0,
            position: 0,
            total: 0,
            folder: heapless::String::new(),
            file_name: heapless::String::new(),
            format_tag: heapless::String::new(),
            policy: "SEQ",
            marquee: Marquee::default(),
        }
    }
}

/// Copy as many whole characters of `s` as fit into `N` bytes.
fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
