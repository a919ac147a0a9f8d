//! Input device abstraction

/// Local control surface (debounced buttons).
///
/// Edge detection and debouncing belong to the implementation; the player
/// only ever sees one intent per press.
pub trait InputDevice {
    /// Poll for event (non-blocking)
    fn poll_event(&mut self) -> Option<ControlEvent>;
}

/// Playback-control intents shared by every input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// Next track under the active policy
    Next,
    /// Previous track under the active policy
    Previous,
    /// Toggle pause
    PlayPause,
    /// One volume step up
    VolumeUp,
    /// One volume step down
    VolumeDown,
    /// Advance to the next traversal policy
    CyclePolicy,
    /// First file of the next folder with files
    NextFolder,
    /// First file of the previous folder with files
    PreviousFolder,
}

impl ControlEvent {
    /// Stable lower-case name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlEvent::Next => "next",
            ControlEvent::Previous => "previous",
            ControlEvent::PlayPause => "play-pause",
            ControlEvent::VolumeUp => "volume-up",
            ControlEvent::VolumeDown => "volume-down",
            ControlEvent::CyclePolicy => "cycle-policy",
            ControlEvent::NextFolder => "next-folder",
            ControlEvent::PreviousFolder => "previous-folder",
        }
    }

}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let every = [
            ControlEvent::Next,
            ControlEvent::Previous,
            ControlEvent::PlayPause,
            ControlEvent::VolumeUp,
            ControlEvent::VolumeDown,
            ControlEvent::CyclePolicy,
            ControlEvent::NextFolder,
            ControlEvent::PreviousFolder,
        ];
        let mut names: Vec<&str> = every.iter().map(|e| e.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), every.len());
    }
}
