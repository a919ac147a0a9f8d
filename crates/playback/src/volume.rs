//! Volume stepping.
//!
//! Each up/down intent moves the level one step within
//! [`VolumeLevel::MIN`]..=[`VolumeLevel::MAX`]; the result is always sent to
//! the transport, even when clamped, so a drifting collaborator is corrected.

use platform::audio_types::VolumeLevel;

/// Current output level as last requested by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeControl {
    level: VolumeLevel,
}

impl VolumeControl {
    /// Start at `initial`.
    pub fn new(initial: VolumeLevel) -> Self {
        Self { level: initial }
    }

    /// Current level.
    pub fn level(&self) -> VolumeLevel {
        self.level
    }

    /// One step up, saturating at the top.
    pub fn up(&mut self) -> VolumeLevel {
        self.level = self.level.louder();
        self.level
    }

    /// One step down, saturating at the bottom.
    pub fn down(&mut self) -> VolumeLevel {
        self.level = self.level.quieter();
        self.level
    }
}
