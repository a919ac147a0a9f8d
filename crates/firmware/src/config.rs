//! Runtime player configuration.
//!
//! Defaults come from [`platform::config`]; a board or the emulator overrides
//! them with the fluent setters:
//!
//! ```
//! use firmware::config::PlayerConfig;
//!
//! let config = PlayerConfig::default()
//!     .watchdog_ms(500)
//!     .initial_volume(10)
//!     .remote(false);
//! assert_eq!(config.initial_volume.get(), 10);
//! ```

use embassy_time::Duration;
use platform::config::{CONTROL_POLL_MS, DISPLAY_REFRESH_MS, WATCHDOG_SAMPLE_MS};
use platform::VolumeLevel;

/// Cadences and start-up values for [`crate::player::Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Minimum interval between control cycles.
    pub control_poll: Duration,
    /// Minimum interval between display refreshes.
    pub display_refresh: Duration,
    /// Minimum interval between stall-watchdog samples.
    pub watchdog_sample: Duration,
    /// Volume applied at boot.
    pub initial_volume: VolumeLevel,
    /// Whether commands from the remote slot are consumed.
    pub remote_enabled: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            control_poll: Duration::from_millis(CONTROL_POLL_MS),
            display_refresh: Duration::from_millis(DISPLAY_REFRESH_MS),
            watchdog_sample: Duration::from_millis(WATCHDOG_SAMPLE_MS),
            initial_volume: VolumeLevel::default(),
            remote_enabled: true,
        }
    }
}

impl PlayerConfig {
    /// Set the control-cycle interval in milliseconds.
    pub fn control_poll_ms(mut self, ms: u64) -> Self {
        self.control_poll = Duration::from_millis(ms);
        self
    }

    /// Set the display refresh interval in milliseconds.
    pub fn display_refresh_ms(mut self, ms: u64) -> Self {
        self.display_refresh = Duration::from_millis(ms);
        self
    }

    /// Set the watchdog sampling interval in milliseconds.
    pub fn watchdog_ms(mut self, ms: u64) -> Self {
        self.watchdog_sample = Duration::from_millis(ms);
        self
    }

    /// Set the boot volume; values above the maximum are clamped.
    pub fn initial_volume(mut self, level: u8) -> Self {
        self.initial_volume = VolumeLevel::new(level);
        self
    }

    /// Enable or disable the remote channel.
    pub fn remote(mut self, enabled: bool) -> Self {
        self.remote_enabled = enabled;
        self
    }
}
