//! Application configuration and constants
//!
//! Central compile-time values shared by every crate. Runtime knobs (cadence
//! overrides, the remote channel on/off) live in the firmware crate's
//! `PlayerConfig`, which takes its defaults from here.

/// The application name
pub const APP_NAME: &str = "Folder Player";

// ---- cadences ----

/// Minimum interval between two local-input samples.
pub const CONTROL_POLL_MS: u64 = 200;

/// Minimum interval between two status-display refreshes.
pub const DISPLAY_REFRESH_MS: u64 = 250;

/// Minimum interval between two stall-watchdog samples.
pub const WATCHDOG_SAMPLE_MS: u64 = 1_000;

// ---- volume ----

/// Quietest transport volume step.
pub const VOLUME_MIN: u8 = 0;

/// Loudest transport volume step.
pub const VOLUME_MAX: u8 = 21;

/// Volume applied at boot.
pub const VOLUME_DEFAULT: u8 = 1;

// ---- media store ----

/// Path of the media store root.
pub const STORAGE_ROOT: &str = "/";

/// Entries whose name starts with this marker are never catalogued.
pub const HIDDEN_MARKER: char = '.';

/// File extensions (lower-case, without the dot) that the catalog accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["mp3", "wav", "aac", "m4a"];

/// Title printed when the player starts.
pub const fn app_title() -> &'static str {
    APP_NAME
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn test_default_volume_inside_range() {
        assert!((VOLUME_MIN..=VOLUME_MAX).contains(&VOLUME_DEFAULT));
    }

    #[test]
    fn test_extensions_are_lower_case() {
        for ext in SUPPORTED_EXTENSIONS {
            assert_eq!(ext, ext.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_app_title() {
        assert_eq!(app_title(), "Folder Player");
    }
}
