//! Audio domain newtypes for compile-time safety.
//!
//! - `VolumeLevel`: the transport's discrete volume step, clamped to
//!   [`VolumeLevel::MIN`]..=[`VolumeLevel::MAX`]

use crate::config;

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value {value} outside {min}..={max}")]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

// ── VolumeLevel ──────────────────────────────────────────────────────────────

/// Output volume step understood by the audio transport.
///
/// Wraps a `u8` with the invariant `MIN <= value <= MAX`.
/// Construct with [`VolumeLevel::new`] (clamping) or
/// [`VolumeLevel::try_new`] (fallible, strict).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    /// Quietest step.
    pub const MIN: u8 = config::VOLUME_MIN;

    /// Loudest step.
    pub const MAX: u8 = config::VOLUME_MAX;

    /// Create a `VolumeLevel`, clamping values above [`Self::MAX`].
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Create a `VolumeLevel`, returning an error if `value` is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value > MAX`.
    pub fn try_new(value: u8) -> Result<Self, OutOfRangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OutOfRangeError {
                value: u32::from(value),
                min: u32::from(Self::MIN),
                max: u32::from(Self::MAX),
            })
        }
    }

    /// Return the inner step value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// One step louder, saturating at [`Self::MAX`].
    #[must_use]
    pub fn louder(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One step quieter, saturating at [`Self::MIN`].
    #[must_use]
    pub fn quieter(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(config::VOLUME_DEFAULT)
    }
}

impl core::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
