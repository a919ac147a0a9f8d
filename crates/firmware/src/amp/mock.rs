//! Mock amplifier for host-side testing
//!
//! Implements [`AmpControl`] without any hardware dependency and keeps the
//! full enable/disable history so tests can check the mute bracket around
//! every load.

use alloc::vec::Vec;

use super::AmpControl;

/// One recorded amplifier transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmpEvent {
    /// `enable` was called.
    Enabled,
    /// `disable` was called.
    Disabled,
}

/// Mock amplifier - records all calls for test assertions.
#[derive(Debug, Default)]
pub struct MockAmp {
    enabled: bool,
    history: Vec<AmpEvent>,
}

impl MockAmp {
    /// Create a new mock amplifier. Starts in the disabled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in order.
    pub fn history(&self) -> &[AmpEvent] {
        &self.history
    }

    /// Number of `enable` calls.
    pub fn enable_count(&self) -> usize {
        self.history.iter().filter(|e| **e == AmpEvent::Enabled).count()
    }

    /// Number of `disable` calls.
    pub fn disable_count(&self) -> usize {
        self.history.iter().filter(|e| **e == AmpEvent::Disabled).count()
    }
}

impl AmpControl for MockAmp {
    type Error = core::convert::Infallible;

    async fn enable(&mut self) -> Result<(), Self::Error> {
        self.enabled = true;
        self.history.push(AmpEvent::Enabled);
        Ok(())
    }

    async fn disable(&mut self) -> Result<(), Self::Error> {
        self.enabled = false;
        self.history.push(AmpEvent::Disabled);
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_state() {
        let amp = MockAmp::new();
        assert!(!amp.is_enabled(), "amp should start disabled");
        assert!(amp.history().is_empty());
    }

    #[tokio::test]
    async fn test_history_is_ordered() {
        let mut amp = MockAmp::new();
        amp.disable().await.unwrap();
        amp.enable().await.unwrap();
        assert!(amp.is_enabled());
        assert_eq!(amp.history(), [AmpEvent::Disabled, AmpEvent::Enabled]);
        assert_eq!(amp.enable_count(), 1);
        assert_eq!(amp.disable_count(), 1);
    }
}
