//! Event arbitration between the local buttons and the remote channel.
//!
//! One control cycle takes at most one event from each source. The local
//! event is applied first, then the remote one. Anything else still queued
//! locally waits for the next cycle; the remote slot only ever holds one.

use platform::InputDevice;

use crate::remote::{Command, RemoteSlot};

/// Events taken in one control cycle, in application order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlCycle {
    /// Event from the local buttons, if one was pending.
    pub local: Option<Command>,
    /// Event from the remote slot, if one was pending.
    pub remote: Option<Command>,
}

impl ControlCycle {
    /// Local first, then remote.
    pub fn commands(&self) -> impl Iterator<Item = Command> {
        self.local.into_iter().chain(self.remote)
    }

    /// `true` when neither source had anything.
    pub fn is_empty(&self) -> bool {
        self.local.is_none() && self.remote.is_none()
    }
}

/// Merges the input sources into one ordered stream.
#[derive(Debug, Clone, Copy)]
pub struct EventArbitrator {
    remote_enabled: bool,
}

impl EventArbitrator {
    /// `remote_enabled = false` leaves the slot untouched.
    pub const fn new(remote_enabled: bool) -> Self {
        Self { remote_enabled }
    }

    /// Take this cycle's events.
    pub fn poll<I: InputDevice>(&self, input: &mut I, remote: &RemoteSlot) -> ControlCycle {
        let local = input.poll_event().map(Command::Control);
        let remote = if self.remote_enabled { remote.take() } else { None };
        let cycle = ControlCycle { local, remote };
        if !cycle.is_empty() {
            tracing::debug!(
                local = cycle.local.is_some(),
                remote = cycle.remote.is_some(),
                "control cycle"
            );
        }
        cycle
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use platform::mocks::MockInput;
    use platform::ControlEvent;

    #[test]
    fn test_empty_cycle() {
        let slot = RemoteSlot::new();
        let mut input = MockInput::new();
        let cycle = EventArbitrator::new(true).poll(&mut input, &slot);
        assert!(cycle.is_empty());
        assert_eq!(cycle.commands().count(), 0);
    }

    #[test]
    fn test_local_before_remote() {
        let slot = RemoteSlot::new();
        slot.post(ControlEvent::VolumeUp.into());
        let mut input = MockInput::new();
        input.add_event(ControlEvent::Next).unwrap();
        let cycle = EventArbitrator::new(true).poll(&mut input, &slot);
        let order: Vec<Command> = cycle.commands().collect();
        assert_eq!(
            order,
            vec![
                Command::Control(ControlEvent::Next),
                Command::Control(ControlEvent::VolumeUp)
            ]
        );
    }

    #[test]
    fn test_one_local_event_per_cycle() {
        let slot = RemoteSlot::new();
        let mut input = MockInput::new();
        input.add_event(ControlEvent::Next).unwrap();
        input.add_event(ControlEvent::Previous).unwrap();
        let arbitrator = EventArbitrator::new(true);
        let first = arbitrator.poll(&mut input, &slot);
        assert_eq!(first.local, Some(Command::Control(ControlEvent::Next)));
        assert_eq!(input.pending(), 1);
        let second = arbitrator.poll(&mut input, &slot);
        assert_eq!(second.local, Some(Command::Control(ControlEvent::Previous)));
    }

    #[test]
    fn test_disabled_remote_is_not_consumed() {
        let slot = RemoteSlot::new();
        slot.post(ControlEvent::Next.into());
        let mut input = MockInput::new();
        let cycle = EventArbitrator::new(false).poll(&mut input, &slot);
        assert!(cycle.is_empty());
        assert!(slot.is_pending());
    }
}
