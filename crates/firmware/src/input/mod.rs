//! Local button input.
//!
//! Button sampling (edge detection, debounce) runs wherever the board wires
//! it: a GPIO task on hardware, a keyboard reader in the emulator. Either way
//! it pushes intents into a static [`Channel`]; [`QueuedInput`] is the
//! consumer side and implements [`platform::InputDevice`].
//!
//! # Overflow handling
//!
//! [`try_send_event`] never blocks. If the control loop stalls and the
//! channel reaches [`CHANNEL_DEPTH`], further presses are dropped rather than
//! holding up the sampling task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};

pub use platform::{ControlEvent, InputDevice};

/// Depth of the static event channel.
pub const CHANNEL_DEPTH: usize = 8;

/// Channel type shared between a button sampler and [`QueuedInput`].
pub type ButtonChannel = Channel<CriticalSectionRawMutex, ControlEvent, CHANNEL_DEPTH>;

/// Global event channel between the button sampler and the control loop.
pub static BUTTON_CHANNEL: ButtonChannel = Channel::new();

/// Consumer end of a [`ButtonChannel`].
pub struct QueuedInput<'a> {
    rx: Receiver<'a, CriticalSectionRawMutex, ControlEvent, CHANNEL_DEPTH>,
}

impl QueuedInput<'static> {
    /// Input backed by the global [`BUTTON_CHANNEL`].
    pub fn global() -> Self {
        Self::new(&BUTTON_CHANNEL)
    }
}

impl<'a> QueuedInput<'a> {
    /// Input backed by `channel`.
    pub fn new(channel: &'a ButtonChannel) -> Self {
        Self {
            rx: channel.receiver(),
        }
    }
}

impl InputDevice for QueuedInput<'_> {
    fn poll_event(&mut self) -> Option<ControlEvent> {
        self.rx.try_receive().ok() // Empty maps to None; the channel never closes
    }
}

/// Attempt to queue `event` without blocking.
///
/// Returns `true` if the event was enqueued, `false` if the channel was full
/// and the event was dropped.
pub fn try_send_event(channel: &ButtonChannel, event: ControlEvent) -> bool {
    match channel.try_send(event) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!(event = event.as_str(), "button queue full, press dropped");
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let channel = ButtonChannel::new();
        let mut input = QueuedInput::new(&channel);
        assert!(try_send_event(&channel, ControlEvent::Next));
        assert!(try_send_event(&channel, ControlEvent::PlayPause));
        assert_eq!(input.poll_event(), Some(ControlEvent::Next));
        assert_eq!(input.poll_event(), Some(ControlEvent::PlayPause));
        assert_eq!(input.poll_event(), None);
    }

    #[test]
    fn test_full_channel_drops() {
        let channel = ButtonChannel::new();
        for _ in 0..CHANNEL_DEPTH {
            assert!(try_send_event(&channel, ControlEvent::VolumeUp));
        }
        assert!(!try_send_event(&channel, ControlEvent::VolumeDown));
    }
}
