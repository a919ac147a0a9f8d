//! Playback control - traversal policies, navigation cursor, stall watchdog.
//!
//! Everything here is pure state: no I/O, no clocks. The firmware crate feeds
//! intents and samples in and turns the resulting [`navigation::Transition`]s
//! into loads on the audio transport.
#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]

extern crate alloc;

pub mod navigation;
pub mod policy;
pub mod transport;
pub mod volume;
pub mod watchdog;

pub use navigation::{NavigationCursor, NavigationError, Transition};
pub use policy::Policy;
pub use transport::{Transport, TransportError, TransportState};
pub use volume::VolumeControl;
pub use watchdog::{Sample, StallWatchdog};
