//! Folder Player firmware
//!
//! Application layer of a standalone folder-based audio player: a cooperative
//! control loop that builds the media catalog once, then arbitrates local and
//! remote controls, watches playback for stalls and refreshes the status
//! display.
//!
//! # Architecture
//!
//! ```text
//! Application Layer (player, arbitrator, remote, main.rs)
//!         ↓
//! Engine crates (library, playback, ui)
//!         ↓
//! Collaborator traits (platform, amp, display)
//!         ↓
//! Board support (SD card, codec, buttons, panel) or desktop emulator
//! ```
//!
//! # Features
//!
//! - `emulator` - Desktop binary: `std::fs` media store, stdin controls
//! - `std` - Enable standard library (host storage and platform mocks)
//! - `defmt` - `defmt::Format` derives on platform types
//!
//! # Examples
//!
//! ```bash
//! MUSIC_PATH=~/Music cargo run -p firmware --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]

extern crate alloc;

pub mod amp;
pub mod arbitrator;
pub mod config;
pub mod display;
pub mod gate;
pub mod input;
pub mod player;
pub mod remote;

// Re-export key types
pub use amp::{AmpControl, FixedAmp, MockAmp};
pub use arbitrator::{ControlCycle, EventArbitrator};
pub use config::PlayerConfig;
pub use display::{RecordingDisplay, StatusDisplay};
pub use input::{QueuedInput, BUTTON_CHANNEL};
pub use player::{BootError, Peripherals, Player};
pub use remote::{Command, RemoteSlot, REMOTE_SLOT};
