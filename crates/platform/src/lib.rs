//! Collaborator abstractions for the folder-player DAP
//!
//! This crate defines the seams between the control engine and everything it
//! drives or observes, so the engine can be developed and tested without
//! physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: arbitrator, player loop)
//!         ↓
//! Feature Layers (library, playback, ui)
//!         ↓
//! Platform (this crate - collaborator traits and newtypes)
//!         ↓
//! Hardware / host backends (SD card, codec, buttons, std::fs)
//! ```
//!
//! # Collaborators
//!
//! - [`Storage`] - directory enumeration of the media store
//! - [`AudioTransport`] - decode and output, fire-and-forget loads
//! - [`InputDevice`] - debounced control events from local buttons
//!
//! # Features
//!
//! - `std`: `std::fs` storage backend and the collaborator mocks
//! - `defmt`: Enable defmt derives on event and newtype values
//!
//! # Example
//!
//! ```no_run
//! use platform::{ControlEvent, InputDevice};
//!
//! fn drain<I: InputDevice>(input: &mut I) -> usize {
//!     let mut seen = 0;
//!     while input.poll_event().is_some() {
//!         seen += 1;
//!     }
//!     seen
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded poll loop, Send bounds not needed

extern crate alloc;

pub mod audio;
pub mod audio_types;
pub mod config;
pub mod input;
pub mod storage;

#[cfg(any(test, feature = "std"))]
pub mod storage_local;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use audio::AudioTransport;
pub use audio_types::{OutOfRangeError, VolumeLevel};
pub use input::{ControlEvent, InputDevice};
pub use storage::{DirEntry, Storage, StorageError};
