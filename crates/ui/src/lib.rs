//! Status display model - screen ids, now-playing labels, time strings.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.
//! Rendering to pixels is the display collaborator's job; everything here is
//! text and numbers it can lay out.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod marquee;
pub mod now_playing;
pub mod screen;
pub mod time;

pub use now_playing::NowPlayingState;
pub use screen::Screen;
pub use time::format_seconds;
