//! Media catalog - storage enumeration, extension filtering, shuffle orders.
//!
//! # Modules
//!
//! - [`track`] - `FileEntry` record and `AudioFormat` enum
//! - [`scanner`] - extension allow-list and hidden-entry filtering
//! - [`catalog`] - `Catalog` of folders, root first, with shuffle orders
//! - [`builder`] - builds a `Catalog` from a [`platform::Storage`]
//! - [`shuffle`] - randomized pairwise-swap permutations

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
pub mod catalog;
pub mod scanner;
pub mod shuffle;
pub mod track;

// Top-level re-exports for convenience
pub use builder::{build, CatalogError};
pub use catalog::{Catalog, Folder, GlobalShuffleEntry, TrackRef, ROOT_FOLDER};
pub use scanner::Scanner;
pub use shuffle::shuffle;
pub use track::{AudioFormat, FileEntry};
