//! Navigation state machine.
//!
//! `NavigationCursor` owns every mutable piece of "where are we": the current
//! (folder, file) coordinate, the active [`Policy`], and the positions inside
//! the per-folder and whole-library shuffle orders. The [`Catalog`] is only
//! ever borrowed, so it can stay immutable for the whole run.
//!
//! Each operation resolves to a [`Transition`]: either a coordinate the
//! caller must load, or a no-op. The cursor never performs I/O itself.
//!
//! Both shuffle positions always point at the current track in their order,
//! whichever way the cursor got there. Switching into a shuffle policy after
//! a jump therefore continues from the track that is playing, and a
//! `retreat` right after an `advance` lands back on it.
//!
//! Wraparound is plain modular arithmetic on `usize`:
//!
//! ```text
//! forward:  (pos + 1) % len
//! backward: (pos + len - 1) % len
//! ```

use alloc::vec;
use alloc::vec::Vec;

use library::{Catalog, TrackRef};

use crate::policy::Policy;

/// Outcome of a navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    /// The cursor now points at this track and it must be (re)loaded.
    Load(TrackRef),
    /// Nothing to play; the cursor did not move.
    NoOp,
}

impl Transition {
    /// The coordinate to load, if any.
    pub fn track(self) -> Option<TrackRef> {
        match self {
            Transition::Load(at) => Some(at),
            Transition::NoOp => None,
        }
    }
}

/// Errors returned by [`NavigationCursor`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The requested coordinate does not name a catalogued file.
    #[error("no file {file} in folder {folder}")]
    OutOfRange {
        /// Requested folder index.
        folder: usize,
        /// Requested file index.
        file: usize,
    },
}

/// Current position plus traversal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCursor {
    current: TrackRef,
    policy: Policy,
    global_shuffle_position: usize,
    folder_shuffle_positions: Vec<usize>,
}

impl NavigationCursor {
    /// Create a cursor for `catalog`, resting on its first playable file.
    ///
    /// An empty catalog leaves the cursor at `(0, 0)`; every operation on it is
    /// then a no-op.
    pub fn new(catalog: &Catalog) -> Self {
        let mut cursor = Self {
            current: catalog.first_playable().unwrap_or(TrackRef::new(0, 0)),
            policy: Policy::Sequential,
            global_shuffle_position: 0,
            folder_shuffle_positions: vec![0; catalog.folder_count()],
        };
        cursor.sync_shuffle_positions(catalog);
        cursor
    }

    /// Current coordinate.
    pub fn current(&self) -> TrackRef {
        self.current
    }

    /// Active policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Position inside the whole-library shuffle order.
    pub fn global_shuffle_position(&self) -> usize {
        self.global_shuffle_position
    }

    /// Position inside `folder`'s shuffle order.
    pub fn folder_shuffle_position(&self, folder: usize) -> Option<usize> {
        self.folder_shuffle_positions.get(folder).copied()
    }

    /// Move to the first playable file of the catalog.
    pub fn first(&mut self, catalog: &Catalog) -> Transition {
        match catalog.first_playable() {
            Some(at) => self.land(catalog, at),
            None => Transition::NoOp,
        }
    }

    /// Step forward under the active policy.
    pub fn advance(&mut self, catalog: &Catalog) -> Transition {
        if catalog.is_empty() {
            return Transition::NoOp;
        }
        let target = match self.policy {
            Policy::Sequential => self.sequential_next(catalog),
            Policy::RepeatOne => self.repeat(catalog),
            Policy::ShuffleFolder => self.folder_shuffle_step(catalog, wrap_next),
            Policy::ShuffleAll => self.global_shuffle_step(catalog, wrap_next),
        };
        self.resolve(catalog, target)
    }

    /// Step backward under the active policy.
    pub fn retreat(&mut self, catalog: &Catalog) -> Transition {
        if catalog.is_empty() {
            return Transition::NoOp;
        }
        let target = match self.policy {
            Policy::Sequential => self.sequential_previous(catalog),
            Policy::RepeatOne => self.repeat(catalog),
            Policy::ShuffleFolder => self.folder_shuffle_step(catalog, wrap_previous),
            Policy::ShuffleAll => self.global_shuffle_step(catalog, wrap_previous),
        };
        self.resolve(catalog, target)
    }

    /// Jump straight to `(folder, file)`; always reloads when valid.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfRange`] and leaves the cursor unchanged
    /// when the coordinate is not in the catalog.
    pub fn jump_to(
        &mut self,
        catalog: &Catalog,
        folder: usize,
        file: usize,
    ) -> Result<Transition, NavigationError> {
        let at = TrackRef::new(folder, file);
        if catalog.contains(at) {
            Ok(self.land(catalog, at))
        } else {
            Err(NavigationError::OutOfRange { folder, file })
        }
    }

    /// Select the next policy in the cycle and return it. Never reloads.
    pub fn cycle_policy(&mut self) -> Policy {
        self.policy = self.policy.next();
        tracing::info!(policy = self.policy.label(), "policy changed");
        self.policy
    }

    /// First file of the next folder that has files, wrapping past the end.
    pub fn next_folder(&mut self, catalog: &Catalog) -> Transition {
        let target = catalog
            .next_folder_with_files(self.current.folder)
            .map(|folder| TrackRef::new(folder, 0));
        self.resolve(catalog, target)
    }

    /// First file of the previous folder that has files, wrapping past the start.
    pub fn previous_folder(&mut self, catalog: &Catalog) -> Transition {
        let target = catalog
            .previous_folder_with_files(self.current.folder)
            .map(|folder| TrackRef::new(folder, 0));
        self.resolve(catalog, target)
    }

    // ---- policy steps ----

    fn sequential_next(&self, catalog: &Catalog) -> Option<TrackRef> {
        let TrackRef { folder, file } = self.current;
        let count = catalog.folder(folder).map_or(0, |f| f.file_count());
        match file.checked_add(1) {
            Some(next) if next < count => Some(TrackRef::new(folder, next)),
            _ => catalog
                .next_folder_with_files(folder)
                .map(|f| TrackRef::new(f, 0)),
        }
    }

    fn sequential_previous(&self, catalog: &Catalog) -> Option<TrackRef> {
        let TrackRef { folder, file } = self.current;
        let count = catalog.folder(folder).map_or(0, |f| f.file_count());
        match file.checked_sub(1) {
            Some(prev) if prev < count => Some(TrackRef::new(folder, prev)),
            _ => {
                let f = catalog.previous_folder_with_files(folder)?;
                let last = catalog.folder(f)?.file_count().checked_sub(1)?;
                Some(TrackRef::new(f, last))
            }
        }
    }

    fn repeat(&self, catalog: &Catalog) -> Option<TrackRef> {
        catalog.contains(self.current).then_some(self.current)
    }

    fn folder_shuffle_step(&self, catalog: &Catalog, step: fn(usize, usize) -> Option<usize>) -> Option<TrackRef> {
        let folder_index = self.current.folder;
        let folder = catalog.folder(folder_index)?;
        let slot = self.folder_shuffle_positions.get(folder_index)?;
        let pos = step(*slot, folder.file_count())?;
        let file = *folder.shuffle_order().get(pos)?;
        Some(TrackRef::new(folder_index, file))
    }

    fn global_shuffle_step(&self, catalog: &Catalog, step: fn(usize, usize) -> Option<usize>) -> Option<TrackRef> {
        let order = catalog.global_shuffle();
        let pos = step(self.global_shuffle_position, order.len())?;
        order.get(pos).copied()
    }

    // ---- bookkeeping ----

    fn resolve(&mut self, catalog: &Catalog, target: Option<TrackRef>) -> Transition {
        match target {
            Some(at) => self.land(catalog, at),
            None => Transition::NoOp,
        }
    }

    fn land(&mut self, catalog: &Catalog, at: TrackRef) -> Transition {
        self.current = at;
        self.sync_shuffle_positions(catalog);
        tracing::debug!(folder = at.folder, file = at.file, "cursor moved");
        Transition::Load(at)
    }

    /// Point both shuffle positions at `current` in their orders.
    fn sync_shuffle_positions(&mut self, catalog: &Catalog) {
        let at = self.current;
        if let Some(pos) = catalog.global_shuffle().iter().position(|&t| t == at) {
            self.global_shuffle_position = pos;
        }
        let in_folder = catalog
            .folder(at.folder)
            .and_then(|f| f.shuffle_order().iter().position(|&file| file == at.file));
        if let (Some(pos), Some(slot)) = (in_folder, self.folder_shuffle_positions.get_mut(at.folder)) {
            *slot = pos;
        }
    }
}

/// `(pos + 1) % len`, `None` when `len == 0`.
fn wrap_next(pos: usize, len: usize) -> Option<usize> {
    pos.checked_add(1)?.checked_rem(len)
}

/// `(pos + len - 1) % len`, `None` when `len == 0`.
fn wrap_previous(pos: usize, len: usize) -> Option<usize> {
    // pos is always < len here, so pos + len - 1 cannot underflow
    pos.checked_add(len)?.checked_sub(1)?.checked_rem(len)
}
