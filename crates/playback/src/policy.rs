//! Traversal policy - what "next" means.

/// How `advance` and `retreat` pick the following track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Folder order, spilling into the neighbouring folder at the ends.
    #[default]
    Sequential,
    /// Stay on the current track and reload it.
    RepeatOne,
    /// The current folder's shuffle order.
    ShuffleFolder,
    /// The whole-library shuffle order.
    ShuffleAll,
}

impl Policy {
    /// The policy selected by one press of the mode control.
    ///
    /// Sequential → ShuffleFolder → ShuffleAll → RepeatOne → Sequential.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Policy::Sequential => Policy::ShuffleFolder,
            Policy::ShuffleFolder => Policy::ShuffleAll,
            Policy::ShuffleAll => Policy::RepeatOne,
            Policy::RepeatOne => Policy::Sequential,
        }
    }

    /// Short label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            Policy::Sequential => "SEQ",
            Policy::RepeatOne => "ONE",
            Policy::ShuffleFolder => "RND-F",
            Policy::ShuffleAll => "RND-A",
        }
    }

    /// `true` for the two shuffle policies.
    pub fn is_shuffle(self) -> bool {
        matches!(self, Policy::ShuffleFolder | Policy::ShuffleAll)
    }
}

impl core::fmt::Display for Policy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
