//! Stall watchdog.
//!
//! A track that fails to decode, or that has reached its end without the
//! transport moving on, stops reporting progress. The watchdog remembers the
//! last elapsed value it saw and flags a stall when two consecutive samples
//! agree on a non-zero value.
//!
//! Sampling cadence is the caller's business (the player gates it on a
//! monotonic clock); the watchdog only sees the values. It must only be fed
//! while the transport is playing, otherwise a pause would look like a stall.

/// Result of feeding one elapsed-time sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Playback is progressing (or has not started yet).
    Progressing,
    /// Elapsed time went backwards; memory was reset, no action needed.
    Restarted,
    /// Elapsed time stopped moving; the caller should advance once.
    Stalled,
}

/// Remembers the last elapsed-seconds sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StallWatchdog {
    last_elapsed: u32,
}

impl StallWatchdog {
    /// Create a watchdog with empty memory.
    pub const fn new() -> Self {
        Self { last_elapsed: 0 }
    }

    /// Last value remembered, `0` after a reset.
    pub fn last_elapsed(&self) -> u32 {
        self.last_elapsed
    }

    /// Forget the remembered value (call on every load).
    pub fn reset(&mut self) {
        self.last_elapsed = 0;
    }

    /// Feed one sample taken while playing.
    ///
    /// | sample                       | memory after | result        |
    /// |------------------------------|--------------|---------------|
    /// | `== last` and `> 0`          | `0`          | `Stalled`     |
    /// | `< last`                     | `0`          | `Restarted`   |
    /// | anything else                | `sample`     | `Progressing` |
    pub fn sample(&mut self, elapsed: u32) -> Sample {
        if elapsed != 0 && elapsed == self.last_elapsed {
            tracing::warn!(elapsed, "playback stalled");
            self.reset();
            Sample::Stalled
        } else if elapsed < self.last_elapsed {
            tracing::debug!(elapsed, last = self.last_elapsed, "elapsed went backwards");
            self.reset();
            Sample::Restarted
        } else {
            self.last_elapsed = elapsed;
            Sample::Progressing
        }
    }
}
