//! Minimum-interval gates for the cooperative poll loop.
//!
//! The loop spins as fast as its caller drives it; each concern (local
//! buttons, display refresh, watchdog sampling) only runs when its gate opens.
//! The clock is passed in, so tests can drive time explicitly.

use embassy_time::{Duration, Instant};

/// Opens at most once per `interval`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalGate {
    interval: Duration,
    last: Option<Instant>,
}

impl IntervalGate {
    /// A gate that opens on its first check and then every `interval`.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// `true` when at least `interval` has passed since the gate last opened.
    ///
    /// Opening re-arms the gate from `now`. A clock that appears to run
    /// backwards keeps the gate closed until it catches up.
    pub fn ready(&mut self, now: Instant) -> bool {
        let open = match self.last {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= self.interval),
        };
        if open {
            self.last = Some(now);
        }
        open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn test_first_check_opens() {
        let mut gate = IntervalGate::new(Duration::from_millis(200));
        assert!(gate.ready(Instant::from_millis(5)));
    }

    #[test]
    fn test_closed_until_interval() {
        let mut gate = IntervalGate::new(Duration::from_millis(200));
        assert!(gate.ready(Instant::from_millis(0)));
        assert!(!gate.ready(Instant::from_millis(199)));
        assert!(gate.ready(Instant::from_millis(200)));
        assert!(!gate.ready(Instant::from_millis(250)));
        assert!(gate.ready(Instant::from_millis(400)));
    }

    #[test]
    fn test_backwards_clock_stays_closed() {
        let mut gate = IntervalGate::new(Duration::from_millis(10));
        assert!(gate.ready(Instant::from_millis(100)));
        assert!(!gate.ready(Instant::from_millis(50)));
    }
}
