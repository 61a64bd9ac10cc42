//! Fixed-period tick scheduling.
//!
//! The trail advances in fixed steps, one per timer period, independent of
//! the display's frame rate. [`TickClock`] turns wall-clock instants into a
//! count of due ticks and reports when the next one is due, so a host can
//! sleep until then.
//!
//! # Example
//!
//! ```
//! use glint::time::TickClock;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut clock = TickClock::starting_at(Duration::from_millis(16), start);
//!
//! assert_eq!(clock.ticks_due(start + Duration::from_millis(40)), 2);
//! assert_eq!(clock.tick_count(), 2);
//! ```

use std::time::{Duration, Instant};

/// Default cap on ticks run for a single wake-up.
pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

/// Fixed-period tick scheduler.
#[derive(Debug, Clone)]
pub struct TickClock {
    /// Length of one tick.
    period: Duration,
    /// Instant of the most recent tick boundary.
    last_tick: Instant,
    /// Total ticks reported since creation or reset.
    tick_count: u64,
    /// Upper bound on ticks reported by one `ticks_due` call.
    max_catch_up: u32,
    /// Whether ticking is paused.
    paused: bool,
}

impl TickClock {
    /// Create a clock whose first tick is one period from now.
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    /// Create a clock whose first tick is one period after `start`.
    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Self {
            period: period.max(Duration::from_micros(1)),
            last_tick: start,
            tick_count: 0,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
            paused: false,
        }
    }

    /// Set the catch-up cap (at least 1).
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    /// Count the ticks due at `now` and consume them.
    ///
    /// Returns at most the catch-up cap. When more periods than that have
    /// elapsed, the backlog is dropped and the next tick is scheduled one
    /// period after `now`.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        if self.paused {
            return 0;
        }

        let elapsed = now.saturating_duration_since(self.last_tick);
        let whole = elapsed.as_nanos() / self.period.as_nanos();
        if whole == 0 {
            return 0;
        }

        let due = if whole > self.max_catch_up as u128 {
            self.last_tick = now;
            self.max_catch_up
        } else {
            let due = whole as u32;
            self.last_tick += self.period * due;
            due
        };

        self.tick_count += due as u64;
        due
    }

    /// Instant the next tick becomes due.
    pub fn next_deadline(&self) -> Instant {
        self.last_tick + self.period
    }

    /// Tick period.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Total ticks reported since creation or reset.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Whether ticking is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop reporting ticks.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume ticking; time spent paused is not replayed.
    pub fn resume(&mut self, now: Instant) {
        if self.paused {
            self.paused = false;
            self.last_tick = now;
        }
    }

    /// Reset the clock to its initial state at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
        self.tick_count = 0;
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_no_tick_before_period() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(16 * MS, start);
        assert_eq!(clock.ticks_due(start + 15 * MS), 0);
        assert_eq!(clock.ticks_due(start + 16 * MS), 1);
        assert_eq!(clock.next_deadline(), start + 32 * MS);
    }

    #[test]
    fn test_remainder_carries_over() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(16 * MS, start);
        assert_eq!(clock.ticks_due(start + 20 * MS), 1);
        // 4ms of the first wake are kept, so 12ms more completes the next tick.
        assert_eq!(clock.ticks_due(start + 32 * MS), 1);
        assert_eq!(clock.tick_count(), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(16 * MS, start).with_max_catch_up(3);
        let late = start + 1000 * MS;
        assert_eq!(clock.ticks_due(late), 3);
        assert_eq!(clock.next_deadline(), late + 16 * MS);
        assert_eq!(clock.ticks_due(late + 10 * MS), 0);
    }

    #[test]
    fn test_pause_and_resume() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(16 * MS, start);
        clock.pause();
        assert!(clock.is_paused());
        assert_eq!(clock.ticks_due(start + 100 * MS), 0);

        clock.resume(start + 100 * MS);
        assert_eq!(clock.ticks_due(start + 110 * MS), 0);
        assert_eq!(clock.ticks_due(start + 116 * MS), 1);
    }

    #[test]
    fn test_reset() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(16 * MS, start);
        clock.ticks_due(start + 48 * MS);
        clock.reset(start + 50 * MS);
        assert_eq!(clock.tick_count(), 0);
        assert_eq!(clock.next_deadline(), start + 66 * MS);
    }

    #[test]
    fn test_earlier_instant_is_ignored() {
        let start = Instant::now() + 100 * MS;
        let mut clock = TickClock::starting_at(16 * MS, start);
        assert_eq!(clock.ticks_due(start - 50 * MS), 0);
    }
}
