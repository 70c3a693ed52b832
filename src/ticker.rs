use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration (how long the UI loop waits for input between ticks)
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Periodic source of one-second ticks for a countdown.
///
/// The owner releases the source by dropping it.
pub trait TickSource {
    /// Whole seconds elapsed since the previous call
    fn take_elapsed(&mut self) -> u32;
}

/// Tick source backed by the monotonic clock.
///
/// Sub-second remainders carry over to the next call, so polling at the UI
/// tick rate yields about one tick per real second.
#[derive(Debug)]
pub struct WallClock {
    last_second: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last_second: start }
    }

    /// Seconds elapsed up to `now`, advancing the baseline by whole seconds only
    pub fn take_elapsed_at(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_second).as_secs();
        let whole = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.last_second += Duration::from_secs(u64::from(whole));
        whole
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for WallClock {
    fn take_elapsed(&mut self) -> u32 {
        self.take_elapsed_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_wall_clock_counts_whole_seconds() {
        let start = Instant::now();
        let mut clock = WallClock::starting_at(start);

        assert_eq!(clock.take_elapsed_at(start + Duration::from_millis(400)), 0);
        assert_eq!(clock.take_elapsed_at(start + Duration::from_millis(1_100)), 1);
        assert_eq!(clock.take_elapsed_at(start + Duration::from_millis(3_050)), 2);
    }

    #[test]
    fn test_wall_clock_carries_remainder() {
        let start = Instant::now();
        let mut clock = WallClock::starting_at(start);

        // 0.75s + 0.75s = 1.5s -> exactly one tick, 0.5s carried
        assert_eq!(clock.take_elapsed_at(start + Duration::from_millis(750)), 0);
        assert_eq!(clock.take_elapsed_at(start + Duration::from_millis(1_500)), 1);
        assert_eq!(clock.take_elapsed_at(start + Duration::from_millis(2_000)), 1);
    }

    #[test]
    fn test_wall_clock_ignores_earlier_instant() {
        let start = Instant::now();
        let mut clock = WallClock::starting_at(start + Duration::from_secs(5));
        assert_eq!(clock.take_elapsed_at(start), 0);
    }
}
