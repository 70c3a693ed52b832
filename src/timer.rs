//! One-shot countdown behind a focus session.
//!
//! A timer starts in `Running(duration * 60)` and ends in exactly one of
//! `Completed` or `Cancelled`. The tick source is held only while running:
//! it is dropped on entry to a terminal state, or when a running timer is
//! itself dropped.

use crate::ticker::TickSource;

/// Countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running(u32),
    Completed,
    Cancelled,
}

/// Terminal event reported by a timer, at most once per instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Completed,
    Cancelled,
}

pub struct FocusTimer {
    state: TimerState,
    source: Option<Box<dyn TickSource>>,
}

impl FocusTimer {
    /// Start counting down `duration_minutes` on the given tick source
    pub fn start(duration_minutes: u32, source: Box<dyn TickSource>) -> Self {
        Self {
            state: TimerState::Running(duration_minutes.saturating_mul(60)),
            source: Some(source),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state(), TimerState::Running(_))
    }

    /// Seconds left on the clock (0 once terminal)
    pub fn seconds_remaining(&self) -> u32 {
        match self.state {
            TimerState::Running(secs) => secs,
            TimerState::Completed | TimerState::Cancelled => 0,
        }
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_remaining(self.seconds_remaining())
    }

    /// Whether the tick source is still held
    pub fn holds_tick_source(&self) -> bool {
        self.source.is_some()
    }

    /// Pull elapsed seconds from the tick source and advance by that many ticks
    pub fn tick(&mut self) -> Option<TimerOutcome> {
        let elapsed = match self.source.as_mut() {
            Some(source) => source.take_elapsed(),
            None => return None,
        };
        self.advance(elapsed)
    }

    /// Advance by `ticks` one-second ticks.
    ///
    /// Returns `Some(Completed)` on the tick that reaches zero. A timer already
    /// at zero completes even when `ticks` is 0.
    pub fn advance(&mut self, ticks: u32) -> Option<TimerOutcome> {
        let TimerState::Running(remaining) = self.state else {
            return None;
        };

        let remaining = remaining.saturating_sub(ticks);
        self.state = TimerState::Running(remaining);
        if remaining == 0 {
            return self.finish(TimerOutcome::Completed);
        }
        None
    }

    /// Abort the countdown. Returns `Some(Cancelled)` only if it was running.
    pub fn cancel(&mut self) -> Option<TimerOutcome> {
        if !self.is_running() {
            return None;
        }
        self.finish(TimerOutcome::Cancelled)
    }

    fn finish(&mut self, outcome: TimerOutcome) -> Option<TimerOutcome> {
        self.state = match outcome {
            TimerOutcome::Completed => TimerState::Completed,
            TimerOutcome::Cancelled => TimerState::Cancelled,
        };
        self.release();
        Some(outcome)
    }

    fn release(&mut self) {
        if let Some(source) = self.source.take() {
            drop(source);
            tracing::trace!(state = ?self.state, "focus timer released tick source");
        }
    }
}

impl Drop for FocusTimer {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for FocusTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusTimer")
            .field("state", &self.state)
            .field("holds_tick_source", &self.source.is_some())
            .finish()
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_remaining(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Hand-driven tick source for tests
#[cfg(test)]
pub(crate) mod testing {
    use crate::ticker::TickSource;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Test-side handle: queue ticks and observe release
    #[derive(Clone, Default)]
    pub struct ManualTicks {
        pending: Rc<Cell<u32>>,
        drops: Rc<Cell<u32>>,
    }

    impl ManualTicks {
        pub fn new() -> Self {
            Self::default()
        }

        /// Source to hand to the timer; shares state with this handle
        pub fn source(&self) -> Box<dyn TickSource> {
            Box::new(ManualSource {
                pending: Rc::clone(&self.pending),
                drops: Rc::clone(&self.drops),
            })
        }

        pub fn push(&self, ticks: u32) {
            self.pending.set(self.pending.get() + ticks);
        }

        /// How many times the source has been dropped
        pub fn releases(&self) -> u32 {
            self.drops.get()
        }
    }

    struct ManualSource {
        pending: Rc<Cell<u32>>,
        drops: Rc<Cell<u32>>,
    }

    impl TickSource for ManualSource {
        fn take_elapsed(&mut self) -> u32 {
            self.pending.replace(0)
        }
    }

    impl Drop for ManualSource {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualTicks;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(25)]
    fn test_completes_after_exactly_duration_ticks(#[case] minutes: u32) {
        let ticks = ManualTicks::new();
        let mut timer = FocusTimer::start(minutes, ticks.source());
        assert_eq!(timer.state(), TimerState::Running(minutes * 60));

        let mut outcomes = Vec::new();
        for _ in 0..minutes * 60 - 1 {
            outcomes.extend(timer.advance(1));
        }
        assert!(outcomes.is_empty());
        assert_eq!(timer.state(), TimerState::Running(1));

        outcomes.extend(timer.advance(1));
        assert_eq!(outcomes, vec![TimerOutcome::Completed]);
        assert_eq!(timer.state(), TimerState::Completed);
        assert_eq!(ticks.releases(), 1);

        // Inert afterwards
        assert_eq!(timer.advance(1), None);
        assert_eq!(timer.cancel(), None);
        assert_eq!(timer.state(), TimerState::Completed);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(59)]
    #[case(119)]
    fn test_cancel_while_running(#[case] elapsed: u32) {
        let ticks = ManualTicks::new();
        let mut timer = FocusTimer::start(2, ticks.source());
        timer.advance(elapsed);

        assert_eq!(timer.cancel(), Some(TimerOutcome::Cancelled));
        assert_eq!(timer.state(), TimerState::Cancelled);
        assert!(!timer.holds_tick_source());
        assert_eq!(ticks.releases(), 1);

        // No completion after cancel, no second signal
        ticks.push(500);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.advance(500), None);
        assert_eq!(timer.cancel(), None);
        assert_eq!(timer.state(), TimerState::Cancelled);
    }

    #[test]
    fn test_tick_pulls_from_source() {
        let ticks = ManualTicks::new();
        let mut timer = FocusTimer::start(1, ticks.source());

        assert_eq!(timer.tick(), None);
        assert_eq!(timer.seconds_remaining(), 60);

        ticks.push(3);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.seconds_remaining(), 57);

        ticks.push(57);
        assert_eq!(timer.tick(), Some(TimerOutcome::Completed));
        assert_eq!(timer.seconds_remaining(), 0);
    }

    #[test]
    fn test_large_tick_batch_does_not_underflow() {
        let ticks = ManualTicks::new();
        let mut timer = FocusTimer::start(1, ticks.source());
        assert_eq!(timer.advance(1_000), Some(TimerOutcome::Completed));
        assert_eq!(timer.seconds_remaining(), 0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_poll() {
        let ticks = ManualTicks::new();
        let mut timer = FocusTimer::start(0, ticks.source());
        assert_eq!(timer.display(), "00:00");
        assert_eq!(timer.tick(), Some(TimerOutcome::Completed));
        assert_eq!(ticks.releases(), 1);
    }

    #[test]
    fn test_drop_while_running_releases_without_signal() {
        let ticks = ManualTicks::new();
        let timer = FocusTimer::start(25, ticks.source());
        assert!(timer.holds_tick_source());
        drop(timer);
        assert_eq!(ticks.releases(), 1);
    }

    #[test]
    fn test_drop_after_terminal_does_not_release_twice() {
        let ticks = ManualTicks::new();
        let mut timer = FocusTimer::start(1, ticks.source());
        timer.cancel();
        drop(timer);
        assert_eq!(ticks.releases(), 1);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(125), "02:05");
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(25 * 60), "25:00");
        assert_eq!(format_remaining(59), "00:59");
    }

    #[test]
    fn test_display_tracks_countdown() {
        let ticks = ManualTicks::new();
        let mut timer = FocusTimer::start(25, ticks.source());
        assert_eq!(timer.display(), "25:00");
        timer.advance(1);
        assert_eq!(timer.display(), "24:59");
    }
}
