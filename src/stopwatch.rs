//! Monotonic stopwatch with an explicit Idle/Running/Stopped state machine.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Source of monotonic time, expressed as an offset from the clock's origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock. Clones share the same reading, so a test can keep
/// one handle and hand another to the stopwatch.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StopwatchError {
    #[error("stopwatch is already running")]
    AlreadyRunning,
    #[error("stopwatch is not running (state: {0:?})")]
    NotRunning(StopwatchState),
}

/// Accumulating stopwatch.
///
/// `start` from Idle or Stopped begins a new running segment; `stop` folds
/// that segment into the accumulated total. Out-of-sequence calls fail fast
/// and leave the state untouched. `reset` is valid from any state.
#[derive(Debug)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    state: StopwatchState,
    accumulated: Duration,
    segment_start: Duration,
}

impl Stopwatch<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Stopwatch<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: StopwatchState::Idle,
            accumulated: Duration::ZERO,
            segment_start: Duration::ZERO,
        }
    }

    pub fn start(&mut self) -> Result<(), StopwatchError> {
        if self.state == StopwatchState::Running {
            return Err(StopwatchError::AlreadyRunning);
        }
        self.segment_start = self.clock.now();
        self.state = StopwatchState::Running;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), StopwatchError> {
        if self.state != StopwatchState::Running {
            return Err(StopwatchError::NotRunning(self.state));
        }
        self.accumulated += self.running_segment();
        self.state = StopwatchState::Stopped;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.segment_start = Duration::ZERO;
        self.state = StopwatchState::Idle;
    }

    /// Reset and immediately start a fresh measurement.
    pub fn restart(&mut self) {
        self.reset();
        self.segment_start = self.clock.now();
        self.state = StopwatchState::Running;
    }

    /// Accumulated time, including the in-flight segment while running.
    pub fn elapsed(&self) -> Duration {
        match self.state {
            StopwatchState::Running => self.accumulated + self.running_segment(),
            StopwatchState::Idle | StopwatchState::Stopped => self.accumulated,
        }
    }

    /// Whole milliseconds, truncated.
    pub fn elapsed_ms(&self) -> u64 {
        duration_to_ms(self.elapsed())
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == StopwatchState::Running
    }

    fn running_segment(&self) -> Duration {
        self.clock.now().saturating_sub(self.segment_start)
    }
}

pub(crate) fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
