//! Timed execution harness.
//!
//! Runs a labelled block exactly once, measures it with a [`Stopwatch`] and
//! emits `"<label> finished in : <elapsed_ms>"` to a [`ReportSink`]. The
//! stopwatch is reset on every exit path, including a panicking block, so one
//! harness can be reused for any number of measurements.
//!
//! ```
//! use speedtest::harness::Harness;
//! use speedtest::report::CaptureSink;
//!
//! let sink = CaptureSink::new();
//! let mut harness = Harness::new(sink.clone());
//! let mut total = 0_u64;
//! harness
//!     .measure("sum", || {
//!         for i in 0..1_000 {
//!             total += i;
//!         }
//!     })
//!     .unwrap();
//! assert!(sink.lines()[0].starts_with("sum finished in : "));
//! ```

use std::error::Error as StdError;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::report::{Measurement, ReportSink};
use crate::stopwatch::{Clock, MonotonicClock, Stopwatch, StopwatchError, StopwatchState};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("measurement label must not be empty")]
    EmptyLabel,
    #[error(transparent)]
    Stopwatch(#[from] StopwatchError),
    #[error("action '{label}' failed")]
    Action {
        label: String,
        #[source]
        source: BoxError,
    },
}

pub struct Harness<S: ReportSink, C: Clock = MonotonicClock> {
    stopwatch: Stopwatch<C>,
    sink: S,
}

impl<S: ReportSink> Harness<S, MonotonicClock> {
    pub fn new(sink: S) -> Self {
        Self::with_clock(MonotonicClock::new(), sink)
    }
}

impl<S: ReportSink, C: Clock> Harness<S, C> {
    pub fn with_clock(clock: C, sink: S) -> Self {
        Self {
            stopwatch: Stopwatch::with_clock(clock),
            sink,
        }
    }

    /// Time `action` once and report it.
    pub fn measure<F>(&mut self, label: &str, action: F) -> Result<Measurement, HarnessError>
    where
        F: FnOnce(),
    {
        let (elapsed, ()) = self.run_timed(label, action)?;
        Ok(self.report(label, elapsed))
    }

    /// Time a fallible `action` once. A failure is handed back to the caller
    /// and produces no report line.
    pub fn try_measure<F, E>(&mut self, label: &str, action: F) -> Result<Measurement, HarnessError>
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<BoxError>,
    {
        let (elapsed, outcome) = self.run_timed(label, action)?;
        outcome.map_err(|err| HarnessError::Action {
            label: label.to_string(),
            source: err.into(),
        })?;
        Ok(self.report(label, elapsed))
    }

    /// Emit a free-form line on the report channel.
    pub fn note(&mut self, text: &str) {
        self.sink.emit(text);
    }

    pub fn is_idle(&self) -> bool {
        self.stopwatch.state() == StopwatchState::Idle
    }

    fn run_timed<F, T>(&mut self, label: &str, action: F) -> Result<(Duration, T), HarnessError>
    where
        F: FnOnce() -> T,
    {
        if label.trim().is_empty() {
            return Err(HarnessError::EmptyLabel);
        }

        let mut guard = ResetGuard {
            stopwatch: &mut self.stopwatch,
        };
        guard.stopwatch.start()?;
        let output = action();
        guard.stopwatch.stop()?;
        let elapsed = guard.stopwatch.elapsed();
        drop(guard);

        Ok((elapsed, output))
    }

    fn report(&mut self, label: &str, elapsed: Duration) -> Measurement {
        let measurement = Measurement::new(label, elapsed);
        debug!(label, elapsed_ms = measurement.elapsed_ms, "measurement finished");
        self.sink.emit(&measurement.line());
        measurement
    }
}

/// Returns the stopwatch to Idle when dropped, unwinding included.
struct ResetGuard<'a, C: Clock> {
    stopwatch: &'a mut Stopwatch<C>,
}

impl<C: Clock> Drop for ResetGuard<'_, C> {
    fn drop(&mut self) {
        self.stopwatch.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CaptureSink;
    use crate::stopwatch::ManualClock;

    fn manual_harness() -> (ManualClock, CaptureSink, Harness<CaptureSink, ManualClock>) {
        let clock = ManualClock::new();
        let sink = CaptureSink::new();
        let harness = Harness::with_clock(clock.clone(), sink.clone());
        (clock, sink, harness)
    }

    #[test]
    fn test_measure_reports_label_and_elapsed() {
        let (clock, sink, mut harness) = manual_harness();
        let m = harness
            .measure("loop", || clock.advance(Duration::from_millis(25)))
            .unwrap();
        assert_eq!(m.elapsed_ms, 25);
        assert_eq!(sink.lines(), vec!["loop finished in : 25".to_string()]);
        assert!(harness.is_idle());
    }

    #[test]
    fn test_consecutive_calls_are_independent() {
        let (clock, sink, mut harness) = manual_harness();
        harness
            .measure("first", || clock.advance(Duration::from_millis(30)))
            .unwrap();
        clock.advance(Duration::from_millis(500));
        let second = harness
            .measure("second", || clock.advance(Duration::from_millis(4)))
            .unwrap();
        assert_eq!(second.elapsed_ms, 4);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_empty_label_skips_action() {
        let (_clock, sink, mut harness) = manual_harness();
        let mut ran = false;
        let err = harness.measure("  ", || ran = true).unwrap_err();
        assert!(matches!(err, HarnessError::EmptyLabel));
        assert!(!ran);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_failed_action_resets_and_propagates() {
        let (clock, sink, mut harness) = manual_harness();
        let err = harness
            .try_measure("boom", || {
                clock.advance(Duration::from_millis(9));
                Err::<(), _>(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            })
            .unwrap_err();

        match err {
            HarnessError::Action { label, source } => {
                assert_eq!(label, "boom");
                assert_eq!(source.to_string(), "disk gone");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(harness.is_idle());
        assert!(sink.is_empty());

        let next = harness.measure("after", || {}).unwrap();
        assert_eq!(next.elapsed_ms, 0);
    }

    #[test]
    fn test_panicking_action_resets_stopwatch() {
        let (clock, sink, mut harness) = manual_harness();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = harness.measure("panics", || {
                clock.advance(Duration::from_millis(8));
                panic!("action blew up");
            });
        }));
        assert!(result.is_err());
        assert!(harness.is_idle());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_note_goes_to_sink() {
        let (_clock, sink, mut harness) = manual_harness();
        harness.note("String length: 11");
        assert_eq!(sink.lines(), vec!["String length: 11".to_string()]);
    }
}
