//! Benchmark suites. Each suite is one group of related measurements and owns
//! all of its scratch state for the duration of a run.

mod component_caching;
mod debug_log;
mod generic_vs_explicit;
mod property_vs_field;
mod string_concat;

use anyhow::Result;

use crate::harness::{Harness, HarnessError};
use crate::report::{Measurement, ReportSink, RunReport};

pub use component_caching::ComponentCachingSuite;
pub use debug_log::DebugLogSuite;
pub use generic_vs_explicit::GenericVsExplicitSuite;
pub use property_vs_field::PropertyVsFieldSuite;
pub use string_concat::StringConcatSuite;

pub trait Suite {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn run(&mut self, ctx: &mut SuiteContext<'_>) -> Result<()>;
}

/// What a suite gets to work with while it runs.
pub struct SuiteContext<'a> {
    pub(crate) harness: &'a mut Harness<Box<dyn ReportSink>>,
    pub(crate) report: &'a mut RunReport,
    pub(crate) suite: &'a str,
    pub(crate) iterations: u64,
    pub(crate) seed: u64,
    pub(crate) filler_entities: usize,
}

impl<'a> SuiteContext<'a> {
    pub fn new(
        harness: &'a mut Harness<Box<dyn ReportSink>>,
        report: &'a mut RunReport,
        suite: &'a str,
        iterations: u64,
    ) -> Self {
        Self {
            harness,
            report,
            suite,
            iterations,
            seed: 0,
            filler_entities: 0,
        }
    }

    pub fn with_scene(mut self, seed: u64, filler_entities: usize) -> Self {
        self.seed = seed;
        self.filler_entities = filler_entities;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn filler_entities(&self) -> usize {
        self.filler_entities
    }

    /// Time `action` once, report it and record it in the run report.
    pub fn measure<F>(&mut self, label: &str, action: F) -> Result<Measurement, HarnessError>
    where
        F: FnOnce(),
    {
        let measurement = self
            .harness
            .measure(label, action)?
            .in_suite(self.suite)
            .with_iterations(self.iterations);
        self.report.measurements.push(measurement.clone());
        Ok(measurement)
    }

    pub fn note(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.harness.note(&text);
        self.report.notes.push(text);
    }
}

/// Every built-in suite, in run order.
pub fn default_suites() -> Vec<Box<dyn Suite>> {
    vec![
        Box::new(DebugLogSuite::new()),
        Box::new(PropertyVsFieldSuite::new()),
        Box::new(StringConcatSuite::new()),
        Box::new(ComponentCachingSuite::new()),
        Box::new(GenericVsExplicitSuite::new()),
    ]
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::report::CaptureSink;

    /// Runs `suite` against an in-memory sink and returns the emitted lines
    /// together with the run report.
    pub fn run_captured(suite: &mut dyn Suite, iterations: u64) -> (Vec<String>, RunReport) {
        let sink = CaptureSink::new();
        let boxed: Box<dyn ReportSink> = Box::new(sink.clone());
        let mut harness = Harness::new(boxed);
        let mut report = RunReport::new(iterations);
        let name = suite.name().to_string();
        let mut ctx = SuiteContext::new(&mut harness, &mut report, &name, iterations).with_scene(3, 16);
        suite.run(&mut ctx).unwrap();
        (sink.lines(), report)
    }
}
