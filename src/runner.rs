//! Explicit entry point: resolve the configured suites and run them in order.

use std::error::Error as StdError;

use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::harness::Harness;
use crate::registry::Registry;
use crate::report::{ReportSink, RunReport};
use crate::suites::SuiteContext;

/// A suite failed part-way. `report` holds everything measured before the
/// failure, including the failing suite's earlier blocks.
#[derive(Debug, Error)]
#[error("suite '{suite}' failed")]
pub struct SuiteFailed {
    pub suite: String,
    pub report: RunReport,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub struct Runner {
    config: Config,
    registry: Registry,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, Registry::with_default_suites())
    }

    pub fn with_registry(config: Config, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run every selected suite once, sending report lines to `sink`.
    pub fn run(&mut self, sink: impl ReportSink + 'static) -> Result<RunReport> {
        let sink: Box<dyn ReportSink> = Box::new(sink);
        let mut harness = Harness::new(sink);
        let mut report = RunReport::new(self.config.iterations);

        let selected = self.registry.select(&self.config.suites)?;
        if selected.is_empty() {
            warn!("no suites selected, nothing to run");
            return Ok(report);
        }

        for suite in selected {
            let name = suite.name().to_string();
            let iterations = self.config.iterations_for(&name);
            info!(suite = %name, iterations, "running suite");

            let mut ctx = SuiteContext::new(&mut harness, &mut report, &name, iterations)
                .with_scene(self.config.seed, self.config.filler_entities);
            if let Err(err) = suite.run(&mut ctx) {
                return Err(SuiteFailed {
                    suite: name,
                    report,
                    source: err.into(),
                }
                .into());
            }

            report.suites.push(name.clone());
            info!(suite = %name, "suite finished");
        }

        Ok(report)
    }
}
