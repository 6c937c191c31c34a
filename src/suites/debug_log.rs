use anyhow::Result;
use tracing::info;

use super::{Suite, SuiteContext};

/// Cost of emitting a single log line.
pub struct DebugLogSuite;

impl DebugLogSuite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DebugLogSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Suite for DebugLogSuite {
    fn name(&self) -> &str {
        "debug_log"
    }

    fn description(&self) -> &str {
        "time one log line"
    }

    fn run(&mut self, ctx: &mut SuiteContext<'_>) -> Result<()> {
        ctx.measure("Just a string test", || {
            info!("Whatever");
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::testing::run_captured;

    #[test]
    fn test_single_measurement() {
        let (lines, report) = run_captured(&mut DebugLogSuite::new(), 1);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Just a string test finished in : "));
        assert_eq!(report.measurements[0].suite.as_deref(), Some("debug_log"));
    }
}
