//! Report lines, output sinks and the JSON run report.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stopwatch::duration_to_ms;

/// One timed block.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    pub label: String,
    /// Loop count the suite ran with, when measured inside a suite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
    pub elapsed_ms: u64,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl Measurement {
    pub fn new(label: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            suite: None,
            label: label.into(),
            iterations: None,
            elapsed_ms: duration_to_ms(elapsed),
            elapsed,
        }
    }

    pub fn in_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = Some(suite.into());
        self
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// `"<label> finished in : <elapsed_ms>"`
    pub fn line(&self) -> String {
        format_line(&self.label, self.elapsed_ms)
    }
}

pub fn format_line(label: &str, elapsed_ms: u64) -> String {
    format!("{label} finished in : {elapsed_ms}")
}

/// Destination for report lines.
pub trait ReportSink {
    fn emit(&mut self, line: &str);
}

/// Writes every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Keeps lines in memory. Clones share the buffer.
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportSink for CaptureSink {
    fn emit(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// Everything one invocation of the runner produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    /// Global loop count; suites with an override record their own count
    /// on each measurement
    pub iterations: u64,
    pub suites: Vec<String>,
    pub measurements: Vec<Measurement>,
    pub notes: Vec<String>,
}

impl RunReport {
    pub fn new(iterations: u64) -> Self {
        Self {
            started_at: Utc::now(),
            iterations,
            suites: Vec::new(),
            measurements: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn measurement(&self, label: &str) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.label == label)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create report directory {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(())
    }
}
