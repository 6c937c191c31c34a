pub mod components;
pub mod config;
pub mod ecs;
pub mod harness;
pub mod logging;
pub mod registry;
pub mod report;
pub mod runner;
pub mod stopwatch;
pub mod suites;

pub use config::Config;
pub use harness::{Harness, HarnessError};
pub use report::{ConsoleSink, Measurement, RunReport};
pub use runner::Runner;
pub use stopwatch::Stopwatch;
