use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use speedtest::{logging, report::ConsoleSink, runner::SuiteFailed, Config, Runner};

#[derive(Debug, Parser)]
#[command(author, version, about = "Timed micro-benchmark runner")]
struct Cli {
    /// Path to a YAML run configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suite to run; repeat for several, or pass `all`. Replaces the configured list.
    #[arg(long = "suite", value_name = "NAME")]
    suites: Vec<String>,

    /// Global loop count (per-suite overrides still apply)
    #[arg(long)]
    iterations: Option<u64>,

    /// Print the available suites and exit
    #[arg(long)]
    list: bool,

    /// Also write the run report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_yaml(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        if !self.suites.is_empty() {
            config.suites = self.suites.clone();
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(&config.logging.level);

    let mut runner = Runner::new(config);
    if cli.list {
        for (name, description) in runner.registry().describe() {
            println!("{name} - {description}");
        }
        return Ok(());
    }

    let report = match runner.run(ConsoleSink) {
        Ok(report) => report,
        Err(err) => {
            // Keep what was measured before the failing suite.
            if let (Some(path), Some(failed)) = (&cli.json, err.downcast_ref::<SuiteFailed>()) {
                failed.report.write_json(path)?;
            }
            return Err(err);
        }
    };
    if let Some(path) = &cli.json {
        report.write_json(path)?;
    }
    Ok(())
}
