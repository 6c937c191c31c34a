use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the tracing subscriber once per process. `RUST_LOG` wins over
/// `default_level`. Output goes to stderr so report lines own stdout.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("speedtest={default_level}")));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    });
}
