//! Log subscriber setup.

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::DemoConfig;

/// Initializes logging to stderr at the configured verbosity.
///
/// Stdout is left to the scenario output. Must be called at most once.
pub fn init(config: &DemoConfig) {
    let filt = EnvFilter::new(config.log_directive());

    let stderr_sub = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(filt);

    tracing_subscriber::registry().with(stderr_sub).init();

    debug!(verbosity = config.verbosity, "logging started");
}
