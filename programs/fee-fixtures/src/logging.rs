//! Tracing setup. Logs go to stderr so stdout carries only the fixture line.

use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber. Returns `false` when one is already set.
pub fn init_subscriber() -> bool {
    // A local .env may set RUST_LOG
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if installed {
        debug!("Tracing logger initialized");
    }
    installed
}
