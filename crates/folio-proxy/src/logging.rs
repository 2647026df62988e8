//! Logging setup for the proxy server.
//!
//! Logs go to stdout through `tracing`; the level is controlled with `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "folio_proxy=debug,tower_http=info,warn";

/// Initialize the logging system.
///
/// Default log levels:
/// - `folio_proxy` modules: DEBUG
/// - `tower_http` request traces: INFO
/// - Other crates: WARN
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
