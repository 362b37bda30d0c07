use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to `info`. Calling it again
/// after a subscriber is installed does nothing.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Err only means a global subscriber already exists
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
