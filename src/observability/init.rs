//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolves the filter directive from `RUST_LOG`, then `config.trace_level`,
/// then `"info"`.
#[must_use]
pub fn filter_directive(config: &Config, rust_log: Option<String>) -> String {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Initializes the global tracing subscriber writing to stderr.
///
/// Stdout is left to the caller. An unparsable directive falls back to
/// `"info"`.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times (only the first call takes effect).
///
/// # Example
///
/// ```rust
/// use photosearch::observability::init_tracing;
/// use photosearch::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = filter_directive(config, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
