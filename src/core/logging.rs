//! Logging configuration and initialization
//!
//! This module sets up the tracing subscriber for structured logging
//! throughout the application.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system with the specified level
///
/// Sets up tracing with a filter based on the configured log level. An
/// invalid level falls back to "info", and RUST_LOG overrides the
/// configured level when set.
pub fn init_logging(log_level: &str) {
    let level = log_level.trim().to_lowercase();

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    let final_level = if valid_levels.contains(&level.as_str()) {
        level.as_str()
    } else {
        "info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(final_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
