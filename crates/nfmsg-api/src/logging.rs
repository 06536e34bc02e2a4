//! # Structured Logging
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` wins over the
//! configured level; `-v` on the command line raises the configured level.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggerConfig};

/// Filter directive for the configured level and CLI verbosity.
///
/// `-v` only ever makes logging more verbose: a configured level that is
/// already at or above the requested one is kept as is.
pub fn level_directive(logger: &LoggerConfig, verbose: u8) -> String {
    let (requested, directive) = match verbose {
        0 => return logger.level.clone(),
        1 => (LevelFilter::DEBUG, "debug"),
        _ => (LevelFilter::TRACE, "trace"),
    };
    match logger.level.trim().parse::<LevelFilter>() {
        Ok(configured) if configured >= requested => logger.level.clone(),
        _ => directive.to_string(),
    }
}

/// Install the global subscriber. Call once, before serving.
pub fn init(logger: &LoggerConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_directive(logger, verbose)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logger.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
