//! Logging initialization
//!
//! Installs a `tracing` subscriber that writes to stderr. Stdout belongs to
//! the host bridge, so nothing here may ever log to it.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level filter (e.g., "warn", "debug", "application=debug,reqwest=info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Map a `-v` count to a filter directive
#[must_use]
pub const fn log_filter_from_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the filter directive to use
///
/// `RUST_LOG` wins over everything, then a non-zero verbosity, then the
/// configured level.
fn resolve_filter(config: &LogConfig, verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbosity > 0 {
            EnvFilter::new(log_filter_from_verbosity(verbosity))
        } else {
            EnvFilter::new(&config.level)
        }
    })
}

/// Initialize logging with the given configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let env_filter = resolve_filter(config, verbosity);

    let fmt_layer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(format = ?config.format, "Logging initialized");
    Ok(())
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}
