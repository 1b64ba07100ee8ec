//! Logging infrastructure
//!
//! Structured `tracing` output on stderr, as text or JSON.

mod logging;

pub use logging::{LogConfig, LogFormat, TelemetryError, init_logging, log_filter_from_verbosity};
