//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the DRT transit adapter, configuration loading, and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{LogConfig, LogFormat, TelemetryError, init_logging, log_filter_from_verbosity};
