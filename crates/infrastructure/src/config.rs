//! Application configuration

use std::path::Path;

use integration_transit::TransitConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LogConfig;

/// Prefix for environment overrides (e.g., `DRT_LAUNCHER_TRANSIT__BASE_URL`)
pub const ENV_PREFIX: &str = "DRT_LAUNCHER";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "drt-launcher";

/// Keyword the launcher listens on unless configured otherwise
pub const DEFAULT_KEYWORD: &str = "drt";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Launcher keyword that activates the extension
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Transit API configuration
    #[serde(default)]
    pub transit: TransitConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            transit: TransitConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional file, and the environment
    ///
    /// With `path` set the file must exist; otherwise `drt-launcher.{toml,yaml,json}`
    /// in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("keyword", DEFAULT_KEYWORD)?
            .set_default("log.level", "warn")?
            .set_default("log.format", "text")?
            .add_source(file)
            // Override with environment variables
            .add_source(environment);

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.keyword.is_empty() {
            return Err("keyword cannot be empty".to_string());
        }
        if self.keyword.chars().any(char::is_whitespace) {
            return Err(format!("keyword must be a single word: {:?}", self.keyword));
        }
        self.transit.validate()
    }
}
