// src/config/app_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "gcd_lamps.toml";

/// Front-end configuration. The engines themselves take no settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Output rendering
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// How results are printed (default: text)
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The same text the form would show
    Text,
    /// A JSON object with either a `result` or an `error` field
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "warn".to_string(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if Path::new(CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CONFIG_FILE));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "warn")?
            .set_default("output.format", "text")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: GCD_LAMPS_, nesting with __)
        let config = builder
            .add_source(
                Environment::with_prefix("GCD_LAMPS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
