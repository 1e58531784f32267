use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// Configuration embedded at build time; edit `crates/frontend/config.toml` and rebuild.
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

const DEFAULT_API_PORT: u16 = 8082;

static CONFIG: Lazy<Config> = Lazy::new(|| load_config().unwrap_or_default());

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Explicit base URL of the REST service. Empty means "derive from window location".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: DEFAULT_API_PORT,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn level(&self) -> log::Level {
        self.level.trim().parse().unwrap_or(log::Level::Debug)
    }
}

fn default_port() -> u16 {
    DEFAULT_API_PORT
}

fn default_level() -> String {
    "debug".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Parse the embedded configuration
pub fn load_config() -> Result<Config, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

/// Process-wide configuration, defaults if the embedded file is invalid
pub fn config() -> &'static Config {
    &CONFIG
}
