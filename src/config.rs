//! Configuration management for the world info service
//!
//! Handles loading configuration from an optional TOML file and
//! `WORLDINFO_`-prefixed environment variables, and validates the result.

use crate::WorldInfoError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for the world info service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldInfoConfig {
    /// Inbound HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Geocoding service settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Forecast service settings
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Cross-origin settings
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Inbound HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the Nominatim-compatible service
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Client label sent as `User-Agent`, required by the usage policy
    #[serde(default = "default_geocoding_user_agent")]
    pub user_agent: String,
    /// Request timeout; the transport default applies when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Forecast service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Base URL of the Open-Meteo-compatible service
    #[serde(default = "default_forecast_base_url")]
    pub base_url: String,
    /// Request timeout; the transport default applies when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace), overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allow any origin, method and header
    #[serde(default = "default_cors_allow_any")]
    pub allow_any: bool,
}

// Default value functions
fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_geocoding_user_agent() -> String {
    "world-info-app".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_cors_allow_any() -> bool {
    true
}

const MAX_TIMEOUT_SECONDS: u64 = 300;
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: [&str; 2] = ["pretty", "compact"];

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            user_agent: default_geocoding_user_agent(),
            timeout_seconds: None,
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_forecast_base_url(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any: default_cors_allow_any(),
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl GeocodingConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl ForecastConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl WorldInfoConfig {
    /// Load configuration from the given path, or `get_config_path()` when none
    /// is given, with environment overrides on top
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(Self::get_config_path);

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Nested keys use a double underscore: WORLDINFO_SERVER__PORT
        builder = builder.add_source(
            Environment::with_prefix("WORLDINFO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: WorldInfoConfig = settings
            .try_deserialize()
            .with_context(|| format!("Failed to deserialize configuration from {}", config_file.display()))?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the configuration file path, `WORLDINFO_CONFIG` or `config.toml`
    #[must_use]
    pub fn get_config_path() -> PathBuf {
        std::env::var_os("WORLDINFO_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.geocoding.base_url.is_empty() {
            self.geocoding.base_url = default_geocoding_base_url();
        }
        if self.geocoding.user_agent.is_empty() {
            self.geocoding.user_agent = default_geocoding_user_agent();
        }
        if self.forecast.base_url.is_empty() {
            self.forecast.base_url = default_forecast_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_urls()?;
        self.validate_timeouts()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_urls(&self) -> Result<()> {
        for (name, url) in [
            ("geocoding.base_url", &self.geocoding.base_url),
            ("forecast.base_url", &self.forecast.base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(WorldInfoError::config(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                ))
                .into());
            }
        }

        if self.geocoding.user_agent.trim().is_empty() {
            return Err(WorldInfoError::config(
                "geocoding.user_agent cannot be blank; the geocoding service rejects anonymous clients",
            )
            .into());
        }

        Ok(())
    }

    fn validate_timeouts(&self) -> Result<()> {
        for (name, timeout) in [
            ("geocoding.timeout_seconds", self.geocoding.timeout_seconds),
            ("forecast.timeout_seconds", self.forecast.timeout_seconds),
        ] {
            match timeout {
                Some(0) => {
                    return Err(WorldInfoError::config(format!(
                        "{name} must be greater than 0"
                    ))
                    .into());
                }
                Some(secs) if secs > MAX_TIMEOUT_SECONDS => {
                    return Err(WorldInfoError::config(format!(
                        "{name} cannot exceed {MAX_TIMEOUT_SECONDS} seconds"
                    ))
                    .into());
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(WorldInfoError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ))
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.to_lowercase().as_str()) {
            return Err(WorldInfoError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
