//! Configuration management for aerostack.
//!
//! Configuration loading and validation using figment, supporting TOML
//! config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const APP_DIR_NAME: &str = "aerostack";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `AEROSTACK_`)
/// 2. TOML config file at `~/.config/aerostack/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dashboard UI configuration.
    pub ui: UiConfig,
    /// Map panel configuration.
    pub map: MapConfig,
    /// Data source configuration.
    pub data: DataConfig,
}

/// Dashboard UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw tick interval in milliseconds.
    pub tick_rate_ms: u64,
}

/// Map panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Viewport center longitude.
    pub center_lon: f64,
    /// Viewport center latitude.
    pub center_lat: f64,
    /// Viewport zoom level.
    pub zoom: u8,
}

/// Data source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to a JSON data file with `orders` and `drones` arrays.
    /// Unset means the built-in demonstration set.
    pub data_path: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        let viewport = aerostack_map::Viewport::default();
        Self {
            center_lon: viewport.center.0,
            center_lat: viewport.center.1,
            zoom: viewport.zoom,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `AEROSTACK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("AEROSTACK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(Error::config_validation(
                "tick_rate_ms must be greater than 0",
            ));
        }

        if !(aerostack_map::MIN_ZOOM..=aerostack_map::MAX_ZOOM).contains(&self.map.zoom) {
            return Err(Error::config_validation(format!(
                "zoom ({}) must be between {} and {}",
                self.map.zoom,
                aerostack_map::MIN_ZOOM,
                aerostack_map::MAX_ZOOM
            )));
        }

        Ok(())
    }

    /// Get the redraw tick interval as a Duration.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Get the configured map viewport.
    #[must_use]
    pub fn viewport(&self) -> aerostack_map::Viewport {
        aerostack_map::Viewport::new((self.map.center_lon, self.map.center_lat), self.map.zoom)
    }
}
