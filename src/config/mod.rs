//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/cdr-gen/config.toml

pub mod defaults;

use crate::coord::{Coordinates, LongitudeCorrection};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default values for generation
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Where generation starts when no coordinate is given
    #[serde(default)]
    pub origin: OriginConfig,

    /// Location sampling settings
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// Default values for generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Number of call records
    #[serde(default = "default_records")]
    pub records: usize,

    /// Output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Country of origin written to every record
    #[serde(default = "default_country")]
    pub country: String,

    /// Radius in miles for tracking records
    #[serde(default = "default_tracking_radius_miles")]
    pub tracking_radius_miles: f64,

    /// Radius in meters around the previous location for call records
    #[serde(default = "default_record_radius_meters")]
    pub record_radius_meters: f64,
}

/// Default origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginConfig {
    #[serde(default = "default_origin_lat")]
    pub lat: f64,

    #[serde(default = "default_origin_lng")]
    pub lng: f64,

    /// The default origin is moved up to this many meters at random
    #[serde(default = "default_origin_jitter_meters")]
    pub jitter_meters: f64,
}

/// Location sampling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Draws allowed before giving up on finding an in-boundary location
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// "latitude" (correct) or "origin_longitude" (legacy datasets)
    #[serde(default)]
    pub longitude_correction: LongitudeCorrection,
}

// Default value functions for serde
fn default_records() -> usize {
    DEFAULT_RECORDS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}
fn default_tracking_radius_miles() -> f64 {
    DEFAULT_TRACKING_RADIUS_MILES
}
fn default_record_radius_meters() -> f64 {
    DEFAULT_RECORD_RADIUS_METERS
}
fn default_origin_lat() -> f64 {
    DEFAULT_ORIGIN_LAT
}
fn default_origin_lng() -> f64 {
    DEFAULT_ORIGIN_LNG
}
fn default_origin_jitter_meters() -> f64 {
    DEFAULT_ORIGIN_JITTER_METERS
}
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            records: default_records(),
            format: default_format(),
            country: default_country(),
            tracking_radius_miles: default_tracking_radius_miles(),
            record_radius_meters: default_record_radius_meters(),
        }
    }
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            lat: default_origin_lat(),
            lng: default_origin_lng(),
            jitter_meters: default_origin_jitter_meters(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            longitude_correction: LongitudeCorrection::default(),
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", key, value)))
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path ("section.key")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "records"] => Some(self.defaults.records.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),
            ["defaults", "country"] => Some(self.defaults.country.clone()),
            ["defaults", "tracking_radius_miles"] => {
                Some(self.defaults.tracking_radius_miles.to_string())
            }
            ["defaults", "record_radius_meters"] => {
                Some(self.defaults.record_radius_meters.to_string())
            }

            ["origin", "lat"] => Some(self.origin.lat.to_string()),
            ["origin", "lng"] => Some(self.origin.lng.to_string()),
            ["origin", "jitter_meters"] => Some(self.origin.jitter_meters.to_string()),

            ["sampling", "max_attempts"] => Some(self.sampling.max_attempts.to_string()),
            ["sampling", "longitude_correction"] => {
                Some(self.sampling.longitude_correction.to_string())
            }

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "records"] => self.defaults.records = parse_value(key, value)?,
            ["defaults", "format"] => self.defaults.format = value.to_string(),
            ["defaults", "country"] => self.defaults.country = value.to_string(),
            ["defaults", "tracking_radius_miles"] => {
                self.defaults.tracking_radius_miles = parse_value(key, value)?
            }
            ["defaults", "record_radius_meters"] => {
                self.defaults.record_radius_meters = parse_value(key, value)?
            }

            ["origin", "lat"] => self.origin.lat = parse_value(key, value)?,
            ["origin", "lng"] => self.origin.lng = parse_value(key, value)?,
            ["origin", "jitter_meters"] => self.origin.jitter_meters = parse_value(key, value)?,

            ["sampling", "max_attempts"] => self.sampling.max_attempts = parse_value(key, value)?,
            ["sampling", "longitude_correction"] => {
                self.sampling.longitude_correction = parse_value(key, value)?
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.records",
            "defaults.format",
            "defaults.country",
            "defaults.tracking_radius_miles",
            "defaults.record_radius_meters",
            "origin.lat",
            "origin.lng",
            "origin.jitter_meters",
            "sampling.max_attempts",
            "sampling.longitude_correction",
        ]
    }

    /// The configured default origin, validated
    pub fn origin(&self) -> Result<Coordinates> {
        Coordinates::new(self.origin.lat, self.origin.lng)
    }
}
