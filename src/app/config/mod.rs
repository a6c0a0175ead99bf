// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[map]` - Initial viewport, default toggles and long-press timing
//! - `[routing]` - Routing service endpoint
//! - `[location]` - Where location fixes come from
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PINROUTE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pinroute::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("ru".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{Coordinate, MapStyle, TransportMode};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Shared types
// =============================================================================

/// A latitude/longitude pair as written in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CoordinateConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CoordinateConfig> for Coordinate {
    fn from(value: CoordinateConfig) -> Self {
        Coordinate::new(value.latitude, value.longitude)
    }
}

impl From<Coordinate> for CoordinateConfig {
    fn from(value: Coordinate) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

fn default_center() -> CoordinateConfig {
    CoordinateConfig {
        latitude: DEFAULT_CENTER_LATITUDE,
        longitude: DEFAULT_CENTER_LONGITUDE,
    }
}

/// Where location fixes come from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// A single fix at `[location].fixed`.
    #[default]
    Fixed,
    /// Fixes from `[location].replay_track`, one every `replay_interval_ms`.
    Replay,
    /// No location at all (as if the user denied access).
    None,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Map screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Base map style selected at startup.
    #[serde(
        default,
        serialize_with = "serialize_display",
        deserialize_with = "deserialize_parsed"
    )]
    pub default_style: MapStyle,

    /// Transport mode selected at startup.
    #[serde(
        default,
        serialize_with = "serialize_display",
        deserialize_with = "deserialize_parsed"
    )]
    pub default_transport: TransportMode,

    /// Center of the initial viewport.
    #[serde(default = "default_center")]
    pub initial_center: CoordinateConfig,

    /// Longitude span of the initial viewport, in degrees.
    #[serde(
        default = "default_span_degrees",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_span_degrees: Option<f64>,

    /// Hold duration that turns a press into a long-press.
    #[serde(
        default = "default_long_press_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_press_ms: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_style: MapStyle::default(),
            default_transport: TransportMode::default(),
            initial_center: default_center(),
            initial_span_degrees: default_span_degrees(),
            long_press_ms: default_long_press_ms(),
        }
    }
}

impl MapConfig {
    /// Initial span, clamped to the supported range.
    #[must_use]
    pub fn span_degrees(&self) -> f64 {
        self.initial_span_degrees
            .filter(|span| span.is_finite())
            .unwrap_or(DEFAULT_SPAN_DEGREES)
            .clamp(MIN_SPAN_DEGREES, MAX_SPAN_DEGREES)
    }

    /// Long-press threshold, clamped to the supported range.
    #[must_use]
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(
            self.long_press_ms
                .unwrap_or(DEFAULT_LONG_PRESS_MS)
                .clamp(MIN_LONG_PRESS_MS, MAX_LONG_PRESS_MS),
        )
    }
}

/// Routing service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Base URL of an OSRM-compatible server.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Location source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    #[serde(default)]
    pub source: LocationSource,

    /// Fix reported by the `fixed` source.
    #[serde(default = "default_center")]
    pub fixed: CoordinateConfig,

    /// Points walked through by the `replay` source.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replay_track: Vec<CoordinateConfig>,

    /// Delay between two replayed fixes.
    #[serde(
        default = "default_replay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub replay_interval_ms: Option<u64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            source: LocationSource::default(),
            fixed: default_center(),
            replay_track: Vec::new(),
            replay_interval_ms: default_replay_interval_ms(),
        }
    }
}

impl LocationConfig {
    /// Replay interval, clamped to the supported range.
    #[must_use]
    pub fn replay_interval(&self) -> Duration {
        Duration::from_millis(
            self.replay_interval_ms
                .unwrap_or(DEFAULT_REPLAY_INTERVAL_MS)
                .clamp(MIN_REPLAY_INTERVAL_MS, MAX_REPLAY_INTERVAL_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub location: LocationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_span_degrees() -> Option<f64> {
    Some(DEFAULT_SPAN_DEGREES)
}

fn default_long_press_ms() -> Option<u64> {
    Some(DEFAULT_LONG_PRESS_MS)
}

fn default_endpoint() -> String {
    DEFAULT_ROUTING_ENDPOINT.to_string()
}

fn default_replay_interval_ms() -> Option<u64> {
    Some(DEFAULT_REPLAY_INTERVAL_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

/// Deserializes a domain enum through its `FromStr` impl.
fn deserialize_parsed<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

fn serialize_display<S, T>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: Display,
{
    serializer.collect_str(value)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
/// Location of `settings.toml` after applying CLI and environment overrides.
pub fn config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ru".to_string()),
                theme_mode: ThemeMode::Light,
            },
            map: MapConfig {
                default_style: MapStyle::Satellite,
                default_transport: TransportMode::Walking,
                initial_center: CoordinateConfig {
                    latitude: 48.8566,
                    longitude: 2.3522,
                },
                initial_span_degrees: Some(0.2),
                long_press_ms: Some(800),
            },
            routing: RoutingConfig {
                endpoint: "http://localhost:5000".to_string(),
            },
            location: LocationConfig {
                source: LocationSource::Replay,
                fixed: default_center(),
                replay_track: vec![
                    CoordinateConfig {
                        latitude: 1.0,
                        longitude: 2.0,
                    },
                    CoordinateConfig {
                        latitude: 1.5,
                        longitude: 2.5,
                    },
                ],
                replay_interval_ms: Some(250),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_transport_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[map]\ndefault_transport = \"bicycle\"\n")
            .expect("failed to write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("bicycle")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[map]\ndefault_style = \"satellite\"\ndefault_transport = \"walking\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.map.default_style, MapStyle::Satellite);
        assert_eq!(loaded.map.default_transport, TransportMode::Walking);
        assert_eq!(loaded.map.long_press_ms, Some(DEFAULT_LONG_PRESS_MS));
        assert_eq!(loaded.routing.endpoint, DEFAULT_ROUTING_ENDPOINT);
        assert_eq!(loaded.location.source, LocationSource::Fixed);
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.map.default_style, MapStyle::Standard);
        assert_eq!(config.map.default_transport, TransportMode::Automobile);
        assert_eq!(config.map.long_press(), Duration::from_millis(500));
        assert_eq!(config.map.span_degrees(), DEFAULT_SPAN_DEGREES);
        assert_eq!(config.location.replay_interval(), Duration::from_secs(1));
        assert!(config.location.replay_track.is_empty());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let map = MapConfig {
            initial_span_degrees: Some(10_000.0),
            long_press_ms: Some(1),
            ..MapConfig::default()
        };
        assert_eq!(map.span_degrees(), MAX_SPAN_DEGREES);
        assert_eq!(map.long_press(), Duration::from_millis(MIN_LONG_PRESS_MS));

        let location = LocationConfig {
            replay_interval_ms: Some(u64::MAX),
            ..LocationConfig::default()
        };
        assert_eq!(
            location.replay_interval(),
            Duration::from_millis(MAX_REPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn non_finite_span_falls_back_to_default() {
        let map = MapConfig {
            initial_span_degrees: Some(f64::NAN),
            ..MapConfig::default()
        };
        assert_eq!(map.span_degrees(), DEFAULT_SPAN_DEGREES);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            routing: RoutingConfig {
                endpoint: "http://router.local".to_string(),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.routing.endpoint, "http://router.local");
    }

    #[test]
    fn load_with_override_returns_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[map\n").expect("failed to write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn coordinate_config_converts_to_domain() {
        let coordinate: Coordinate = CoordinateConfig {
            latitude: 55.75,
            longitude: 37.61,
        }
        .into();
        assert_eq!(coordinate, Coordinate::new(55.75, 37.61));
    }
}
