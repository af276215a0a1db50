//! Configuration loading.
//!
//! Settings live in a TOML file under the user configuration directory.
//! Every field has a default, so a missing file or a partial file both work.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,
}

/// Clock display options.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_show_seconds")]
    pub show_seconds: bool,

    #[serde(default = "default_show_date")]
    pub show_date: bool,

    #[serde(default = "default_time_format")]
    pub time_format: TimeFormat,
}

/// Whether the clock renders a 12-hour or a 24-hour face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

fn default_show_seconds() -> bool {
    true
}

fn default_show_date() -> bool {
    true
}

fn default_time_format() -> TimeFormat {
    TimeFormat::TwelveHour
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            show_seconds: default_show_seconds(),
            show_date: default_show_date(),
            time_format: default_time_format(),
        }
    }
}

/// Sidebar gesture tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarConfig {
    /// Minimum horizontal motion, in logical pixels, for a gesture to count
    /// as a swipe. Zero means any net motion counts.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,

    /// Width of the strip along the left window edge where a swipe can
    /// start while the panel is closed.
    #[serde(default = "default_edge_zone")]
    pub edge_zone: f32,
}

fn default_swipe_threshold() -> f32 {
    0.0
}

fn default_edge_zone() -> f32 {
    50.0
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            edge_zone: default_edge_zone(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the defaults; only unreadable or malformed
    /// files are reported as errors.
    pub fn load() -> Result<Self, ConfigError> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("memoboard").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_settings() {
        let config = Config::default();

        assert!(config.clock.show_seconds);
        assert!(config.clock.show_date);
        assert_eq!(config.clock.time_format, TimeFormat::TwelveHour);
        assert_eq!(config.sidebar.swipe_threshold, 0.0);
        assert_eq!(config.sidebar.edge_zone, 50.0);
    }

    #[test]
    fn partial_files_fall_back_per_field() {
        let config: Config = toml::from_str(
            r#"
            [clock]
            time_format = "24h"
            "#,
        )
        .unwrap();

        assert_eq!(config.clock.time_format, TimeFormat::TwentyFourHour);
        assert!(config.clock.show_seconds);
        assert_eq!(config.sidebar.edge_zone, 50.0);
    }

    #[test]
    fn sidebar_tuning_is_configurable() {
        let config: Config = toml::from_str(
            r#"
            [sidebar]
            swipe_threshold = 24.0
            edge_zone = 32.0
            "#,
        )
        .unwrap();

        assert_eq!(config.sidebar.swipe_threshold, 24.0);
        assert_eq!(config.sidebar.edge_zone, 32.0);
    }

    #[test]
    fn unknown_time_formats_are_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [clock]
            time_format = "13h"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn a_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/definitely/not/here.toml")).unwrap();

        assert_eq!(config.sidebar.edge_zone, 50.0);
    }
}
