// DipLog - GPL-3.0-or-later
// This file is part of DipLog.
//
// Copyright (C) 2026 The DipLog Authors
//
// DipLog is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// DipLog is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with DipLog.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::classify::{
    is_valid_timestamp_format, TimestampStyle, DEFAULT_TIMESTAMP_FORMAT, DEFAULT_TIMEZONE,
};
use crate::state::LineLimit;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("invalid timestamp format {0:?}")]
    TimestampFormat(String),
}

const fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

/// Global user configuration stored in config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Base URL of the admin API, e.g. `https://example.org/api`
    #[serde(default)]
    pub api_url: Option<String>,

    /// IANA timezone used to display request timestamps
    #[serde(default = "default_timezone", alias = "displayTimezone")]
    pub display_timezone: Tz,

    /// strftime format for request timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Line limit used when none is given on the command line
    #[serde(default)]
    pub default_line_limit: LineLimit,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            display_timezone: default_timezone(),
            timestamp_format: default_timestamp_format(),
            default_line_limit: LineLimit::default(),
        }
    }
}

impl GlobalConfig {
    /// Get the path to the global config file
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diplog").join("config.json"))
    }

    /// Load global config from disk, returning defaults if not found or invalid
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("No global config found, using defaults");
            return Self::default();
        }

        Self::load_from(&path).map_or_else(
            |e| {
                tracing::warn!("{e}, using defaults");
                Self::default()
            },
            |config| {
                tracing::info!("Loaded global config from {}", path.display());
                config
            },
        )
    }

    /// Read and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save global config to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved global config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_valid_timestamp_format(&self.timestamp_format) {
            Ok(())
        } else {
            Err(ConfigError::TimestampFormat(self.timestamp_format.clone()))
        }
    }

    #[must_use]
    pub fn timestamp_style(&self) -> TimestampStyle {
        TimestampStyle::new(self.display_timezone, self.timestamp_format.clone())
    }
}
