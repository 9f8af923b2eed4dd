//! Engine configuration file support.
//!
//! This module provides utilities for reading engine configuration from
//! TOML configuration files. Every setting has a default, so hosts without
//! a file can run on [`EngineConfig::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Engine configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub business_hours: BusinessHours,
    #[serde(default)]
    pub table: TableSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

/// Business-hour range the heatmap restricts itself to, both ends inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(default = "default_open_hour")]
    pub open: u32,
    #[serde(default = "default_close_hour")]
    pub close: u32,
}

/// Table projection settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Rolling-window settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_days")]
    pub default_days: u32,
}

fn default_open_hour() -> u32 {
    8
}

fn default_close_hour() -> u32 {
    17
}

fn default_page_size() -> usize {
    10
}

fn default_window_days() -> u32 {
    30
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open: default_open_hour(),
            close: default_close_hour(),
        }
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            default_days: default_window_days(),
        }
    }
}

impl BusinessHours {
    /// True when `hour` falls inside the configured range.
    pub fn contains(&self, hour: u32) -> bool {
        (self.open..=self.close).contains(&hour)
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `reports.toml` in the current directory, a `config/`
    /// subdirectory, and the parent directory.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = vec![
            PathBuf::from("reports.toml"),
            PathBuf::from("config/reports.toml"),
            PathBuf::from("../reports.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(Error::Config(
            "No reports.toml found in standard locations".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.business_hours.open, 8);
        assert_eq!(config.business_hours.close, 17);
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.window.default_days, 30);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[table]
page_size = 25
"#;

        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.table.page_size, 25);
        // Untouched sections keep their defaults
        assert_eq!(config.business_hours.open, 8);
        assert_eq!(config.window.default_days, 30);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[business_hours]
open = 7
close = 19

[table]
page_size = 50

[window]
default_days = 90
"#;

        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.business_hours.open, 7);
        assert_eq!(config.business_hours.close, 19);
        assert_eq!(config.table.page_size, 50);
        assert_eq!(config.window.default_days, 90);
    }

    #[test]
    fn test_business_hours_contains() {
        let hours = BusinessHours::default();
        assert!(hours.contains(8));
        assert!(hours.contains(12));
        assert!(hours.contains(17));
        assert!(!hours.contains(7));
        assert!(!hours.contains(18));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\ndefault_days = 7").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.window.default_days, 7);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();

        let result = EngineConfig::from_file(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
