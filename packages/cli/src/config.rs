//! TOML configuration for the CLI.
//!
//! Every field has a default, so an absent or partial file is fine.
//!
//! ```toml
//! long_inactive_months = 240
//! histogram_bin_width = 12
//!
//! [data]
//! wells = "data/wells.csv"
//! geography = "data/counties.csv"
//! boundaries = "data/counties.geojson"
//!
//! [columns]
//! well_months_inactive = "MONTHS_INACTIVE"
//! ```

use std::path::{Path, PathBuf};

use orphan_wells_aggregate::DEFAULT_LONG_INACTIVE_MONTHS;
use orphan_wells_loader::{ColumnNames, DataPaths};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "ORPHAN_WELLS_CONFIG";

/// Config file looked up in the working directory as a last resort.
pub const DEFAULT_CONFIG_FILE: &str = "orphan_wells.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// The config file path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source dataset locations.
    pub data: DataPaths,
    /// Source column names.
    pub columns: ColumnNames,
    /// Threshold of the standing long-inactive filter.
    pub long_inactive_months: u32,
    /// Default histogram bin width in months.
    pub histogram_bin_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            columns: ColumnNames::default(),
            long_inactive_months: DEFAULT_LONG_INACTIVE_MONTHS,
            histogram_bin_width: 12,
        }
    }
}

impl Config {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text does not parse.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::de::from_str(text)?)
    }

    /// Loads the config from `explicit`, else from the file named by
    /// [`CONFIG_ENV_VAR`], else from [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else returns defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a named file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                fallback.exists().then_some(fallback)
            });

        let Some(path) = path else {
            log::debug!("No config file found, using defaults");
            return Ok(Self::default());
        };

        log::info!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
        assert_eq!(Config::default().long_inactive_months, 240);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            long_inactive_months = 120

            [data]
            wells = "/srv/wells.csv"

            [columns]
            well_months_inactive = "MONTHS_INACTIVE"
            "#,
        )
        .unwrap();

        assert_eq!(config.long_inactive_months, 120);
        assert_eq!(config.histogram_bin_width, 12);
        assert_eq!(config.data.wells, PathBuf::from("/srv/wells.csv"));
        assert_eq!(config.data.geography, DataPaths::default().geography);
        assert_eq!(config.columns.well_months_inactive, "MONTHS_INACTIVE");
        assert_eq!(config.columns.well_county, "county");
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(matches!(
            Config::from_toml_str("long_inactive_months = \"lots\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_io_error() {
        let err = Config::load(Some(Path::new("/nonexistent/orphan_wells.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
