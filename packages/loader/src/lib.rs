#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dataset loading for the orphan well maps.
//!
//! Reads the three source datasets once at startup: the well records CSV,
//! the county reference CSV and the county boundary `GeoJSON`. Rows that
//! cannot be read fail the load here, so the aggregation code only ever
//! sees well-formed records.

pub mod boundaries;
pub mod tables;

use std::fs::File;
use std::path::PathBuf;

use orphan_wells_models::{GeoReference, WellRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use boundaries::CountyBoundaries;

/// Errors that can occur while loading datasets.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// A required column is not present in the header row.
    #[error("Missing column '{column}'")]
    MissingColumn {
        /// The configured column name.
        column: String,
    },

    /// A data row has a missing or malformed field.
    #[error("Invalid row at line {line}: {message}")]
    Row {
        /// 1-based line number in the source file.
        line: u64,
        /// Description of what went wrong.
        message: String,
    },

    /// The file parsed but has the wrong shape.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// Header names of the columns read from the source CSVs, and the
/// boundary feature property holding the county FIPS code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Well CSV county column.
    pub well_county: String,
    /// Well CSV district column.
    pub well_district: String,
    /// Well CSV months-inactive column.
    pub well_months_inactive: String,
    /// Reference CSV county column.
    pub geo_county: String,
    /// Reference CSV district column.
    pub geo_district: String,
    /// Reference CSV FIPS column.
    pub geo_fips: String,
    /// Boundary feature property holding the FIPS code. Falls back to the
    /// feature `id` when the property is absent.
    pub boundary_fips_property: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            well_county: "county".to_string(),
            well_district: "district".to_string(),
            well_months_inactive: "months_inactive".to_string(),
            geo_county: "county".to_string(),
            geo_district: "district".to_string(),
            geo_fips: "fips".to_string(),
            boundary_fips_property: "GEOID".to_string(),
        }
    }
}

/// Locations of the three source datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Well records CSV.
    pub wells: PathBuf,
    /// County reference CSV.
    pub geography: PathBuf,
    /// County boundary `GeoJSON`.
    pub boundaries: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            wells: PathBuf::from("data/wells.csv"),
            geography: PathBuf::from("data/counties.csv"),
            boundaries: PathBuf::from("data/counties.geojson"),
        }
    }
}

/// All source data, loaded once and shared read-only by every view.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// One row per abandoned well.
    pub wells: Vec<WellRecord>,
    /// One row per known county.
    pub geography: Vec<GeoReference>,
    /// County boundaries keyed by FIPS code.
    pub boundaries: CountyBoundaries,
}

impl Dataset {
    /// Loads the well CSV and county reference CSV, skipping boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if either file cannot be read or parsed.
    pub fn load_tables(
        paths: &DataPaths,
        columns: &ColumnNames,
    ) -> Result<(Vec<WellRecord>, Vec<GeoReference>), LoadError> {
        let wells = tables::read_wells(File::open(&paths.wells)?, columns)?;
        log::info!(
            "Loaded {} well records from {}",
            wells.len(),
            paths.wells.display()
        );

        let geography = tables::read_geography(File::open(&paths.geography)?, columns)?;
        log::info!(
            "Loaded {} county reference rows from {}",
            geography.len(),
            paths.geography.display()
        );

        Ok((wells, geography))
    }

    /// Loads all three datasets.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if any file cannot be read or parsed.
    pub fn load(paths: &DataPaths, columns: &ColumnNames) -> Result<Self, LoadError> {
        let (wells, geography) = Self::load_tables(paths, columns)?;

        let geojson = std::fs::read_to_string(&paths.boundaries)?;
        let boundaries = CountyBoundaries::parse(&geojson, &columns.boundary_fips_property)?;
        log::info!(
            "Loaded {} county boundaries from {}",
            boundaries.len(),
            paths.boundaries.display()
        );

        Ok(Self {
            wells,
            geography,
            boundaries,
        })
    }
}
