#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Output for region totals.
//!
//! Writes [`RegionTotals`] tables as CSV or JSON, and joins them onto
//! county boundaries to produce the `GeoJSON` a choropleth renderer
//! consumes. Boundary geometry is passed through untouched.
//!
//! [`RegionTotals`]: orphan_wells_models::RegionTotals

pub mod choropleth;
pub mod table;

pub use choropleth::{choropleth_feature_collection, write_choropleth};
pub use table::{write_json, write_region_totals_csv};

use thiserror::Error;

/// Errors that can occur while writing output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
