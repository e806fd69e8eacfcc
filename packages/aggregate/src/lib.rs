#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region aggregation over abandoned well records.
//!
//! Turns a flat table of [`WellRecord`]s and the county reference table
//! into gap-free per-county rows carrying both county and district
//! totals, ready to be joined onto county boundaries by FIPS code. Also
//! produces the data series behind the histogram and bar chart views.
//!
//! Every function here is a pure transformation of borrowed inputs.
//!
//! [`WellRecord`]: orphan_wells_models::WellRecord

pub mod charts;
pub mod region;
pub mod standing;

pub use region::{compute_region_totals, county_counts, district_totals};
pub use standing::{DEFAULT_LONG_INACTIVE_MONTHS, StandingFilter, StandingTotals};

use thiserror::Error;

/// Errors that can occur while building chart data.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Histogram bins must have a non-zero width.
    #[error("Invalid histogram bin width: {width}")]
    InvalidBinWidth {
        /// The rejected width.
        width: u32,
    },

    /// The histogram would need more bins than allowed.
    #[error("Histogram needs {bins} bins, more than the maximum of {max}; use a wider bin")]
    TooManyBins {
        /// Bins needed to cover the longest inactive well.
        bins: usize,
        /// The configured maximum.
        max: usize,
    },
}
