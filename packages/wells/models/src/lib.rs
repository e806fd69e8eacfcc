#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Abandoned well records and county geography types.
//!
//! These are the plain data types shared by the loader, the region
//! aggregator, the view parameterizer and the choropleth exporter. None
//! of them carry behavior beyond simple accessors.

pub mod fips;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A single abandoned oil/gas well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellRecord {
    /// County name as reported by the regulator (e.g. "Kern").
    pub county: String,
    /// Regulatory district name (e.g. "4").
    pub district: String,
    /// Number of months since the well last reported production.
    pub months_inactive: u32,
}

impl WellRecord {
    /// Creates a well record.
    #[must_use]
    pub fn new(
        county: impl Into<String>,
        district: impl Into<String>,
        months_inactive: u32,
    ) -> Self {
        Self {
            county: county.into(),
            district: district.into(),
            months_inactive,
        }
    }
}

/// A county row from the reference geography table.
///
/// `county` is the join key against [`WellRecord::county`]. The FIPS code
/// is the join key against boundary geometry; a row without one cannot be
/// placed on a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoReference {
    /// County name.
    pub county: String,
    /// District the county belongs to.
    pub district: String,
    /// Five-digit zero-padded county FIPS code (e.g. "06029").
    pub fips: Option<String>,
}

impl GeoReference {
    /// Creates a reference row with a FIPS code.
    #[must_use]
    pub fn new(
        county: impl Into<String>,
        district: impl Into<String>,
        fips: impl Into<String>,
    ) -> Self {
        Self {
            county: county.into(),
            district: district.into(),
            fips: Some(fips.into()),
        }
    }
}

/// One output row of the region aggregation: a mappable county with its
/// own well count and the well count of its whole district.
///
/// `district_total` counts every matching well in the district, including
/// wells whose county could not be mapped, so it may exceed the sum of
/// `county_total` over the district's rows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionTotals {
    /// County name.
    pub county: String,
    /// Five-digit county FIPS code.
    pub fips: String,
    /// Matching wells in this county.
    pub county_total: u64,
    /// District the county belongs to.
    pub district: String,
    /// Matching wells in the district.
    pub district_total: u64,
}

/// One bar of the months-inactive histogram, covering `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Inclusive lower bound in months.
    pub start: u32,
    /// Exclusive upper bound in months.
    pub end: u32,
    /// Number of wells in the bin.
    pub count: u64,
}

/// Count of wells in a single district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictCount {
    /// District name.
    pub district: String,
    /// Number of wells.
    pub count: u64,
}

/// Spatial level at which a map view colors its regions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Granularity {
    /// Color each county by its own total.
    County,
    /// Color each county by its district's total.
    #[default]
    District,
}

impl Granularity {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::County, Self::District]
    }

    /// Name of the [`RegionTotals`] field holding this level's count.
    #[must_use]
    pub const fn count_column(self) -> &'static str {
        match self {
            Self::County => "county_total",
            Self::District => "district_total",
        }
    }

    /// Name of the [`RegionTotals`] field holding this level's label.
    #[must_use]
    pub const fn label_column(self) -> &'static str {
        match self {
            Self::County => "county",
            Self::District => "district",
        }
    }

    /// Reads this level's count from a totals row.
    #[must_use]
    pub const fn count(self, row: &RegionTotals) -> u64 {
        match self {
            Self::County => row.county_total,
            Self::District => row.district_total,
        }
    }

    /// Reads this level's label from a totals row.
    #[must_use]
    pub fn label(self, row: &RegionTotals) -> &str {
        match self {
            Self::County => &row.county,
            Self::District => &row.district,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn row() -> RegionTotals {
        RegionTotals {
            county: "Kern".to_string(),
            fips: "06029".to_string(),
            county_total: 7,
            district: "4".to_string(),
            district_total: 19,
        }
    }

    #[test]
    fn granularity_parses_exact_tags() {
        assert_eq!(Granularity::from_str("county"), Ok(Granularity::County));
        assert_eq!(Granularity::from_str("district"), Ok(Granularity::District));
        assert!(Granularity::from_str("County").is_err());
        assert!(Granularity::from_str("state").is_err());
    }

    #[test]
    fn granularity_display_matches_tag() {
        assert_eq!(Granularity::County.to_string(), "county");
        assert_eq!(Granularity::District.as_ref(), "district");
    }

    #[test]
    fn accessors_follow_granularity() {
        let row = row();
        assert_eq!(Granularity::County.count(&row), 7);
        assert_eq!(Granularity::County.label(&row), "Kern");
        assert_eq!(Granularity::District.count(&row), 19);
        assert_eq!(Granularity::District.label(&row), "4");
    }

    #[test]
    fn column_names_match_serialized_csv_fields() {
        for granularity in Granularity::all() {
            assert!(granularity.count_column().ends_with("_total"));
            assert!(granularity.count_column().starts_with(granularity.label_column()));
        }
    }

    #[test]
    fn region_totals_serializes_camel_case() {
        let json = serde_json::to_value(row()).unwrap();
        assert_eq!(json["countyTotal"], 7);
        assert_eq!(json["districtTotal"], 19);
        assert_eq!(json["fips"], "06029");
    }
}
