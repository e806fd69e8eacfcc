//! The standing filter values every map view is offered.

use orphan_wells_models::{GeoReference, RegionTotals, WellRecord};
use serde::{Deserialize, Serialize};

use crate::region::compute_region_totals;

/// Default threshold for the long-inactive view: twenty years.
pub const DEFAULT_LONG_INACTIVE_MONTHS: u32 = 240;

/// A precomputed recency filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StandingFilter {
    /// Every well, regardless of inactivity.
    All,
    /// Wells inactive for at least `months` months.
    LongInactive {
        /// Minimum months inactive.
        months: u32,
    },
}

impl StandingFilter {
    /// Returns the threshold to hand to [`compute_region_totals`].
    #[must_use]
    pub const fn min_months_inactive(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::LongInactive { months } => Some(months),
        }
    }

    /// Short human-readable description for chart titles.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::All => "all wells".to_string(),
            Self::LongInactive { months } => format!("inactive {months}+ months"),
        }
    }
}

/// Region totals for both standing filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingTotals {
    /// Threshold used for [`Self::long_inactive`].
    pub long_inactive_months: u32,
    /// Totals over every well.
    pub all: Vec<RegionTotals>,
    /// Totals over long-inactive wells only.
    pub long_inactive: Vec<RegionTotals>,
}

impl StandingTotals {
    /// Computes both tables. The two computations share no state.
    #[must_use]
    pub fn compute(
        wells: &[WellRecord],
        geo: &[GeoReference],
        long_inactive_months: u32,
    ) -> Self {
        let all = compute_region_totals(wells, geo, StandingFilter::All.min_months_inactive());
        let long_inactive = compute_region_totals(
            wells,
            geo,
            StandingFilter::LongInactive {
                months: long_inactive_months,
            }
            .min_months_inactive(),
        );

        log::info!(
            "Computed standing region totals: {} rows (all), \
             {} rows (>= {long_inactive_months} months)",
            all.len(),
            long_inactive.len(),
        );

        Self {
            long_inactive_months,
            all,
            long_inactive,
        }
    }

    /// Returns the precomputed table for `filter`, or `None` if `filter`
    /// is a long-inactive threshold other than the one computed.
    #[must_use]
    pub fn get(&self, filter: StandingFilter) -> Option<&[RegionTotals]> {
        match filter {
            StandingFilter::All => Some(self.all.as_slice()),
            StandingFilter::LongInactive { months } if months == self.long_inactive_months => {
                Some(self.long_inactive.as_slice())
            }
            StandingFilter::LongInactive { .. } => None,
        }
    }
}
