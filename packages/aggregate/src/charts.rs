//! Data series for the histogram and bar chart views.

use orphan_wells_models::{DistrictCount, HistogramBin, WellRecord};

use crate::{AggregateError, region};

/// Largest number of bins [`months_inactive_histogram`] will produce.
pub const MAX_HISTOGRAM_BINS: usize = 1_000;

/// Buckets filtered wells by months inactive into bins of `bin_width`
/// months, starting at zero and ending with the bin holding the longest
/// inactive well. Empty bins in between are kept.
///
/// # Errors
///
/// Returns [`AggregateError::InvalidBinWidth`] if `bin_width` is zero, or
/// [`AggregateError::TooManyBins`] if covering the longest inactive well
/// would take more than [`MAX_HISTOGRAM_BINS`] bins.
pub fn months_inactive_histogram(
    wells: &[WellRecord],
    bin_width: u32,
    min_months_inactive: Option<u32>,
) -> Result<Vec<HistogramBin>, AggregateError> {
    if bin_width == 0 {
        return Err(AggregateError::InvalidBinWidth { width: bin_width });
    }

    let filtered: Vec<&WellRecord> = region::filter_wells(wells, min_months_inactive).collect();
    let Some(longest) = filtered.iter().map(|well| well.months_inactive).max() else {
        return Ok(Vec::new());
    };

    let bin_count = (longest / bin_width) as usize + 1;
    if bin_count > MAX_HISTOGRAM_BINS {
        return Err(AggregateError::TooManyBins {
            bins: bin_count,
            max: MAX_HISTOGRAM_BINS,
        });
    }

    let mut counts = vec![0_u64; bin_count];
    for well in filtered {
        counts[(well.months_inactive / bin_width) as usize] += 1;
    }

    #[allow(clippy::cast_possible_truncation)]
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = (i as u32) * bin_width;
            HistogramBin {
                start,
                end: start.saturating_add(bin_width),
                count,
            }
        })
        .collect();

    Ok(bins)
}

/// Counts filtered wells per district, largest first. Ties are ordered by
/// district name.
#[must_use]
pub fn district_bar_counts(
    wells: &[WellRecord],
    min_months_inactive: Option<u32>,
) -> Vec<DistrictCount> {
    let mut bars: Vec<DistrictCount> = region::district_totals(wells, min_months_inactive)
        .into_iter()
        .map(|(district, count)| DistrictCount { district, count })
        .collect();

    bars.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.district.cmp(&b.district)));
    bars
}
