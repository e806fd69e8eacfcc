//! County/district region totals.
//!
//! County counts are joined onto the reference table with full outer join
//! semantics so that counties without any matching wells still appear
//! (with a zero total) and a choropleth never shows a gap. District
//! totals are counted over the whole filtered well set, so a district's
//! total includes wells whose county could not be placed on the map.

use std::collections::{BTreeMap, BTreeSet};

use orphan_wells_models::{GeoReference, RegionTotals, WellRecord};

/// Iterates the wells meeting the optional months-inactive threshold.
pub fn filter_wells(
    wells: &[WellRecord],
    min_months_inactive: Option<u32>,
) -> impl Iterator<Item = &WellRecord> {
    wells
        .iter()
        .filter(move |w| min_months_inactive.is_none_or(|min| w.months_inactive >= min))
}

fn count_by<'a>(
    wells: impl IntoIterator<Item = &'a WellRecord>,
    key: impl Fn(&'a WellRecord) -> &'a str,
) -> BTreeMap<&'a str, u64> {
    let mut counts = BTreeMap::new();
    for well in wells {
        *counts.entry(key(well)).or_insert(0) += 1;
    }
    counts
}

fn to_owned_keys(counts: BTreeMap<&str, u64>) -> BTreeMap<String, u64> {
    counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Counts filtered wells per county name.
///
/// Counties without a matching well are absent from the result.
#[must_use]
pub fn county_counts(
    wells: &[WellRecord],
    min_months_inactive: Option<u32>,
) -> BTreeMap<String, u64> {
    to_owned_keys(count_by(filter_wells(wells, min_months_inactive), |w| {
        w.county.as_str()
    }))
}

/// Counts filtered wells per district name, regardless of whether the
/// well's county can be mapped.
#[must_use]
pub fn district_totals(
    wells: &[WellRecord],
    min_months_inactive: Option<u32>,
) -> BTreeMap<String, u64> {
    to_owned_keys(count_by(filter_wells(wells, min_months_inactive), |w| {
        w.district.as_str()
    }))
}

/// A row of the county-count / reference outer join before gap-filling.
///
/// Rows that came only from the count side have no reference data; rows
/// that came only from the reference side have no count.
struct JoinedCounty<'a> {
    county: &'a str,
    district: Option<&'a str>,
    fips: Option<&'a str>,
    count: Option<u64>,
}

fn full_outer_join<'a>(
    counts: &BTreeMap<&'a str, u64>,
    geo: &'a [GeoReference],
) -> Vec<JoinedCounty<'a>> {
    let mut matched = BTreeSet::new();
    let mut rows = Vec::with_capacity(geo.len() + counts.len());

    for reference in geo {
        let count = counts.get(reference.county.as_str()).copied();
        if count.is_some() {
            matched.insert(reference.county.as_str());
        }
        rows.push(JoinedCounty {
            county: &reference.county,
            district: Some(&reference.district),
            fips: reference.fips.as_deref(),
            count,
        });
    }

    for (&county, &count) in counts {
        if !matched.contains(county) {
            rows.push(JoinedCounty {
                county,
                district: None,
                fips: None,
                count: Some(count),
            });
        }
    }

    rows
}

/// Computes one row per mappable county with its county total and its
/// district total.
///
/// When `min_months_inactive` is set, only wells inactive for at least
/// that many months are counted.
///
/// * Every reference county with a FIPS code appears, with a zero county
///   total if no well matched it, provided its district has at least one
///   matching well.
/// * Wells whose county has no FIPS code (e.g. offshore wells) are left out
///   of the county rows but still count toward their district.
/// * Empty input, or a filter that excludes every well, yields no rows.
///
/// Rows are ordered by FIPS code, then county name.
#[must_use]
pub fn compute_region_totals(
    wells: &[WellRecord],
    geo: &[GeoReference],
    min_months_inactive: Option<u32>,
) -> Vec<RegionTotals> {
    let filtered: Vec<&WellRecord> = filter_wells(wells, min_months_inactive).collect();
    let by_county = count_by(filtered.iter().copied(), |w| w.county.as_str());
    let by_district = count_by(filtered.iter().copied(), |w| w.district.as_str());

    let mut unmapped_counties = 0_usize;
    let mut unmapped_wells = 0_u64;
    let mut districtless = 0_usize;
    let mut totals = Vec::with_capacity(geo.len());

    for joined in full_outer_join(&by_county, geo) {
        let county_total = joined.count.unwrap_or(0);

        let (Some(fips), Some(district)) = (joined.fips, joined.district) else {
            unmapped_counties += 1;
            unmapped_wells += county_total;
            log::trace!(
                "Dropping county '{}' without FIPS code ({county_total} wells)",
                joined.county
            );
            continue;
        };

        let Some(&district_total) = by_district.get(district) else {
            districtless += 1;
            continue;
        };

        totals.push(RegionTotals {
            county: joined.county.to_string(),
            fips: fips.to_string(),
            county_total,
            district: district.to_string(),
            district_total,
        });
    }

    totals.sort_by(|a, b| a.fips.cmp(&b.fips).then_with(|| a.county.cmp(&b.county)));

    log::debug!(
        "Region totals (min_months_inactive={min_months_inactive:?}): {} wells, {} counties, \
         {} districts; dropped {unmapped_counties} unmapped counties ({unmapped_wells} wells) \
         and {districtless} counties in districts without wells",
        filtered.len(),
        totals.len(),
        by_district.len(),
    );

    totals
}
