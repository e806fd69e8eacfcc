//! Choropleth `GeoJSON` export.

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use geojson::{FeatureCollection, feature::Id};
use orphan_wells_loader::CountyBoundaries;
use orphan_wells_models::RegionTotals;
use orphan_wells_view::ViewSpec;

use crate::ExportError;

/// Builds one feature per totals row that has a boundary.
///
/// Each feature keeps its original properties and gains `fips`,
/// `granularity`, `label`, `count` and `hover`, resolved through `view`.
/// Rows without a boundary are left out.
#[must_use]
pub fn choropleth_feature_collection(
    totals: &[RegionTotals],
    boundaries: &CountyBoundaries,
    view: &ViewSpec,
) -> FeatureCollection {
    let mut missing = 0_usize;

    let features = totals
        .iter()
        .filter_map(|row| {
            let Some(boundary) = boundaries.get(&row.fips) else {
                missing += 1;
                return None;
            };

            let mut feature = boundary.clone();
            feature.id = Some(Id::String(row.fips.clone()));
            feature.set_property("fips", row.fips.as_str());
            feature.set_property("granularity", view.granularity.to_string());
            feature.set_property("label", view.label(row));
            feature.set_property("count", view.count(row));
            feature.set_property("hover", view.hover_text(row));
            Some(feature)
        })
        .collect::<Vec<_>>();

    if missing > 0 {
        log::warn!("{missing} region rows have no county boundary and were not exported");
    }

    log::debug!(
        "Built {} choropleth features for the {} view",
        features.len(),
        view.granularity
    );

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Writes a feature collection to `path` as `GeoJSON`.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or written.
pub fn write_choropleth(path: &Path, collection: &FeatureCollection) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, collection)?;
    writer.flush()?;

    log::info!(
        "Wrote {} choropleth features to {}",
        collection.features.len(),
        path.display()
    );
    Ok(())
}
