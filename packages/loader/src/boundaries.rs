//! County boundary geometry keyed by FIPS code.
//!
//! Geometry is never inspected here. Features are only indexed by their
//! county FIPS code so the exporter can attach region totals to them.

use std::collections::BTreeMap;

use geojson::{Feature, GeoJson, feature::Id};
use orphan_wells_models::fips::normalize_county_fips;

use crate::LoadError;

/// County boundary features indexed by five-digit FIPS code.
#[derive(Debug, Clone, Default)]
pub struct CountyBoundaries {
    features: BTreeMap<String, Feature>,
}

impl CountyBoundaries {
    /// Parses a `GeoJSON` `FeatureCollection` of county boundaries.
    ///
    /// Each feature's FIPS code is read from `fips_property`, falling back
    /// to the feature `id`. Features without a usable code are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the input is not valid `GeoJSON` or is not
    /// a `FeatureCollection`.
    pub fn parse(geojson: &str, fips_property: &str) -> Result<Self, LoadError> {
        let GeoJson::FeatureCollection(collection) = geojson.parse::<GeoJson>()? else {
            return Err(LoadError::Conversion {
                message: "county boundaries must be a GeoJSON FeatureCollection".to_string(),
            });
        };

        let mut features = BTreeMap::new();
        let mut skipped = 0_usize;

        for feature in collection.features {
            let Some(fips) = feature_fips(&feature, fips_property) else {
                skipped += 1;
                continue;
            };

            if features.insert(fips.clone(), feature).is_some() {
                log::warn!("Duplicate boundary for FIPS {fips}, keeping the last one");
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} boundary features without a county FIPS code");
        }

        Ok(Self { features })
    }

    /// Returns the boundary feature for `fips`.
    #[must_use]
    pub fn get(&self, fips: &str) -> Option<&Feature> {
        self.features.get(fips)
    }

    /// Returns `true` if a boundary exists for `fips`.
    #[must_use]
    pub fn contains(&self, fips: &str) -> bool {
        self.features.contains_key(fips)
    }

    /// Number of indexed boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if no boundaries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates boundaries in FIPS order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Feature)> {
        self.features.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Feature)> for CountyBoundaries {
    fn from_iter<T: IntoIterator<Item = (String, Feature)>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

fn feature_fips(feature: &Feature, fips_property: &str) -> Option<String> {
    let raw = match (feature.property(fips_property), &feature.id) {
        (Some(serde_json::Value::String(s)), _) => s.clone(),
        (Some(serde_json::Value::Number(n)), _) => n.to_string(),
        (_, Some(Id::String(s))) => s.clone(),
        (_, Some(Id::Number(n))) => n.to_string(),
        _ => return None,
    };

    match normalize_county_fips(&raw) {
        Ok(fips) => fips,
        Err(e) => {
            log::warn!("Ignoring boundary feature: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "GEOID": "06029", "NAME": "Kern" },
                "geometry": { "type": "Point", "coordinates": [-118.7, 35.3] }
            },
            {
                "type": "Feature",
                "id": 6001,
                "properties": { "NAME": "Alameda" },
                "geometry": { "type": "Point", "coordinates": [-121.9, 37.6] }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "Nowhere" },
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": { "GEOID": "not-a-code" },
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn indexes_features_by_fips() {
        let boundaries = CountyBoundaries::parse(COLLECTION, "GEOID").unwrap();

        assert_eq!(boundaries.len(), 2);
        assert!(boundaries.contains("06029"));
        assert!(boundaries.contains("06001"));
        assert_eq!(
            boundaries.get("06029").and_then(|f| f.property("NAME")),
            Some(&serde_json::Value::String("Kern".to_string()))
        );
    }

    #[test]
    fn iterates_in_fips_order() {
        let boundaries = CountyBoundaries::parse(COLLECTION, "GEOID").unwrap();
        let keys: Vec<&str> = boundaries.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["06001", "06029"]);
    }

    #[test]
    fn rejects_bare_geometry() {
        let err = CountyBoundaries::parse(r#"{"type":"Point","coordinates":[0.0,0.0]}"#, "GEOID")
            .unwrap_err();
        assert!(matches!(err, LoadError::Conversion { .. }));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            CountyBoundaries::parse("{not json", "GEOID"),
            Err(LoadError::GeoJson(_))
        ));
    }
}
