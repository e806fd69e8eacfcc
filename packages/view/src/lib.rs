#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map view parameters for region totals.
//!
//! A choropleth of [`RegionTotals`] can color counties either by their own
//! well count or by their district's count. [`resolve_view`] picks the
//! count field, label field and hover template for each case so the
//! rendering layer never has to look columns up by name.

use std::str::FromStr as _;

use orphan_wells_models::{Granularity, RegionTotals};
use serde::Serialize;

/// Hover template for county-level views.
pub const COUNTY_HOVER_TEMPLATE: &str = "{label} County<br>Total: {value}<extra></extra>";

/// Hover template for district-level views.
pub const DISTRICT_HOVER_TEMPLATE: &str = "District {label}<br>Total: {value}<extra></extra>";

const LABEL_PLACEHOLDER: &str = "{label}";
const VALUE_PLACEHOLDER: &str = "{value}";

/// Resolved parameters for one map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSpec {
    /// The spatial level this view colors by.
    pub granularity: Granularity,
    /// Name of the count field in exported tables.
    pub count_column: &'static str,
    /// Name of the label field in exported tables.
    pub label_column: &'static str,
    /// Hover text template with `{label}` and `{value}` placeholders.
    pub hover_template: &'static str,
}

impl ViewSpec {
    /// Returns the view for `granularity`.
    #[must_use]
    pub const fn for_granularity(granularity: Granularity) -> Self {
        Self {
            granularity,
            count_column: granularity.count_column(),
            label_column: granularity.label_column(),
            hover_template: match granularity {
                Granularity::County => COUNTY_HOVER_TEMPLATE,
                Granularity::District => DISTRICT_HOVER_TEMPLATE,
            },
        }
    }

    /// Reads the value this view colors `row` by.
    #[must_use]
    pub const fn count(&self, row: &RegionTotals) -> u64 {
        self.granularity.count(row)
    }

    /// Reads the label this view shows for `row`.
    #[must_use]
    pub fn label<'a>(&self, row: &'a RegionTotals) -> &'a str {
        self.granularity.label(row)
    }

    /// Fills the hover template for `row`.
    ///
    /// Placeholders are substituted in a single pass over the template, so
    /// a label that itself contains `{value}` is shown literally.
    #[must_use]
    pub fn hover_text(&self, row: &RegionTotals) -> String {
        let label = self.label(row);
        let value = self.count(row).to_string();

        let mut text = String::with_capacity(self.hover_template.len() + label.len());
        let mut rest = self.hover_template;
        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let tail = &rest[open..];
            if let Some(after) = tail.strip_prefix(LABEL_PLACEHOLDER) {
                text.push_str(label);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(VALUE_PLACEHOLDER) {
                text.push_str(&value);
                rest = after;
            } else {
                text.push('{');
                rest = &tail[1..];
            }
        }
        text.push_str(rest);
        text
    }
}

impl From<Granularity> for ViewSpec {
    fn from(granularity: Granularity) -> Self {
        Self::for_granularity(granularity)
    }
}

/// Resolves a view from a granularity tag.
///
/// `"county"` selects the county view. Every other input,
/// including unrecognized tags, selects the district view; use
/// [`Granularity::from_str`] to reject unknown tags instead.
///
/// [`Granularity::from_str`]: std::str::FromStr::from_str
#[must_use]
pub fn resolve_view(granularity: &str) -> ViewSpec {
    let granularity = Granularity::from_str(granularity).unwrap_or_else(|_| {
        log::warn!("Unrecognized granularity '{granularity}', falling back to district view");
        Granularity::District
    });

    ViewSpec::for_granularity(granularity)
}

#[cfg(test)]
mod tests {
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
    fn county_view() {
        let view = resolve_view("county");
        assert_eq!(view.granularity, Granularity::County);
        assert_eq!(view.count_column, "county_total");
        assert_eq!(view.label_column, "county");
        assert_eq!(view.hover_template, COUNTY_HOVER_TEMPLATE);
        assert_eq!(view.count(&row()), 7);
        assert_eq!(view.label(&row()), "Kern");
    }

    #[test]
    fn district_view() {
        let view = resolve_view("district");
        assert_eq!(view.granularity, Granularity::District);
        assert_eq!(view.count_column, "district_total");
        assert_eq!(view.label_column, "district");
        assert_eq!(view.hover_template, DISTRICT_HOVER_TEMPLATE);
        assert_eq!(view.count(&row()), 19);
        assert_eq!(view.label(&row()), "4");
    }

    #[test]
    fn unrecognized_tags_fall_back_to_district() {
        assert_eq!(resolve_view("anything-else"), resolve_view("district"));
        assert_eq!(resolve_view(""), resolve_view("district"));
        assert_eq!(resolve_view("state"), resolve_view("district"));
        assert_eq!(resolve_view("County"), resolve_view("district"));
    }

    #[test]
    fn hover_text_fills_placeholders() {
        assert_eq!(
            resolve_view("county").hover_text(&row()),
            "Kern County<br>Total: 7<extra></extra>"
        );
        assert_eq!(
            resolve_view("district").hover_text(&row()),
            "District 4<br>Total: 19<extra></extra>"
        );
    }

    #[test]
    fn placeholder_text_in_labels_is_kept_literally() {
        let mut row = row();
        row.county = "X{value}".to_string();
        row.district = "{label}".to_string();

        assert_eq!(
            resolve_view("county").hover_text(&row),
            "X{value} County<br>Total: 7<extra></extra>"
        );
        assert_eq!(
            resolve_view("district").hover_text(&row),
            "District {label}<br>Total: 19<extra></extra>"
        );
    }

    #[test]
    fn from_granularity_matches_resolve() {
        for granularity in Granularity::all() {
            assert_eq!(
                ViewSpec::from(*granularity),
                resolve_view(&granularity.to_string())
            );
        }
    }

    #[test]
    fn serializes_for_rendering_layer() {
        let json = serde_json::to_value(resolve_view("county")).unwrap();
        assert_eq!(json["granularity"], "county");
        assert_eq!(json["countColumn"], "county_total");
        assert_eq!(json["labelColumn"], "county");
    }
}
