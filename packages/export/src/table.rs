//! Tabular output of region totals.

use std::io::Write;

use orphan_wells_models::{Granularity, RegionTotals};
use serde::Serialize;

use crate::ExportError;

/// Writes region totals as CSV with snake_case headers matching
/// [`Granularity::count_column`] and [`Granularity::label_column`].
///
/// # Errors
///
/// Returns [`ExportError`] if writing fails.
pub fn write_region_totals_csv<W: Write>(
    writer: W,
    rows: &[RegionTotals],
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        Granularity::County.label_column(),
        "fips",
        Granularity::County.count_column(),
        Granularity::District.label_column(),
        Granularity::District.count_column(),
    ])?;

    for row in rows {
        csv.write_record([
            row.county.as_str(),
            row.fips.as_str(),
            row.county_total.to_string().as_str(),
            row.district.as_str(),
            row.district_total.to_string().as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Writes any serializable value as pretty-printed JSON followed by a
/// newline.
///
/// # Errors
///
/// Returns [`ExportError`] if serialization or writing fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RegionTotals> {
        vec![
            RegionTotals {
                county: "A".to_string(),
                fips: "00001".to_string(),
                county_total: 2,
                district: "D1".to_string(),
                district_total: 3,
            },
            RegionTotals {
                county: "Los Angeles, West".to_string(),
                fips: "00002".to_string(),
                county_total: 0,
                district: "D1".to_string(),
                district_total: 3,
            },
        ]
    }

    #[test]
    fn csv_has_stable_headers() {
        let mut out = Vec::new();
        write_region_totals_csv(&mut out, &rows()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("county,fips,county_total,district,district_total")
        );
        assert_eq!(lines.next(), Some("A,00001,2,D1,3"));
        assert_eq!(lines.next(), Some("\"Los Angeles, West\",00002,0,D1,3"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_is_camel_case_array() {
        let mut out = Vec::new();
        write_json(&mut out, rows().as_slice()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["countyTotal"], 2);
        assert_eq!(value[1]["fips"], "00002");
    }
}
