//! Well and county reference CSV readers.

use std::io::Read;

use orphan_wells_models::fips::normalize_county_fips;
use orphan_wells_models::{GeoReference, WellRecord};

use crate::{ColumnNames, LoadError};

/// Resolves configured header names to column indexes.
fn column_indexes<R: Read>(
    reader: &mut csv::Reader<R>,
    names: &[&str],
) -> Result<Vec<usize>, LoadError> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_owned())
        .collect();

    names
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h.as_str() == *name)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: (*name).to_string(),
                })
        })
        .collect()
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

fn required_field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    column: &str,
) -> Result<&'r str, LoadError> {
    match record.get(idx).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LoadError::Row {
            line: line_of(record),
            message: format!("missing value for '{column}'"),
        }),
    }
}

/// Parses a months-inactive value. Integers exported through a float
/// column (e.g. `"36.0"`) are accepted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_months(raw: &str) -> Option<u32> {
    if let Ok(months) = raw.parse::<u32>() {
        return Some(months);
    }

    let value = raw.parse::<f64>().ok()?;
    if value.is_finite()
        && value >= 0.0
        && value.fract() == 0.0
        && value <= f64::from(u32::MAX)
    {
        Some(value as u32)
    } else {
        None
    }
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().flexible(true).from_reader(input)
}

/// Reads well records from CSV.
///
/// # Errors
///
/// Returns [`LoadError`] if a configured column is missing or any row has
/// an empty county/district or a months-inactive value that is not a
/// non-negative integer.
pub fn read_wells<R: Read>(
    input: R,
    columns: &ColumnNames,
) -> Result<Vec<WellRecord>, LoadError> {
    let mut reader = csv_reader(input);
    let idx = column_indexes(
        &mut reader,
        &[
            columns.well_county.as_str(),
            columns.well_district.as_str(),
            columns.well_months_inactive.as_str(),
        ],
    )?;

    let mut wells = Vec::new();
    for result in reader.records() {
        let record = result?;

        let county = required_field(&record, idx[0], &columns.well_county)?;
        let district = required_field(&record, idx[1], &columns.well_district)?;
        let raw_months = required_field(&record, idx[2], &columns.well_months_inactive)?;
        let months_inactive = parse_months(raw_months).ok_or_else(|| LoadError::Row {
            line: line_of(&record),
            message: format!(
                "'{}' must be a non-negative integer, got '{raw_months}'",
                columns.well_months_inactive
            ),
        })?;

        wells.push(WellRecord::new(county, district, months_inactive));
    }

    Ok(wells)
}

/// Reads county reference rows from CSV, normalizing FIPS codes to five
/// digits. A blank FIPS value is kept as `None`.
///
/// # Errors
///
/// Returns [`LoadError`] if a configured column is missing, a county or
/// district is empty, or a FIPS value is not 1-5 digits.
pub fn read_geography<R: Read>(
    input: R,
    columns: &ColumnNames,
) -> Result<Vec<GeoReference>, LoadError> {
    let mut reader = csv_reader(input);
    let idx = column_indexes(
        &mut reader,
        &[
            columns.geo_county.as_str(),
            columns.geo_district.as_str(),
            columns.geo_fips.as_str(),
        ],
    )?;

    let mut geography = Vec::new();
    for result in reader.records() {
        let record = result?;

        let county = required_field(&record, idx[0], &columns.geo_county)?;
        let district = required_field(&record, idx[1], &columns.geo_district)?;
        let fips = normalize_county_fips(record.get(idx[2]).unwrap_or("")).map_err(|e| {
            LoadError::Row {
                line: line_of(&record),
                message: e.to_string(),
            }
        })?;

        if fips.is_none() {
            log::debug!("County '{county}' has no FIPS code and cannot be mapped");
        }

        geography.push(GeoReference {
            county: county.to_string(),
            district: district.to_string(),
            fips,
        });
    }

    Ok(geography)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> ColumnNames {
        ColumnNames::default()
    }

    #[test]
    fn reads_wells() {
        let csv = "county,district,months_inactive\nKern,4,10\n Kern ,4,300\nOFFSHORE,1,36.0\n";
        let wells = read_wells(csv.as_bytes(), &columns()).unwrap();

        assert_eq!(
            wells,
            [
                WellRecord::new("Kern", "4", 10),
                WellRecord::new("Kern", "4", 300),
                WellRecord::new("OFFSHORE", "1", 36),
            ]
        );
    }

    #[test]
    fn columns_are_found_by_name() {
        let csv = "api,months_inactive,district,county\n1,7,D1,A\n";
        let wells = read_wells(csv.as_bytes(), &columns()).unwrap();
        assert_eq!(wells, [WellRecord::new("A", "D1", 7)]);
    }

    #[test]
    fn custom_column_names() {
        let columns = ColumnNames {
            well_county: "COUNTY_NAME".to_string(),
            well_district: "DIST".to_string(),
            well_months_inactive: "MONTHS".to_string(),
            ..ColumnNames::default()
        };
        let csv = "COUNTY_NAME,DIST,MONTHS\nA,D1,3\n";
        let wells = read_wells(csv.as_bytes(), &columns).unwrap();
        assert_eq!(wells[0].months_inactive, 3);
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "county,district\nA,D1\n";
        let err = read_wells(csv.as_bytes(), &columns()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { column } if column == "months_inactive"
        ));
    }

    #[test]
    fn negative_months_is_a_row_error() {
        let csv = "county,district,months_inactive\nA,D1,10\nB,D1,-4\n";
        let err = read_wells(csv.as_bytes(), &columns()).unwrap_err();
        assert!(matches!(err, LoadError::Row { line: 3, .. }), "{err}");
    }

    #[test]
    fn empty_county_is_a_row_error() {
        let csv = "county,district,months_inactive\n,D1,10\n";
        assert!(matches!(
            read_wells(csv.as_bytes(), &columns()),
            Err(LoadError::Row { line: 2, .. })
        ));
    }

    #[test]
    fn reads_geography_with_padded_fips() {
        let csv = "county,district,fips\nAlameda,6,6001\nKern,4,06029\nUnmapped,4,\n";
        let geo = read_geography(csv.as_bytes(), &columns()).unwrap();

        assert_eq!(geo[0].fips.as_deref(), Some("06001"));
        assert_eq!(geo[1].fips.as_deref(), Some("06029"));
        assert_eq!(geo[2].fips, None);
        assert_eq!(geo[2].district, "4");
    }

    #[test]
    fn malformed_fips_is_a_row_error() {
        let csv = "county,district,fips\nAlameda,6,CA-001\n";
        assert!(matches!(
            read_geography(csv.as_bytes(), &columns()),
            Err(LoadError::Row { line: 2, .. })
        ));
    }

    #[test]
    fn months_parsing() {
        assert_eq!(parse_months("0"), Some(0));
        assert_eq!(parse_months("240"), Some(240));
        assert_eq!(parse_months("12.0"), Some(12));
        assert_eq!(parse_months("12.5"), None);
        assert_eq!(parse_months("-1"), None);
        assert_eq!(parse_months("NaN"), None);
    }
}
