//! County FIPS code utilities.
//!
//! A county FIPS code is the two-digit state code followed by the
//! three-digit county code, e.g. `"06029"` for Kern County, California.
//! Spreadsheet tooling routinely stores these as integers and drops the
//! leading zero, so every code read from a file goes through
//! [`normalize_county_fips`] before it is used as a join key.

/// Number of digits in a county FIPS code.
pub const COUNTY_FIPS_LEN: usize = 5;

/// Error returned when a value cannot be read as a county FIPS code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFipsError {
    /// The rejected input, trimmed.
    pub value: String,
}

impl std::fmt::Display for InvalidFipsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid county FIPS code '{}': expected 1-{} digits",
            self.value, COUNTY_FIPS_LEN
        )
    }
}

impl std::error::Error for InvalidFipsError {}

/// Normalizes a raw county FIPS value to its five-digit zero-padded form.
///
/// Blank input yields `Ok(None)`. A trailing `".0"` (integers that passed
/// through a float column) is tolerated.
///
/// # Errors
///
/// Returns [`InvalidFipsError`] if the value is not 1-5 ASCII digits.
pub fn normalize_county_fips(raw: &str) -> Result<Option<String>, InvalidFipsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let digits = trimmed.strip_suffix(".0").unwrap_or(trimmed);

    if digits.is_empty()
        || digits.len() > COUNTY_FIPS_LEN
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(InvalidFipsError {
            value: trimmed.to_string(),
        });
    }

    Ok(Some(format!("{digits:0>width$}", width = COUNTY_FIPS_LEN)))
}
