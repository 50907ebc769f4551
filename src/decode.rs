//! Date code parsing, one operation per era.
//!
//! Each operation is a single deterministic transformation from the
//! input string to a decoded value. Numeric fields must be decimal
//! digits and the location field must be letters, but decoded values
//! are not range-checked: a well-formed code from outside an era's
//! domain decodes to its literal field values.

use serde::{Deserialize, Serialize};

use crate::consts::{CENTURY_1900, CENTURY_2000, CENTURY_THRESHOLD};
use crate::country::{Country, resolve_countries};
use crate::types::{Era, FactoryCode};
use crate::{DateCodeError, ManufacturingDate};

/// The result of decoding a date code that carries a factory location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCode {
    /// The factory location code, canonicalized to uppercase
    pub location: FactoryCode,
    /// Countries known to have used the location code; empty when the
    /// code is not in the registry
    pub countries: Vec<Country>,
    /// The recovered manufacturing date
    pub date: ManufacturingDate,
}

/// Decodes an early-1980s code: two year digits (1900s implied)
/// followed by the month digits. `"812"` decodes to 1981, month 2.
///
/// # Errors
/// `InvalidArgument` for an empty input, `InvalidFormat` for a length
/// outside 3..=4 or non-digit characters.
pub fn early_1980(code: &str) -> Result<ManufacturingDate, DateCodeError> {
    let code = checked(Era::Early1980, code)?;
    let year = CENTURY_1900 + parse_field("year", &code[..2])?;
    let month = parse_field("month", &code[2..])?;
    Ok(ManufacturingDate::Month {
        year,
        month: month as u8,
    })
}

/// Decodes a late-1980s code: two year digits (1900s implied), the
/// month digits, and a trailing two-letter location.
/// `"865SD"` decodes to 1986, month 5, made in France or the USA.
///
/// # Errors
/// `InvalidArgument` for an empty input, `InvalidFormat` for a length
/// outside 5..=6, non-digit numeric fields or a non-letter location.
pub fn late_1980(code: &str) -> Result<ParsedCode, DateCodeError> {
    let code = checked(Era::Late1980, code)?;
    let split = code.len() - 2;
    let location = FactoryCode::new(&code[split..])?;
    let countries = resolve_countries(location.as_str())?;
    let year = CENTURY_1900 + parse_field("year", &code[..2])?;
    let month = parse_field("month", &code[2..split])?;
    Ok(ParsedCode {
        location,
        countries,
        date: ManufacturingDate::Month {
            year,
            month: month as u8,
        },
    })
}

/// Decodes a 1990-2006 code: a leading two-letter location, then four
/// digits carrying the interleaved month and year.
/// `"SD0961"` decodes to 1991, month 6, made in France or the USA.
///
/// # Errors
/// `InvalidArgument` for an empty input, `InvalidFormat` for a length
/// other than 6, non-digit numeric fields or a non-letter location.
pub fn mid_1990(code: &str) -> Result<ParsedCode, DateCodeError> {
    let code = checked(Era::Mid1990, code)?;
    let location = FactoryCode::new(&code[..2])?;
    let countries = resolve_countries(location.as_str())?;
    let (month, year) = deinterleave("month", &code[2..])?;
    Ok(ParsedCode {
        location,
        countries,
        date: ManufacturingDate::Month { year, month },
    })
}

/// Decodes a post-2007 code: as [`mid_1990`] with an ISO week in place
/// of the month. `"SD0038"` decodes to 2008, week 3.
///
/// # Errors
/// As [`mid_1990`].
pub fn post_2007(code: &str) -> Result<ParsedCode, DateCodeError> {
    let code = checked(Era::Post2007, code)?;
    let location = FactoryCode::new(&code[..2])?;
    let countries = resolve_countries(location.as_str())?;
    let (week, year) = deinterleave("week", &code[2..])?;
    Ok(ParsedCode {
        location,
        countries,
        date: ManufacturingDate::Week { year, week },
    })
}

fn checked(era: Era, code: &str) -> Result<&str, DateCodeError> {
    if code.is_empty() {
        return Err(DateCodeError::InvalidArgument("date code"));
    }
    let expected = era.code_len();
    if !code.is_ascii() || !expected.contains(&code.len()) {
        return Err(DateCodeError::InvalidFormat(format!(
            "a {era} date code is {}..={} ASCII characters: {code:?}",
            expected.start(),
            expected.end()
        )));
    }
    Ok(code)
}

fn parse_field(field: &str, digits: &str) -> Result<u16, DateCodeError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateCodeError::InvalidFormat(format!(
            "{field} field must be decimal digits: {digits:?}"
        )));
    }
    digits
        .parse()
        .map_err(|_| DateCodeError::InvalidFormat(format!("{field} field: {digits:?}")))
}

/// Reverses the encoder's interleave: digits at positions 0 and 2 are
/// the period (month or week), digits at 1 and 3 the two-digit year,
/// which is widened with the century threshold rule.
fn deinterleave(field: &str, digits: &str) -> Result<(u8, u16), DateCodeError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateCodeError::InvalidFormat(format!(
            "{field} and year fields must be decimal digits: {digits:?}"
        )));
    }
    let d = digits.as_bytes();
    let period = (d[0] - b'0') * 10 + (d[2] - b'0');
    let year = u16::from(d[1] - b'0') * 10 + u16::from(d[3] - b'0');
    let year = if year >= CENTURY_THRESHOLD {
        year + CENTURY_1900
    } else {
        year + CENTURY_2000
    };
    Ok((period, year))
}
