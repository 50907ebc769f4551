//! Date code generation, one operation per era.
//!
//! Each era comes in two forms: explicit numeric fields, or a calendar
//! date that the encoder reduces to (year, month) or (year, ISO week)
//! itself. Validation runs before any formatting: argument presence
//! first, then numeric ranges, then the location format.

use chrono::{Datelike, NaiveDate};

use crate::DateCodeError;
use crate::consts::{
    EIGHTIES_END_YEAR, EIGHTIES_FIRST_YEAR, MODERN_FIRST_YEAR, NINETIES_END_YEAR,
    NINETIES_FIRST_YEAR,
};
use crate::types::{FactoryCode, Month, Week};

/// Encodes a year and month using the early 1980s rules: the last two
/// year digits immediately followed by the month digits, unpadded.
/// `(1981, 2)` encodes as `"812"`.
///
/// # Errors
/// `OutOfRange` if the year is outside 1980..=1989 or the month outside
/// 1..=12.
pub fn early_1980(year: u16, month: u8) -> Result<String, DateCodeError> {
    check_year(year, EIGHTIES_FIRST_YEAR, EIGHTIES_END_YEAR)?;
    let month = Month::new(month)?;
    Ok(format!("{:02}{}", year % 100, month.get()))
}

/// Same as [`early_1980`], reduced from a calendar date.
///
/// # Errors
/// `OutOfRange` if the date falls outside the 1980s.
pub fn early_1980_from_date(date: NaiveDate) -> Result<String, DateCodeError> {
    check_date(date, EIGHTIES_FIRST_YEAR, EIGHTIES_END_YEAR)?;
    Ok(format!("{:02}{}", date.year() % 100, date.month()))
}

/// Encodes using the late 1980s rules: as [`early_1980`] with the
/// uppercased location appended. `("sd", 1986, 5)` encodes as `"865SD"`.
///
/// # Errors
/// `InvalidArgument` for an empty location, `OutOfRange` for a year or
/// month outside the era, `InvalidFormat` for a non-letter location.
pub fn late_1980(code: &str, year: u16, month: u8) -> Result<String, DateCodeError> {
    require_location(code)?;
    check_year(year, EIGHTIES_FIRST_YEAR, EIGHTIES_END_YEAR)?;
    let month = Month::new(month)?;
    let location = FactoryCode::new(code)?;
    Ok(format!("{:02}{}{}", year % 100, month.get(), location))
}

/// Same as [`late_1980`], reduced from a calendar date.
///
/// # Errors
/// As [`late_1980`], with the range applied to the date.
pub fn late_1980_from_date(code: &str, date: NaiveDate) -> Result<String, DateCodeError> {
    require_location(code)?;
    check_date(date, EIGHTIES_FIRST_YEAR, EIGHTIES_END_YEAR)?;
    let location = FactoryCode::new(code)?;
    Ok(format!("{:02}{}{}", date.year() % 100, date.month(), location))
}

/// Encodes using the 1990-2006 rules: the uppercased location followed
/// by the interleaved month and year digits. `("sd", 1991, 6)` encodes
/// as `"SD0961"`.
///
/// # Errors
/// `InvalidArgument` for an empty location, `OutOfRange` for a year
/// outside 1990..=2005 or a month outside 1..=12, `InvalidFormat` for a
/// non-letter location.
pub fn mid_1990(code: &str, year: u16, month: u8) -> Result<String, DateCodeError> {
    require_location(code)?;
    check_year(year, NINETIES_FIRST_YEAR, NINETIES_END_YEAR)?;
    let month = Month::new(month)?;
    let location = FactoryCode::new(code)?;
    Ok(interleave(&location, month.get(), (year % 100) as u8))
}

/// Same as [`mid_1990`], reduced from a calendar date.
/// Calendar input is accepted through 2006-11-30, beyond the explicit
/// form's last year.
///
/// # Errors
/// As [`mid_1990`], with the range applied to the date.
pub fn mid_1990_from_date(code: &str, date: NaiveDate) -> Result<String, DateCodeError> {
    require_location(code)?;
    let year = date.year();
    let in_range = year >= i32::from(NINETIES_FIRST_YEAR)
        && (year < i32::from(NINETIES_END_YEAR)
            || (year == i32::from(NINETIES_END_YEAR) && date.month() < 12));
    if !in_range {
        return Err(DateCodeError::OutOfRange {
            field: "manufacturing date",
            value: year,
            min: i32::from(NINETIES_FIRST_YEAR),
            max: i32::from(NINETIES_END_YEAR),
        });
    }
    let location = FactoryCode::new(code)?;
    Ok(interleave(&location, date.month() as u8, (year % 100) as u8))
}

/// Encodes using the post-2007 rules: the uppercased location followed
/// by the interleaved ISO week and year digits. `("sd", 2008, 3)`
/// encodes as `"SD0038"`.
///
/// `as_of` is the reference date bounding the manufacturing year from
/// above; callers supply it instead of the system clock so results stay
/// deterministic.
///
/// # Errors
/// `InvalidArgument` for an empty location, `OutOfRange` for a year
/// outside 2007..=`as_of.year()` or a week above 53, `InvalidFormat`
/// for a non-letter location.
pub fn post_2007(
    code: &str,
    year: u16,
    week: u8,
    as_of: NaiveDate,
) -> Result<String, DateCodeError> {
    require_location(code)?;
    if !(i32::from(MODERN_FIRST_YEAR)..=as_of.year()).contains(&i32::from(year)) {
        return Err(DateCodeError::OutOfRange {
            field: "manufacturing year",
            value: i32::from(year),
            min: i32::from(MODERN_FIRST_YEAR),
            max: as_of.year(),
        });
    }
    let week = Week::new(week)?;
    let location = FactoryCode::new(code)?;
    Ok(interleave(&location, week.get(), (year % 100) as u8))
}

/// Same as [`post_2007`], reduced from a calendar date.
///
/// The week number and its year both come from the ISO 8601 week date,
/// so a code stamped in the last days of December or the first days of
/// January carries the week's year, not the calendar year.
///
/// # Errors
/// As [`post_2007`]; the date may not be after `as_of`.
pub fn post_2007_from_date(
    code: &str,
    date: NaiveDate,
    as_of: NaiveDate,
) -> Result<String, DateCodeError> {
    require_location(code)?;
    if date.year() < i32::from(MODERN_FIRST_YEAR) || date > as_of {
        return Err(DateCodeError::OutOfRange {
            field: "manufacturing date",
            value: date.year(),
            min: i32::from(MODERN_FIRST_YEAR),
            max: as_of.year(),
        });
    }
    let location = FactoryCode::new(code)?;
    let iso = date.iso_week();
    Ok(interleave(&location, iso.week() as u8, (iso.year() % 100) as u8))
}

fn require_location(code: &str) -> Result<(), DateCodeError> {
    if code.is_empty() {
        return Err(DateCodeError::InvalidArgument("factory location code"));
    }
    Ok(())
}

fn check_year(year: u16, first: u16, end: u16) -> Result<(), DateCodeError> {
    if !(first..end).contains(&year) {
        return Err(DateCodeError::OutOfRange {
            field: "manufacturing year",
            value: i32::from(year),
            min: i32::from(first),
            max: i32::from(end) - 1,
        });
    }
    Ok(())
}

fn check_date(date: NaiveDate, first: u16, end: u16) -> Result<(), DateCodeError> {
    let year = date.year();
    if !(i32::from(first)..i32::from(end)).contains(&year) {
        return Err(DateCodeError::OutOfRange {
            field: "manufacturing date",
            value: year,
            min: i32::from(first),
            max: i32::from(end) - 1,
        });
    }
    Ok(())
}

/// Interleaves the period (month or week) with the two-digit year:
/// period tens, year tens, period ones, year ones. The period is
/// zero-padded to two digits.
fn interleave(location: &FactoryCode, period: u8, year: u8) -> String {
    format!(
        "{location}{}{}{}{}",
        period / 10,
        year / 10,
        period % 10,
        year % 10
    )
}
