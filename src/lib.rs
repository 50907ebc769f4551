//! Encoding and decoding of the manufacturing date codes stamped on
//! luxury goods.
//!
//! Four historical layouts are supported, each with its own field order
//! and length:
//!
//! | era | length | layout |
//! |---|---|---|
//! | early 1980s | 3-4 | two year digits, then the month |
//! | late 1980s | 5-6 | two year digits, month, two-letter location |
//! | 1990-2006 | 6 | location, then month/year digits interleaved |
//! | post-2007 | 6 | location, then ISO week/year digits interleaved |
//!
//! The interleaved formats alternate the digits of the period field and
//! the two-digit year (period tens, year tens, period ones, year ones),
//! and widen the two-digit year with a fixed threshold: 90 and above is
//! the 1900s, anything below the 2000s.
//!
//! Factory location codes resolve to the countries that have used them
//! via [`resolve_countries`]; a code can belong to more than one country
//! because factories relocated. Unknown codes resolve to an empty list
//! rather than an error.
//!
//! Everything is pure and synchronous: the only process-wide data is the
//! compiled-in location table, and the one time-dependent validation
//! (the post-2007 upper year bound) takes an explicit reference date
//! instead of reading a clock.

mod consts;
mod country;
mod prelude;
mod types;

pub mod decode;
pub mod encode;

pub use consts::*;
pub use country::{Country, resolve_countries};
pub use decode::ParsedCode;
pub use types::{Era, FactoryCode, Month, Week};

use crate::prelude::*;
use std::str::FromStr;

/// Error type for encoding, decoding and location lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateCodeError {
    /// A required string argument was empty.
    #[error("missing required argument: {0}")]
    InvalidArgument(&'static str),

    /// A numeric field fell outside the legal range for its era.
    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    /// Wrong length, or illegal characters where letters or digits are
    /// mandated.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A manufacturing date as a date code carries it: a calendar month of
/// a year for the pre-2007 layouts, or an ISO week of a year for the
/// post-2007 layout.
///
/// The validating constructors are [`new_month`](Self::new_month) and
/// [`new_week`](Self::new_week); values recovered by the decoder keep
/// whatever the code literally said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ManufacturingDate {
    /// Month precision
    #[display(fmt = "{:04}-{:02}", "year", "month")]
    Month { year: u16, month: u8 },
    /// ISO week precision
    #[display(fmt = "{:04}-W{:02}", "year", "week")]
    Week { year: u16, week: u8 },
}

impl ManufacturingDate {
    /// Creates a month-precision date, validating the month.
    ///
    /// # Errors
    /// Returns `DateCodeError::OutOfRange` for a month outside 1..=12.
    pub fn new_month(year: u16, month: u8) -> Result<Self, DateCodeError> {
        let month = types::Month::new(month)?;
        Ok(Self::Month {
            year,
            month: month.get(),
        })
    }

    /// Creates a week-precision date, validating the week.
    ///
    /// # Errors
    /// Returns `DateCodeError::OutOfRange` for a week above 53.
    pub fn new_week(year: u16, week: u8) -> Result<Self, DateCodeError> {
        let week = types::Week::new(week)?;
        Ok(Self::Week {
            year,
            week: week.get(),
        })
    }

    /// Returns the year component (always present)
    pub const fn year(&self) -> u16 {
        match *self {
            Self::Month { year, .. } | Self::Week { year, .. } => year,
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u8> {
        match *self {
            Self::Month { month, .. } => Some(month),
            Self::Week { .. } => None,
        }
    }

    /// Returns the ISO week component if present
    pub const fn week(&self) -> Option<u8> {
        match *self {
            Self::Week { week, .. } => Some(week),
            Self::Month { .. } => None,
        }
    }
}

impl FromStr for ManufacturingDate {
    type Err = DateCodeError;

    /// Parses `YYYY-MM` (month precision) or `YYYY-Www` (week precision).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateCodeError::InvalidArgument("manufacturing date"));
        }
        let Some((year_part, period_part)) = trimmed.split_once('-') else {
            return Err(DateCodeError::InvalidFormat(format!(
                "expected YYYY-MM or YYYY-Www: {trimmed:?}"
            )));
        };
        let year = year_part
            .parse()
            .map_err(|_| DateCodeError::InvalidFormat(format!("year: {year_part:?}")))?;
        if let Some(week_part) = period_part.strip_prefix('W') {
            let week = week_part
                .parse()
                .map_err(|_| DateCodeError::InvalidFormat(format!("week: {week_part:?}")))?;
            Self::new_week(year, week)
        } else {
            let month = period_part
                .parse()
                .map_err(|_| DateCodeError::InvalidFormat(format!("month: {period_part:?}")))?;
            Self::new_month(year, month)
        }
    }
}

impl serde::Serialize for ManufacturingDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ManufacturingDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_month_validates() {
        assert!(ManufacturingDate::new_month(1991, 6).is_ok());
        assert!(ManufacturingDate::new_month(1991, 0).is_err());
        assert!(ManufacturingDate::new_month(1991, 13).is_err());
    }

    #[test]
    fn test_new_week_validates() {
        assert!(ManufacturingDate::new_week(2008, 0).is_ok());
        assert!(ManufacturingDate::new_week(2008, 53).is_ok());
        assert!(ManufacturingDate::new_week(2008, 54).is_err());
    }

    #[test]
    fn test_accessors() {
        let date = ManufacturingDate::new_month(1991, 6).unwrap();
        assert_eq!(date.year(), 1991);
        assert_eq!(date.month(), Some(6));
        assert_eq!(date.week(), None);

        let date = ManufacturingDate::new_week(2008, 3).unwrap();
        assert_eq!(date.year(), 2008);
        assert_eq!(date.month(), None);
        assert_eq!(date.week(), Some(3));
    }

    #[test]
    fn test_display() {
        let date = ManufacturingDate::new_month(1991, 6).unwrap();
        assert_eq!(date.to_string(), "1991-06");

        let date = ManufacturingDate::new_week(2008, 3).unwrap();
        assert_eq!(date.to_string(), "2008-W03");
    }

    #[test]
    fn test_from_str() {
        let date = "1991-06".parse::<ManufacturingDate>().unwrap();
        assert_eq!(
            date,
            ManufacturingDate::Month {
                year: 1991,
                month: 6
            }
        );

        let date = "2008-W03".parse::<ManufacturingDate>().unwrap();
        assert_eq!(
            date,
            ManufacturingDate::Week {
                year: 2008,
                week: 3
            }
        );
    }

    #[test]
    fn test_from_str_bad_input() {
        assert!(matches!(
            "".parse::<ManufacturingDate>(),
            Err(DateCodeError::InvalidArgument(_))
        ));
        assert!(matches!(
            "1991".parse::<ManufacturingDate>(),
            Err(DateCodeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-13".parse::<ManufacturingDate>(),
            Err(DateCodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            "2008-W54".parse::<ManufacturingDate>(),
            Err(DateCodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            "199x-06".parse::<ManufacturingDate>(),
            Err(DateCodeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let date = ManufacturingDate::new_month(1991, 6).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1991-06""#);
        let parsed: ManufacturingDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let date = ManufacturingDate::new_week(2008, 3).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2008-W03""#);
        let parsed: ManufacturingDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<ManufacturingDate, _> = serde_json::from_str(r#""1991-13""#);
        assert!(result.is_err());

        let result: Result<ManufacturingDate, _> = serde_json::from_str(r#""2008-W54""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        let err = DateCodeError::InvalidArgument("date code");
        assert_eq!(err.to_string(), "missing required argument: date code");

        let err = DateCodeError::OutOfRange {
            field: "manufacturing year",
            value: 1979,
            min: 1980,
            max: 1989,
        };
        assert_eq!(
            err.to_string(),
            "manufacturing year 1979 is outside 1980..=1989"
        );
    }
}
