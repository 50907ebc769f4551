use crate::DateCodeError;
use crate::consts::{MAX_MONTH, MAX_WEEK};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A manufacturing month guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateCodeError::OutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateCodeError> {
        let out_of_range = DateCodeError::OutOfRange {
            field: "manufacturing month",
            value: i32::from(value),
            min: 1,
            max: i32::from(MAX_MONTH),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| out_of_range.clone())?;
        if value > MAX_MONTH {
            return Err(out_of_range);
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ISO week number in the range `0..=MAX_WEEK` (0..=53).
/// Week 0 is representable: only the upper bound is enforced, matching
/// the codes seen in the wild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Week(u8);

impl Week {
    /// Creates a new Week, validating that it's <= `MAX_WEEK`
    ///
    /// # Errors
    /// Returns `DateCodeError::OutOfRange` if the value is > `MAX_WEEK`.
    pub fn new(value: u8) -> Result<Self, DateCodeError> {
        if value > MAX_WEEK {
            return Err(DateCodeError::OutOfRange {
                field: "manufacturing week",
                value: i32::from(value),
                min: 0,
                max: i32::from(MAX_WEEK),
            });
        }
        Ok(Self(value))
    }

    /// Returns the week value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Week {
    type Error = DateCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A factory location code: one or more ASCII letters, stored uppercase.
///
/// Documented codes are exactly two letters, but any all-letter string is
/// accepted; codes of another length simply resolve to no known country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FactoryCode(String);

impl FactoryCode {
    /// Creates a new FactoryCode, canonicalizing it to uppercase.
    ///
    /// # Errors
    /// Returns `DateCodeError::InvalidArgument` if the code is empty, or
    /// `DateCodeError::InvalidFormat` if it contains a non-letter.
    pub fn new(code: &str) -> Result<Self, DateCodeError> {
        if code.is_empty() {
            return Err(DateCodeError::InvalidArgument("factory location code"));
        }
        if !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DateCodeError::InvalidFormat(format!(
                "factory location code must contain only letters: {code:?}"
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the canonical (uppercase) code
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FactoryCode {
    type Err = DateCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FactoryCode {
    type Error = DateCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FactoryCode> for String {
    fn from(code: FactoryCode) -> Self {
        code.0
    }
}

impl fmt::Display for FactoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the four historical date code layouts.
/// The era fixes the field order, the code length and the legal ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Era {
    /// 1980-1989: year and month only
    #[display(fmt = "early 1980s")]
    Early1980,
    /// 1980-1989: year, month and factory location
    #[display(fmt = "late 1980s")]
    Late1980,
    /// 1990-2006: location first, month and year digits interleaved
    #[display(fmt = "1990-2006")]
    Mid1990,
    /// 2007 onwards: location first, week and year digits interleaved
    #[display(fmt = "post-2007")]
    Post2007,
}

impl Era {
    /// Expected length of a date code in this era, in characters.
    pub const fn code_len(self) -> RangeInclusive<usize> {
        match self {
            Self::Early1980 => 3..=4,
            Self::Late1980 => 5..=6,
            Self::Mid1990 | Self::Post2007 => 6..=6,
        }
    }
}
