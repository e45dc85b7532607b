use crate::ParseError;
use crate::consts::{MAX_MONTH, MAX_YEAR, YEARS_PER_CENTURY};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Largest valid year
    pub const MAX: Self = match NonZeroU16::new(MAX_YEAR) {
        Some(value) => Self(value),
        None => panic!("MAX_YEAR must be non-zero"),
    };

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the century this year belongs to (2025 -> 20)
    #[inline]
    pub const fn century(self) -> Century {
        Century(self.get() / YEARS_PER_CENTURY)
    }

    /// Returns the last two digits of the year (2025 -> 25)
    #[inline]
    pub const fn two_digit(self) -> u16 {
        self.get() % YEARS_PER_CENTURY
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index into a month-name table
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }

    /// Iterates January through December
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(|m| Self::new(m).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

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

/// A century number (the `20` of 2025), guaranteed to keep every
/// two-digit year it expands within `MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Century(u16);

impl Century {
    /// Highest century whose two-digit years stay within `MAX_YEAR`
    pub const MAX: u16 = MAX_YEAR / YEARS_PER_CENTURY;

    /// Creates a new Century
    ///
    /// # Errors
    /// Returns `ParseError::InvalidCentury` if the value is > `Century::MAX`.
    pub const fn new(value: u16) -> Result<Self, ParseError> {
        if value > Self::MAX {
            return Err(ParseError::InvalidCentury(value));
        }
        Ok(Self(value))
    }

    /// Returns the century value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Places a two-digit year in this century (25 in century 20 -> 2025)
    #[inline]
    pub const fn expand(self, two_digit_year: u16) -> u16 {
        two_digit_year + self.0 * YEARS_PER_CENTURY
    }
}

impl TryFrom<u16> for Century {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
