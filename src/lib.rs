//! Headless logic of a year/month picker widget.
//!
//! The crate turns what a user types into a [`YearMonth`] according to a
//! configurable list of format templates, formats values back for display,
//! expands two-digit years against a reference century, and validates values
//! against optional `YYYY-MM` bounds. [`MonthPicker`] ties these together
//! into the state a UI host renders.

mod calendar;
mod century;
mod codec;
mod consts;
mod format;
mod locale;
mod picker;
mod prelude;
mod range;
mod types;

pub use calendar::{CalendarPage, MonthCell};
pub use century::{ReferenceCentury, current_century, current_year, resolve_century};
pub use codec::{CodecConfig, DateValueCodec, InputOutcome};
pub use consts::*;
pub use format::{FormatError, MonthToken, ParsedValue, Segment, Template, YearToken, scan};
pub use locale::{ConfigError, Locale};
pub use picker::{MonthPicker, ValueChange};
pub use range::{MonthRange, RangeError, is_invalid, is_year_disabled, month_allowed};
pub use types::{Century, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar month: a year and a month, nothing finer.
///
/// The canonical text form is the zero-padded `YYYY-MM`, which is what
/// `Display`, `FromStr` and serde use. Because it is zero-padded, ordering
/// the canonical strings lexicographically orders the values chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid year-month format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid century: {} (must be 0-{})", "_0", "Century::MAX")]
    InvalidCentury(u16),
    #[display(fmt = "Empty year-month string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl YearMonth {
    /// Creates a year-month from already validated parts
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Creates a year-month from raw numbers
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth` when a part is out of range.
    pub fn from_parts(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// Returns the year component as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component as u8 (1-based)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Same month in another year
    pub const fn with_year(self, year: Year) -> Self {
        Self { year, month: self.month }
    }

    /// The canonical `YYYY-MM` string
    pub fn to_canonical(&self) -> String {
        self.to_string()
    }

    /// Reads a canonical `YYYY-MM` value.
    ///
    /// An empty string means "no selection" and yields `Ok(None)`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if either part is missing or not numeric,
    /// and `InvalidYear`/`InvalidMonth` if a part is out of range.
    pub fn from_canonical(value: &str) -> Result<Option<Self>, ParseError> {
        if value.is_empty() {
            return Ok(None);
        }
        let (year, month) = value
            .split_once(CANONICAL_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat(value.to_owned()))?;
        if month.contains(CANONICAL_SEPARATOR) {
            return Err(ParseError::InvalidFormat(value.to_owned()));
        }
        let year = parse_digits::<u16>(year).ok_or_else(|| ParseError::InvalidFormat(value.to_owned()))?;
        let month = parse_digits::<u8>(month).ok_or_else(|| ParseError::InvalidFormat(value.to_owned()))?;
        Self::from_parts(year, month).map(Some)
    }
}

/// Parses a string made only of ASCII digits.
/// Signs and whitespace, which `str::parse` would partly accept, are rejected.
pub(crate) fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s.trim())?.ok_or(ParseError::EmptyInput)
    }
}

impl TryFrom<(u16, u8)> for YearMonth {
    type Error = ParseError;

    fn try_from(value: (u16, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1)
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn ym(year: u16, month: u8) -> YearMonth {
        YearMonth::from_parts(year, month).expect("test year-month out of range")
    }

    pub fn year(value: u16) -> Year {
        Year::new(value).expect("test year out of range")
    }

    pub fn month(value: u8) -> Month {
        Month::new(value).expect("test month out of range")
    }

    pub fn century(value: u16) -> Century {
        Century::new(value).expect("test century out of range")
    }
}
