//! Min/max validation of year-month values.
//!
//! The free functions work on the canonical strings a UI host stores, with
//! an empty or absent bound meaning "unbounded". [`MonthRange`] is the typed
//! equivalent used by the picker.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Year;
use crate::{ParseError, RANGE_SEPARATOR, YearMonth};

/// True if `value` sorts before a non-empty `min` or after a non-empty `max`.
///
/// Comparison is lexicographic on the strings, which is chronological for
/// zero-padded `YYYY-MM` values.
pub fn is_invalid(value: &str, min: Option<&str>, max: Option<&str>) -> bool {
    min.is_some_and(|min| !min.is_empty() && value < min) || max.is_some_and(|max| !max.is_empty() && value > max)
}

/// True if `year` lies before the year of `min` or after the year of `max`.
///
/// A bound that is not a canonical value does not restrict anything.
pub fn is_year_disabled(year: u16, min: Option<&str>, max: Option<&str>) -> bool {
    bound_year(min).is_some_and(|min| year < min) || bound_year(max).is_some_and(|max| year > max)
}

/// True if `value` passes both [`is_invalid`] and [`is_year_disabled`].
///
/// `value` itself must be a canonical year-month; anything else is not allowed.
pub fn month_allowed(value: &str, min: Option<&str>, max: Option<&str>) -> bool {
    let Ok(Some(parsed)) = YearMonth::from_canonical(value) else {
        return false;
    };
    !is_invalid(value, min, max) && !is_year_disabled(parsed.year(), min, max)
}

fn bound_year(bound: Option<&str>) -> Option<u16> {
    let bound = bound?;
    match YearMonth::from_canonical(bound) {
        Ok(value) => value.map(|v| v.year()),
        Err(err) => {
            tracing::warn!(bound, error = %err, "ignoring malformed range bound");
            None
        },
    }
}

/// An inclusive range of months, open at either end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MonthRange {
    min: Option<YearMonth>,
    max: Option<YearMonth>,
}

/// Error type for month range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Min is after max.
    #[error("Invalid month range: min ({min}) is after max ({max})")]
    InvalidRange { min: YearMonth, max: YearMonth },

    /// Error parsing a bound.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl MonthRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both bounds are set and min > max.
    pub fn new(min: Option<YearMonth>, max: Option<YearMonth>) -> Result<Self, RangeError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(RangeError::InvalidRange { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// A range with no bounds
    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    /// Builds a range from canonical bound strings; empty or absent means unbounded.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` for a malformed bound, or
    /// `RangeError::InvalidRange` if min > max.
    pub fn from_bounds(min: Option<&str>, max: Option<&str>) -> Result<Self, RangeError> {
        let min = min.map(YearMonth::from_canonical).transpose()?.flatten();
        let max = max.map(YearMonth::from_canonical).transpose()?.flatten();
        Self::new(min, max)
    }

    pub const fn min(&self) -> Option<YearMonth> {
        self.min
    }

    pub const fn max(&self) -> Option<YearMonth> {
        self.max
    }

    /// Checks if the range contains `value`
    pub fn contains(&self, value: &YearMonth) -> bool {
        self.min.is_none_or(|min| min <= *value) && self.max.is_none_or(|max| *value <= max)
    }

    /// Checks if `year` lies outside the years of the bounds
    pub fn is_year_disabled(&self, year: Year) -> bool {
        self.min.is_some_and(|min| year < min.year_typed()) || self.max.is_some_and(|max| year > max.year_typed())
    }

    /// Checks if `value` can be picked: inside the range and in an enabled year
    pub fn month_allowed(&self, value: &YearMonth) -> bool {
        self.contains(value) && !self.is_year_disabled(value.year_typed())
    }

    /// Moves `year` into the years covered by the range
    pub fn clamp_year(&self, year: Year) -> Year {
        let year = self.min.map_or(year, |min| year.max(min.year_typed()));
        self.max.map_or(year, |max| year.min(max.year_typed()))
    }
}

impl std::fmt::Display for MonthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(min) = self.min {
            write!(f, "{min}")?;
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        if let Some(max) = self.max {
            write!(f, "{max}")?;
        }
        Ok(())
    }
}

impl FromStr for MonthRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (min, max) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                Self::from_bounds(Some(min.trim()), Some(max.trim()))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for MonthRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
