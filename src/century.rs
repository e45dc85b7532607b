//! Two-digit year expansion.

use crate::types::{Century, Year};
use crate::{ParseError, YEARS_PER_CENTURY};

/// Expands a parsed year against the reference century.
///
/// Years below 100 are placed in `reference` and leave it unchanged. Any
/// other year is returned as is and becomes the new reference century.
///
/// Years past `MAX_YEAR` are returned untouched; the caller rejects them
/// when it builds a [`Year`].
pub fn resolve_century(parsed_year: u16, reference: Century) -> (u16, Century) {
    if parsed_year < YEARS_PER_CENTURY {
        return (reference.expand(parsed_year), reference);
    }
    let next = Year::new(parsed_year).map_or(reference, Year::century);
    (parsed_year, next)
}

/// This year according to the UTC wall clock
pub fn current_year() -> Year {
    let now = time::OffsetDateTime::now_utc().year();
    u16::try_from(now)
        .ok()
        .and_then(|y| Year::new(y).ok())
        .unwrap_or(Year::MAX)
}

/// The century of [`current_year`], the default home century
pub fn current_century() -> Century {
    current_year().century()
}

/// The reference century of one picker session.
///
/// Starts at a configured "home" century, follows every four-digit year the
/// user types or selects, and falls back to home when the input is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCentury {
    home:    Century,
    current: Century,
}

impl ReferenceCentury {
    pub const fn new(home: Century) -> Self {
        Self { home, current: home }
    }

    /// The century two-digit years are currently expanded into
    pub const fn get(&self) -> Century {
        self.current
    }

    /// The century restored by [`reset`](Self::reset)
    pub const fn home(&self) -> Century {
        self.home
    }

    /// Expands `parsed_year` and records the resulting reference century.
    /// The reference century is left alone when the expanded year is invalid.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the expanded year is outside `1..=MAX_YEAR`.
    pub fn resolve(&mut self, parsed_year: u16) -> Result<Year, ParseError> {
        let (resolved, next) = resolve_century(parsed_year, self.current);
        let year = Year::new(resolved)?;
        if next != self.current {
            tracing::debug!(from = %self.current, to = %next, "reference century updated");
        }
        self.current = next;
        Ok(year)
    }

    /// Follows an explicitly selected year
    pub fn follow(&mut self, year: Year) {
        self.current = year.century();
    }

    pub fn reset(&mut self) {
        self.current = self.home;
    }
}
