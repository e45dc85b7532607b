//! The page of twelve months shown in the picker's popover.

use serde::Serialize;

use crate::YearMonth;
use crate::range::MonthRange;
use crate::types::{Month, Year};

/// One month button of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    pub label:    String,
    pub value:    YearMonth,
    pub disabled: bool,
    pub selected: bool,
}

/// A year of month cells plus the state of the year navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPage {
    year:                   Year,
    cells:                  Vec<MonthCell>,
    previous_year_disabled: bool,
    next_year_disabled:     bool,
}

impl CalendarPage {
    /// Lays out `year`. Cells outside `range` are disabled; the cell equal to
    /// `selected` is marked. `labels` holds one label per month, January first.
    pub fn new(year: Year, selected: Option<YearMonth>, range: &MonthRange, labels: &[String]) -> Self {
        let cells = Month::all()
            .zip(labels)
            .map(|(month, label)| {
                let value = YearMonth::new(year, month);
                MonthCell {
                    label: label.clone(),
                    value,
                    disabled: !range.contains(&value),
                    selected: selected == Some(value),
                }
            })
            .collect();

        let navigable = |target: Option<u16>| {
            target
                .and_then(|y| Year::new(y).ok())
                .is_some_and(|y| !range.is_year_disabled(y))
        };

        Self {
            year,
            cells,
            previous_year_disabled: !navigable(year.get().checked_sub(1)),
            next_year_disabled: !navigable(year.get().checked_add(1)),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub fn cells(&self) -> &[MonthCell] {
        &self.cells
    }

    pub fn cell(&self, month: Month) -> Option<&MonthCell> {
        self.cells.get(month.index())
    }

    pub const fn previous_year_disabled(&self) -> bool {
        self.previous_year_disabled
    }

    pub const fn next_year_disabled(&self) -> bool {
        self.next_year_disabled
    }
}
