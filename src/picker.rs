//! Headless month picker: the state behind a text field and its popover calendar.

use crate::calendar::CalendarPage;
use crate::century::current_year;
use crate::codec::{DateValueCodec, InputOutcome};
use crate::range::MonthRange;
use crate::types::Year;
use crate::{ParseError, YearMonth};

/// A user-driven change of the picker's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChange {
    pub previous: Option<YearMonth>,
    pub current:  Option<YearMonth>,
}

/// State of one picker instance.
///
/// The host renders [`display_text`](Self::display_text) in the text field
/// and [`calendar`](Self::calendar) in the popover, and forwards user
/// actions to the methods below. Methods driven by the user return a
/// [`ValueChange`] when the value actually changed.
#[derive(Debug, Clone)]
pub struct MonthPicker {
    codec:       DateValueCodec,
    value:       Option<YearMonth>,
    range:       MonthRange,
    opened:      bool,
    disabled:    bool,
    readonly:    bool,
    opened_year: Year,
}

impl MonthPicker {
    pub fn new(codec: DateValueCodec) -> Self {
        Self {
            codec,
            value: None,
            range: MonthRange::unbounded(),
            opened: false,
            disabled: false,
            readonly: false,
            opened_year: current_year(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: MonthRange) -> Self {
        self.range = range;
        self
    }

    pub const fn set_range(&mut self, range: MonthRange) {
        self.range = range;
    }

    pub const fn range(&self) -> &MonthRange {
        &self.range
    }

    pub const fn codec(&self) -> &DateValueCodec {
        &self.codec
    }

    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub const fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// The canonical `YYYY-MM` value, or an empty string without a selection
    pub fn value(&self) -> String {
        self.value.map(|v| v.to_canonical()).unwrap_or_default()
    }

    pub const fn year_month(&self) -> Option<YearMonth> {
        self.value
    }

    /// Sets the value from the host's canonical string. Empty clears it.
    ///
    /// # Errors
    /// Returns a `ParseError` if `value` is not a canonical year-month; the
    /// current value is kept.
    pub fn set_value(&mut self, value: &str) -> Result<(), ParseError> {
        self.value = YearMonth::from_canonical(value)?;
        Ok(())
    }

    /// The value formatted for the text field
    pub fn display_text(&self) -> String {
        self.value.map(|v| self.codec.format(v)).unwrap_or_default()
    }

    /// True when a value is set and lies outside the range
    pub fn is_invalid(&self) -> bool {
        self.value.is_some_and(|v| !self.range.contains(&v))
    }

    pub const fn is_opened(&self) -> bool {
        self.opened
    }

    /// The year the popover calendar shows
    pub const fn opened_year(&self) -> Year {
        self.opened_year
    }

    /// Click on the text field. Returns whether the popover is now open.
    pub fn toggle_opened(&mut self) -> bool {
        self.toggle_opened_at(current_year())
    }

    /// [`toggle_opened`](Self::toggle_opened) with an explicit current year.
    pub fn toggle_opened_at(&mut self, today: Year) -> bool {
        if self.disabled || self.readonly {
            return self.opened;
        }
        if self.opened {
            self.close();
        } else {
            self.opened = true;
            self.refresh_opened_year(today);
        }
        self.opened
    }

    pub const fn close(&mut self) {
        self.opened = false;
    }

    /// The user committed the text field.
    ///
    /// Input that does not parse clears the value, as does blank input.
    pub fn commit_input(&mut self, input: &str) -> Option<ValueChange> {
        let next = match self.codec.interpret_input(input) {
            InputOutcome::Parsed(value) => Some(value),
            InputOutcome::Cleared => None,
            InputOutcome::Invalid => {
                tracing::debug!(input, "clearing picker value after unparseable input");
                None
            },
        };
        let change = self.replace_value(next);
        if self.opened {
            self.refresh_opened_year(current_year());
        }
        change
    }

    /// The user clicked a month cell.
    ///
    /// Months that are not allowed are ignored. Clicking the selected month
    /// clears the value and resets the reference century, like clearing the
    /// text field. The popover closes either way.
    pub fn select_month(&mut self, value: YearMonth) -> Option<ValueChange> {
        if self.disabled || self.readonly || !self.range.month_allowed(&value) {
            return None;
        }
        self.opened = false;
        if self.value == Some(value) {
            self.codec.reset_century();
            return self.replace_value(None);
        }
        self.codec.note_selection(value);
        self.replace_value(Some(value))
    }

    /// Shows the previous year unless it is disabled. Returns whether it moved.
    pub fn previous_year(&mut self) -> bool {
        self.step_year(self.opened_year.get().checked_sub(1))
    }

    /// Shows the next year unless it is disabled. Returns whether it moved.
    pub fn next_year(&mut self) -> bool {
        self.step_year(self.opened_year.get().checked_add(1))
    }

    /// The calendar page for the shown year
    pub fn calendar(&self) -> CalendarPage {
        CalendarPage::new(
            self.opened_year,
            self.value,
            &self.range,
            self.codec.locale().short_month_names(),
        )
    }

    fn step_year(&mut self, target: Option<u16>) -> bool {
        match target.and_then(|y| Year::new(y).ok()) {
            Some(year) if !self.range.is_year_disabled(year) => {
                self.opened_year = year;
                true
            },
            _ => false,
        }
    }

    // The selected value stays visible; without one, show today clamped into the range.
    fn refresh_opened_year(&mut self, today: Year) {
        self.opened_year = self
            .value
            .map_or_else(|| self.range.clamp_year(today), |v| v.year_typed());
    }

    fn replace_value(&mut self, next: Option<YearMonth>) -> Option<ValueChange> {
        let previous = std::mem::replace(&mut self.value, next);
        (previous != next).then_some(ValueChange { previous, current: next })
    }
}
