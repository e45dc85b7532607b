//! Locale configuration: month names and format templates.

use serde::{Deserialize, Serialize};

use crate::consts::{ENGLISH_MONTH_NAMES, ENGLISH_SHORT_MONTH_NAMES, FALLBACK_FORMATS, MONTHS_PER_YEAR};
use crate::format::FormatError;
use crate::types::Month;

/// Month names and formats shown to and accepted from the user.
///
/// Field names follow the JSON a UI host passes in (`monthNames`,
/// `shortMonthNames`, `formats`); missing fields take the English defaults.
/// The first format is the display format, every format is accepted as
/// input. An empty `formats` list selects [`FALLBACK_FORMATS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    pub month_names:       [String; MONTHS_PER_YEAR],
    pub short_month_names: [String; MONTHS_PER_YEAR],
    pub formats:           Vec<String>,
}

/// Error type for locale and codec configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Month name {index} is blank")]
    BlankMonthName { index: usize },

    #[error("Month names {first} and {second} are both {name:?}")]
    DuplicateMonthName { first: usize, second: usize, name: String },

    /// A format template did not compile.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            month_names:       ENGLISH_MONTH_NAMES.map(str::to_owned),
            short_month_names: ENGLISH_SHORT_MONTH_NAMES.map(str::to_owned),
            formats:           Vec::new(),
        }
    }
}

impl Locale {
    /// Replaces the format list
    #[must_use]
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn month_names(&self) -> &[String] {
        &self.month_names
    }

    pub fn short_month_names(&self) -> &[String] {
        &self.short_month_names
    }

    pub fn month_name(&self, month: Month) -> &str {
        &self.month_names[month.index()]
    }

    pub fn short_month_name(&self, month: Month) -> &str {
        &self.short_month_names[month.index()]
    }

    /// The configured formats, or the fallback formats when none are set
    pub fn effective_formats(&self) -> Vec<&str> {
        if self.formats.is_empty() {
            FALLBACK_FORMATS.to_vec()
        } else {
            self.formats.iter().map(String::as_str).collect()
        }
    }

    /// Checks the month-name tables. Formats are checked when they are compiled.
    ///
    /// # Errors
    /// Returns `ConfigError` for a blank name or a name repeated within one table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_names(&self.month_names)?;
        check_names(&self.short_month_names)
    }
}

fn check_names(names: &[String]) -> Result<(), ConfigError> {
    let lowered: Vec<String> = names.iter().map(|n| n.trim().to_lowercase()).collect();
    for (index, name) in lowered.iter().enumerate() {
        if name.is_empty() {
            return Err(ConfigError::BlankMonthName { index });
        }
        if let Some(offset) = lowered[index + 1..].iter().position(|other| other == name) {
            return Err(ConfigError::DuplicateMonthName {
                first:  index,
                second: index + 1 + offset,
                name:   names[index].clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::month;

    #[test]
    fn test_default_is_english() {
        let locale = Locale::default();
        assert_eq!(locale.month_name(month(3)), "March");
        assert_eq!(locale.short_month_name(month(12)), "Dec");
        assert!(locale.formats.is_empty());
        assert!(locale.validate().is_ok());
    }

    #[test]
    fn test_effective_formats() {
        assert_eq!(Locale::default().effective_formats(), vec!["M/YYYY", "MM/YYYY"]);

        let locale = Locale::default().with_formats(["MM.YYYY", "M.YY"]);
        assert_eq!(locale.effective_formats(), vec!["MM.YYYY", "M.YY"]);
    }

    #[test]
    fn test_validate_blank_name() {
        let mut locale = Locale::default();
        locale.short_month_names[4] = "  ".to_owned();
        assert_eq!(locale.validate(), Err(ConfigError::BlankMonthName { index: 4 }));
    }

    #[test]
    fn test_validate_duplicate_name() {
        let mut locale = Locale::default();
        locale.month_names[5] = "january".to_owned();
        assert_eq!(
            locale.validate(),
            Err(ConfigError::DuplicateMonthName {
                first:  0,
                second: 5,
                name:   "January".to_owned(),
            })
        );
    }

    #[test]
    fn test_same_name_in_both_tables_is_allowed() {
        // "May" is both the full and the short English name
        let locale = Locale::default();
        assert_eq!(locale.month_name(month(5)), locale.short_month_name(month(5)));
        assert!(locale.validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "monthNames": ["januari", "februari", "maart", "april", "mei", "juni",
                           "juli", "augustus", "september", "oktober", "november", "december"],
            "formats": ["MM-YYYY", "MMMM YYYY"]
        }"#;
        let locale: Locale = serde_json::from_str(json).expect("failed to deserialize locale");
        assert_eq!(locale.month_name(month(5)), "mei");
        // Missing fields fall back to the defaults
        assert_eq!(locale.short_month_name(month(5)), "May");
        assert_eq!(locale.formats, vec!["MM-YYYY", "MMMM YYYY"]);
    }

    #[test]
    fn test_deserialize_rejects_wrong_name_count() {
        let json = r#"{ "monthNames": ["a", "b"] }"#;
        let result: Result<Locale, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
