//! The year/month codec a picker host talks to.

use serde::Deserialize;

use crate::YearMonth;
use crate::century::{ReferenceCentury, current_century};
use crate::format::{ParsedValue, Template};
use crate::locale::{ConfigError, Locale};
use crate::types::Century;

/// Codec construction parameters.
///
/// `reference_century` seeds the century two-digit years are expanded
/// into; `None` uses the current UTC century.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecConfig {
    pub locale:            Locale,
    pub reference_century: Option<Century>,
}

impl CodecConfig {
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_reference_century(mut self, century: Century) -> Self {
        self.reference_century = Some(century);
        self
    }
}

/// What a committed text input turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input was blank: the selection is cleared.
    Cleared,
    /// No configured format matched, or the year came out of range.
    Invalid,
    Parsed(YearMonth),
}

/// Parses, formats and century-resolves year/month values for one picker.
///
/// Templates are compiled once at construction. Parsing and formatting are
/// pure; only [`interpret_input`](Self::interpret_input),
/// [`note_selection`](Self::note_selection) and
/// [`reset_century`](Self::reset_century) move the reference century.
#[derive(Debug, Clone)]
pub struct DateValueCodec {
    locale:    Locale,
    templates: Vec<Template>,
    reference: ReferenceCentury,
}

impl DateValueCodec {
    /// Validates the locale and compiles its formats.
    ///
    /// # Errors
    /// Returns `ConfigError` for bad month names or a format that does not compile.
    pub fn new(config: CodecConfig) -> Result<Self, ConfigError> {
        let CodecConfig {
            locale,
            reference_century,
        } = config;
        locale.validate()?;

        let templates = locale
            .effective_formats()
            .into_iter()
            .map(|source| Template::compile(source, &locale))
            .collect::<Result<Vec<_>, _>>()?;

        let home = reference_century.unwrap_or_else(current_century);
        tracing::debug!(formats = templates.len(), century = %home, "date value codec ready");

        Ok(Self {
            locale,
            templates,
            reference: ReferenceCentury::new(home),
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Compiled templates, display template first
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// The century two-digit years are currently expanded into
    pub const fn reference_century(&self) -> Century {
        self.reference.get()
    }

    /// Formats `value` with the display template.
    pub fn format(&self, value: YearMonth) -> String {
        match self.templates.first() {
            Some(template) => template.format(value, &self.locale),
            None => format!("{}/{}", value.month(), value.year()),
        }
    }

    /// Matches `input` against every template in order; the first match wins.
    /// The returned year is as typed, before century resolution.
    pub fn parse(&self, input: &str) -> Option<ParsedValue> {
        self.templates
            .iter()
            .find_map(|template| template.parse(input))
    }

    /// Interprets a committed text input.
    ///
    /// Blank input clears the selection and resets the reference century to
    /// its home value. A successful parse expands two-digit years and moves
    /// the reference century; anything else leaves it alone.
    pub fn interpret_input(&mut self, input: &str) -> InputOutcome {
        let input = input.trim();
        if input.is_empty() {
            self.reference.reset();
            return InputOutcome::Cleared;
        }

        let Some(parsed) = self.parse(input) else {
            tracing::debug!(input, "input matches no configured format");
            return InputOutcome::Invalid;
        };

        match self.reference.resolve(parsed.year) {
            Ok(year) => InputOutcome::Parsed(YearMonth::new(year, parsed.month)),
            Err(err) => {
                tracing::debug!(input, error = %err, "parsed year out of range");
                InputOutcome::Invalid
            },
        }
    }

    /// Records an explicit selection, which moves the reference century.
    pub fn note_selection(&mut self, value: YearMonth) {
        self.reference.follow(value.year_typed());
    }

    pub fn reset_century(&mut self) {
        self.reference.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatError;
    use crate::test_utils::{century, month, ym};

    fn codec(formats: &[&str]) -> DateValueCodec {
        let config = CodecConfig::default()
            .with_locale(Locale::default().with_formats(formats.iter().copied()))
            .with_reference_century(century(20));
        DateValueCodec::new(config).expect("codec should build")
    }

    #[test]
    fn test_format_uses_first_template() {
        let codec = codec(&["MM.YYYY", "MMMM YYYY"]);
        assert_eq!(codec.format(ym(2024, 3)), "03.2024");
    }

    #[test]
    fn test_format_fallback_without_formats() {
        let codec = codec(&[]);
        assert_eq!(codec.format(ym(2024, 3)), "3/2024");
        assert_eq!(codec.templates().len(), 2);
    }

    #[test]
    fn test_parse_tries_templates_in_order() {
        let codec = codec(&["MM.YYYY", "MMMM YYYY", "MM/YY"]);
        assert_eq!(codec.parse("03.2024"), Some(ParsedValue { year: 2024, month: month(3) }));
        assert_eq!(codec.parse("march 2024"), Some(ParsedValue { year: 2024, month: month(3) }));
        assert_eq!(codec.parse("03/24"), Some(ParsedValue { year: 24, month: month(3) }));
        assert_eq!(codec.parse("2024-03"), None);
    }

    #[test]
    fn test_parse_falls_through_on_month_out_of_range() {
        // "13" is rejected by the first template; the second reads it as a year
        let codec = codec(&["MM/YY", "YY/MM"]);
        assert_eq!(codec.parse("13/05"), Some(ParsedValue { year: 13, month: month(5) }));
    }

    #[test]
    fn test_parse_fallback_formats() {
        let codec = codec(&[]);
        assert_eq!(codec.parse("3/2024"), Some(ParsedValue { year: 2024, month: month(3) }));
        assert_eq!(codec.parse("12/2024"), Some(ParsedValue { year: 2024, month: month(12) }));
        assert_eq!(codec.parse("13/2024"), None);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let codec = codec(&["MMM YY", "MM.YYYY"]);
        let first = codec.parse("feb 09");
        for _ in 0..3 {
            assert_eq!(codec.parse("feb 09"), first);
        }
        assert_eq!(codec.reference_century(), century(20));
    }

    #[test]
    fn test_interpret_input_expands_two_digit_year() {
        let mut codec = codec(&["MM/YY"]);
        assert_eq!(codec.interpret_input("04/25"), InputOutcome::Parsed(ym(2025, 4)));
        assert_eq!(codec.reference_century(), century(20));
    }

    #[test]
    fn test_interpret_input_four_digit_year_moves_century() {
        let mut codec = codec(&["MM/YYYY", "MM/YY"]);
        assert_eq!(codec.interpret_input("04/1987"), InputOutcome::Parsed(ym(1987, 4)));
        assert_eq!(codec.reference_century(), century(19));
        assert_eq!(codec.interpret_input("04/64"), InputOutcome::Parsed(ym(1964, 4)));
    }

    #[test]
    fn test_interpret_input_invalid_keeps_century() {
        let mut codec = codec(&["MM/YYYY", "MM/YY"]);
        codec.interpret_input("01/1850");
        assert_eq!(codec.interpret_input("nonsense"), InputOutcome::Invalid);
        assert_eq!(codec.interpret_input("13/2024"), InputOutcome::Invalid);
        assert_eq!(codec.reference_century(), century(18));
    }

    #[test]
    fn test_interpret_input_blank_resets_century() {
        let mut codec = codec(&["MM/YYYY", "MM/YY"]);
        codec.interpret_input("01/1850");
        assert_eq!(codec.interpret_input("   "), InputOutcome::Cleared);
        assert_eq!(codec.reference_century(), century(20));
        assert_eq!(codec.interpret_input("01/50"), InputOutcome::Parsed(ym(2050, 1)));
    }

    #[test]
    fn test_interpret_input_trims() {
        let mut codec = codec(&["MM.YYYY"]);
        assert_eq!(codec.interpret_input(" 03.2024 "), InputOutcome::Parsed(ym(2024, 3)));
    }

    #[test]
    fn test_interpret_input_rejects_year_zero() {
        let config = CodecConfig::default()
            .with_locale(Locale::default().with_formats(["MM/YY", "MM/YYYY"]))
            .with_reference_century(century(0));
        let mut codec = DateValueCodec::new(config).expect("codec should build");
        assert_eq!(codec.interpret_input("01/00"), InputOutcome::Invalid);
        assert_eq!(codec.interpret_input("01/0000"), InputOutcome::Invalid);
        assert_eq!(codec.reference_century(), century(0));
    }

    #[test]
    fn test_note_selection_and_reset() {
        let mut codec = codec(&["MM/YY"]);
        codec.note_selection(ym(1999, 1));
        assert_eq!(codec.reference_century(), century(19));
        assert_eq!(codec.interpret_input("02/98"), InputOutcome::Parsed(ym(1998, 2)));

        codec.reset_century();
        assert_eq!(codec.reference_century(), century(20));
    }

    #[test]
    fn test_round_trip_format_then_parse() {
        let codec = codec(&["MM YYYY"]);
        for y in [1, 50, 999, 2024, 9999] {
            for m in 1..=12 {
                let text = codec.format(ym(y, m));
                assert_eq!(codec.parse(&text), Some(ParsedValue { year: y, month: month(m) }), "{text}");
            }
        }
    }

    #[test]
    fn test_four_digit_input_below_100_is_still_expanded() {
        // Expansion depends on the value, not on which token matched
        let mut codec = codec(&["MM YYYY"]);
        assert_eq!(codec.interpret_input("01 0050"), InputOutcome::Parsed(ym(2050, 1)));
        assert_eq!(codec.interpret_input("01 2024"), InputOutcome::Parsed(ym(2024, 1)));
    }

    #[test]
    fn test_month_name_round_trip() {
        let mut codec = codec(&["MMMM YYYY"]);
        assert_eq!(codec.format(ym(2024, 3)), "March 2024");
        assert_eq!(codec.interpret_input("march 2024"), InputOutcome::Parsed(ym(2024, 3)));
    }

    #[test]
    fn test_parse_month_name_matched_by_case_folding() {
        let codec = codec(&["MMMM YYYY"]);
        assert_eq!(
            codec.parse("\u{17f}eptember 2024"),
            Some(ParsedValue { year: 2024, month: month(9) })
        );
    }

    #[test]
    fn test_new_rejects_bad_format() {
        let config = CodecConfig::default().with_locale(Locale::default().with_formats(["MM.YYYY", "YYYY"]));
        let result = DateValueCodec::new(config);
        assert!(matches!(
            result,
            Err(ConfigError::Format(FormatError::MissingMonth(ref s))) if s == "YYYY"
        ));
    }

    #[test]
    fn test_new_rejects_bad_names() {
        let mut locale = Locale::default();
        locale.month_names[0] = String::new();
        let result = DateValueCodec::new(CodecConfig::default().with_locale(locale));
        assert!(matches!(result, Err(ConfigError::BlankMonthName { index: 0 })));
    }

    #[test]
    fn test_default_reference_century_is_current() {
        let codec = DateValueCodec::new(CodecConfig::default()).expect("default codec should build");
        assert_eq!(codec.reference_century(), current_century());
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{ "locale": { "formats": ["MM/YY"] }, "referenceCentury": 19 }"#;
        let config: CodecConfig = serde_json::from_str(json).expect("failed to deserialize codec config");
        assert_eq!(config.reference_century, Some(century(19)));

        let mut codec = DateValueCodec::new(config).expect("codec should build");
        assert_eq!(codec.interpret_input("06/77"), InputOutcome::Parsed(ym(1977, 6)));
    }

    #[test]
    fn test_config_deserialize_rejects_bad_century() {
        let json = r#"{ "referenceCentury": 100 }"#;
        let result: Result<CodecConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
