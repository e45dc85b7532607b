//! Format templates such as `MM.YYYY` or `MMMM YYYY`.
//!
//! A template is scanned once into [`Segment`]s. The segments drive both
//! formatting and the anchored, case-insensitive pattern used to read input
//! back, so the two directions cannot drift apart.

use regex::Regex;

use crate::consts::{
    TEMPLATE_SEPARATORS, TOKEN_FULL_YEAR, TOKEN_LONG_MONTH, TOKEN_MONTH, TOKEN_PADDED_MONTH,
    TOKEN_SHORT_MONTH, TOKEN_SHORT_YEAR,
};
use crate::locale::Locale;
use crate::types::Month;
use crate::{YearMonth, parse_digits};

const MONTH_GROUP: &str = "month";
const YEAR_GROUP: &str = "year";

/// How a template writes the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthToken {
    /// `MMMM`, full month name
    Long,
    /// `MMM`, abbreviated month name
    Short,
    /// `MM`, zero-padded number
    Padded,
    /// `M`, unpadded number
    Unpadded,
}

/// How a template writes the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearToken {
    /// `YYYY`
    Full,
    /// `YY`, last two digits
    Short,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Month(MonthToken),
    Year(YearToken),
}

/// Error type for template compilation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// A character that is neither a token nor an allowed separator.
    #[error("Unexpected character {character:?} in format {template:?}")]
    UnexpectedCharacter { template: String, character: char },

    #[error("Format {0:?} has no month token")]
    MissingMonth(String),

    #[error("Format {0:?} has no year token")]
    MissingYear(String),

    #[error("Format {0:?} has more than one month token")]
    DuplicateMonth(String),

    #[error("Format {0:?} has more than one year token")]
    DuplicateYear(String),

    /// The generated match pattern did not compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Tokens in the order the scanner tries them, longest first.
const TOKENS: [(&str, Segment); 6] = [
    (TOKEN_FULL_YEAR, Segment::Year(YearToken::Full)),
    (TOKEN_SHORT_YEAR, Segment::Year(YearToken::Short)),
    (TOKEN_LONG_MONTH, Segment::Month(MonthToken::Long)),
    (TOKEN_SHORT_MONTH, Segment::Month(MonthToken::Short)),
    (TOKEN_PADDED_MONTH, Segment::Month(MonthToken::Padded)),
    (TOKEN_MONTH, Segment::Month(MonthToken::Unpadded)),
];

/// Splits a template into segments. Adjacent separators merge into one literal.
///
/// # Errors
/// Returns `FormatError::UnexpectedCharacter` for anything that is not a token or separator.
pub fn scan(template: &str) -> Result<Vec<Segment>, FormatError> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut rest = template;

    'outer: while let Some(c) = rest.chars().next() {
        for (token, segment) in &TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                segments.push(segment.clone());
                rest = after;
                continue 'outer;
            }
        }

        if !TEMPLATE_SEPARATORS.contains(&c) {
            return Err(FormatError::UnexpectedCharacter {
                template:  template.to_owned(),
                character: c,
            });
        }
        match segments.last_mut() {
            Some(Segment::Literal(text)) => text.push(c),
            _ => segments.push(Segment::Literal(c.to_string())),
        }
        rest = &rest[c.len_utf8()..];
    }

    Ok(segments)
}

/// Result of matching input against a template, before century resolution.
///
/// `year` holds the digits exactly as typed, so a `YY` template yields a
/// value below 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedValue {
    pub year:  u16,
    pub month: Month,
}

/// A compiled format template.
#[derive(Debug, Clone)]
pub struct Template {
    source:   String,
    segments: Vec<Segment>,
    month:    MonthToken,
    year:     YearToken,
    pattern:  Regex,
}

impl Template {
    /// Scans `source`, checks it has exactly one month and one year token,
    /// and builds its match pattern from the locale's month names.
    ///
    /// # Errors
    /// Returns a `FormatError` describing the first problem found.
    pub fn compile(source: &str, locale: &Locale) -> Result<Self, FormatError> {
        let segments = scan(source)?;

        let mut months = segments.iter().filter_map(|s| match s {
            Segment::Month(token) => Some(*token),
            _ => None,
        });
        let month = months.next().ok_or_else(|| FormatError::MissingMonth(source.to_owned()))?;
        if months.next().is_some() {
            return Err(FormatError::DuplicateMonth(source.to_owned()));
        }

        let mut years = segments.iter().filter_map(|s| match s {
            Segment::Year(token) => Some(*token),
            _ => None,
        });
        let year = years.next().ok_or_else(|| FormatError::MissingYear(source.to_owned()))?;
        if years.next().is_some() {
            return Err(FormatError::DuplicateYear(source.to_owned()));
        }

        let pattern = Regex::new(&build_pattern(&segments, locale))?;
        tracing::debug!(template = source, pattern = pattern.as_str(), "compiled format template");

        Ok(Self {
            source: source.to_owned(),
            segments,
            month,
            year,
            pattern,
        })
    }

    /// The template text as configured
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub const fn month_token(&self) -> MonthToken {
        self.month
    }

    pub const fn year_token(&self) -> YearToken {
        self.year
    }

    /// Writes `value` using this template.
    pub fn format(&self, value: YearMonth, locale: &Locale) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Month(MonthToken::Long) => out.push_str(locale.month_name(value.month_typed())),
                Segment::Month(MonthToken::Short) => {
                    out.push_str(locale.short_month_name(value.month_typed()));
                },
                Segment::Month(MonthToken::Padded) => out.push_str(&format!("{:02}", value.month())),
                Segment::Month(MonthToken::Unpadded) => out.push_str(&value.month().to_string()),
                Segment::Year(YearToken::Full) => out.push_str(&format!("{:04}", value.year())),
                Segment::Year(YearToken::Short) => {
                    out.push_str(&format!("{:02}", value.year_typed().two_digit()));
                },
            }
        }
        out
    }

    /// Matches the whole of `input` against this template.
    ///
    /// Returns `None` when the input does not have the template's shape or
    /// names a month outside January..December. A month name is identified
    /// by the alternative of the pattern that matched it.
    pub fn parse(&self, input: &str) -> Option<ParsedValue> {
        let captures = self.pattern.captures(input)?;
        let year_text = captures.name(YEAR_GROUP)?.as_str();

        let month = match self.month {
            MonthToken::Long | MonthToken::Short => {
                Month::all().find(|month| captures.name(&name_group_label(*month)).is_some())
            },
            MonthToken::Padded | MonthToken::Unpadded => {
                let month_text = captures.name(MONTH_GROUP)?.as_str();
                parse_digits::<u8>(month_text).and_then(|m| Month::new(m).ok())
            },
        }?;
        let year = parse_digits::<u16>(year_text)?;

        Some(ParsedValue { year, month })
    }
}

fn build_pattern(segments: &[Segment], locale: &Locale) -> String {
    let mut pattern = String::from("(?i)^");
    for segment in segments {
        match segment {
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Month(MonthToken::Long) => pattern.push_str(&name_group(locale.month_names())),
            Segment::Month(MonthToken::Short) => pattern.push_str(&name_group(locale.short_month_names())),
            Segment::Month(MonthToken::Padded) => pattern.push_str(&format!("(?P<{MONTH_GROUP}>[0-9]{{1,2}})")),
            Segment::Month(MonthToken::Unpadded) => pattern.push_str(&format!("(?P<{MONTH_GROUP}>[0-9])")),
            Segment::Year(YearToken::Full) => pattern.push_str(&format!("(?P<{YEAR_GROUP}>[0-9]{{4}})")),
            Segment::Year(YearToken::Short) => pattern.push_str(&format!("(?P<{YEAR_GROUP}>[0-9]{{2}})")),
        }
    }
    pattern.push('$');
    pattern
}

// One named group per month, so a match says which month it was.
fn name_group(names: &[String]) -> String {
    let alternatives: Vec<String> = Month::all()
        .zip(names)
        .map(|(month, name)| format!("(?P<{}>{})", name_group_label(month), regex::escape(name)))
        .collect();
    format!("(?:{})", alternatives.join("|"))
}

fn name_group_label(month: Month) -> String {
    format!("{MONTH_GROUP}{}", month.get())
}
