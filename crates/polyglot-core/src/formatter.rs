//! Pluggable, locale-aware value formatting.

use crate::parameter::ParameterValue;
use once_cell::sync::Lazy;
use polyglot_common::LanguageTag;
use std::collections::HashMap;
use std::sync::Arc;

/// Renders a typed value to its display string.
///
/// Formatters are consulted in registration order; the first whose
/// [`TranslationFormatter::applies_to`] accepts the value renders it.
/// Implementations that care about locale conventions key their output off
/// the `language` argument.
pub trait TranslationFormatter: Send + Sync {
    /// Whether this formatter can render the given value.
    fn applies_to(&self, value: &ParameterValue) -> bool;

    /// Renders the value for the given language.
    fn format(&self, value: &ParameterValue, language: &LanguageTag) -> String;
}

/// Ordered first-match-wins collection of formatters.
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn TranslationFormatter>>,
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.formatters.len())
            .finish()
    }
}

impl FormatterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a formatter; later registrations are consulted after
    /// earlier ones.
    pub fn register(&mut self, formatter: Arc<dyn TranslationFormatter>) {
        self.formatters.push(formatter);
    }

    /// Renders a value through the first applicable formatter, falling
    /// back to the value's default stringification.
    pub fn format_value(&self, value: &ParameterValue, language: &LanguageTag) -> String {
        self.formatters
            .iter()
            .find(|formatter| formatter.applies_to(value))
            .map_or_else(|| value.to_string(), |f| f.format(value, language))
    }

    /// Number of registered formatters.
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Whether no formatters are registered.
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

/// Grouping and decimal separators by language code.
///
/// Languages not listed use the `","`/`"."` convention.
static NUMBER_SEPARATORS: Lazy<HashMap<&'static str, (char, char)>> = Lazy::new(|| {
    HashMap::from([
        ("de", ('.', ',')),
        ("es", ('.', ',')),
        ("it", ('.', ',')),
        ("nl", ('.', ',')),
        ("pt", ('.', ',')),
        ("fr", ('\u{a0}', ',')),
        ("pl", ('\u{a0}', ',')),
        ("ru", ('\u{a0}', ',')),
    ])
});

fn separators_for(language: &LanguageTag) -> (char, char) {
    NUMBER_SEPARATORS
        .get(language.language_code())
        .copied()
        .unwrap_or((',', '.'))
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Locale-aware numeric formatter.
///
/// Applies digit grouping and the locale's decimal separator to integer,
/// unsigned, and float values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter;

impl NumberFormatter {
    /// Creates a number formatter.
    pub fn new() -> Self {
        Self
    }

    fn format_parts(integral: &str, fraction: Option<&str>, language: &LanguageTag) -> String {
        let (grouping, decimal) = separators_for(language);
        let (sign, digits) = match integral.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integral),
        };

        let mut formatted = String::from(sign);
        formatted.push_str(&group_digits(digits, grouping));
        if let Some(fraction) = fraction {
            formatted.push(decimal);
            formatted.push_str(fraction);
        }
        formatted
    }
}

impl TranslationFormatter for NumberFormatter {
    fn applies_to(&self, value: &ParameterValue) -> bool {
        matches!(
            value,
            ParameterValue::Integer(_) | ParameterValue::Unsigned(_) | ParameterValue::Float(_)
        )
    }

    fn format(&self, value: &ParameterValue, language: &LanguageTag) -> String {
        match value {
            ParameterValue::Integer(i) => Self::format_parts(&i.to_string(), None, language),
            ParameterValue::Unsigned(u) => Self::format_parts(&u.to_string(), None, language),
            ParameterValue::Float(f) => {
                let rendered = f.to_string();
                match rendered.split_once('.') {
                    Some((integral, fraction)) => {
                        Self::format_parts(integral, Some(fraction), language)
                    }
                    None => Self::format_parts(&rendered, None, language),
                }
            }
            other => other.to_string(),
        }
    }
}

/// Locale-aware timestamp formatter.
///
/// Renders timestamps with the date ordering conventional for the
/// language; unknown languages get day-first ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampFormatter;

impl TimestampFormatter {
    /// Creates a timestamp formatter.
    pub fn new() -> Self {
        Self
    }

    fn pattern_for(language: &LanguageTag) -> &'static str {
        match language.language_code() {
            "en" if language.country_code() == Some("US") => "%m/%d/%Y %H:%M",
            "de" | "ru" | "pl" => "%d.%m.%Y %H:%M",
            "ja" | "zh" | "ko" => "%Y/%m/%d %H:%M",
            _ => "%d/%m/%Y %H:%M",
        }
    }
}

impl TranslationFormatter for TimestampFormatter {
    fn applies_to(&self, value: &ParameterValue) -> bool {
        matches!(value, ParameterValue::Timestamp(_))
    }

    fn format(&self, value: &ParameterValue, language: &LanguageTag) -> String {
        match value {
            ParameterValue::Timestamp(timestamp) => timestamp
                .format(Self::pattern_for(language))
                .to_string(),
            other => other.to_string(),
        }
    }
}
