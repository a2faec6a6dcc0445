//! Language tag parsing and normalization.

use crate::error::{PolyglotError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A normalized language identifier.
///
/// Holds a lowercase 2-3 letter language code and an optional uppercase
/// two letter country code. Tags are immutable once constructed; two tags
/// are equal iff both fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    language_code: String,
    country_code: Option<String>,
}

impl LanguageTag {
    /// Parses a tag from a string such as `"en"`, `"en_GB"` or `"en-GB"`.
    ///
    /// Both `_` and `-` are accepted as the separator and normalized
    /// identically. Fails with [`PolyglotError::InvalidLanguageTag`] when
    /// the input is empty, contains more than one separator, or either
    /// segment violates its grammar.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(invalid(input, "input is empty"));
        }

        let mut segments = input.split(['_', '-']);
        let language = segments.next().unwrap_or_default();
        let country = segments.next();

        if segments.next().is_some() {
            return Err(invalid(input, "more than one separator"));
        }

        Self::from_parts(language, country).map_err(|e| match e {
            PolyglotError::InvalidLanguageTag { reason, .. } => invalid(input, &reason),
            other => other,
        })
    }

    /// Non-failing variant of [`LanguageTag::parse`] for best-effort call sites.
    pub fn parse_or_none(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Builds a tag from an explicit locale pair.
    ///
    /// Applies the same per-segment validation as [`LanguageTag::parse`].
    pub fn from_parts(language: &str, country: Option<&str>) -> Result<Self> {
        let language_code = validate_language_code(language)?;
        let country_code = match country {
            Some(c) => Some(validate_country_code(c)?),
            None => None,
        };

        Ok(Self {
            language_code,
            country_code,
        })
    }

    /// The lowercase language code, e.g. `"en"`.
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// The uppercase country code, if present, e.g. `"GB"`.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// Whether this tag carries a country code.
    pub fn has_country(&self) -> bool {
        self.country_code.is_some()
    }

    /// A copy of this tag with the country code stripped.
    ///
    /// Used by fallback resolution to relax `en_GB` to `en`.
    pub fn language_only(&self) -> Self {
        Self {
            language_code: self.language_code.clone(),
            country_code: None,
        }
    }
}

/// The default tag is `en`, the conventional default language.
impl Default for LanguageTag {
    fn default() -> Self {
        Self {
            language_code: "en".to_string(),
            country_code: None,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country_code {
            Some(country) => write!(f, "{}_{}", self.language_code, country),
            None => write!(f, "{}", self.language_code),
        }
    }
}

impl FromStr for LanguageTag {
    type Err = PolyglotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Governs which identifier shapes a call site accepts.
///
/// Providers parse the language keys of their documents through the active
/// standard, so a catalog restricted to bare codes rejects locale pairs at
/// load time instead of silently storing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LanguageStandard {
    /// Bare language codes only (`"en"`); a country suffix is rejected.
    LanguageOnly,
    /// Language plus country required (`"en_GB"`).
    LocalePair,
    /// Either shape is accepted.
    #[default]
    Flexible,
}

impl LanguageStandard {
    /// Parses a tag and enforces this standard's shape restriction.
    pub fn parse_tag(self, input: &str) -> Result<LanguageTag> {
        let tag = LanguageTag::parse(input)?;
        match self {
            Self::LanguageOnly if tag.has_country() => Err(invalid(
                input,
                "country code not allowed by the LanguageOnly standard",
            )),
            Self::LocalePair if !tag.has_country() => Err(invalid(
                input,
                "country code required by the LocalePair standard",
            )),
            _ => Ok(tag),
        }
    }
}

fn invalid(input: &str, reason: &str) -> PolyglotError {
    PolyglotError::InvalidLanguageTag {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_language_code(segment: &str) -> Result<String> {
    if !(2..=3).contains(&segment.len()) {
        return Err(invalid(segment, "language code must be 2-3 letters"));
    }
    if !segment.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid(segment, "language code must be alphabetic"));
    }
    Ok(segment.to_ascii_lowercase())
}

fn validate_country_code(segment: &str) -> Result<String> {
    if segment.len() != 2 {
        return Err(invalid(segment, "country code must be 2 letters"));
    }
    if !segment.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid(segment, "country code must be alphabetic"));
    }
    Ok(segment.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let tag = LanguageTag::parse("en").unwrap();
        assert_eq!(tag.language_code(), "en");
        assert_eq!(tag.country_code(), None);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let tag = LanguageTag::parse("EN_gb").unwrap();
        assert_eq!(tag.language_code(), "en");
        assert_eq!(tag.country_code(), Some("GB"));
    }

    #[test]
    fn test_separators_are_equivalent() {
        assert_eq!(
            LanguageTag::parse("en-GB").unwrap(),
            LanguageTag::parse("en_GB").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!(LanguageTag::parse("").is_err());
        assert!(LanguageTag::parse("e").is_err());
        assert!(LanguageTag::parse("engl").is_err());
        assert!(LanguageTag::parse("en_GB_x").is_err());
        assert!(LanguageTag::parse("en_G").is_err());
        assert!(LanguageTag::parse("e1").is_err());
        assert!(LanguageTag::parse("en_G1").is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(LanguageTag::default(), LanguageTag::parse("en").unwrap());
    }

    #[test]
    fn test_parse_or_none() {
        assert!(LanguageTag::parse_or_none("en").is_some());
        assert!(LanguageTag::parse_or_none("not a tag").is_none());
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["en", "en_GB", "deu", "pt_BR"] {
            let tag = LanguageTag::parse(input).unwrap();
            assert_eq!(LanguageTag::parse(&tag.to_string()).unwrap(), tag);
        }
    }

    #[test]
    fn test_language_only_strips_country() {
        let tag = LanguageTag::parse("en_GB").unwrap();
        let relaxed = tag.language_only();
        assert_eq!(relaxed, LanguageTag::parse("en").unwrap());
        assert!(!relaxed.has_country());
    }

    #[test]
    fn test_standard_language_only() {
        let standard = LanguageStandard::LanguageOnly;
        assert!(standard.parse_tag("en").is_ok());
        assert!(standard.parse_tag("en_GB").is_err());
    }

    #[test]
    fn test_standard_locale_pair() {
        let standard = LanguageStandard::LocalePair;
        assert!(standard.parse_tag("en_GB").is_ok());
        assert!(standard.parse_tag("en").is_err());
    }

    #[test]
    fn test_standard_flexible_accepts_both() {
        let standard = LanguageStandard::Flexible;
        assert!(standard.parse_tag("en").is_ok());
        assert!(standard.parse_tag("en_GB").is_ok());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let tag = LanguageTag::parse("en_GB").unwrap();
        let serialized = serde_json::to_string(&tag).unwrap();
        assert_eq!(serialized, "\"en_GB\"");

        let deserialized: LanguageTag = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, tag);
    }
}
