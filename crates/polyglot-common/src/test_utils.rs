//! Test utilities and shared test helpers for the Polyglot workspace.
//!
//! This module provides common fixtures and helper functions that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available.
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    // No-op when tracing-subscriber is not available
}

/// Language tag fixtures shared across the workspace test suites.
pub mod language_fixtures {
    use crate::LanguageTag;

    /// `en`, the usual default language in tests.
    pub fn english() -> LanguageTag {
        LanguageTag::parse("en").expect("valid tag")
    }

    /// `en_GB`, a regional variant used to exercise relaxation.
    pub fn british_english() -> LanguageTag {
        LanguageTag::parse("en_GB").expect("valid tag")
    }

    /// `de`, a second language with no regional variant.
    pub fn german() -> LanguageTag {
        LanguageTag::parse("de").expect("valid tag")
    }

    /// `fr_FR`, a second regional variant.
    pub fn french() -> LanguageTag {
        LanguageTag::parse("fr_FR").expect("valid tag")
    }
}

/// Catalog fixtures: small key/template sets for store and facade tests.
pub mod catalog_fixtures {
    /// A minimal English catalog covering plain, keyed, and positional templates.
    pub fn sample_translations() -> Vec<(String, String)> {
        vec![
            ("generic.yes".to_string(), "Yes".to_string()),
            ("generic.no".to_string(), "No".to_string()),
            ("greeting.hello".to_string(), "Hello {name}!".to_string()),
            ("greeting.indexed".to_string(), "Hello {0}, meet {1}".to_string()),
            ("escaped.braces".to_string(), "{{literal}}".to_string()),
        ]
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::LanguageTag;
    use proptest::prelude::*;

    /// Strategy for generating valid lowercase language codes.
    pub fn language_code_strategy() -> impl Strategy<Value = String> {
        r"[a-z]{2,3}".prop_map(|s| s.to_string())
    }

    /// Strategy for generating valid uppercase country codes.
    pub fn country_code_strategy() -> impl Strategy<Value = String> {
        r"[A-Z]{2}".prop_map(|s| s.to_string())
    }

    /// Strategy for generating valid language tags, with and without country.
    pub fn language_tag_strategy() -> impl Strategy<Value = LanguageTag> {
        (
            language_code_strategy(),
            proptest::option::of(country_code_strategy()),
        )
            .prop_map(|(language, country)| {
                LanguageTag::from_parts(&language, country.as_deref()).expect("valid parts")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_language_fixtures_are_valid() {
        assert_eq!(language_fixtures::english().to_string(), "en");
        assert_eq!(language_fixtures::british_english().to_string(), "en_GB");
        assert_eq!(language_fixtures::german().to_string(), "de");
        assert_eq!(language_fixtures::french().to_string(), "fr_FR");
    }

    #[test]
    fn test_sample_translations_are_non_empty() {
        let catalog = catalog_fixtures::sample_translations();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|(key, _)| !key.is_empty()));
    }
}
