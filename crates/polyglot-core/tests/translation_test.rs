//! End-to-end tests for the translation facade.
//!
//! This test suite covers:
//! - Fallback strategies and language-only relaxation
//! - Keyed, positional, and global parameter binding
//! - Escaped braces and formatter dispatch
//! - Attempted-chain diagnostics on resolution failure
//! - Concurrent reads against concurrent writes

use polyglot_common::test_utils::{catalog_fixtures, init_test_logging, language_fixtures};
use polyglot_common::{LanguageTag, PolyglotError};
use polyglot_core::{
    FallbackStrategy, NumberFormatter, Translation, TranslationContext, TranslationParameters,
};
use std::sync::Arc;

fn sample_translation() -> Translation {
    init_test_logging();

    let context = TranslationContext::with_default_language(language_fixtures::english());
    let translation = context.create_translation();
    translation.add_translations(
        &language_fixtures::english(),
        catalog_fixtures::sample_translations(),
    );
    translation
}

#[test]
fn test_exact_match_wins_regardless_of_strategy() {
    let translation = sample_translation();
    let en = language_fixtures::english();

    for strategy in [
        FallbackStrategy::None,
        FallbackStrategy::DefaultLanguage,
        FallbackStrategy::CustomChain(vec![language_fixtures::german()]),
    ] {
        translation.set_fallback_strategy(strategy);
        assert_eq!(translation.translate(&en, "generic.yes").unwrap(), "Yes");
    }
}

#[test]
fn test_none_strategy_fails_without_exact_match() {
    let translation = sample_translation();
    translation.set_fallback_strategy(FallbackStrategy::None);

    let unknown = language_fixtures::german();
    let err = translation.translate(&unknown, "generic.yes").unwrap_err();
    match err {
        PolyglotError::TranslationNotFound {
            language,
            key,
            attempted,
        } => {
            assert_eq!(language, unknown);
            assert_eq!(key, "generic.yes");
            assert_eq!(attempted, vec![unknown]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_default_strategy_relaxes_country_before_default() {
    let translation = sample_translation();
    translation.set_fallback_strategy(FallbackStrategy::DefaultLanguage);

    // en_GB has no exact entry; the language-only relaxation finds en
    let result = translation
        .translate(&language_fixtures::british_english(), "generic.yes")
        .unwrap();
    assert_eq!(result, "Yes");
}

#[test]
fn test_default_strategy_falls_back_to_default_language() {
    let translation = sample_translation();
    translation.set_fallback_strategy(FallbackStrategy::DefaultLanguage);

    let result = translation
        .translate(&language_fixtures::german(), "generic.no")
        .unwrap();
    assert_eq!(result, "No");
}

#[test]
fn test_custom_chain_is_tried_in_order() {
    let translation = sample_translation();
    let de = language_fixtures::german();
    translation.add_translation(&de, "generic.yes", "Ja");

    translation.set_fallback_strategy(FallbackStrategy::CustomChain(vec![
        de.clone(),
        language_fixtures::english(),
    ]));

    let fr = language_fixtures::french();
    assert_eq!(translation.translate(&fr, "generic.yes").unwrap(), "Ja");
    // generic.no only exists in English, further down the chain
    assert_eq!(translation.translate(&fr, "generic.no").unwrap(), "No");
}

#[test]
fn test_failed_resolution_reports_full_chain() {
    let translation = sample_translation();
    let de = language_fixtures::german();
    translation.set_fallback_strategy(FallbackStrategy::CustomChain(vec![de.clone()]));

    let fr = language_fixtures::french();
    let err = translation.translate(&fr, "missing.key").unwrap_err();
    match err {
        PolyglotError::TranslationNotFound { attempted, .. } => {
            assert_eq!(
                attempted,
                vec![fr.clone(), fr.language_only(), de]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_keyed_parameters() {
    let translation = sample_translation();
    let params = TranslationParameters::keyed([("name", "Ann")]);

    let result = translation
        .tr_with("greeting.hello", &params)
        .unwrap();
    assert_eq!(result, "Hello Ann!");
}

#[test]
fn test_positional_parameters() {
    let translation = sample_translation();
    let params = TranslationParameters::positional(["Ann", "Bob"]);

    let result = translation
        .tr_with("greeting.indexed", &params)
        .unwrap();
    assert_eq!(result, "Hello Ann, meet Bob");
}

#[test]
fn test_missing_parameter_names_placeholder_and_key() {
    let translation = sample_translation();

    let err = translation.tr("greeting.hello").unwrap_err();
    match err {
        PolyglotError::MissingParameter { placeholder, key } => {
            assert_eq!(placeholder, "name");
            assert_eq!(key, "greeting.hello");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_escaped_braces_render_literally() {
    let translation = sample_translation();
    assert_eq!(translation.tr("escaped.braces").unwrap(), "{literal}");
}

#[test]
fn test_global_parameters_merge_with_call_site_winning() {
    let translation = sample_translation();
    let context = translation.context();
    context.add_global_parameter("name", "Global");

    assert_eq!(translation.tr("greeting.hello").unwrap(), "Hello Global!");

    let params = TranslationParameters::keyed([("name", "Ann")]);
    assert_eq!(
        translation.tr_with("greeting.hello", &params).unwrap(),
        "Hello Ann!"
    );
}

#[test]
fn test_formatter_applies_to_bound_values() {
    let translation = sample_translation();
    let en = language_fixtures::english();
    translation.add_translation(&en, "stats.plays", "{count} plays");
    translation.add_formatter(Arc::new(NumberFormatter::new()));

    let params = TranslationParameters::keyed([("count", 1_234_567i64)]);
    assert_eq!(
        translation.tr_with("stats.plays", &params).unwrap(),
        "1,234,567 plays"
    );
}

#[test]
fn test_formatter_uses_resolved_language_conventions() {
    let translation = sample_translation();
    let de = language_fixtures::german();
    translation.add_translation(&de, "stats.plays", "{count} Wiedergaben");
    translation.add_formatter(Arc::new(NumberFormatter::new()));

    let params = TranslationParameters::keyed([("count", 1_234_567i64)]);
    assert_eq!(
        translation.translate_with(&de, "stats.plays", &params).unwrap(),
        "1.234.567 Wiedergaben"
    );
}

#[test]
fn test_later_insert_overwrites_earlier() {
    let translation = sample_translation();
    let en = language_fixtures::english();

    translation.add_translation(&en, "generic.yes", "Aye");
    assert_eq!(translation.translate(&en, "generic.yes").unwrap(), "Aye");
}

#[test]
fn test_concurrent_reads_and_writes() {
    let context = TranslationContext::with_default_language(language_fixtures::english());
    let translation = Arc::new(context.create_translation());
    let en = language_fixtures::english();
    translation.add_translation(&en, "generic.yes", "Yes");

    let mut handles = Vec::new();
    for round in 0..4 {
        let translation = Arc::clone(&translation);
        let en = en.clone();
        handles.push(std::thread::spawn(move || {
            for i in 0..200 {
                if round % 2 == 0 {
                    translation.add_translation(&en, "generic.yes", format!("Yes {i}"));
                } else {
                    // Readers must always observe a complete template
                    let value = translation.translate(&en, "generic.yes").unwrap();
                    assert!(value.starts_with("Yes"));
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
