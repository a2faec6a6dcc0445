//! Error types for translation operations using thiserror.

use crate::language::LanguageTag;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during translation operations.
#[derive(Error, Debug)]
pub enum PolyglotError {
    /// Failed to parse a language identifier.
    #[error("invalid language tag '{input}': {reason}")]
    InvalidLanguageTag {
        /// The raw input that failed to parse.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Fallback resolution exhausted every candidate language.
    #[error("no language available for '{requested}' after trying {} candidate(s)", .attempted.len())]
    NoTranslationAvailable {
        /// The language originally requested.
        requested: LanguageTag,
        /// Every candidate tried, in resolution order.
        attempted: Vec<LanguageTag>,
    },

    /// Resolution exhausted every candidate language for a key.
    #[error("no translation for key '{key}' in '{language}' after trying {} candidate(s)", .attempted.len())]
    TranslationNotFound {
        /// The language originally requested.
        language: LanguageTag,
        /// The key that could not be resolved.
        key: String,
        /// Every candidate tried, in resolution order.
        attempted: Vec<LanguageTag>,
    },

    /// A template referenced a placeholder with no bound value.
    #[error("missing parameter '{placeholder}' for key '{key}'")]
    MissingParameter {
        /// The placeholder name or positional index as written.
        placeholder: String,
        /// The key whose template referenced the placeholder.
        key: String,
    },

    /// A document leaf held something other than a string template.
    #[error("unsupported template value at '{path}': expected a string, found {found}")]
    UnsupportedTemplateValue {
        /// Dot-joined path to the offending leaf.
        path: String,
        /// A short description of the value that was found.
        found: String,
    },

    /// A provider failed to read or parse its source document.
    #[error("failed to load translations from {}: {reason}", .path.display())]
    ProviderLoad {
        /// The document that could not be loaded.
        path: PathBuf,
        /// The underlying read or parse failure.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, PolyglotError>;
