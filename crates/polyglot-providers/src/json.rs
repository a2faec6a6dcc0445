//! JSON file provider.

use crate::document::{flatten, DocumentLayout};
use polyglot_common::{LanguageStandard, LanguageTag, PolyglotError, Result};
use polyglot_core::{TranslationEntry, TranslationProvider};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads translations from a JSON file.
///
/// By default the document is language-keyed: top-level keys are language
/// identifiers parsed per the configured [`LanguageStandard`]. Use
/// [`JsonFileProvider::for_language`] or
/// [`JsonFileProvider::from_file_name`] for per-language files whose whole
/// document is one key/template tree.
#[derive(Debug)]
pub struct JsonFileProvider {
    path: PathBuf,
    standard: LanguageStandard,
    layout: DocumentLayout,
}

impl JsonFileProvider {
    /// Creates a provider for a language-keyed JSON document.
    pub fn new(path: impl AsRef<Path>, standard: LanguageStandard) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            standard,
            layout: DocumentLayout::LanguageKeyed,
        }
    }

    /// Creates a provider for a per-language JSON document with an
    /// explicit language tag.
    pub fn for_language(path: impl AsRef<Path>, language: LanguageTag) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            standard: LanguageStandard::Flexible,
            layout: DocumentLayout::SingleLanguage(language),
        }
    }

    /// Creates a provider for a per-language JSON document, inferring the
    /// language from the file stem (`en_GB.json` loads as `en_GB`).
    pub fn from_file_name(path: impl AsRef<Path>, standard: LanguageStandard) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let language = language_from_stem(&path, standard)?;
        Ok(Self {
            path,
            standard,
            layout: DocumentLayout::SingleLanguage(language),
        })
    }

    /// The document this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranslationProvider for JsonFileProvider {
    fn load(&self) -> Result<Vec<TranslationEntry>> {
        debug!("Loading JSON translation file: {:?}", self.path);

        let content = fs::read_to_string(&self.path).map_err(|e| load_error(&self.path, &e))?;
        let document: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| load_error(&self.path, &e))?;

        flatten(&document, &self.layout, self.standard)
    }
}

/// Parses the file stem of a per-language document as its language tag.
pub(crate) fn language_from_stem(path: &Path, standard: LanguageStandard) -> Result<LanguageTag> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    standard.parse_tag(stem)
}

/// Wraps an underlying read or parse failure with the document path.
pub(crate) fn load_error(path: &Path, source: &dyn std::fmt::Display) -> PolyglotError {
    PolyglotError::ProviderLoad {
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
}
