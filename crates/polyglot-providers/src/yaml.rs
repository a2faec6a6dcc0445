//! YAML file provider.

use crate::document::{flatten, DocumentLayout};
use crate::json::{language_from_stem, load_error};
use polyglot_common::{LanguageStandard, LanguageTag, Result};
use polyglot_core::{TranslationEntry, TranslationProvider};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads translations from a YAML file.
///
/// The document is deserialized into the same tree representation the JSON
/// provider uses, so both share one flattener and identical layout and
/// validation rules.
#[derive(Debug)]
pub struct YamlFileProvider {
    path: PathBuf,
    standard: LanguageStandard,
    layout: DocumentLayout,
}

impl YamlFileProvider {
    /// Creates a provider for a language-keyed YAML document.
    pub fn new(path: impl AsRef<Path>, standard: LanguageStandard) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            standard,
            layout: DocumentLayout::LanguageKeyed,
        }
    }

    /// Creates a provider for a per-language YAML document with an
    /// explicit language tag.
    pub fn for_language(path: impl AsRef<Path>, language: LanguageTag) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            standard: LanguageStandard::Flexible,
            layout: DocumentLayout::SingleLanguage(language),
        }
    }

    /// Creates a provider for a per-language YAML document, inferring the
    /// language from the file stem (`de.yaml` loads as `de`).
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

impl TranslationProvider for YamlFileProvider {
    fn load(&self) -> Result<Vec<TranslationEntry>> {
        debug!("Loading YAML translation file: {:?}", self.path);

        let content = fs::read_to_string(&self.path).map_err(|e| load_error(&self.path, &e))?;
        let document: serde_json::Value =
            serde_yaml::from_str(&content).map_err(|e| load_error(&self.path, &e))?;

        flatten(&document, &self.layout, self.standard)
    }
}
