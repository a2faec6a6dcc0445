//! Provider trait for populating stores from external documents.

use polyglot_common::{LanguageTag, Result};

/// A single `(language, key, template)` triple emitted by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// The language the template belongs to.
    pub language: LanguageTag,
    /// The translation key, dot-joined for nested documents.
    pub key: String,
    /// The raw template string.
    pub template: String,
}

impl TranslationEntry {
    /// Creates an entry.
    pub fn new(
        language: LanguageTag,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            language,
            key: key.into(),
            template: template.into(),
        }
    }
}

/// Loads translation entries from an external structured document.
///
/// Loading is all-or-nothing: implementations must surface any read or
/// parse failure before a single entry becomes visible to the caller, so
/// a failed load never partially mutates a target store.
pub trait TranslationProvider: Send + Sync {
    /// Reads the backing document and returns every entry it contains.
    fn load(&self) -> Result<Vec<TranslationEntry>>;
}
