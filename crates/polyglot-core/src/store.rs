//! Thread-safe translation storage with last-write-wins semantics.

use parking_lot::RwLock;
use polyglot_common::LanguageTag;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Maps `(language, key)` pairs to message templates.
///
/// The store holds no resolution logic: lookups are exact-match only and
/// fallback is composed on top by the translation facade. Writes are
/// last-write-wins per key. Templates are stored as `Arc<str>` so
/// concurrent readers clone cheaply and never observe a partially written
/// value even while a writer is active.
#[derive(Debug, Default)]
pub struct TranslationStore {
    entries: RwLock<HashMap<LanguageTag, HashMap<String, Arc<str>>>>,
}

impl TranslationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a template, overwriting any existing entry for the exact
    /// `(language, key)` pair.
    pub fn put(&self, language: &LanguageTag, key: impl Into<String>, template: impl AsRef<str>) {
        let key = key.into();
        let mut entries = self.entries.write();
        entries
            .entry(language.clone())
            .or_default()
            .insert(key, Arc::from(template.as_ref()));
    }

    /// Inserts every entry in iteration order; later entries win on
    /// duplicate keys within one call. Per-key atomicity only.
    pub fn put_all<I, K, V>(&self, language: &LanguageTag, translations: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut entries = self.entries.write();
        let catalog = entries.entry(language.clone()).or_default();
        let mut count = 0usize;
        for (key, template) in translations {
            catalog.insert(key.into(), Arc::from(template.as_ref()));
            count += 1;
        }
        debug!("Stored {} translation(s) for language {}", count, language);
    }

    /// Looks up a template by exact `(language, key)` match.
    pub fn get(&self, language: &LanguageTag, key: &str) -> Option<Arc<str>> {
        self.entries
            .read()
            .get(language)
            .and_then(|catalog| catalog.get(key))
            .cloned()
    }

    /// All languages with at least one entry.
    pub fn languages(&self) -> HashSet<LanguageTag> {
        self.entries.read().keys().cloned().collect()
    }

    /// Whether at least one entry exists for the given language.
    pub fn contains_language(&self, language: &LanguageTag) -> bool {
        self.entries
            .read()
            .get(language)
            .is_some_and(|catalog| !catalog.is_empty())
    }

    /// Number of entries stored for the given language.
    pub fn len_for(&self, language: &LanguageTag) -> usize {
        self.entries
            .read()
            .get(language)
            .map_or(0, HashMap::len)
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.read().values().all(HashMap::is_empty)
    }
}
