//! Translation context and facade.

use crate::binder;
use crate::builder::{TranslationBuilder, TranslationContextBuilder};
use crate::fallback::{fallback_chain, FallbackStrategy};
use crate::formatter::{FormatterRegistry, TranslationFormatter};
use crate::parameter::{ParameterValue, TranslationParameters};
use crate::provider::TranslationProvider;
use crate::store::TranslationStore;
use parking_lot::RwLock;
use polyglot_common::{LanguageStandard, LanguageTag, PolyglotError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared configuration and context-wide state for translations.
///
/// A context owns a global store (translations visible to every facade
/// created from it), global parameters merged into every render call, the
/// default language, and the [`LanguageStandard`] providers use to parse
/// language keys. All configuration is mutable at any time and read fresh
/// on the next translate call.
#[derive(Debug)]
pub struct TranslationContext {
    global_store: TranslationStore,
    global_parameters: RwLock<HashMap<String, ParameterValue>>,
    default_language: RwLock<LanguageTag>,
    language_standard: RwLock<LanguageStandard>,
}

impl TranslationContext {
    /// Creates a context with `en` as the default language and the
    /// flexible language standard.
    pub fn new() -> Arc<Self> {
        Self::with_default_language(LanguageTag::default())
    }

    /// Creates a context with an explicit default language.
    pub fn with_default_language(default_language: LanguageTag) -> Arc<Self> {
        Arc::new(Self {
            global_store: TranslationStore::new(),
            global_parameters: RwLock::new(HashMap::new()),
            default_language: RwLock::new(default_language),
            language_standard: RwLock::new(LanguageStandard::default()),
        })
    }

    /// Starts a fluent context builder.
    pub fn builder() -> TranslationContextBuilder {
        TranslationContextBuilder::new()
    }

    /// The context's default language.
    pub fn default_language(&self) -> LanguageTag {
        self.default_language.read().clone()
    }

    /// Replaces the default language; takes effect on the next translate call.
    pub fn set_default_language(&self, language: LanguageTag) {
        *self.default_language.write() = language;
    }

    /// The active language standard.
    pub fn language_standard(&self) -> LanguageStandard {
        *self.language_standard.read()
    }

    /// Replaces the language standard used by providers created from this
    /// context.
    pub fn set_language_standard(&self, standard: LanguageStandard) {
        *self.language_standard.write() = standard;
    }

    /// Adds one global parameter; call-site parameters win on collision.
    pub fn add_global_parameter(
        &self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) {
        self.global_parameters
            .write()
            .insert(name.into(), value.into());
    }

    /// Adds several global parameters.
    pub fn add_global_parameters<K, V, I>(&self, parameters: I)
    where
        K: Into<String>,
        V: Into<ParameterValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut globals = self.global_parameters.write();
        for (name, value) in parameters {
            globals.insert(name.into(), value.into());
        }
    }

    /// A snapshot of the current global parameters.
    pub fn global_parameters(&self) -> HashMap<String, ParameterValue> {
        self.global_parameters.read().clone()
    }

    /// Adds a context-wide translation visible to every facade.
    pub fn add_global_translation(
        &self,
        language: &LanguageTag,
        key: impl Into<String>,
        template: impl AsRef<str>,
    ) {
        self.global_store.put(language, key, template);
    }

    /// Adds several context-wide translations for one language.
    pub fn add_global_translations<K, V, I>(&self, language: &LanguageTag, translations: I)
    where
        K: Into<String>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.global_store.put_all(language, translations);
    }

    /// Creates a translation facade bound to this context.
    pub fn create_translation(self: &Arc<Self>) -> Translation {
        Translation {
            context: Arc::clone(self),
            store: TranslationStore::new(),
            default_language: RwLock::new(None),
            fallback_strategy: RwLock::new(FallbackStrategy::default()),
            formatters: RwLock::new(FormatterRegistry::new()),
        }
    }
}

/// The single entry point for message resolution and rendering.
///
/// Created from a [`TranslationContext`] and configurable independently
/// afterward: its own store, an optional default-language override, a
/// fallback strategy, and a formatter registry.
#[derive(Debug)]
pub struct Translation {
    context: Arc<TranslationContext>,
    store: TranslationStore,
    default_language: RwLock<Option<LanguageTag>>,
    fallback_strategy: RwLock<FallbackStrategy>,
    formatters: RwLock<FormatterRegistry>,
}

impl Translation {
    /// Starts a fluent builder for a facade bound to `context`.
    pub fn builder(context: Arc<TranslationContext>) -> TranslationBuilder {
        TranslationBuilder::new(context)
    }

    /// The context this facade was created from.
    pub fn context(&self) -> &Arc<TranslationContext> {
        &self.context
    }

    /// The effective default language: the facade override when set,
    /// otherwise the context's.
    pub fn default_language(&self) -> LanguageTag {
        self.default_language
            .read()
            .clone()
            .unwrap_or_else(|| self.context.default_language())
    }

    /// Overrides the context's default language for this facade only.
    pub fn set_default_language(&self, language: LanguageTag) {
        *self.default_language.write() = Some(language);
    }

    /// The active fallback strategy.
    pub fn fallback_strategy(&self) -> FallbackStrategy {
        self.fallback_strategy.read().clone()
    }

    /// Replaces the fallback strategy; takes effect on the next translate
    /// call, no resolved chain is cached across configuration changes.
    pub fn set_fallback_strategy(&self, strategy: FallbackStrategy) {
        *self.fallback_strategy.write() = strategy;
    }

    /// Appends a formatter to the registry; earlier registrations win.
    pub fn add_formatter(&self, formatter: Arc<dyn TranslationFormatter>) {
        self.formatters.write().register(formatter);
    }

    /// Adds one translation to the facade's own store.
    pub fn add_translation(
        &self,
        language: &LanguageTag,
        key: impl Into<String>,
        template: impl AsRef<str>,
    ) {
        self.store.put(language, key, template);
    }

    /// Adds an ordered sequence of `(key, template)` pairs for one
    /// language; later entries win on duplicate keys.
    pub fn add_translations<K, V, I>(&self, language: &LanguageTag, translations: I)
    where
        K: Into<String>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.store.put_all(language, translations);
    }

    /// Loads every entry from a provider into the facade's store.
    ///
    /// All-or-nothing: a provider failure surfaces before anything is
    /// written, leaving the store unchanged for a retry against a
    /// corrected source.
    pub fn load_from(&self, provider: &dyn TranslationProvider) -> Result<usize> {
        let entries = provider.load()?;
        let count = entries.len();
        for entry in entries {
            self.store.put(&entry.language, entry.key, entry.template);
        }
        info!("Loaded {} translation(s) from provider", count);
        Ok(count)
    }

    /// Translates `key` for the given language without parameters.
    pub fn translate(&self, language: &LanguageTag, key: &str) -> Result<String> {
        self.translate_with(language, key, &TranslationParameters::empty())
    }

    /// Translates `key` for the given language, binding the supplied
    /// parameters (merged with the context's global parameters).
    pub fn translate_with(
        &self,
        language: &LanguageTag,
        key: &str,
        parameters: &TranslationParameters,
    ) -> Result<String> {
        let strategy = self.fallback_strategy();
        let chain = fallback_chain(language.clone(), strategy, self.default_language());

        let mut attempted = Vec::new();
        for candidate in chain {
            let template = self
                .store
                .get(&candidate, key)
                .or_else(|| self.context.global_store.get(&candidate, key));

            if let Some(template) = template {
                if !attempted.is_empty() {
                    warn!(
                        "Key '{}' not found in '{}', fell back to '{}'",
                        key, language, candidate
                    );
                }
                return self.render(key, &template, parameters, &candidate);
            }
            debug!("Key '{}' not found in candidate '{}'", key, candidate);
            attempted.push(candidate);
        }

        Err(PolyglotError::TranslationNotFound {
            language: language.clone(),
            key: key.to_string(),
            attempted,
        })
    }

    /// Translates `key` using the effective default language.
    pub fn tr(&self, key: &str) -> Result<String> {
        self.translate(&self.default_language(), key)
    }

    /// Translates `key` with parameters using the effective default
    /// language.
    pub fn tr_with(&self, key: &str, parameters: &TranslationParameters) -> Result<String> {
        self.translate_with(&self.default_language(), key, parameters)
    }

    fn render(
        &self,
        key: &str,
        template: &str,
        parameters: &TranslationParameters,
        language: &LanguageTag,
    ) -> Result<String> {
        let globals = self.context.global_parameters();
        let formatters = self.formatters.read().clone();
        binder::render(key, template, parameters, &globals, &formatters, language)
    }
}
