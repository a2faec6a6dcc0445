//! Fluent builders for contexts and translation facades.

use crate::fallback::FallbackStrategy;
use crate::formatter::TranslationFormatter;
use crate::parameter::ParameterValue;
use crate::provider::TranslationProvider;
use crate::translation::{Translation, TranslationContext};
use polyglot_common::{LanguageStandard, LanguageTag, Result};
use std::sync::Arc;

/// Builds a [`TranslationContext`] from explicit configuration.
#[derive(Debug, Default)]
pub struct TranslationContextBuilder {
    default_language: Option<LanguageTag>,
    language_standard: Option<LanguageStandard>,
    global_parameters: Vec<(String, ParameterValue)>,
    global_translations: Vec<(LanguageTag, String, String)>,
}

impl TranslationContextBuilder {
    /// Starts an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the context's default language.
    pub fn default_language(mut self, language: LanguageTag) -> Self {
        self.default_language = Some(language);
        self
    }

    /// Sets the language standard used by providers.
    pub fn language_standard(mut self, standard: LanguageStandard) -> Self {
        self.language_standard = Some(standard);
        self
    }

    /// Adds one global parameter.
    pub fn global_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.global_parameters.push((name.into(), value.into()));
        self
    }

    /// Adds one context-wide translation.
    pub fn global_translation(
        mut self,
        language: LanguageTag,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.global_translations
            .push((language, key.into(), template.into()));
        self
    }

    /// Builds the context.
    pub fn build(self) -> Arc<TranslationContext> {
        let context = match self.default_language {
            Some(language) => TranslationContext::with_default_language(language),
            None => TranslationContext::new(),
        };
        if let Some(standard) = self.language_standard {
            context.set_language_standard(standard);
        }
        context.add_global_parameters(self.global_parameters);
        for (language, key, template) in self.global_translations {
            context.add_global_translation(&language, key, template);
        }
        context
    }
}

/// Builds a [`Translation`] facade bound to a context.
///
/// Providers are loaded in registration order when the facade is built;
/// inline translations are applied afterwards and win on duplicate keys.
pub struct TranslationBuilder {
    context: Arc<TranslationContext>,
    default_language: Option<LanguageTag>,
    fallback_strategy: Option<FallbackStrategy>,
    formatters: Vec<Arc<dyn TranslationFormatter>>,
    providers: Vec<Box<dyn TranslationProvider>>,
    translations: Vec<(LanguageTag, String, String)>,
}

impl TranslationBuilder {
    /// Starts a builder for a facade bound to `context`.
    pub fn new(context: Arc<TranslationContext>) -> Self {
        Self {
            context,
            default_language: None,
            fallback_strategy: None,
            formatters: Vec::new(),
            providers: Vec::new(),
            translations: Vec::new(),
        }
    }

    /// Overrides the context's default language for this facade.
    pub fn default_language(mut self, language: LanguageTag) -> Self {
        self.default_language = Some(language);
        self
    }

    /// Sets the fallback strategy.
    pub fn fallback_strategy(mut self, strategy: FallbackStrategy) -> Self {
        self.fallback_strategy = Some(strategy);
        self
    }

    /// Registers a formatter; earlier registrations win on dispatch.
    pub fn formatter(mut self, formatter: Arc<dyn TranslationFormatter>) -> Self {
        self.formatters.push(formatter);
        self
    }

    /// Queues a provider to load when the facade is built.
    pub fn provider(mut self, provider: Box<dyn TranslationProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Adds one inline translation.
    pub fn translation(
        mut self,
        language: LanguageTag,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.translations
            .push((language, key.into(), template.into()));
        self
    }

    /// Builds the facade, loading every queued provider.
    ///
    /// Fails on the first provider error; entries from providers that
    /// loaded before the failure remain applied (loading is all-or-nothing
    /// per provider, not across providers).
    pub fn build(self) -> Result<Translation> {
        let translation = self.context.create_translation();

        if let Some(language) = self.default_language {
            translation.set_default_language(language);
        }
        if let Some(strategy) = self.fallback_strategy {
            translation.set_fallback_strategy(strategy);
        }
        for formatter in self.formatters {
            translation.add_formatter(formatter);
        }
        for provider in &self.providers {
            translation.load_from(provider.as_ref())?;
        }
        for (language, key, template) in self.translations {
            translation.add_translation(&language, key, template);
        }

        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TranslationEntry;
    use polyglot_common::PolyglotError;

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).unwrap()
    }

    struct StaticProvider(Vec<TranslationEntry>);

    impl TranslationProvider for StaticProvider {
        fn load(&self) -> Result<Vec<TranslationEntry>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    impl TranslationProvider for FailingProvider {
        fn load(&self) -> Result<Vec<TranslationEntry>> {
            Err(PolyglotError::ProviderLoad {
                path: "missing.json".into(),
                reason: "file not found".to_string(),
            })
        }
    }

    #[test]
    fn test_context_builder_applies_configuration() {
        let context = TranslationContext::builder()
            .default_language(tag("de"))
            .language_standard(LanguageStandard::LanguageOnly)
            .global_parameter("app", "Polyglot")
            .global_translation(tag("de"), "generic.yes", "Ja")
            .build();

        assert_eq!(context.default_language(), tag("de"));
        assert_eq!(context.language_standard(), LanguageStandard::LanguageOnly);
        assert!(context.global_parameters().contains_key("app"));

        let translation = context.create_translation();
        assert_eq!(translation.tr("generic.yes").unwrap(), "Ja");
    }

    #[test]
    fn test_translation_builder_loads_providers_then_inline() {
        let context = TranslationContext::new();
        let provider = StaticProvider(vec![
            TranslationEntry::new(tag("en"), "generic.yes", "Yes"),
            TranslationEntry::new(tag("en"), "generic.no", "No"),
        ]);

        let translation = Translation::builder(context)
            .provider(Box::new(provider))
            .translation(tag("en"), "generic.no", "Nope")
            .build()
            .unwrap();

        assert_eq!(translation.tr("generic.yes").unwrap(), "Yes");
        assert_eq!(translation.tr("generic.no").unwrap(), "Nope");
    }

    #[test]
    fn test_translation_builder_surfaces_provider_failure() {
        let context = TranslationContext::new();
        let result = Translation::builder(context)
            .provider(Box::new(FailingProvider))
            .build();

        assert!(matches!(
            result.unwrap_err(),
            PolyglotError::ProviderLoad { .. }
        ));
    }
}
