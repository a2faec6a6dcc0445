//! Document tree flattening shared by the file providers.

use polyglot_common::{LanguageStandard, LanguageTag, PolyglotError, Result};
use polyglot_core::TranslationEntry;
use serde_json::{Map, Value};

/// How a provider interprets the top level of its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLayout {
    /// Top-level keys are language identifiers; values are nested
    /// key/template trees for that language.
    LanguageKeyed,
    /// The whole document is one language's key/template tree.
    SingleLanguage(LanguageTag),
}

/// Flattens a parsed document into translation entries.
///
/// Nested maps are flattened by joining key segments with `.`; every leaf
/// must be a string. Non-string leaves (numbers, booleans, arrays, null)
/// fail with [`PolyglotError::UnsupportedTemplateValue`] naming the
/// offending path. Language keys are parsed through `standard`, so a
/// document violating the configured identifier shape is rejected whole.
pub fn flatten(
    root: &Value,
    layout: &DocumentLayout,
    standard: LanguageStandard,
) -> Result<Vec<TranslationEntry>> {
    let Value::Object(map) = root else {
        return Err(unsupported("<root>", root));
    };

    let mut entries = Vec::new();
    match layout {
        DocumentLayout::LanguageKeyed => {
            for (language_key, subtree) in map {
                let language = standard.parse_tag(language_key)?;
                let Value::Object(catalog) = subtree else {
                    return Err(unsupported(language_key, subtree));
                };
                flatten_map(&language, catalog, "", language_key, &mut entries)?;
            }
        }
        DocumentLayout::SingleLanguage(language) => {
            flatten_map(language, map, "", "", &mut entries)?;
        }
    }
    Ok(entries)
}

fn flatten_map(
    language: &LanguageTag,
    map: &Map<String, Value>,
    key_prefix: &str,
    diagnostic_prefix: &str,
    entries: &mut Vec<TranslationEntry>,
) -> Result<()> {
    for (segment, value) in map {
        let key = join(key_prefix, segment);
        let path = join(diagnostic_prefix, segment);
        match value {
            Value::String(template) => {
                entries.push(TranslationEntry::new(language.clone(), key, template));
            }
            Value::Object(nested) => {
                flatten_map(language, nested, &key, &path, entries)?;
            }
            other => return Err(unsupported(&path, other)),
        }
    }
    Ok(())
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn unsupported(path: &str, value: &Value) -> PolyglotError {
    PolyglotError::UnsupportedTemplateValue {
        path: path.to_string(),
        found: describe(value).to_string(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
