//! Template rendering: placeholder substitution with formatting.

use crate::formatter::FormatterRegistry;
use crate::parameter::{ParameterValue, TranslationParameters};
use polyglot_common::{LanguageTag, PolyglotError, Result};
use std::collections::HashMap;

/// A parsed placeholder reference.
enum Placeholder<'a> {
    /// `{0}`, `{1}`, ... resolved against positional parameters.
    Indexed(usize),
    /// `{name}` resolved against keyed parameters merged with globals.
    Named(&'a str),
}

/// Renders a template by substituting every placeholder.
///
/// Placeholders are `{name}` (identifier) or `{0}` (non-negative integer);
/// `{{` and `}}` escape to literal braces. Substitution happens in a
/// single pass and substituted values are never re-scanned, so a value
/// containing `{` comes through verbatim. A placeholder with no bound
/// value fails with [`PolyglotError::MissingParameter`] naming the
/// placeholder and `key`; malformed placeholder syntax is emitted
/// literally.
///
/// Keyed placeholders resolve from `parameters` first and `globals`
/// second. Positional placeholders resolve from `parameters` only.
pub fn render(
    key: &str,
    template: &str,
    parameters: &TranslationParameters,
    globals: &HashMap<String, ParameterValue>,
    formatters: &FormatterRegistry,
    language: &LanguageTag,
) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    output.push('{');
                    continue;
                }

                match scan_placeholder(&template[position + 1..]) {
                    Some((placeholder, consumed)) => {
                        for _ in 0..consumed {
                            chars.next();
                        }
                        let value = lookup(&placeholder, parameters, globals, key)?;
                        output.push_str(&formatters.format_value(value, language));
                    }
                    None => output.push('{'),
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                output.push('}');
            }
            other => output.push(other),
        }
    }

    Ok(output)
}

/// Scans `rest` for a well-formed placeholder body plus closing brace.
///
/// Returns the placeholder and the number of characters consumed
/// (body plus the `}`), or `None` when the syntax is malformed.
fn scan_placeholder(rest: &str) -> Option<(Placeholder<'_>, usize)> {
    let body_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    let body = &rest[..body_len];

    if body.is_empty() || rest[body_len..].chars().next() != Some('}') {
        return None;
    }

    let placeholder = if body.chars().all(|c| c.is_ascii_digit()) {
        Placeholder::Indexed(body.parse().ok()?)
    } else if body
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        Placeholder::Named(body)
    } else {
        // Neither an index nor an identifier, e.g. "1x"
        return None;
    };

    Some((placeholder, body_len + 1))
}

fn lookup<'a>(
    placeholder: &Placeholder<'_>,
    parameters: &'a TranslationParameters,
    globals: &'a HashMap<String, ParameterValue>,
    key: &str,
) -> Result<&'a ParameterValue> {
    let (value, name) = match placeholder {
        Placeholder::Indexed(index) => (parameters.indexed(*index), index.to_string()),
        Placeholder::Named(name) => (
            parameters.named(name).or_else(|| globals.get(*name)),
            (*name).to_string(),
        ),
    };

    value.ok_or_else(|| PolyglotError::MissingParameter {
        placeholder: name,
        key: key.to_string(),
    })
}
