//! Dynamically-typed parameter values for template substitution.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

/// A value bound to a template placeholder.
///
/// Formatters dispatch on the variant, which stands in for the value's
/// runtime type; anything not covered by a registered formatter falls back
/// to the [`fmt::Display`] stringification below.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// A plain string value.
    Text(String),
    /// A signed integer value.
    Integer(i64),
    /// An unsigned integer value.
    Unsigned(u64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// A UTC timestamp value.
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Timestamp(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S UTC")),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for ParameterValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for ParameterValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// The parameters supplied to a single render call.
///
/// Exactly one kind is supplied per call: keyed values looked up by
/// placeholder name, or positional values looked up by index. Global
/// context parameters are merged into keyed lookups by the binder with
/// call-site values winning on collision.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationParameters {
    /// Values looked up by placeholder name.
    Keyed(HashMap<String, ParameterValue>),
    /// Values looked up by placeholder index.
    Positional(Vec<ParameterValue>),
}

impl TranslationParameters {
    /// Builds keyed parameters from `(name, value)` pairs.
    pub fn keyed<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<ParameterValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Keyed(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Builds positional parameters from an ordered sequence of values.
    pub fn positional<V, I>(values: I) -> Self
    where
        V: Into<ParameterValue>,
        I: IntoIterator<Item = V>,
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Parameters carrying no values; keyed so globals still resolve.
    pub fn empty() -> Self {
        Self::Keyed(HashMap::new())
    }

    /// Looks up a keyed value by placeholder name.
    pub fn named(&self, name: &str) -> Option<&ParameterValue> {
        match self {
            Self::Keyed(values) => values.get(name),
            Self::Positional(_) => None,
        }
    }

    /// Looks up a positional value by placeholder index.
    pub fn indexed(&self, index: usize) -> Option<&ParameterValue> {
        match self {
            Self::Positional(values) => values.get(index),
            Self::Keyed(_) => None,
        }
    }

    /// Whether no values were supplied.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Keyed(values) => values.is_empty(),
            Self::Positional(values) => values.is_empty(),
        }
    }
}

impl Default for TranslationParameters {
    fn default() -> Self {
        Self::empty()
    }
}
