//! # Polyglot Providers
//!
//! File-based translation providers for the Polyglot engine.
//!
//! Providers read a structured document (JSON or YAML), flatten its nested
//! key/value tree into `(language, key, template)` entries, and hand them
//! to a translation store. Loading is all-or-nothing: a failed read or a
//! malformed document surfaces before any entry is emitted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod json;
pub mod yaml;

pub use document::DocumentLayout;
pub use json::JsonFileProvider;
pub use yaml::YamlFileProvider;
