//! # Polyglot Common
//!
//! Shared types and error taxonomy for the Polyglot translation engine.
//!
//! This crate provides the normalized [`LanguageTag`] identifier, the
//! [`LanguageStandard`] parsing policy, and the [`PolyglotError`] type used
//! across all other crates in the Polyglot workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use language::*;
