//! # Polyglot Core
//!
//! Message resolution and parameter substitution for the Polyglot
//! translation engine. It includes:
//!
//! - A thread-safe translation store with last-write-wins semantics
//! - Lazy fallback chain resolution across candidate languages
//! - Keyed and positional parameter binding with pluggable formatters
//! - The [`TranslationContext`] / [`Translation`] facade tying it together
//!
//! # Example
//!
//! ```rust
//! use polyglot_core::{TranslationContext, TranslationParameters};
//! use polyglot_common::LanguageTag;
//!
//! # fn example() -> polyglot_common::Result<()> {
//! let en = LanguageTag::parse("en")?;
//! let context = TranslationContext::builder()
//!     .default_language(en.clone())
//!     .build();
//! let translation = context.create_translation();
//!
//! translation.add_translation(&en, "greeting.hello", "Hello {name}!");
//!
//! let params = TranslationParameters::keyed([("name", "Ann")]);
//! assert_eq!(translation.translate_with(&en, "greeting.hello", &params)?, "Hello Ann!");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod binder;
pub mod builder;
pub mod fallback;
pub mod formatter;
pub mod parameter;
pub mod provider;
pub mod store;
pub mod translation;

pub use binder::render;
pub use builder::{TranslationBuilder, TranslationContextBuilder};
pub use fallback::{fallback_chain, resolve, FallbackChain, FallbackStrategy};
pub use formatter::{FormatterRegistry, NumberFormatter, TimestampFormatter, TranslationFormatter};
pub use parameter::{ParameterValue, TranslationParameters};
pub use provider::{TranslationEntry, TranslationProvider};
pub use store::TranslationStore;
pub use translation::{Translation, TranslationContext};
