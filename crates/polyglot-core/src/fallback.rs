//! Fallback chain construction and language resolution.

use polyglot_common::{LanguageTag, PolyglotError, Result};
use std::collections::HashSet;
use tracing::debug;

/// Policy for picking candidate languages when the requested one has no
/// exact match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FallbackStrategy {
    /// Only the exact requested language is tried.
    None,
    /// The requested language, then a language-only relaxation, then the
    /// configured default language.
    #[default]
    DefaultLanguage,
    /// The requested language, then a language-only relaxation, then the
    /// given chain in order.
    CustomChain(Vec<LanguageTag>),
}

/// Lazy, restartable sequence of candidate languages.
///
/// Candidates are produced on demand and deduplicated as they are yielded,
/// so callers can stop at the first hit without materializing the whole
/// chain. Cloning the chain before iteration restarts it from the top.
#[derive(Debug, Clone)]
pub struct FallbackChain {
    requested: LanguageTag,
    strategy: FallbackStrategy,
    default_language: LanguageTag,
    stage: Stage,
    custom_index: usize,
    yielded: Vec<LanguageTag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Requested,
    Relaxed,
    Tail,
    Done,
}

impl FallbackChain {
    /// The language the chain was built for.
    pub fn requested(&self) -> &LanguageTag {
        &self.requested
    }

    fn next_candidate(&mut self) -> Option<LanguageTag> {
        loop {
            match self.stage {
                Stage::Requested => {
                    self.stage = match self.strategy {
                        FallbackStrategy::None => Stage::Done,
                        _ => Stage::Relaxed,
                    };
                    return Some(self.requested.clone());
                }
                Stage::Relaxed => {
                    self.stage = Stage::Tail;
                    if self.requested.has_country() {
                        return Some(self.requested.language_only());
                    }
                }
                Stage::Tail => match &self.strategy {
                    FallbackStrategy::None => self.stage = Stage::Done,
                    FallbackStrategy::DefaultLanguage => {
                        self.stage = Stage::Done;
                        return Some(self.default_language.clone());
                    }
                    FallbackStrategy::CustomChain(chain) => {
                        let Some(candidate) = chain.get(self.custom_index) else {
                            self.stage = Stage::Done;
                            continue;
                        };
                        self.custom_index += 1;
                        return Some(candidate.clone());
                    }
                },
                Stage::Done => return None,
            }
        }
    }
}

impl Iterator for FallbackChain {
    type Item = LanguageTag;

    fn next(&mut self) -> Option<LanguageTag> {
        while let Some(candidate) = self.next_candidate() {
            if self.yielded.contains(&candidate) {
                continue;
            }
            self.yielded.push(candidate.clone());
            return Some(candidate);
        }
        None
    }
}

/// Builds the candidate chain for a request.
///
/// The requested language is always first; what follows depends on the
/// strategy. When the requested tag carries a country code, a
/// language-only relaxation is tried immediately after it (for every
/// strategy except [`FallbackStrategy::None`]).
pub fn fallback_chain(
    requested: LanguageTag,
    strategy: FallbackStrategy,
    default_language: LanguageTag,
) -> FallbackChain {
    FallbackChain {
        requested,
        strategy,
        default_language,
        stage: Stage::Requested,
        custom_index: 0,
        yielded: Vec::new(),
    }
}

/// Walks the chain and returns the first candidate present in `available`.
///
/// Fails with [`PolyglotError::NoTranslationAvailable`] carrying the full
/// attempted chain when no candidate matches.
pub fn resolve(chain: FallbackChain, available: &HashSet<LanguageTag>) -> Result<LanguageTag> {
    let requested = chain.requested().clone();
    let mut attempted = Vec::new();

    for candidate in chain {
        if available.contains(&candidate) {
            debug!(
                "Resolved '{}' to '{}' after {} miss(es)",
                requested,
                candidate,
                attempted.len()
            );
            return Ok(candidate);
        }
        attempted.push(candidate);
    }

    Err(PolyglotError::NoTranslationAvailable {
        requested,
        attempted,
    })
}
