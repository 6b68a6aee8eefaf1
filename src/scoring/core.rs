// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance: term frequency with a whole-word premium.
//!
//! For each search term longer than two characters:
//!
//! ```text
//! score += 10 × (whole-word occurrences)
//! score +=  3 × (all occurrences − whole-word occurrences)
//! ```
//!
//! Matching is case-insensitive and literal. "Whole word" means bounded by
//! `\b` on both sides, so "patience" in "patience." counts as whole while
//! "fast" in "breakfast" only counts as partial.
//!
//! # Monotonicity
//!
//! With one term, appending another whole-word occurrence adds exactly
//! [`EXACT_MATCH_WEIGHT`]. With several terms that overlap (one being a
//! substring of another) the increase can be larger, never smaller.

use regex::Regex;

use crate::error::{Error, Result};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Points per whole-word occurrence.
pub const EXACT_MATCH_WEIGHT: u32 = 10;

/// Points per in-word (partial) occurrence.
pub const PARTIAL_MATCH_WEIGHT: u32 = 3;

/// Terms with this many characters or fewer are ignored.
pub const MAX_IGNORED_TERM_CHARS: usize = 2;

/// One search term plus its compiled whole-word matcher.
#[derive(Debug, Clone)]
struct TermMatcher {
    term: String,
    whole_word: Regex,
}

impl TermMatcher {
    fn score(&self, lower_text: &str) -> u32 {
        let exact = self.whole_word.find_iter(lower_text).count() as u32;
        let all = lower_text.matches(self.term.as_str()).count() as u32;
        let partial = all.saturating_sub(exact);
        exact * EXACT_MATCH_WEIGHT + partial * PARTIAL_MATCH_WEIGHT
    }
}

/// The scoring terms of one query, compiled once and reused for every record.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    matchers: Vec<TermMatcher>,
}

impl TermSet {
    /// Keep terms longer than two characters and compile their matchers.
    ///
    /// Fails with [`Error::QueryFailed`] if a matcher cannot be built.
    pub fn compile<S: AsRef<str>>(terms: &[S]) -> Result<Self> {
        let matchers = terms
            .iter()
            .map(|term| term.as_ref().to_lowercase())
            .filter(|term| term.chars().count() > MAX_IGNORED_TERM_CHARS)
            .map(|term| {
                let pattern = format!(r"\b{}\b", regex::escape(&term));
                let whole_word = Regex::new(&pattern).map_err(|e| Error::QueryFailed {
                    reason: format!("cannot build matcher for '{}': {}", term, e),
                })?;
                Ok(TermMatcher { term, whole_word })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { matchers })
    }

    /// Terms that survived the length filter, in input order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|m| m.term.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Relevance of `text` against every term, summed.
    pub fn score(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();
        self.matchers.iter().map(|m| m.score(&lower)).sum()
    }
}

/// One-shot scoring of a single text.
///
/// Prefer [`TermSet`] when scoring many texts against the same terms.
pub fn score<S: AsRef<str>>(text: &str, terms: &[S]) -> Result<u32> {
    Ok(TermSet::compile(terms)?.score(text))
}
