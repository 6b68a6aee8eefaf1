// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query interpretation: from a raw string to a [`StructuredQuery`].
//!
//! No language understanding happens here, just ordered substring checks.
//! The decision list, first match wins:
//!
//! 1. Lowercase and trim the input.
//! 2. A citation anywhere in the text → Quran scope, `Reference` kind.
//! 3. A hadith marker ("hadith", "bukhari", ...) → Hadith scope.
//! 4. A Quran marker ("quran", "surah", ...) → Quran scope.
//! 5. Otherwise both collections.
//!
//! Steps 3-5 classify the kind with [`QueryInterpreter::detect_query_type`].
//!
//! The citation check runs before the marker checks, so a mixed query like
//! "tell me about 2:255 and patience" becomes a pure reference lookup and the
//! "patience" part is ignored. Existing callers depend on this ordering.

pub mod config;
pub mod reference;

use std::collections::HashSet;
use std::sync::Arc;

use crate::types::{QueryKind, Scope, StructuredQuery};

pub use config::{QueryConfig, SynonymGroup, SynonymTable};
pub use reference::parse_reference;

/// Turns raw query strings into structured queries.
///
/// Holds only shared, immutable configuration; interpreting never mutates
/// anything, so one interpreter can serve every query.
#[derive(Debug, Clone, Default)]
pub struct QueryInterpreter {
    config: Arc<QueryConfig>,
}

impl QueryInterpreter {
    pub fn new(config: Arc<QueryConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Classify a raw query and expand its search terms.
    pub fn interpret(&self, raw: &str) -> StructuredQuery {
        let normalized_text = raw.trim().to_lowercase();
        let expanded_terms = self.expand_query(&normalized_text);

        if let Some(citation) = parse_reference(&normalized_text) {
            return StructuredQuery {
                scope: Scope::Quran,
                kind: QueryKind::Reference,
                normalized_text,
                expanded_terms,
                citation: Some(citation),
            };
        }

        let scope = if contains_any(&normalized_text, &self.config.hadith_markers) {
            Scope::Hadith
        } else if contains_any(&normalized_text, &self.config.quran_markers) {
            Scope::Quran
        } else {
            Scope::Both
        };

        StructuredQuery {
            scope,
            kind: self.detect_query_type(&normalized_text),
            normalized_text,
            expanded_terms,
            citation: None,
        }
    }

    /// `Meaning` if the text asks for an explanation, `Search` otherwise.
    pub fn detect_query_type(&self, text: &str) -> QueryKind {
        if contains_any(text, &self.config.meaning_markers) {
            QueryKind::Meaning
        } else {
            QueryKind::Search
        }
    }

    /// The lowercased query plus every synonym group it touches.
    ///
    /// A group fires when the query contains any of its synonyms as a plain
    /// substring, so "good" inside "goodbye" pulls in the whole
    /// righteousness group. The first element is always the lowercased query.
    pub fn expand_query(&self, query: &str) -> Vec<String> {
        let lower = query.to_lowercase();
        let mut seen = HashSet::new();
        let mut terms = Vec::new();

        let mut push = |term: &str| {
            if seen.insert(term.to_string()) {
                terms.push(term.to_string());
            }
        };

        push(lower.as_str());
        for group in self.config.synonyms.groups() {
            if group.fires_on(&lower) {
                group.synonyms.iter().for_each(|synonym| push(synonym.as_str()));
            }
        }

        terms
    }
}

fn contains_any(text: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| text.contains(needle.as_str()))
}
