// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: interpret, then either look up or rank.
//!
//! ```text
//! raw text ──▶ QueryInterpreter ──▶ citation? ──yes──▶ lookup_reference ──┐
//!                                      │                                  ├──▶ QueryOutcome
//!                                      └──no───▶ rank_verses/sayings ─────┘
//! ```
//!
//! [`Engine::process_query`] is a pure function of the query, the attached
//! records, and the configuration. It keeps no memo of earlier queries, so a
//! caller that retries after a `QueryFailed` gets exactly the same work done
//! again.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::query::{QueryConfig, QueryInterpreter};
use crate::scoring::{lookup_reference, rank_sayings, rank_verses, TermSet};
use crate::store::{DatasetSource, RecordStore};
use crate::types::{QueryKind, Scope, SearchResult, Source, StructuredQuery};

/// Example queries for onboarding, and the fallback when nothing matches.
pub const SUGGESTIONS: &[&str] = &[
    "Tell me about prayer",
    "What does the Quran say about patience?",
    "Hadith about charity",
    "Verses about forgiveness",
    "Surah 2:255",
    "Paradise in Islam",
    "Fasting in Ramadan",
    "Importance of knowledge",
];

/// The fixed suggestion list.
pub fn suggestions() -> Vec<String> {
    SUGGESTIONS.iter().map(|s| (*s).to_string()).collect()
}

/// How the results were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Exact citation lookup; the ranker never ran.
    Reference,
    /// Term scoring over the scoped collections.
    Ranked,
}

/// Everything a caller needs to render one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome {
    pub scope: Scope,
    pub kind: QueryKind,
    pub strategy: Strategy,
    /// Quran results first, then hadith, each capped before the merge.
    pub results: Vec<SearchResult>,
    /// Filled with [`SUGGESTIONS`] only when `results` is empty.
    pub suggestions: Vec<String>,
}

impl QueryOutcome {
    pub fn is_no_match(&self) -> bool {
        self.results.is_empty()
    }
}

/// Shared entry point for every front end.
///
/// Starts without records; queries fail with [`Error::NotReady`] until a
/// store is attached.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    interpreter: QueryInterpreter,
    store: Option<Arc<RecordStore>>,
}

impl Engine {
    pub fn new(config: Arc<QueryConfig>) -> Self {
        Self {
            interpreter: QueryInterpreter::new(config),
            store: None,
        }
    }

    /// Ready-to-query engine with the default configuration.
    pub fn with_store(store: RecordStore) -> Self {
        let mut engine = Self::default();
        engine.attach(Arc::new(store));
        engine
    }

    /// Fetch both datasets and attach them. On failure the engine stays
    /// (or becomes) not ready, so a caller can simply call `load` again.
    pub fn load(&mut self, source: &impl DatasetSource) -> Result<()> {
        self.store = None;
        let store = RecordStore::load(source)?;
        self.attach(Arc::new(store));
        Ok(())
    }

    pub fn attach(&mut self, store: Arc<RecordStore>) {
        self.store = Some(store);
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_deref()
    }

    pub fn interpreter(&self) -> &QueryInterpreter {
        &self.interpreter
    }

    /// Interpretation only, without touching the records.
    pub fn interpret(&self, raw: &str) -> StructuredQuery {
        self.interpreter.interpret(raw)
    }

    /// Answer a raw query.
    ///
    /// An empty result list is a normal outcome; it comes back with the
    /// suggestion list instead of an error.
    pub fn process_query(&self, raw: &str) -> Result<QueryOutcome> {
        let store = self.store.as_deref().ok_or(Error::NotReady)?;
        let query = self.interpreter.interpret(raw);

        let (strategy, results) = match (query.kind, query.citation) {
            (QueryKind::Reference, Some(citation)) => {
                let verses = lookup_reference(store.verses(), &citation);
                (
                    Strategy::Reference,
                    verses.into_iter().cloned().map(SearchResult::from).collect(),
                )
            }
            _ => (Strategy::Ranked, rank_scoped(store, &query)?),
        };

        tracing::debug!(
            query = %query.normalized_text,
            scope = %query.scope,
            kind = %query.kind,
            strategy = ?strategy,
            results = results.len(),
            "processed query"
        );

        let suggestions = if results.is_empty() {
            suggestions()
        } else {
            Vec::new()
        };

        Ok(QueryOutcome {
            scope: query.scope,
            kind: query.kind,
            strategy,
            results,
            suggestions,
        })
    }
}

fn rank_scoped(store: &RecordStore, query: &StructuredQuery) -> Result<Vec<SearchResult>> {
    let terms = TermSet::compile(&query.expanded_terms)?;
    let mut results = Vec::new();

    if query.scope.includes(Source::Quran) {
        results.extend(
            rank_verses(store.verses(), &terms)
                .into_iter()
                .cloned()
                .map(SearchResult::from),
        );
    }
    if query.scope.includes(Source::Hadith) {
        results.extend(
            rank_sayings(store.sayings(), &terms)
                .into_iter()
                .cloned()
                .map(SearchResult::from),
        );
    }

    Ok(results)
}
