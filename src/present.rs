// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caller-side display filtering: pick a collection, cap the list.
//!
//! The engine already caps each collection at five before merging. Front ends
//! then let the user narrow to one collection and choose how many results to
//! show. That step lives here so the CLI and the browser binding agree on it;
//! the ranker knows nothing about it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::{suggestions, QueryOutcome};
use crate::error::Error;
use crate::types::{SearchResult, Source};

/// Which collections to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    Both,
    Quran,
    Hadith,
}

impl SourceFilter {
    pub fn allows(self, source: Source) -> bool {
        match self {
            SourceFilter::Both => true,
            SourceFilter::Quran => source == Source::Quran,
            SourceFilter::Hadith => source == Source::Hadith,
        }
    }
}

impl FromStr for SourceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "both" | "all" => Ok(SourceFilter::Both),
            "quran" => Ok(SourceFilter::Quran),
            "hadith" => Ok(SourceFilter::Hadith),
            other => Err(format!(
                "unknown source '{}' (expected both, quran or hadith)",
                other
            )),
        }
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceFilter::Both => "both",
            SourceFilter::Quran => "quran",
            SourceFilter::Hadith => "hadith",
        })
    }
}

/// How many results to show: 5, 10 or 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct MaxResults(usize);

impl MaxResults {
    pub const CHOICES: [usize; 3] = [5, 10, 15];

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for MaxResults {
    fn default() -> Self {
        MaxResults(10)
    }
}

impl TryFrom<usize> for MaxResults {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if Self::CHOICES.contains(&value) {
            Ok(MaxResults(value))
        } else {
            Err(Error::Config {
                reason: format!("max results must be one of 5, 10, 15 (got {})", value),
            })
        }
    }
}

impl From<MaxResults> for usize {
    fn from(max: MaxResults) -> usize {
        max.0
    }
}

impl FromStr for MaxResults {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.parse().map_err(|e| format!("{}", e))?;
        MaxResults::try_from(value).map_err(|e| e.to_string())
    }
}

/// The user's display choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayOptions {
    pub source: SourceFilter,
    pub max_results: MaxResults,
}

impl DisplayOptions {
    /// Filter by collection, then truncate. Order is preserved.
    pub fn apply(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        results
            .into_iter()
            .filter(|result| self.source.allows(result.source()))
            .take(self.max_results.get())
            .collect()
    }

    /// Apply to an outcome's results. If the filter empties the list, the
    /// outcome becomes a no-match and picks up the suggestion list.
    pub fn apply_to(&self, mut outcome: QueryOutcome) -> QueryOutcome {
        outcome.results = self.apply(outcome.results);
        if outcome.results.is_empty() && outcome.suggestions.is_empty() {
            outcome.suggestions = suggestions();
        }
        outcome
    }
}
