// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a query: records, results, and the interpreted query.
//!
//! # Invariants
//!
//! - **Records** never change after load. Identity of a verse is
//!   `(collection_number, item_number)`; sayings are identified by
//!   `(category, identifier)` in practice, but nothing enforces uniqueness.
//!
//! - **StructuredQuery** is derived fresh for every call. `expanded_terms`
//!   always contains `normalized_text`, even when no synonym group fires.
//!
//! - **SearchResult** carries an explicit `source` discriminant when
//!   serialized, so callers never have to sniff field names.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// RECORDS
// =============================================================================

/// One verse of collection A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRecord {
    /// Surah number (`surah_no`).
    pub collection_number: u32,
    /// Verse number within the surah (`ayah_no_surah`).
    pub item_number: u32,
    /// English translation (`ayah_en`).
    pub primary_text: String,
    /// Arabic text (`ayah_ar`).
    pub secondary_text: String,
    /// English surah name (`surah_name_en`).
    pub collection_title: String,
}

impl VerseRecord {
    /// Text the ranker scores: translation followed by the surah name.
    pub fn searchable_text(&self) -> String {
        join_non_empty(&[&self.primary_text, &self.collection_title])
    }

    /// Human-readable citation, e.g. `2:255`.
    pub fn citation(&self) -> String {
        format!("{}:{}", self.collection_number, self.item_number)
    }
}

/// One saying of collection B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SayingRecord {
    pub category: String,
    /// Hadith number as it appears in the source (`number`). Not always numeric.
    pub identifier: String,
    /// English text (`page_content`).
    pub body_text: String,
    pub source_url: String,
}

impl SayingRecord {
    /// Text the ranker scores: body followed by the category.
    pub fn searchable_text(&self) -> String {
        join_non_empty(&[&self.body_text, &self.category])
    }

    /// Book name for display: the category up to its first `" Book"`.
    ///
    /// Falls back to `"Hadith"` when the category is empty.
    pub fn book(&self) -> &str {
        match self.category.split(" Book").next() {
            Some(book) if !book.is_empty() => book,
            _ => "Hadith",
        }
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// RESULTS
// =============================================================================

/// A single excerpt returned for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum SearchResult {
    #[serde(rename = "quran")]
    Verse(VerseRecord),
    #[serde(rename = "hadith")]
    Saying(SayingRecord),
}

impl SearchResult {
    pub fn source(&self) -> Source {
        match self {
            SearchResult::Verse(_) => Source::Quran,
            SearchResult::Saying(_) => Source::Hadith,
        }
    }

    pub fn as_verse(&self) -> Option<&VerseRecord> {
        match self {
            SearchResult::Verse(verse) => Some(verse),
            SearchResult::Saying(_) => None,
        }
    }

    pub fn as_saying(&self) -> Option<&SayingRecord> {
        match self {
            SearchResult::Saying(saying) => Some(saying),
            SearchResult::Verse(_) => None,
        }
    }
}

impl From<VerseRecord> for SearchResult {
    fn from(verse: VerseRecord) -> Self {
        SearchResult::Verse(verse)
    }
}

impl From<SayingRecord> for SearchResult {
    fn from(saying: SayingRecord) -> Self {
        SearchResult::Saying(saying)
    }
}

/// Which collection a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Quran,
    Hadith,
}

// =============================================================================
// STRUCTURED QUERY
// =============================================================================

/// Collections a query should be answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Quran,
    Hadith,
    Both,
}

impl Scope {
    pub fn includes(self, source: Source) -> bool {
        matches!(
            (self, source),
            (Scope::Both, _) | (Scope::Quran, Source::Quran) | (Scope::Hadith, Source::Hadith)
        )
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scope::Quran => "quran",
            Scope::Hadith => "hadith",
            Scope::Both => "both",
        })
    }
}

/// What the user is asking for.
///
/// `Meaning` and `Search` rank identically today; the split is kept so
/// callers can present them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Reference,
    Meaning,
    Search,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QueryKind::Reference => "reference",
            QueryKind::Meaning => "meaning",
            QueryKind::Search => "search",
        })
    }
}

/// A structural pointer into collection A: surah, optionally a verse.
///
/// Numbers are kept as written, unchecked against the collection and wider
/// than the record fields, so an out-of-range citation matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    pub surah: u64,
    pub verse: Option<u64>,
}

impl Citation {
    pub fn matches(&self, verse: &VerseRecord) -> bool {
        u64::from(verse.collection_number) == self.surah
            && self
                .verse
                .map_or(true, |item| u64::from(verse.item_number) == item)
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verse {
            Some(verse) => write!(f, "{}:{}", self.surah, verse),
            None => write!(f, "surah {}", self.surah),
        }
    }
}

/// The interpreter's reading of a raw query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    pub scope: Scope,
    pub kind: QueryKind,
    pub normalized_text: String,
    /// Insertion-ordered, duplicate-free. The first entry is `normalized_text`.
    pub expanded_terms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<Citation>,
}
