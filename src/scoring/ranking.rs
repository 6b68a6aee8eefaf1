// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score, drop zeros, stable-sort, cap.
//!
//! Ties keep load order. The sort compares scores only and relies on
//! `sort_by` being stable, so two verses with identical text come back in the
//! order they appeared in the file.
//!
//! Reference lookups skip scoring entirely: they filter by citation and keep
//! load order.

use crate::scoring::TermSet;
use crate::types::{Citation, SayingRecord, VerseRecord};

/// Maximum ranked results per collection.
pub const RESULTS_PER_SOURCE: usize = 5;

/// Maximum verses returned by a reference lookup.
pub const REFERENCE_LIMIT: usize = 10;

/// Score every record, keep the positive ones, best first, at most `limit`.
pub fn rank_by<'a, T>(
    records: &'a [T],
    terms: &TermSet,
    limit: usize,
    text_of: impl Fn(&T) -> String,
) -> Vec<(&'a T, u32)> {
    let mut scored: Vec<(&'a T, u32)> = records
        .iter()
        .map(|record| (record, terms.score(&text_of(record))))
        .filter(|(_, score)| *score > 0)
        .collect();

    // Stable: equal scores keep their relative load order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}

/// Top verses for the term set, scored on translation and surah name.
pub fn rank_verses<'a>(verses: &'a [VerseRecord], terms: &TermSet) -> Vec<&'a VerseRecord> {
    rank_by(verses, terms, RESULTS_PER_SOURCE, VerseRecord::searchable_text)
        .into_iter()
        .map(|(verse, _)| verse)
        .collect()
}

/// Top sayings for the term set, scored on body and category.
pub fn rank_sayings<'a>(sayings: &'a [SayingRecord], terms: &TermSet) -> Vec<&'a SayingRecord> {
    rank_by(sayings, terms, RESULTS_PER_SOURCE, SayingRecord::searchable_text)
        .into_iter()
        .map(|(saying, _)| saying)
        .collect()
}

/// Verses matching a citation exactly, in load order, at most [`REFERENCE_LIMIT`].
pub fn lookup_reference<'a>(verses: &'a [VerseRecord], citation: &Citation) -> Vec<&'a VerseRecord> {
    verses
        .iter()
        .filter(|verse| citation.matches(verse))
        .take(REFERENCE_LIMIT)
        .collect()
}
