// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: two flat collections, loaded once, never mutated.
//!
//! Loading goes through a [`DatasetSource`], which hands back the raw text of
//! each dataset. The store parses it (see [`csv`]), maps rows to typed records
//! by header name, and freezes the result. Everything downstream only ever
//! sees `&RecordStore`.

pub mod csv;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{SayingRecord, VerseRecord};

use self::csv::{parse_rows, Row};

// Column names in the published datasets.
const SURAH_NO: &str = "surah_no";
const SURAH_NAME_EN: &str = "surah_name_en";
const AYAH_NO_SURAH: &str = "ayah_no_surah";
const AYAH_EN: &str = "ayah_en";
const AYAH_AR: &str = "ayah_ar";

const HADITH_CATEGORY: &str = "category";
const HADITH_NUMBER: &str = "number";
const HADITH_CONTENT: &str = "page_content";
const HADITH_URL: &str = "url";

/// The two datasets the store is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Verses,
    Sayings,
}

impl Dataset {
    /// File name used by [`DirectorySource`].
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Verses => "quran.csv",
            Dataset::Sayings => "hadith.csv",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dataset::Verses => "quran",
            Dataset::Sayings => "hadith",
        })
    }
}

/// Anything that can hand over the raw text of a dataset.
///
/// Failures should be reported as [`Error::DataUnavailable`].
pub trait DatasetSource {
    fn fetch(&self, dataset: Dataset) -> Result<String>;
}

/// Reads `quran.csv` and `hadith.csv` from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DatasetSource for DirectorySource {
    fn fetch(&self, dataset: Dataset) -> Result<String> {
        let path = self.root.join(dataset.file_name());
        fs::read_to_string(&path)
            .map_err(|e| Error::unavailable(dataset, format!("{}: {}", path.display(), e)))
    }
}

/// In-memory collections for both datasets.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    verses: Vec<VerseRecord>,
    sayings: Vec<SayingRecord>,
}

impl RecordStore {
    /// Fetch and parse both datasets. Verses are loaded first; the first
    /// failure aborts the load.
    pub fn load(source: &impl DatasetSource) -> Result<Self> {
        let verses = source.fetch(Dataset::Verses)?;
        let sayings = source.fetch(Dataset::Sayings)?;
        Self::from_texts(&verses, &sayings)
    }

    /// Build a store from raw dataset text already in memory.
    pub fn from_texts(verses: &str, sayings: &str) -> Result<Self> {
        let verses = parse_verses(verses)?;
        let sayings = parse_sayings(sayings)?;

        tracing::info!(
            verses = verses.len(),
            sayings = sayings.len(),
            "record store loaded"
        );

        Ok(Self { verses, sayings })
    }

    /// Build a store from records directly. Order is preserved.
    pub fn from_records(verses: Vec<VerseRecord>, sayings: Vec<SayingRecord>) -> Self {
        Self { verses, sayings }
    }

    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    pub fn sayings(&self) -> &[SayingRecord] {
        &self.sayings
    }
}

fn dataset_rows(dataset: Dataset, text: &str) -> Result<Vec<Row>> {
    if text.trim().is_empty() {
        return Err(Error::unavailable(dataset, "empty payload"));
    }
    parse_rows(text).ok_or_else(|| Error::unavailable(dataset, "missing header row"))
}

fn parse_verses(text: &str) -> Result<Vec<VerseRecord>> {
    let rows = dataset_rows(Dataset::Verses, text)?;
    let mut verses = Vec::with_capacity(rows.len());

    for row in &rows {
        let (Ok(collection_number), Ok(item_number)) = (
            row.get(SURAH_NO).parse::<u32>(),
            row.get(AYAH_NO_SURAH).parse::<u32>(),
        ) else {
            tracing::warn!(
                line = row.line(),
                surah = row.get(SURAH_NO),
                ayah = row.get(AYAH_NO_SURAH),
                "skipping verse row without numeric surah/ayah"
            );
            continue;
        };

        verses.push(VerseRecord {
            collection_number,
            item_number,
            primary_text: row.get(AYAH_EN).to_string(),
            secondary_text: row.get(AYAH_AR).to_string(),
            collection_title: row.get(SURAH_NAME_EN).to_string(),
        });
    }

    Ok(verses)
}

fn parse_sayings(text: &str) -> Result<Vec<SayingRecord>> {
    let rows = dataset_rows(Dataset::Sayings, text)?;
    Ok(rows
        .iter()
        .map(|row| SayingRecord {
            category: row.get(HADITH_CATEGORY).to_string(),
            identifier: row.get(HADITH_NUMBER).to_string(),
            body_text: row.get(HADITH_CONTENT).to_string(),
            source_url: row.get(HADITH_URL).to_string(),
        })
        .collect())
}
