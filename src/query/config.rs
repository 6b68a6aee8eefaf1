// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word lists that steer interpretation: synonym groups and marker words.
//!
//! Built once at startup, then shared read-only behind an `Arc` by every
//! query. The compiled-in defaults can be overridden from a JSON file:
//!
//! ```json
//! {
//!   "synonyms": { "prayer": ["prayer", "salah"], "charity": ["charity", "zakat"] },
//!   "hadithMarkers": ["hadith", "bukhari"],
//!   "quranMarkers": ["quran", "surah"],
//!   "meaningMarkers": ["meaning", "explain"]
//! }
//! ```
//!
//! Any key left out keeps its default. All words are lowercased on load
//! because matching runs against lowercased query text.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Topic → synonyms. A query mentioning any synonym pulls in the whole group.
const DEFAULT_TOPICS: &[(&str, &[&str])] = &[
    ("prayer", &["prayer", "salah", "salat", "namaz", "worship", "prostration", "ruku"]),
    ("charity", &["charity", "sadaqah", "zakat", "giving", "poor", "needy", "alms"]),
    ("patience", &["patience", "sabr", "perseverance", "endurance", "steadfast"]),
    ("forgiveness", &["forgiveness", "pardon", "mercy", "repentance", "tawbah", "repent"]),
    ("paradise", &["paradise", "jannah", "heaven", "garden", "eternal"]),
    ("hell", &["hell", "jahannam", "hellfire", "punishment"]),
    ("fasting", &["fasting", "sawm", "ramadan", "fast"]),
    ("hajj", &["hajj", "pilgrimage", "mecca", "kaaba", "umrah"]),
    ("faith", &["faith", "iman", "belief", "believe", "believer"]),
    ("righteousness", &["righteousness", "righteous", "good", "virtue", "piety"]),
    ("sin", &["sin", "evil", "wrong", "transgression", "disobedience"]),
    ("prophet", &["prophet", "messenger", "muhammad", "prophets"]),
    ("allah", &["allah", "god", "lord", "creator", "sustainer"]),
    ("quran", &["quran", "book", "scripture", "revelation"]),
    ("family", &["family", "parents", "mother", "father", "children", "spouse"]),
    ("death", &["death", "die", "grave", "hereafter", "afterlife"]),
    ("knowledge", &["knowledge", "learn", "wisdom", "understanding", "scholar"]),
    ("heart", &["heart", "soul", "purification", "intention", "sincerity"]),
    ("gratitude", &["gratitude", "thankful", "thanks", "grateful", "appreciate"]),
    ("trust", &["trust", "tawakkul", "reliance", "depend"]),
];

/// Any of these narrows the scope to hadith.
const DEFAULT_HADITH_MARKERS: &[&str] = &[
    "hadith",
    "bukhari",
    "muslim",
    "tirmidhi",
    "abu dawood",
    "narrator",
];

/// Any of these narrows the scope to the Quran (checked after hadith markers).
const DEFAULT_QURAN_MARKERS: &[&str] = &["quran", "surah", "verse", "ayah"];

/// Any of these classifies a free-text query as a request for meaning.
const DEFAULT_MEANING_MARKERS: &[&str] = &["meaning", "explain", "what is", "about"];

/// One named group of interchangeable words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    pub topic: String,
    pub synonyms: Vec<String>,
}

impl SynonymGroup {
    /// True if `text` contains any synonym of this group as a substring.
    pub fn fires_on(&self, text: &str) -> bool {
        self.synonyms.iter().any(|synonym| text.contains(synonym.as_str()))
    }
}

/// Ordered, immutable list of synonym groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
}

impl SynonymTable {
    pub fn new(groups: Vec<SynonymGroup>) -> Result<Self> {
        for group in &groups {
            if group.synonyms.iter().any(|s| s.trim().is_empty()) {
                return Err(Error::Config {
                    reason: format!("topic '{}' has an empty synonym", group.topic),
                });
            }
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    pub fn get(&self, topic: &str) -> Option<&SynonymGroup> {
        self.groups.iter().find(|group| group.topic == topic)
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self {
            groups: DEFAULT_TOPICS
                .iter()
                .map(|(topic, synonyms)| SynonymGroup {
                    topic: (*topic).to_string(),
                    synonyms: owned(synonyms),
                })
                .collect(),
        }
    }
}

/// Everything the interpreter needs besides the query itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub synonyms: SynonymTable,
    pub hadith_markers: Vec<String>,
    pub quran_markers: Vec<String>,
    pub meaning_markers: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            synonyms: SynonymTable::default(),
            hadith_markers: owned(DEFAULT_HADITH_MARKERS),
            quran_markers: owned(DEFAULT_QURAN_MARKERS),
            meaning_markers: owned(DEFAULT_MEANING_MARKERS),
        }
    }
}

/// On-disk shape of a configuration override.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    synonyms: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    hadith_markers: Option<Vec<String>>,
    #[serde(default)]
    quran_markers: Option<Vec<String>>,
    #[serde(default)]
    meaning_markers: Option<Vec<String>>,
}

impl QueryConfig {
    /// Parse a JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(json).map_err(|e| Error::Config {
            reason: format!("invalid JSON: {}", e),
        })?;

        let mut config = Self::default();

        if let Some(topics) = file.synonyms {
            let groups = topics
                .into_iter()
                .map(|(topic, synonyms)| SynonymGroup {
                    topic: topic.to_lowercase(),
                    synonyms: lowercased(synonyms),
                })
                .collect();
            config.synonyms = SynonymTable::new(groups)?;
        }
        if let Some(markers) = file.hadith_markers {
            config.hadith_markers = markers_from("hadithMarkers", markers)?;
        }
        if let Some(markers) = file.quran_markers {
            config.quran_markers = markers_from("quranMarkers", markers)?;
        }
        if let Some(markers) = file.meaning_markers {
            config.meaning_markers = markers_from("meaningMarkers", markers)?;
        }

        Ok(config)
    }

    /// Read and parse a JSON override file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&json)
    }
}

fn markers_from(key: &str, markers: Vec<String>) -> Result<Vec<String>> {
    let markers = lowercased(markers);
    if markers.iter().any(|m| m.is_empty()) {
        return Err(Error::Config {
            reason: format!("{} contains an empty marker", key),
        });
    }
    Ok(markers)
}

fn lowercased(words: Vec<String>) -> Vec<String> {
    words.into_iter().map(|w| w.trim().to_lowercase()).collect()
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
