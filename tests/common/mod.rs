//! Shared test fixtures: small datasets and record builders.

#![allow(dead_code)]

use huda::{Engine, RecordStore, SayingRecord, VerseRecord};

// ============================================================================
// DATASET TEXT
// ============================================================================

/// Header plus a handful of verses, in load order.
pub const QURAN_CSV: &str = "\
surah_no,surah_name_en,ayah_no_surah,ayah_en,ayah_ar
1,Al-Fatiha,1,\"In the name of Allah, the Entirely Merciful\",بِسْمِ اللَّهِ
2,Al-Baqarah,153,\"O you who have believed, seek help through patience and prayer\",يَا أَيُّهَا
2,Al-Baqarah,255,Allah is the light,اللَّهُ لَا إِلَٰهَ
3,Ali 'Imran,200,Be steadfast and compete in patience,اصْبِرُوا
103,Al-Asr,1,By time,وَالْعَصْرِ
";

pub const HADITH_CSV: &str = "\
category,number,page_content,url
Sahih al-Bukhari Book 24: Zakat,1410,\"Charity does not decrease wealth, and giving raises the giver\",https://sunnah.com/bukhari:1410
Sahih al-Bukhari Book 2: Belief,8,Islam is based on five principles,https://sunnah.com/bukhari:8
Sahih Muslim Book 1: Faith,55,The religion is sincerity,https://sunnah.com/muslim:55
";

// ============================================================================
// BUILDERS
// ============================================================================

pub fn verse(surah: u32, ayah: u32, text: &str) -> VerseRecord {
    VerseRecord {
        collection_number: surah,
        item_number: ayah,
        primary_text: text.to_string(),
        secondary_text: String::new(),
        collection_title: String::new(),
    }
}

pub fn saying(number: &str, text: &str) -> SayingRecord {
    SayingRecord {
        category: "Sahih al-Bukhari Book 1: Revelation".to_string(),
        identifier: number.to_string(),
        body_text: text.to_string(),
        source_url: format!("https://sunnah.com/bukhari:{}", number),
    }
}

/// Store parsed from the fixture datasets.
pub fn fixture_store() -> RecordStore {
    RecordStore::from_texts(QURAN_CSV, HADITH_CSV).expect("fixture datasets parse")
}

/// Ready engine over the fixture datasets with default configuration.
pub fn fixture_engine() -> Engine {
    Engine::with_store(fixture_store())
}

/// Ready engine over hand-built records.
pub fn engine_with(verses: Vec<VerseRecord>, sayings: Vec<SayingRecord>) -> Engine {
    Engine::with_store(RecordStore::from_records(verses, sayings))
}

/// `surah:ayah` of every verse result, in order.
pub fn verse_citations(outcome: &huda::QueryOutcome) -> Vec<String> {
    outcome
        .results
        .iter()
        .filter_map(|r| r.as_verse())
        .map(VerseRecord::citation)
        .collect()
}
