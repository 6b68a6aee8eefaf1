//! Whole-pipeline properties over generated records.

use crate::common::*;
use huda::{QueryKind, Source, Strategy};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a verse citation always resolves through the lookup path and
    /// returns only verses carrying that citation.
    #[test]
    fn prop_reference_returns_exact_citation(
        surah in 1u32..115,
        ayah in 1u32..300,
        filler in prop::collection::vec((1u32..115, 1u32..300), 0..20),
    ) {
        let mut verses: Vec<_> = filler
            .into_iter()
            .map(|(s, a)| verse(s, a, "filler"))
            .collect();
        verses.push(verse(surah, ayah, "target"));

        let engine = engine_with(verses, vec![saying("1", "filler")]);
        let outcome = engine.process_query(&format!("{}:{}", surah, ayah)).unwrap();

        prop_assert_eq!(outcome.kind, QueryKind::Reference);
        prop_assert_eq!(outcome.strategy, Strategy::Reference);
        prop_assert!(!outcome.results.is_empty());
        for result in &outcome.results {
            let v = result.as_verse().unwrap();
            prop_assert_eq!((v.collection_number, v.item_number), (surah, ayah));
        }
    }

    /// Property: ranked output is verses first, each collection at most five.
    #[test]
    fn prop_ranked_output_shape(
        verse_hits in 0usize..9,
        saying_hits in 0usize..9,
    ) {
        let verses = (0..verse_hits).map(|i| verse(1, i as u32 + 1, "mercy")).collect();
        let sayings = (0..saying_hits).map(|i| saying(&i.to_string(), "mercy")).collect();
        let outcome = engine_with(verses, sayings).process_query("mercy").unwrap();

        let quran = outcome.results.iter().filter(|r| r.source() == Source::Quran).count();
        let hadith = outcome.results.len() - quran;
        prop_assert_eq!(quran, verse_hits.min(5));
        prop_assert_eq!(hadith, saying_hits.min(5));
        prop_assert!(outcome.results[..quran].iter().all(|r| r.source() == Source::Quran));
        prop_assert_eq!(outcome.is_no_match(), !outcome.suggestions.is_empty());
    }
}
