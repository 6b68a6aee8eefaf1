//! Ranking order, stability and the zero-score cut.

use crate::common::*;
use huda::scoring::{rank_verses, RESULTS_PER_SOURCE};
use huda::TermSet;

#[test]
fn test_ties_keep_load_order() {
    let verses = vec![
        verse(4, 1, "mercy upon mercy"),
        verse(7, 2, "mercy upon mercy"),
        verse(1, 3, "mercy upon mercy"),
    ];
    let terms = TermSet::compile(&["mercy"]).unwrap();

    let ranked: Vec<String> = rank_verses(&verses, &terms)
        .into_iter()
        .map(|v| v.citation())
        .collect();
    assert_eq!(ranked, vec!["4:1", "7:2", "1:3"]);
}

#[test]
fn test_higher_score_first_then_load_order() {
    let verses = vec![
        verse(1, 1, "patience"),
        verse(1, 2, "patience and patience"),
        verse(1, 3, "patience"),
        verse(1, 4, "patiently"),
    ];
    let terms = TermSet::compile(&["patience"]).unwrap();

    let ranked: Vec<String> = rank_verses(&verses, &terms)
        .into_iter()
        .map(|v| v.citation())
        .collect();
    assert_eq!(ranked, vec!["1:2", "1:1", "1:3"]);
}

#[test]
fn test_zero_scores_are_dropped() {
    let verses = vec![verse(1, 1, "light"), verse(1, 2, "darkness")];
    let terms = TermSet::compile(&["light"]).unwrap();
    assert_eq!(rank_verses(&verses, &terms).len(), 1);
}

#[test]
fn test_partial_match_still_ranks() {
    // "pray" inside "prayers" is a partial hit worth 3.
    let verses = vec![verse(1, 1, "establish prayers")];
    let terms = TermSet::compile(&["pray"]).unwrap();
    assert_eq!(terms.score(&verses[0].primary_text), 3);
    assert_eq!(rank_verses(&verses, &terms).len(), 1);
}

#[test]
fn test_short_terms_never_score() {
    let terms = TermSet::compile(&["of", "in", "a"]).unwrap();
    assert!(terms.is_empty());
    assert_eq!(terms.score("of in a"), 0);
}

#[test]
fn test_surah_name_is_searchable() {
    let mut named = verse(18, 10, "the youths retreated");
    named.collection_title = "Al-Kahf".to_string();
    let engine = engine_with(vec![named, verse(18, 11, "so We cast over their ears")], vec![]);

    let outcome = engine.process_query("kahf").unwrap();
    assert_eq!(verse_citations(&outcome), vec!["18:10"]);
}

#[test]
fn test_cap_per_collection() {
    let verses: Vec<_> = (1..=9).map(|i| verse(2, i, "fasting")).collect();
    let terms = TermSet::compile(&["fasting"]).unwrap();
    assert_eq!(rank_verses(&verses, &terms).len(), RESULTS_PER_SOURCE);
}
