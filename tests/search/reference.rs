//! Citation parsing and the reference path.

use crate::common::*;
use huda::{parse_reference, Citation, QueryKind, QueryInterpreter, Scope, Strategy};

fn cite(surah: u64, verse: Option<u64>) -> Option<Citation> {
    Some(Citation { surah, verse })
}

#[test]
fn test_parse_reference_forms() {
    assert_eq!(parse_reference("Surah 2:255"), cite(2, Some(255)));
    assert_eq!(parse_reference("Surah 2 verse 255"), cite(2, Some(255)));
    assert_eq!(parse_reference("sura 2 ayah 255"), cite(2, Some(255)));
    assert_eq!(parse_reference("2:255"), cite(2, Some(255)));
    assert_eq!(parse_reference("surah 18"), cite(18, None));
    assert_eq!(parse_reference("mercy"), None);
    assert_eq!(parse_reference(""), None);
}

#[test]
fn test_embedded_citation_wins_over_free_text() {
    // A citation anywhere in the query turns it into a pure reference lookup;
    // the "patience" part is not searched.
    let q = QueryInterpreter::default().interpret("tell me about 2:255 and patience");
    assert_eq!(q.scope, Scope::Quran);
    assert_eq!(q.kind, QueryKind::Reference);
    assert_eq!(q.citation, cite(2, Some(255)));

    let outcome = fixture_engine()
        .process_query("tell me about 2:255 and patience")
        .unwrap();
    assert_eq!(outcome.strategy, Strategy::Reference);
    assert_eq!(verse_citations(&outcome), vec!["2:255"]);
}

#[test]
fn test_citation_beats_hadith_marker() {
    let q = QueryInterpreter::default().interpret("bukhari 2:255");
    assert_eq!(q.scope, Scope::Quran);
    assert_eq!(q.kind, QueryKind::Reference);
}

#[test]
fn test_whole_surah_lookup_keeps_load_order() {
    let engine = engine_with(
        vec![
            verse(2, 3, "third"),
            verse(1, 1, "other"),
            verse(2, 1, "first"),
            verse(2, 2, "second"),
        ],
        vec![],
    );

    let outcome = engine.process_query("surah 2").unwrap();
    assert_eq!(outcome.strategy, Strategy::Reference);
    assert_eq!(verse_citations(&outcome), vec!["2:3", "2:1", "2:2"]);
}

#[test]
fn test_whole_surah_lookup_caps_at_ten() {
    let verses = (1..=20).map(|i| verse(36, i, "Ya Sin")).collect();
    let outcome = engine_with(verses, vec![])
        .process_query("Surah 36")
        .unwrap();
    assert_eq!(outcome.results.len(), huda::scoring::REFERENCE_LIMIT);
    assert_eq!(verse_citations(&outcome)[9], "36:10");
}

#[test]
fn test_reference_path_ignores_scoring_terms() {
    // The cited verse shares no words with the query, yet it is returned:
    // only the citation decides.
    let engine = engine_with(vec![verse(112, 1, "Say, He is Allah, the One")], vec![]);
    let outcome = engine.process_query("112:1").unwrap();
    assert_eq!(outcome.kind, QueryKind::Reference);
    assert_eq!(verse_citations(&outcome), vec!["112:1"]);
}

#[test]
fn test_out_of_range_citation_finds_nothing() {
    let verses = (1..=5).map(|i| verse(2, i, "light")).collect();
    let engine = engine_with(verses, vec![]);

    let outcome = engine.process_query("surah 2:99999999999").unwrap();
    assert_eq!(outcome.strategy, Strategy::Reference);
    assert!(outcome.is_no_match());

    let outcome = engine.process_query("99999999999:1 light").unwrap();
    assert_eq!(outcome.kind, QueryKind::Reference);
    assert_eq!(outcome.strategy, Strategy::Reference);
    assert!(outcome.is_no_match());
}

#[test]
fn test_missing_citation_is_a_no_match() {
    let outcome = fixture_engine().process_query("surah 2:999").unwrap();
    assert_eq!(outcome.strategy, Strategy::Reference);
    assert!(outcome.is_no_match());
    assert_eq!(outcome.suggestions, huda::suggestions());
}
