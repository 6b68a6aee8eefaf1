//! Queries that match nothing come back empty with suggestions, not errors.

use crate::common::*;
use huda::{DisplayOptions, MaxResults, SourceFilter, Strategy, SUGGESTIONS};

#[test]
fn test_zero_results_carry_suggestions() {
    let outcome = fixture_engine().process_query("xylophone zeppelin").unwrap();

    assert_eq!(outcome.strategy, Strategy::Ranked);
    assert!(outcome.is_no_match());
    assert_eq!(outcome.suggestions.len(), SUGGESTIONS.len());
    assert_eq!(outcome.suggestions[0], "Tell me about prayer");
}

#[test]
fn test_matches_carry_no_suggestions() {
    let outcome = fixture_engine().process_query("patience").unwrap();
    assert!(!outcome.is_no_match());
    assert!(outcome.suggestions.is_empty());
}

#[test]
fn test_blank_query_is_a_no_match() {
    let outcome = fixture_engine().process_query("   ").unwrap();
    assert!(outcome.is_no_match());
    assert!(!outcome.suggestions.is_empty());
}

#[test]
fn test_display_filter_that_hides_everything_suggests() {
    let outcome = fixture_engine().process_query("verses about patience").unwrap();
    assert!(!outcome.is_no_match());

    let options = DisplayOptions {
        source: SourceFilter::Hadith,
        max_results: MaxResults::default(),
    };
    let shown = options.apply_to(outcome);
    assert!(shown.is_no_match());
    assert_eq!(shown.suggestions, huda::suggestions());
}
