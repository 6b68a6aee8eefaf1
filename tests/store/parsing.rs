//! Row handling in the dataset text: blanks, quotes, column order.

use crate::common::*;
use huda::{Dataset, Error, RecordStore};

#[test]
fn test_fixture_counts_and_order() {
    let store = fixture_store();
    assert_eq!(store.verses().len(), 5);
    assert_eq!(store.sayings().len(), 3);

    let citations: Vec<String> = store.verses().iter().map(|v| v.citation()).collect();
    assert_eq!(citations, vec!["1:1", "2:153", "2:255", "3:200", "103:1"]);
}

#[test]
fn test_quoted_commas_stay_in_field() {
    let store = fixture_store();
    assert_eq!(
        store.verses()[1].primary_text,
        "O you who have believed, seek help through patience and prayer"
    );
    assert_eq!(store.verses()[1].secondary_text, "يَا أَيُّهَا");
    assert_eq!(store.verses()[3].collection_title, "Ali 'Imran");
}

#[test]
fn test_comma_only_and_blank_rows_are_dropped() {
    let verses = "surah_no,surah_name_en,ayah_no_surah,ayah_en,ayah_ar\n\
                  1,Al-Fatiha,1,In the name of Allah,بسم\n\
                  ,,,,\n\
                  \n\
                  2,Al-Baqarah,2,This is the Book,ذلك\n";
    let sayings = "category,number,page_content,url\n\
                   ,,,\n\
                   Book 1,1,Actions are by intentions,https://sunnah.com/bukhari:1\n\
                   , , ,\n";

    let store = RecordStore::from_texts(verses, sayings).unwrap();
    assert_eq!(store.verses().len(), 2);
    assert_eq!(store.sayings().len(), 1);
    assert_eq!(store.sayings()[0].body_text, "Actions are by intentions");
}

#[test]
fn test_trailing_blank_lines_and_crlf() {
    let verses = "surah_no,surah_name_en,ayah_no_surah,ayah_en,ayah_ar\r\n\
                  1,Al-Fatiha,1,Praise be to Allah,الحمد\r\n\r\n\r\n";
    let store = RecordStore::from_texts(verses, HADITH_CSV).unwrap();
    assert_eq!(store.verses().len(), 1);
    assert_eq!(store.verses()[0].secondary_text, "الحمد");
}

#[test]
fn test_columns_are_matched_by_header_name() {
    let verses = "ayah_en,ayah_no_surah,surah_no\nBy the dawn,1,89\n";
    let store = RecordStore::from_texts(verses, HADITH_CSV).unwrap();

    let v = &store.verses()[0];
    assert_eq!(v.collection_number, 89);
    assert_eq!(v.item_number, 1);
    assert_eq!(v.primary_text, "By the dawn");
    assert_eq!(v.collection_title, "");
}

#[test]
fn test_header_only_dataset_is_empty_not_an_error() {
    let store = RecordStore::from_texts(QURAN_CSV, "category,number,page_content,url\n").unwrap();
    assert!(store.sayings().is_empty());
}

#[test]
fn test_empty_dataset_is_unavailable() {
    let err = RecordStore::from_texts(QURAN_CSV, "\n\n").unwrap_err();
    match err {
        Error::DataUnavailable { dataset, .. } => assert_eq!(dataset, Dataset::Sayings),
        other => panic!("Expected DataUnavailable, got {:?}", other),
    }
}

#[test]
fn test_saying_book_name() {
    let store = fixture_store();
    assert_eq!(store.sayings()[0].book(), "Sahih al-Bukhari");
    assert_eq!(store.sayings()[2].book(), "Sahih Muslim");
}
