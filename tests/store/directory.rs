//! Loading from a data directory on disk.

use std::fs;

use crate::common::*;
use huda::{Dataset, DirectorySource, Engine, Error, RecordStore};
use tempfile::TempDir;

fn data_dir(quran: Option<&str>, hadith: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    if let Some(text) = quran {
        fs::write(dir.path().join("quran.csv"), text).unwrap();
    }
    if let Some(text) = hadith {
        fs::write(dir.path().join("hadith.csv"), text).unwrap();
    }
    dir
}

#[test]
fn test_load_from_directory() {
    let dir = data_dir(Some(QURAN_CSV), Some(HADITH_CSV));
    let store = RecordStore::load(&DirectorySource::new(dir.path())).unwrap();
    assert_eq!(store.verses().len(), 5);
    assert_eq!(store.sayings().len(), 3);
}

#[test]
fn test_missing_file_names_the_dataset() {
    let dir = data_dir(Some(QURAN_CSV), None);
    let err = RecordStore::load(&DirectorySource::new(dir.path())).unwrap_err();

    assert!(matches!(
        err,
        Error::DataUnavailable {
            dataset: Dataset::Sayings,
            ..
        }
    ));
    assert!(err.to_string().starts_with("hadith data unavailable"));
    assert!(!err.is_retryable());
}

#[test]
fn test_failed_load_leaves_engine_not_ready() {
    let good = data_dir(Some(QURAN_CSV), Some(HADITH_CSV));
    let broken = data_dir(None, Some(HADITH_CSV));

    let mut engine = Engine::default();
    engine.load(&DirectorySource::new(good.path())).unwrap();
    assert!(engine.is_ready());

    assert!(engine.load(&DirectorySource::new(broken.path())).is_err());
    assert!(!engine.is_ready());
    assert_eq!(engine.process_query("patience"), Err(Error::NotReady));

    engine.load(&DirectorySource::new(good.path())).unwrap();
    assert!(engine.process_query("patience").is_ok());
}
