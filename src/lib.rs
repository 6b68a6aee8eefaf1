//! Query interpretation and ranking over Quran verses and hadith sayings.
//!
//! A user types a question; this crate decides which collection it is about,
//! whether it cites a specific verse, which words to look for, and which
//! records answer it best.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   store     │     │    query     │     │   scoring   │
//! │ (csv, Record│     │ (interpret,  │     │ (TermSet,   │
//! │  Store)     │     │  citations)  │     │  rank, look │
//! └─────────────┘     └──────────────┘     │  up)        │
//!        │                   │             └─────────────┘
//!        ▼                   ▼                    │
//! ┌─────────────────────────────────────────────────────┐
//! │                      engine                          │
//! │   process_query → QueryOutcome (results/suggestions) │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!               present (display filter) → CLI / wasm
//! ```
//!
//! # Usage
//!
//! ```
//! use huda::{Engine, RecordStore, Strategy};
//!
//! let quran = "surah_no,surah_name_en,ayah_no_surah,ayah_en,ayah_ar\n\
//!              2,Al-Baqarah,255,Allah is the light,\n";
//! let hadith = "category,number,page_content,url\n\
//!               Faith,1,Faith has over seventy branches,\n";
//!
//! let engine = Engine::with_store(RecordStore::from_texts(quran, hadith).unwrap());
//! let outcome = engine.process_query("surah 2:255").unwrap();
//! assert_eq!(outcome.strategy, Strategy::Reference);
//! assert_eq!(outcome.results.len(), 1);
//! ```

pub mod engine;
pub mod error;
pub mod present;
pub mod query;
pub mod scoring;
pub mod store;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use engine::{suggestions, Engine, QueryOutcome, Strategy, SUGGESTIONS};
pub use error::{Error, Result};
pub use present::{DisplayOptions, MaxResults, SourceFilter};
pub use query::{parse_reference, QueryConfig, QueryInterpreter, SynonymGroup, SynonymTable};
pub use scoring::{score, TermSet};
pub use store::{Dataset, DatasetSource, DirectorySource, RecordStore};
pub use types::{
    Citation, QueryKind, SayingRecord, Scope, SearchResult, Source, StructuredQuery, VerseRecord,
};

#[cfg(feature = "wasm")]
pub use wasm::HudaEngine;
