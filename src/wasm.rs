// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the chat front end.
//!
//! The browser fetches `quran.csv` and `hadith.csv` itself and hands the text
//! over; construction fails with the `DataUnavailable` message if either is
//! empty. Queries return plain JS objects (serde-serialized `QueryOutcome`,
//! already filtered with the caller's display options).

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::engine::{suggestions, Engine};
use crate::present::DisplayOptions;
use crate::store::RecordStore;

/// WASM-accessible engine with both collections loaded.
#[wasm_bindgen]
pub struct HudaEngine {
    engine: Engine,
}

#[wasm_bindgen]
impl HudaEngine {
    /// Parse both datasets. Throws the load error as a string.
    #[wasm_bindgen(constructor)]
    pub fn new(quran_csv: &str, hadith_csv: &str) -> Result<HudaEngine, JsValue> {
        let store = RecordStore::from_texts(quran_csv, hadith_csv)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(HudaEngine {
            engine: Engine::with_store(store),
        })
    }

    /// Answer a query. `options` is `{ source?: "both" | "quran" | "hadith",
    /// maxResults?: 5 | 10 | 15 }` and may be `undefined`.
    #[wasm_bindgen(js_name = processQuery)]
    pub fn process_query(&self, query: &str, options: JsValue) -> Result<JsValue, JsValue> {
        let options: DisplayOptions = if options.is_undefined() || options.is_null() {
            DisplayOptions::default()
        } else {
            from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let outcome = self
            .engine
            .process_query(query)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let outcome = options.apply_to(outcome);

        to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The fixed example queries.
    pub fn suggestions(&self) -> Vec<String> {
        suggestions()
    }

    #[wasm_bindgen(getter, js_name = verseCount)]
    pub fn verse_count(&self) -> usize {
        self.engine.store().map_or(0, |store| store.verses().len())
    }

    #[wasm_bindgen(getter, js_name = sayingCount)]
    pub fn saying_count(&self) -> usize {
        self.engine.store().map_or(0, |store| store.sayings().len())
    }
}
