// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the huda command-line interface.
//!
//! Four subcommands: `search` answers a query from the datasets, `explain`
//! shows how a query is interpreted without loading anything, `suggestions`
//! prints the example queries, and `stats` reports record counts.

pub mod display;
pub mod retry;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use huda::{MaxResults, SourceFilter};

#[derive(Parser)]
#[command(
    name = "huda",
    about = "Ask the Quran and hadith collections a question",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a query from the verse and hadith datasets
    Search {
        /// Free-text question or a citation like "2:255"
        query: String,

        /// Directory containing quran.csv and hadith.csv
        #[arg(short, long, env = "HUDA_DATA_DIR", default_value = "data")]
        data: PathBuf,

        /// Show results from both collections, or only quran / hadith
        #[arg(short, long, default_value = "both")]
        source: SourceFilter,

        /// Maximum number of results to show (5, 10 or 15)
        #[arg(short = 'n', long = "max", default_value = "10")]
        max_results: MaxResults,

        /// JSON file overriding synonym groups and marker words
        #[arg(long, env = "HUDA_SYNONYMS")]
        synonyms: Option<PathBuf>,

        /// Print the outcome as JSON instead of boxes
        #[arg(long)]
        json: bool,
    },

    /// Show how a query is interpreted (scope, kind, citation, terms)
    Explain {
        query: String,

        /// JSON file overriding synonym groups and marker words
        #[arg(long, env = "HUDA_SYNONYMS")]
        synonyms: Option<PathBuf>,

        /// Print the structured query as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the example queries
    Suggestions,

    /// Load the datasets and print record counts
    Stats {
        /// Directory containing quran.csv and hadith.csv
        #[arg(short, long, env = "HUDA_DATA_DIR", default_value = "data")]
        data: PathBuf,
    },
}
