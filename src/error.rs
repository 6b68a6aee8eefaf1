// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading and querying.
//!
//! | Variant           | When                                   | Caller reaction               |
//! |-------------------|----------------------------------------|-------------------------------|
//! | `DataUnavailable` | A dataset could not be fetched/parsed  | Restart the whole load        |
//! | `NotReady`        | Query issued before the store attached | Gate input until load is done |
//! | `QueryFailed`     | Interpretation or scoring broke        | Retry a bounded number of times |
//! | `Config`          | Synonym/marker configuration rejected  | Fix the file                  |
//!
//! A query that matches nothing is not an error. It comes back as an empty
//! [`QueryOutcome`](crate::QueryOutcome) carrying the suggestion list.

use crate::store::Dataset;

/// Everything that can go wrong in the search core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A dataset payload could not be fetched, was empty, or had no header.
    #[error("{dataset} data unavailable: {reason}")]
    DataUnavailable { dataset: Dataset, reason: String },

    /// `process_query` was called before a record store was attached.
    #[error("records are still loading")]
    NotReady,

    /// Unexpected failure while interpreting or scoring a query.
    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    /// Query configuration file was unreadable or malformed.
    #[error("invalid query configuration: {reason}")]
    Config { reason: String },
}

impl Error {
    pub(crate) fn unavailable(dataset: Dataset, reason: impl Into<String>) -> Self {
        Error::DataUnavailable {
            dataset,
            reason: reason.into(),
        }
    }

    /// True for failures worth retrying with the same input.
    ///
    /// Only `QueryFailed` qualifies: the pipeline is idempotent, so a retry is
    /// safe, while the other variants will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::QueryFailed { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
