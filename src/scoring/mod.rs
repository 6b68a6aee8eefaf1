// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how records get their numbers and their order.
//!
//! `core` turns a text and a term set into an integer; `ranking` applies that
//! to whole collections and handles the exact-citation path.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{
    lookup_reference, rank_by, rank_sayings, rank_verses, REFERENCE_LIMIT, RESULTS_PER_SOURCE,
};
