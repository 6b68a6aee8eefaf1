// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Citation detection: "surah 2 verse 255", "2:255", "surah 18".
//!
//! Three patterns, tried in order, first hit wins:
//!
//! | # | Shape                                   | Result          |
//! |---|-----------------------------------------|-----------------|
//! | 1 | `[surah] N (: \| verse \| ayah) M`      | `(N, Some(M))`  |
//! | 2 | `N:M`                                   | `(N, Some(M))`  |
//! | 3 | `surah N`                               | `(N, None)`     |
//!
//! Patterns search anywhere in the text, so "tell me about 2:255 and
//! patience" is a citation. Digits are ASCII only. Numbers are not checked
//! against the collection; an out-of-range citation simply finds nothing.
//! One too long for `u64` saturates, which finds nothing just the same.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::Citation;

static PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?:surah?\s*)?([0-9]+)(?::|\s+verse\s+|\s+ayah\s+)([0-9]+)")
            .expect("surah/verse pattern"),
        Regex::new(r"([0-9]+):([0-9]+)").expect("colon pattern"),
        Regex::new(r"(?i)surah?\s*([0-9]+)").expect("surah pattern"),
    ]
});

/// Extract a citation from query text, if it has one.
pub fn parse_reference(text: &str) -> Option<Citation> {
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .map(|caps| citation_from(&caps))
}

fn citation_from(caps: &Captures<'_>) -> Citation {
    Citation {
        surah: caps.get(1).map_or(0, |m| saturating_number(m.as_str())),
        verse: caps.get(2).map(|m| saturating_number(m.as_str())),
    }
}

/// Parse ASCII digits, clamping anything past `u64::MAX`.
fn saturating_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
