// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Header-keyed parsing for the comma-delimited dataset files.
//!
//! This is deliberately not an RFC 4180 parser. Commas split fields unless
//! they sit inside a pair of double quotes, and one surrounding quote is
//! stripped from each end of a field. Escaped quotes (`""`) inside a quoted
//! field are not understood: they toggle the in-quote state like any other
//! quote character. The datasets this reads never rely on them.

use std::collections::HashMap;

/// One data row, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    line: usize,
    fields: HashMap<String, String>,
}

impl Row {
    /// 1-based line number in the source text.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Field value for `header`, or `""` when the column is missing.
    pub fn get(&self, header: &str) -> &str {
        self.fields.get(header).map(String::as_str).unwrap_or("")
    }

    fn is_blank(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }
}

/// Parse delimited text into rows, preserving file order.
///
/// The first non-blank line is the header. Blank lines anywhere (including a
/// trailing newline) are skipped, and rows whose fields are all empty after
/// trimming are dropped. Returns `None` when there is no header line at all.
pub fn parse_rows(text: &str) -> Option<Vec<Row>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next()?;
    let headers: Vec<String> = split_fields(header_line);

    let rows = lines
        .map(|(line_no, line)| {
            let mut values = split_fields(line).into_iter();
            let fields = headers
                .iter()
                .map(|header| (header.clone(), values.next().unwrap_or_default()))
                .collect();
            Row {
                line: line_no,
                fields,
            }
        })
        .filter(|row| !row.is_blank())
        .collect();

    Some(rows)
}

/// Split one line on commas outside double quotes, then clean each field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_field(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(clean_field(&line[start..]));

    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    unquoted.trim().to_string()
}
