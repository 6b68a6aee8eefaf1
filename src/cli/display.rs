// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the huda CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `HUDA_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! off when stdout is not a TTY or `NO_COLOR` is set, so piping into a file
//! gives plain boxes.
//!
//! Every renderer returns lines instead of printing, which keeps them
//! testable with colors switched off.

use huda::{QueryOutcome, SayingRecord, SearchResult, StructuredQuery, VerseRecord};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 78;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn detect() -> Theme {
        if let Ok(theme) = std::env::var("HUDA_THEME") {
            match theme.to_lowercase().as_str() {
                "light" | "l" => return Theme::Light,
                "dark" | "d" => return Theme::Dark,
                _ => {}
            }
        }

        // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light.
        if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
            if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
                if bg >= 7 && bg != 8 {
                    return Theme::Light;
                }
            }
        }

        Theme::Dark
    }
}

#[derive(Debug, Clone, Copy)]
enum Hue {
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    Red,
}

impl Hue {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Hue::Green) => (152, 195, 121),
            (Theme::Dark, Hue::Yellow) => (229, 192, 123),
            (Theme::Dark, Hue::Blue) => (97, 175, 239),
            (Theme::Dark, Hue::Magenta) => (198, 120, 221),
            (Theme::Dark, Hue::Cyan) => (86, 182, 194),
            (Theme::Dark, Hue::Gray) => (92, 99, 112),
            (Theme::Dark, Hue::Red) => (224, 108, 117),
            (Theme::Light, Hue::Green) => (80, 161, 79),
            (Theme::Light, Hue::Yellow) => (193, 132, 1),
            (Theme::Light, Hue::Blue) => (64, 120, 242),
            (Theme::Light, Hue::Magenta) => (166, 38, 164),
            (Theme::Light, Hue::Cyan) => (1, 132, 188),
            (Theme::Light, Hue::Gray) => (160, 161, 167),
            (Theme::Light, Hue::Red) => (228, 86, 73),
        }
    }
}

/// Applies (or skips) ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    colors: bool,
    theme: Theme,
}

impl Painter {
    /// Colors on a TTY unless `NO_COLOR` is set.
    pub fn detect() -> Self {
        let colors = std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout);
        Self {
            colors,
            theme: Theme::detect(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            colors: false,
            theme: Theme::Dark,
        }
    }

    fn paint(&self, hue: Hue, modifiers: &[&str], text: &str) -> String {
        if !self.colors {
            return text.to_string();
        }
        let (r, g, b) = hue.rgb(self.theme);
        format!(
            "{}\x1b[38;2;{};{};{}m{}{}",
            modifiers.join(""),
            r,
            g,
            b,
            text,
            RESET
        )
    }

    fn dim(&self, text: &str) -> String {
        if self.colors {
            format!("{}{}{}", DIM, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn border(&self, text: &str) -> String {
        self.paint(Hue::Gray, &[], text)
    }

    fn section_top(&self, label: &str) -> String {
        let label_part = format!("─ {} ", self.paint(Hue::Cyan, &[BOLD], label));
        let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
        format!(
            "{}{}{}",
            self.border("┌"),
            label_part,
            self.border(&format!("{}┐", "─".repeat(remaining)))
        )
    }

    fn row(&self, content: &str) -> String {
        let pad = BOX_WIDTH.saturating_sub(visible_len(content));
        format!(
            "{}{}{}{}",
            self.border("│"),
            content,
            " ".repeat(pad),
            self.border("│")
        )
    }

    fn section_bot(&self) -> String {
        self.border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
    }

    fn badge(&self, result: &SearchResult) -> String {
        match result {
            SearchResult::Verse(_) => self.paint(Hue::Green, &[BOLD], "[QURAN]"),
            SearchResult::Saying(_) => self.paint(Hue::Magenta, &[BOLD], "[HADITH]"),
        }
    }
}

/// Visible length, excluding ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap to `width` visible characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

fn verse_lines(p: &Painter, verse: &VerseRecord, out: &mut Vec<String>) {
    let title = if verse.collection_title.is_empty() {
        format!("Surah {}", verse.citation())
    } else {
        format!("Surah {} ({})", verse.citation(), verse.collection_title)
    };
    out.push(p.row(&format!(" {}", p.paint(Hue::Yellow, &[BOLD], &title))));
    for line in wrap(&verse.primary_text, BOX_WIDTH - 2) {
        out.push(p.row(&format!(" {}", line)));
    }
    if !verse.secondary_text.is_empty() {
        for line in wrap(&verse.secondary_text, BOX_WIDTH - 2) {
            out.push(p.row(&format!(" {}", p.dim(&line))));
        }
    }
}

fn saying_lines(p: &Painter, saying: &SayingRecord, out: &mut Vec<String>) {
    let title = format!("{} #{}", saying.book(), saying.identifier);
    out.push(p.row(&format!(" {}", p.paint(Hue::Yellow, &[BOLD], &title))));
    for line in wrap(&saying.body_text, BOX_WIDTH - 2) {
        out.push(p.row(&format!(" {}", line)));
    }
    if !saying.source_url.is_empty() {
        out.push(p.row(&format!(" {}", p.paint(Hue::Blue, &[], &saying.source_url))));
    }
}

/// Boxed result list, or the no-match message plus suggestions.
pub fn render_outcome(p: &Painter, query: &str, outcome: &QueryOutcome) -> Vec<String> {
    let mut out = Vec::new();

    if outcome.results.is_empty() {
        out.push(p.paint(
            Hue::Red,
            &[],
            "I couldn't find any relevant information matching your query.",
        ));
        out.extend(render_suggestions(p, &outcome.suggestions));
        return out;
    }

    let label = format!(
        "{} · {} · {} result{}",
        query,
        outcome.scope,
        outcome.results.len(),
        if outcome.results.len() == 1 { "" } else { "s" }
    );
    out.push(p.section_top(&label));
    for (i, result) in outcome.results.iter().enumerate() {
        if i > 0 {
            out.push(p.row(""));
        }
        out.push(p.row(&format!(" {} {}", p.badge(result), p.dim(&format!("{}", i + 1)))));
        match result {
            SearchResult::Verse(verse) => verse_lines(p, verse, &mut out),
            SearchResult::Saying(saying) => saying_lines(p, saying, &mut out),
        }
    }
    out.push(p.section_bot());

    out
}

/// Bulleted suggestion list.
pub fn render_suggestions(p: &Painter, suggestions: &[String]) -> Vec<String> {
    let mut out = vec![p.paint(Hue::Cyan, &[BOLD], "Try asking:")];
    out.extend(suggestions.iter().map(|s| format!("  • {}", s)));
    out
}

/// What the interpreter made of a query.
pub fn render_query(p: &Painter, query: &StructuredQuery) -> Vec<String> {
    let mut out = vec![p.section_top("query")];
    out.push(p.row(&format!(" text       {}", query.normalized_text)));
    out.push(p.row(&format!(" scope      {}", query.scope)));
    out.push(p.row(&format!(" kind       {}", query.kind)));
    if let Some(citation) = &query.citation {
        out.push(p.row(&format!(" citation   {}", citation)));
    }
    let terms = query.expanded_terms.join(", ");
    for (i, line) in wrap(&terms, BOX_WIDTH - 12).into_iter().enumerate() {
        let label = if i == 0 { "terms" } else { "" };
        out.push(p.row(&format!(" {:<10} {}", label, line)));
    }
    out.push(p.section_bot());
    out
}

/// Record counts for a loaded data directory.
pub fn render_stats(p: &Painter, root: &str, verses: usize, sayings: usize) -> Vec<String> {
    vec![
        p.section_top(root),
        p.row(&format!(" quran verses    {:>8}", verses)),
        p.row(&format!(" hadith sayings  {:>8}", sayings)),
        p.section_bot(),
    ]
}
