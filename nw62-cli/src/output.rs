//! Output formatting: JSON envelope and plain-text reports.
//!
//! JSON output is always `{"ok": <value>}` on success or
//! `{"error": "<message>"}` on failure.

use std::fmt::{self, Display};

use nw62_align::render::{VariantTable, WrappedAlignment};
use nw62_align::{Analysis, History, Percent, Scorer};
use nw62_core::Summarizable;
use serde::Serialize;

/// Serialize a success value as `{"ok": val}`.
pub fn json_ok<T: Serialize>(val: &T) -> String {
    #[derive(Serialize)]
    struct Ok<'a, T: Serialize> {
        ok: &'a T,
    }
    serde_json::to_string_pretty(&Ok { ok: val }).unwrap_or_else(|e| json_err(e))
}

/// Serialize an error as `{"error": "msg"}`.
pub fn json_err(msg: impl Display) -> String {
    #[derive(Serialize)]
    struct Err {
        error: String,
    }
    serde_json::to_string(&Err {
        error: msg.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.into())
}

/// Full text report for one comparison, drawn with the scorer that produced it.
pub struct Report<'a> {
    analysis: &'a Analysis,
    scorer: &'a Scorer,
    line_width: usize,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis, scorer: &'a Scorer, line_width: usize) -> Self {
        Self {
            analysis,
            scorer,
            line_width,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alignment = &self.analysis.alignment;
        let stats = &self.analysis.stats;

        writeln!(f, "Sequence 1:  {} aa", alignment.seq1.len())?;
        writeln!(f, "Sequence 2:  {} aa", alignment.seq2.len())?;
        writeln!(f, "Gap penalty: {}", alignment.gap_penalty)?;
        writeln!(f, "Score:       {}", alignment.score)?;
        writeln!(f, "Identity:    {}/{} ({}%)", stats.identical, stats.columns, Percent(stats.identity))?;
        writeln!(f, "Similarity:  {}/{} ({}%)", stats.similar, stats.columns, Percent(stats.similarity))?;
        writeln!(f, "Gaps:        {}/{} ({}%)", stats.gap_count, stats.columns, Percent(stats.gap_percent))?;
        if stats.length_disparity {
            writeln!(
                f,
                "Warning:     sequence lengths differ by more than 60%; a global alignment may not be meaningful"
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", WrappedAlignment::new(alignment, self.scorer, self.line_width))?;
        writeln!(f)?;
        write!(f, "{}", VariantTable(&self.analysis.variants))
    }
}

/// The JSON envelope or the text report for one comparison.
pub fn analysis_output(analysis: &Analysis, scorer: &Scorer, json: bool, line_width: usize) -> String {
    if json {
        json_ok(analysis)
    } else {
        Report::new(analysis, scorer, line_width).to_string()
    }
}

/// One line per saved comparison, most recent first.
pub fn history_listing(history: &History) -> String {
    if history.is_empty() {
        return "No saved comparisons\n".to_string();
    }
    let width = history.len().to_string().len();
    history
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>width$}. {}\n", i + 1, entry.summary()))
        .collect()
}
