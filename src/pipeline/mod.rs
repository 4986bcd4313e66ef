//! Comparison pipeline.
//!
//! Turns two raw texts into a synchronized, width-normalized, classified
//! sequence of row pairs.
//!
//! # Pipeline
//!
//! ```text
//! raw text → number_lines → normalize → classify → Comparison
//! ```
//!
//! Every stage is a pure function of its inputs: nothing here touches the
//! filesystem or the terminal, and nothing is cached between runs.

pub mod classify;
pub mod normalize;
pub mod number;

pub use classify::{RowContent, classify, classify_content, extract_content, is_similar};
pub use normalize::{normalize, placeholder_row};
pub use number::{NumberedText, number_lines, split_lines};

use crate::layout::text_measure::expand_tabs;
use crate::types::{PLACEHOLDER_MARKER, Verdict};

/// Share of the terminal width given to each of the two columns.
pub const DEFAULT_WIDTH_RATIO: f64 = 0.45;

/// Width of one column for a terminal `terminal_width` columns wide.
pub fn column_width(terminal_width: u16, ratio: f64) -> usize {
    (f64::from(terminal_width) * ratio).floor().max(0.0) as usize
}

// =============================================================================
// Options
// =============================================================================

/// Parameters for one comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareOptions {
    /// Printable width of each column.
    pub column_width: usize,
    /// Tab stop distance; zero leaves tabs alone.
    pub tab_width: usize,
    /// Rendered placeholder marker, possibly wrapped in color escapes.
    pub marker: String,
}

impl CompareOptions {
    /// Options with an uncolored marker and no tab expansion.
    pub fn new(column_width: usize) -> Self {
        Self {
            column_width,
            tab_width: 0,
            marker: PLACEHOLDER_MARKER.to_string(),
        }
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// The i-th normalized row of each side and their verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPair {
    pub left: String,
    pub right: String,
    pub verdict: Verdict,
}

/// Per-verdict row totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictCounts {
    pub matched: usize,
    pub similar: usize,
    pub differ: usize,
}

impl VerdictCounts {
    pub fn get(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Match => self.matched,
            Verdict::Similar => self.similar,
            Verdict::Differ => self.differ,
        }
    }

    pub fn total(&self) -> usize {
        self.matched + self.similar + self.differ
    }
}

/// Result of comparing two texts: equal-length, equal-width row pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    rows: Vec<RowPair>,
    column_width: usize,
}

impl Comparison {
    pub fn rows(&self) -> &[RowPair] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Printable width of every row on either side.
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    pub fn verdicts(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.rows.iter().map(|row| row.verdict)
    }

    pub fn counts(&self) -> VerdictCounts {
        let mut counts = VerdictCounts::default();
        for verdict in self.verdicts() {
            match verdict {
                Verdict::Match => counts.matched += 1,
                Verdict::Similar => counts.similar += 1,
                Verdict::Differ => counts.differ += 1,
            }
        }
        counts
    }
}

/// Compare two texts row by row.
pub fn compare(left: &str, right: &str, options: &CompareOptions) -> Comparison {
    let left = number_lines(&expand_tabs(left, options.tab_width));
    let right = number_lines(&expand_tabs(right, options.tab_width));

    let rows = left.row_count().max(right.row_count());
    let width = options.column_width;
    log::debug!(
        "comparing {} vs {} rows at {} columns",
        left.row_count(),
        right.row_count(),
        width
    );

    let left = normalize(&left, width, rows, &options.marker);
    let right = normalize(&right, width, rows, &options.marker);

    let rows = left
        .into_iter()
        .zip(right)
        .map(|(left, right)| {
            let verdict = classify(&left, &right);
            RowPair { left, right, verdict }
        })
        .collect();

    Comparison {
        rows,
        column_width: width,
    }
}
