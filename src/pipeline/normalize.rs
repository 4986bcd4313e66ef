//! Row normalization.
//!
//! Brings a numbered text to an exact row count and an exact printable
//! column width so two texts can be laid out in lock-step.

use super::number::NumberedText;
use crate::layout::text_measure::fit_to_width;

/// A placeholder row: the marker, then fill to `width` printable columns.
///
/// `marker` may carry color escapes; only its printable width counts.
pub fn placeholder_row(marker: &str, width: usize) -> String {
    let mut row = String::with_capacity(marker.len() + 1);
    row.push_str(marker);
    row.push(' ');
    fit_to_width(&row, width)
}

/// Normalize `numbered` to exactly `rows` rows of `width` columns each.
///
/// - Lines wider than `width` are truncated; narrower ones are padded.
/// - The empty line left by a trailing newline becomes a placeholder row.
/// - Placeholder rows are appended until there are `rows` rows.
///
/// `rows` is normally the larger of both texts' row counts, so nothing but
/// the trailing-newline placeholder ever falls past the end.
pub fn normalize(numbered: &NumberedText, width: usize, rows: usize, marker: &str) -> Vec<String> {
    let placeholder = placeholder_row(marker, width);
    let last = numbered.len().saturating_sub(1);

    let mut out: Vec<String> = numbered
        .lines()
        .iter()
        .take(rows)
        .enumerate()
        .map(|(i, line)| {
            if i == last && numbered.has_trailing_newline() {
                placeholder.clone()
            } else {
                fit_to_width(line, width)
            }
        })
        .collect();

    out.resize(rows, placeholder);
    out
}
