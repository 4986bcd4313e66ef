//! Row classification.
//!
//! Rows are compared strictly by position. Each side first loses its
//! numbering prefix (a placeholder keeps its marker); the remainders are
//! trimmed and compared for equality, then for containment.

use std::borrow::Cow;

use crate::layout::text_measure::strip_ansi;
use crate::types::{PLACEHOLDER_MARKER, Verdict};

/// What is left of a normalized row once its prefix is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContent<'a> {
    /// The prefix was the placeholder marker rather than an ordinal.
    pub placeholder: bool,
    /// Everything after the prefix and its separating space, untrimmed.
    pub body: &'a str,
}

impl<'a> RowContent<'a> {
    /// The extracted form: the marker (placeholders only) followed by the body.
    pub fn extracted(&self) -> Cow<'a, str> {
        if self.placeholder {
            Cow::Owned(format!("{PLACEHOLDER_MARKER}{}", self.body))
        } else {
            Cow::Borrowed(self.body)
        }
    }
}

/// Discard the first run of non-space characters of `row`.
///
/// If that run is the placeholder marker (possibly wrapped in color escapes)
/// the row is flagged as a placeholder and the marker survives extraction.
pub fn extract_content(row: &str) -> RowContent<'_> {
    let (prefix, body) = row.split_once(' ').unwrap_or((row, ""));
    RowContent {
        placeholder: strip_ansi(prefix).starts_with(PLACEHOLDER_MARKER),
        body,
    }
}

/// True when one non-empty string contains the other.
///
/// The empty string is a substring of everything, so it is never similar to
/// anything.
pub fn is_similar(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// Classify two already-extracted rows.
///
/// A marker anywhere in either trimmed string rules out `Similar`: rows next
/// to a placeholder are only ever equal or different.
pub fn classify_content(left: &RowContent<'_>, right: &RowContent<'_>) -> Verdict {
    let (left_text, right_text) = (left.extracted(), right.extracted());
    let (a, b) = (left_text.trim(), right_text.trim());

    if a == b {
        Verdict::Match
    } else if left.placeholder
        || right.placeholder
        || a.contains(PLACEHOLDER_MARKER)
        || b.contains(PLACEHOLDER_MARKER)
    {
        Verdict::Differ
    } else if is_similar(a, b) {
        Verdict::Similar
    } else {
        Verdict::Differ
    }
}

/// Classify one normalized row from each side.
pub fn classify(left: &str, right: &str) -> Verdict {
    classify_content(&extract_content(left), &extract_content(right))
}
