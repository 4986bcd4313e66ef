//! Line numbering.
//!
//! Prefixes every line of a text with its 1-based ordinal, left-aligned in a
//! field wide enough for the largest ordinal plus one separating space, so
//! that content starts at the same column on every line.

/// Split a text on `\n`, dropping a `\r` that directly precedes the newline.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line and an
/// empty text yields one empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// A text whose lines all carry a fixed-width ordinal prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedText {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl NumberedText {
    /// Every numbered line, including the empty one left by a trailing newline.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of numbered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: even an empty text has one (empty) line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the final line is the empty artifact of a trailing newline.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Rows that carry source content: the trailing-newline artifact is a
    /// boundary, not a row.
    pub fn row_count(&self) -> usize {
        self.lines.len() - usize::from(self.trailing_newline)
    }
}

/// Number of decimal digits in `n` (at least one).
fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Prefix every line of `text` with its ordinal.
///
/// The prefix width is derived from this text's own line count, so two texts
/// numbered independently may have different prefix widths.
pub fn number_lines(text: &str) -> NumberedText {
    let total = split_lines(text).count();
    let prefix_width = digit_count(total) + 1;

    let lines = split_lines(text)
        .enumerate()
        .map(|(i, line)| format!("{:<prefix_width$}{line}", i + 1))
        .collect();

    NumberedText {
        lines,
        trailing_newline: text.ends_with('\n'),
    }
}
