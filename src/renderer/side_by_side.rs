//! Two-column renderer.
//!
//! Walks a [`Comparison`] and prints one line per row pair:
//!
//! ```text
//! <left column> | <right column>
//! ```
//!
//! The left column, the separator and the right column are each painted
//! independently in the verdict's color. The block is bracketed by one blank
//! line above and one below.

use std::io::{self, Write};

use super::output::OutputBuffer;
use crate::pipeline::{Comparison, VerdictCounts};
use crate::theme::Palette;
use crate::types::{SEPARATOR, Verdict};

/// Write `comparison` to `out` using `palette`.
pub fn render<W: Write>(out: &mut W, comparison: &Comparison, palette: &Palette) -> io::Result<()> {
    let mut line = OutputBuffer::with_capacity(2 * comparison.column_width() + 64);

    line.newline();
    line.flush_to(out)?;

    for row in comparison.rows() {
        let color = palette.verdict_color(row.verdict);
        line.write_painted(&row.left, color)?;
        line.write_painted(SEPARATOR, color)?;
        line.write_painted(&row.right, color)?;
        line.newline();
        line.flush_to(out)?;
    }

    line.newline();
    line.flush_to(out)
}

/// Write a one-line tally of verdicts, each count in its verdict's color.
pub fn render_summary<W: Write>(out: &mut W, counts: &VerdictCounts, palette: &Palette) -> io::Result<()> {
    let mut line = OutputBuffer::new();
    for (i, verdict) in Verdict::ALL.into_iter().enumerate() {
        if i > 0 {
            line.write_str(", ");
        }
        let text = format!("{} {}", counts.get(verdict), verdict);
        line.write_painted(&text, palette.verdict_color(verdict))?;
    }
    write!(line, " ({} rows)", counts.total())?;
    line.newline();
    line.flush_to(out)
}
