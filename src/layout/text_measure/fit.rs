//! Fixed-width cell fitting.
//!
//! Every rendered column has the same printable width, so each row is cut
//! or padded to exactly that many terminal columns. Never breaks a grapheme
//! cluster and never counts escape bytes.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{Segment, segments};
use super::width::grapheme_width;

/// Fit `text` to exactly `width` printable columns.
///
/// Text past `width` is dropped (no wrapping, no ellipsis). A wide grapheme
/// that would straddle the last column is dropped and its space padded.
/// Escape sequences are kept wherever they occur, including after the cut,
/// so a reset at the end of a colored run is never lost.
///
/// Fitting an already-fitted string to the same width returns it unchanged.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + width);
    let mut used = 0;
    let mut full = false;

    for segment in segments(text) {
        match segment {
            Segment::Escape(seq) => out.push_str(seq),
            Segment::Text(_) if full => {}
            Segment::Text(run) => {
                for grapheme in run.graphemes(true) {
                    let gw = grapheme_width(grapheme);
                    if used + gw > width {
                        full = true;
                        break;
                    }
                    out.push_str(grapheme);
                    used += gw;
                }
            }
        }
    }

    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text_measure::string_width;

    #[test]
    fn pads_short_text() {
        assert_eq!(fit_to_width("abc", 6), "abc   ");
        assert_eq!(fit_to_width("", 3), "   ");
    }

    #[test]
    fn truncates_long_text() {
        assert_eq!(fit_to_width("hello world", 5), "hello");
        assert_eq!(fit_to_width("hello", 5), "hello");
        assert_eq!(fit_to_width("hello", 0), "");
    }

    #[test]
    fn wide_grapheme_at_boundary() {
        // "你" fits in columns 1-2, "好" would need columns 3-4.
        assert_eq!(fit_to_width("你好", 3), "你 ");
        assert_eq!(string_width(&fit_to_width("你好世界", 5)), 5);
    }

    #[test]
    fn escapes_are_zero_width() {
        let marker = "\x1b[31mX\x1b[0m";
        let fitted = fit_to_width(marker, 4);
        assert_eq!(fitted, "\x1b[31mX\x1b[0m   ");
        assert_eq!(string_width(&fitted), 4);
    }

    #[test]
    fn escapes_after_cut_are_kept() {
        assert_eq!(fit_to_width("\x1b[1mbold\x1b[0m", 2), "\x1b[1mbo\x1b[0m");
    }

    #[test]
    fn idempotent() {
        for text in ["abc", "hello world", "你好世界", "\x1b[31mX\x1b[0m ", ""] {
            for width in [0, 1, 3, 7] {
                let once = fit_to_width(text, width);
                assert_eq!(fit_to_width(&once, width), once, "{text:?} @ {width}");
            }
        }
    }
}
