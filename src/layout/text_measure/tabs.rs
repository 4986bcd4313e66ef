//! Tab expansion.
//!
//! Terminals advance a tab to the next tab stop, which a width measurement
//! cannot know about. Expanding tabs up front keeps measured width and drawn
//! width equal.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{Segment, segments};
use super::width::grapheme_width;

/// Replace each `\t` with spaces up to the next multiple of `tab_width`.
///
/// Columns restart after every `\n`. A `tab_width` of zero leaves the text
/// untouched.
pub fn expand_tabs(text: &str, tab_width: usize) -> Cow<'_, str> {
    if tab_width == 0 || !text.contains('\t') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut column = 0;

    for segment in segments(text) {
        let run = match segment {
            Segment::Escape(seq) => {
                out.push_str(seq);
                continue;
            }
            Segment::Text(run) => run,
        };
        for grapheme in run.graphemes(true) {
            match grapheme {
                "\t" => {
                    let fill = tab_width - column % tab_width;
                    out.extend(std::iter::repeat_n(' ', fill));
                    column += fill;
                }
                "\n" | "\r\n" => {
                    out.push_str(grapheme);
                    column = 0;
                }
                _ => {
                    out.push_str(grapheme);
                    column += grapheme_width(grapheme);
                }
            }
        }
    }

    Cow::Owned(out)
}
