//! Printable width of terminal text.
//!
//! Escape sequences are zero-width. Characters are measured with the
//! Unicode East Asian Width tables; grapheme clusters that form emoji
//! sequences count as two columns.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::{Segment, segments};

/// Display width of a single codepoint in terminal columns.
///
/// Control characters are 0 columns: they either move the cursor or render
/// as nothing, and in both cases occupy no cell of their own.
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    match c as u32 {
        // Pictographs most terminals draw two cells wide.
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF | 0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of one grapheme cluster.
///
/// - `e` + combining acute → 1
/// - ZWJ families, skin-tone and VS16 sequences, keycaps → 2
/// - regional-indicator pairs (flags) → 2
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if chars.as_str().is_empty() {
        return char_width(first);
    }
    if first.is_control() {
        return 0;
    }
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }
    let emoji_sequence = chars.any(|c| {
        matches!(c as u32, 0x200D | 0xFE0F | 0x20E3 | 0x1F3FB..=0x1F3FF)
    });
    if emoji_sequence { 2 } else { char_width(first) }
}

/// Printable width of a string: escape sequences contribute nothing.
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }

    segments(s)
        .map(|segment| match segment {
            Segment::Text(text) => text.graphemes(true).map(grapheme_width).sum(),
            Segment::Escape(_) => 0,
        })
        .sum()
}
