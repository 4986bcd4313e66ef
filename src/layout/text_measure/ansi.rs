//! ANSI escape sequence handling.
//!
//! Splits strings into printable text and escape sequences so that escape
//! bytes never count towards column width. Recognises:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

use std::borrow::Cow;

const ESC: u8 = 0x1B;

/// One piece of a string: printable text or a complete escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// Iterator over the [`Segment`]s of a string, in order.
///
/// Concatenating every segment reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    s: &'a str,
    pos: usize,
}

/// Split `s` into printable text and escape sequences.
pub fn segments(s: &str) -> Segments<'_> {
    Segments { s, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.s;
        let bytes = s.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        if bytes[start] == ESC {
            self.pos = escape_end(bytes, start);
            return Some(Segment::Escape(&s[start..self.pos]));
        }

        // ESC is single-byte ASCII, so cutting at it never splits a UTF-8 sequence.
        let len = bytes[start..]
            .iter()
            .position(|&b| b == ESC)
            .unwrap_or(bytes.len() - start);
        self.pos = start + len;
        Some(Segment::Text(&s[start..self.pos]))
    }
}

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no ESC byte is present.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for segment in segments(s) {
        if let Segment::Text(text) = segment {
            result.push_str(text);
        }
    }
    Cow::Owned(result)
}

/// Byte index just past the escape sequence starting at `pos` (an ESC byte).
///
/// The returned index always lies on a char boundary: sequences end on an
/// ASCII byte, abort before a non-ASCII byte, or run to the end of input.
fn escape_end(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    match bytes.get(next) {
        None => bytes.len(),
        Some(b'[') => csi_end(bytes, next + 1),
        Some(b']' | b'P' | b'^' | b'_') => string_terminated_end(bytes, next + 1),
        Some(b) if b.is_ascii() => next + 1,
        // ESC followed by a multi-byte char: only the ESC is the sequence.
        Some(_) => next,
    }
}

/// CSI: parameter bytes (0x30-0x3F), intermediates (0x20-0x2F), final (0x40-0x7E).
fn csi_end(bytes: &[u8], pos: usize) -> usize {
    for (i, &b) in bytes.iter().enumerate().skip(pos) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
    }
    bytes.len()
}

/// OSC/DCS/PM/APC: terminated by BEL or ST (ESC \).
fn string_terminated_end(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
