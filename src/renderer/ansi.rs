//! ANSI SGR sequences for colored output.
//!
//! Only foreground color and reset are needed: every painted segment opens
//! with its color and closes with a full reset.

use std::io::Write;

use crate::types::Color;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Set the foreground color.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Color) -> std::io::Result<()> {
    write!(w, "{CSI}{}m", color.sgr_code())
}

/// Reset all attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(RESET.as_bytes())
}

/// `text` wrapped in `color` and a reset, or unchanged when `color` is `None`.
pub fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => format!("{CSI}{}m{text}{RESET}", color.sgr_code()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_text() {
        assert_eq!(paint("ok", Some(Color::Green)), "\x1b[32mok\x1b[0m");
        assert_eq!(paint("ok", None), "ok");
    }

    #[test]
    fn fg_and_reset() {
        let mut out = Vec::new();
        fg(&mut out, Color::Yellow).unwrap();
        reset(&mut out).unwrap();
        assert_eq!(out, b"\x1b[33m\x1b[0m");
    }
}
