//! Terminal queries.
//!
//! Width detection and color-support detection, both through crossterm.
//! Nothing here guesses: a terminal that cannot report its width, or one too
//! narrow to hold a column, is an error.

use std::ffi::OsString;
use std::io;

use crossterm::tty::IsTty;

use crate::error::{Error, Result};
use crate::pipeline::column_width;
use crate::types::ColorMode;

/// Width of the controlling terminal in columns.
pub fn terminal_width() -> Result<u16> {
    let (width, _height) = crossterm::terminal::size().map_err(Error::TerminalSize)?;
    log::debug!("terminal width: {width}");
    Ok(width)
}

/// Width of each comparison column on a terminal `terminal_width` wide.
///
/// Fails when the share comes to zero columns, whether the width was queried
/// or given on the command line.
pub fn pane_width(terminal_width: u16, ratio: f64) -> Result<usize> {
    match column_width(terminal_width, ratio) {
        0 => Err(Error::TooNarrow(terminal_width)),
        width => Ok(width),
    }
}

/// Whether to emit color on stdout under `mode`.
pub fn color_enabled(mode: ColorMode) -> bool {
    resolve_color(mode, io::stdout().is_tty(), std::env::var_os("NO_COLOR"))
}

/// Decide color from the mode, whether stdout is a terminal, and `NO_COLOR`.
///
/// `NO_COLOR` disables `auto` color when set to any non-empty value.
pub fn resolve_color(mode: ColorMode, is_tty: bool, no_color: Option<OsString>) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && no_color.is_none_or(|v| v.is_empty()),
    }
}
