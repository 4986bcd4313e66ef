//! Text measurement for terminal rendering.
//!
//! Provides Unicode-aware width measurement, ANSI escape sequence handling,
//! fixed-width cell fitting and tab expansion.
//!
//! # Capabilities
//!
//! - **Width calculation**: printable column width of any Unicode text
//! - **ANSI handling**: CSI, OSC and ESC sequences are zero-width and are
//!   carried through fitting unchanged
//! - **Grapheme awareness**: never cuts inside a grapheme cluster
//! - **Fitting**: truncate-or-pad to an exact column width
//!
//! Built on `unicode-width` (East Asian Width tables) and
//! `unicode-segmentation` (UAX #29 grapheme boundaries).

mod ansi;
mod fit;
mod tabs;
mod width;

pub use ansi::{Segment, Segments, segments, strip_ansi};
pub use fit::fit_to_width;
pub use tabs::expand_tabs;
pub use width::{char_width, grapheme_width, string_width};
