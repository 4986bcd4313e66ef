//! Core types for bldiff.
//!
//! These types flow through every stage of the comparison pipeline and
//! define what the renderer understands.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Markers
// =============================================================================

/// Marker character that stands in for a line number on a placeholder row.
pub const PLACEHOLDER_MARKER: char = 'X';

/// Separator printed between the left and right columns.
pub const SEPARATOR: &str = " | ";

// =============================================================================
// Verdict
// =============================================================================

/// Classification of one row pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Both stripped rows are byte-identical.
    Match,
    /// One stripped row contains the other (indentation or partial edit).
    Similar,
    /// Anything else, including every pairing with a placeholder row.
    Differ,
}

impl Verdict {
    /// All verdicts, in display order.
    pub const ALL: [Verdict; 3] = [Verdict::Match, Verdict::Similar, Verdict::Differ];

    /// Lowercase name, as used in config files and the summary footer.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Similar => "similar",
            Self::Differ => "differ",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Color
// =============================================================================

/// The eight standard ANSI foreground colors.
///
/// Lookup by name is case-insensitive. Names outside the table resolve to
/// nothing; callers treat that as "no color" rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Name table for [`Color::lookup`]. Read-only, built at compile time.
const COLOR_NAMES: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

impl Color {
    /// Look up a color by name, ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        COLOR_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    /// SGR foreground parameter (30-37).
    pub const fn sgr_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }
}

// =============================================================================
// ColorMode
// =============================================================================

/// When to emit ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color; plain-text output.
    Never,
}

// =============================================================================
// Tests
// =============================================================================
