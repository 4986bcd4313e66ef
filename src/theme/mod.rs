//! Verdict colors.
//!
//! A [`Palette`] maps each verdict, and the placeholder marker, to an
//! optional ANSI color. Colors are named in configuration and resolved
//! through the static table in [`crate::types::Color`]; names the table does
//! not know degrade to uncolored output.
//!
//! # Example
//!
//! ```rust
//! use bldiff::theme::{ColorNames, Palette};
//! use bldiff::types::{Color, Verdict};
//!
//! let palette = Palette::from_names(&ColorNames::default(), true);
//! assert_eq!(palette.verdict_color(Verdict::Similar), Some(Color::Yellow));
//! ```

use serde::{Deserialize, Serialize};

use crate::renderer::ansi;
use crate::types::{Color, PLACEHOLDER_MARKER, Verdict};

// =============================================================================
// ColorNames
// =============================================================================

/// Color names as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorNames {
    #[serde(rename = "match")]
    pub matched: String,
    pub similar: String,
    pub differ: String,
    pub placeholder: String,
}

impl Default for ColorNames {
    fn default() -> Self {
        Self {
            matched: "green".to_string(),
            similar: "yellow".to_string(),
            differ: "red".to_string(),
            placeholder: "red".to_string(),
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Resolved colors for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    matched: Option<Color>,
    similar: Option<Color>,
    differ: Option<Color>,
    placeholder: Option<Color>,
}

impl Default for Palette {
    /// Green / yellow / red, red marker.
    fn default() -> Self {
        Self {
            matched: Some(Color::Green),
            similar: Some(Color::Yellow),
            differ: Some(Color::Red),
            placeholder: Some(Color::Red),
        }
    }
}

/// Resolve one configured name, warning when the table does not know it.
fn resolve(role: &str, name: &str) -> Option<Color> {
    let color = Color::lookup(name);
    if color.is_none() && !name.trim().is_empty() {
        log::warn!("unknown {role} color '{name}', printing uncolored");
    }
    color
}

impl Palette {
    /// No color anywhere: the plain-text fallback.
    pub const fn plain() -> Self {
        Self {
            matched: None,
            similar: None,
            differ: None,
            placeholder: None,
        }
    }

    /// Resolve configured names. With `enabled == false` the result is
    /// [`Palette::plain`] regardless of the names.
    pub fn from_names(names: &ColorNames, enabled: bool) -> Self {
        if !enabled {
            return Self::plain();
        }
        Self {
            matched: resolve("match", &names.matched),
            similar: resolve("similar", &names.similar),
            differ: resolve("differ", &names.differ),
            placeholder: resolve("placeholder", &names.placeholder),
        }
    }

    pub fn verdict_color(&self, verdict: Verdict) -> Option<Color> {
        match verdict {
            Verdict::Match => self.matched,
            Verdict::Similar => self.similar,
            Verdict::Differ => self.differ,
        }
    }

    /// The placeholder marker as it appears in a normalized row.
    pub fn marker(&self) -> String {
        let mut buf = [0u8; 4];
        ansi::paint(PLACEHOLDER_MARKER.encode_utf8(&mut buf), self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_resolve_to_default_palette() {
        assert_eq!(Palette::from_names(&ColorNames::default(), true), Palette::default());
    }

    #[test]
    fn disabled_is_plain() {
        let palette = Palette::from_names(&ColorNames::default(), false);
        assert_eq!(palette, Palette::plain());
        assert_eq!(palette.marker(), "X");
    }

    #[test]
    fn names_are_case_insensitive() {
        let names = ColorNames {
            matched: "Cyan".into(),
            similar: "MAGENTA".into(),
            ..ColorNames::default()
        };
        let palette = Palette::from_names(&names, true);
        assert_eq!(palette.verdict_color(Verdict::Match), Some(Color::Cyan));
        assert_eq!(palette.verdict_color(Verdict::Similar), Some(Color::Magenta));
    }

    #[test]
    fn unknown_name_degrades_to_uncolored() {
        let names = ColorNames {
            differ: "vermilion".into(),
            ..ColorNames::default()
        };
        let palette = Palette::from_names(&names, true);
        assert_eq!(palette.verdict_color(Verdict::Differ), None);
        assert_eq!(palette.verdict_color(Verdict::Match), Some(Color::Green));
    }

    #[test]
    fn colored_marker() {
        assert_eq!(Palette::default().marker(), "\x1b[31mX\x1b[0m");
    }
}
