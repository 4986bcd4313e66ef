//! # bldiff
//!
//! Side-by-side comparison of two text files in the terminal.
//!
//! Each line is numbered, both files are brought to the same row count and
//! column width, and every row pair is colored by how alike the two lines
//! are: green for identical, yellow for similar, red for different.
//!
//! This is not a diff engine. Rows are compared strictly by position; there
//! is no alignment of inserted or deleted lines.
//!
//! ## Architecture
//!
//! ```text
//! raw text → number → normalize → classify → render
//! ```
//!
//! The pipeline is pure: it takes two strings and a column width and returns
//! a [`Comparison`]. Reading files, querying the terminal and parsing
//! arguments live at the edges.
//!
//! ## Modules
//!
//! - [`types`] - Verdicts, colors, markers
//! - [`layout`] - Printable width, ANSI stripping, fitting to a column
//! - [`pipeline`] - Numbering, normalization, classification
//! - [`renderer`] - Two-column ANSI output
//! - [`theme`] - Verdict color palette
//!
//! ## Example
//!
//! ```rust
//! use bldiff::{CompareOptions, Palette, Verdict, compare, render};
//!
//! let cmp = compare("a\nb\nc\n", "a\nb\n", &CompareOptions::new(10));
//! let verdicts: Vec<_> = cmp.verdicts().collect();
//! assert_eq!(verdicts, [Verdict::Match, Verdict::Match, Verdict::Differ]);
//!
//! let mut out = Vec::new();
//! render(&mut out, &cmp, &Palette::plain()).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod source;
pub mod terminal;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use layout::{expand_tabs, fit_to_width, string_width, strip_ansi};

pub use pipeline::{
    CompareOptions, Comparison, NumberedText, RowPair, VerdictCounts, classify, column_width,
    compare, extract_content, normalize, number_lines,
};

pub use renderer::{render, render_summary};

pub use theme::{ColorNames, Palette};
