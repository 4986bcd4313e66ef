//! Column layout.
//!
//! Everything the pipeline needs to reason about how wide a piece of text is
//! once it reaches the terminal.

pub mod text_measure;

pub use text_measure::{expand_tabs, fit_to_width, string_width, strip_ansi};
