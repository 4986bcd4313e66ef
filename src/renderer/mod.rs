//! Terminal renderer - the output layer.
//!
//! The renderer knows only about finished row pairs. It does not number,
//! normalize or classify anything; it paints what the pipeline produced and
//! writes it to any [`std::io::Write`].
//!
//! When color is unsupported the caller hands in [`Palette::plain`] and no
//! escape byte is written.
//!
//! [`Palette::plain`]: crate::theme::Palette::plain

pub mod ansi;
pub mod output;
pub mod side_by_side;

pub use output::OutputBuffer;
pub use side_by_side::{render, render_summary};
