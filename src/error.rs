//! Error types.
//!
//! Only the I/O shell around the pipeline can fail; numbering, normalizing,
//! classifying and rendering into memory are infallible.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by bldiff.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be read.
    #[error("error reading file '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The width of the controlling terminal could not be determined.
    #[error("error detecting terminal width: {0}")]
    TerminalSize(#[source] io::Error),

    /// The terminal is too narrow to give each column a single cell.
    #[error("terminal width of {0} columns is too narrow for two columns")]
    TooNarrow(u16),

    /// A config file could not be read, parsed or validated.
    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Writing the rendered view failed.
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
