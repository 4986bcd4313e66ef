//! Input loading.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a file as text.
///
/// Invalid UTF-8 is replaced rather than rejected, so binary or oddly
/// encoded input still renders (possibly garbled) instead of failing.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log::info!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
