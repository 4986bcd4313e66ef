//! Output buffering.
//!
//! Each output line is assembled in an [`OutputBuffer`] and handed to the
//! writer in one call, so a colored row never reaches the terminal half
//! written.

use std::io::{self, Write};

use super::ansi;
use crate::types::Color;

/// A byte buffer that accumulates painted segments for one write.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a buffer with room for a typical row.
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    /// Create a buffer with specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write `text` wrapped in `color` and a reset; bare text when uncolored.
    pub fn write_painted(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(color) => {
                ansi::fg(&mut self.data, color)?;
                self.write_str(text);
                ansi::reset(&mut self.data)
            }
            None => {
                self.write_str(text);
                Ok(())
            }
        }
    }

    /// End the current line.
    #[inline]
    pub fn newline(&mut self) {
        self.data.push(b'\n');
    }

    /// Write the accumulated bytes to `writer` and clear the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        self.data.clear();
        Ok(())
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(()) // Buffering only - real output via flush_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painted_segments() {
        let mut buf = OutputBuffer::new();
        buf.write_painted("left", Some(Color::Green)).unwrap();
        buf.write_painted(" | ", None).unwrap();
        buf.newline();
        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[32mleft\x1b[0m | \n");
    }

    #[test]
    fn flush_clears() {
        let mut buf = OutputBuffer::new();
        buf.write_str("row");
        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"row");

        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"row");
    }

    #[test]
    fn formatted_writes() {
        let mut buf = OutputBuffer::new();
        write!(buf, "({} rows)", 3).unwrap();
        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"(3 rows)");
    }
}
