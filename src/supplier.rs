//! Significant-line supplier over a legacy source
//!
//! Each pull returns the next line that is neither blank nor a comment. Blank
//! and comment lines met on the way are appended to the caller's buffer before
//! the pull returns, so they land directly ahead of whatever the caller emits
//! for the significant line that follows them.

use crate::buffer::OutputBuffer;
use crate::error::{ConvertError, Field};
use std::io::BufRead;
use tracing::trace;

pub struct LineSupplier<R> {
    /// Dropped as soon as the source is exhausted
    reader: Option<R>,
    line_number: usize,
}

impl<R: BufRead> LineSupplier<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            line_number: 0,
        }
    }

    /// Line number (1-based) of the last line scanned
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// True once the source has been fully scanned and released
    pub fn is_exhausted(&self) -> bool {
        self.reader.is_none()
    }

    /// Pull the next significant line, without its terminator
    ///
    /// Returns `Ok(None)` once the source is exhausted, and keeps returning it
    /// on later calls.
    pub fn next_line(&mut self, out: &mut OutputBuffer) -> Result<Option<String>, ConvertError> {
        let mut raw = String::new();
        loop {
            let Some(reader) = self.reader.as_mut() else {
                return Ok(None);
            };

            raw.clear();
            if reader.read_line(&mut raw)? == 0 {
                trace!(lines = self.line_number, "source exhausted");
                self.reader = None;
                return Ok(None);
            }
            self.line_number += 1;

            let line = strip_terminator(&raw);
            let content = line.trim();
            if content.is_empty() {
                out.push(String::new());
            } else if content.starts_with('#') {
                out.push(line);
            } else {
                return Ok(Some(line.to_string()));
            }
        }
    }

    /// Pull a line the grammar requires; running out is a malformed source
    pub fn require(&mut self, out: &mut OutputBuffer, field: Field) -> Result<String, ConvertError> {
        match self.next_line(out)? {
            Some(line) => {
                trace!(%field, line = self.line_number, "read field");
                Ok(line)
            }
            None => Err(ConvertError::MalformedSource { field }),
        }
    }
}

/// Drop a trailing `\n` or `\r\n`
fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn supplier(text: &str) -> LineSupplier<Cursor<Vec<u8>>> {
        LineSupplier::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_skipped_lines_are_diverted_before_yield() {
        let mut lines = supplier("# head\n\nfirst\n  # indented\n\t\nsecond\n");
        let mut out = OutputBuffer::new();

        assert_eq!(lines.next_line(&mut out).unwrap(), Some("first".to_string()));
        assert_eq!(out.lines(), &["# head", ""]);

        assert_eq!(lines.next_line(&mut out).unwrap(), Some("second".to_string()));
        assert_eq!(out.lines(), &["# head", "", "  # indented", ""]);

        assert_eq!(lines.next_line(&mut out).unwrap(), None);
        assert!(lines.is_exhausted());
        assert_eq!(lines.next_line(&mut out).unwrap(), None);
    }

    #[test]
    fn test_trailing_comments_flushed_at_exhaustion() {
        let mut lines = supplier("only\n# tail");
        let mut out = OutputBuffer::new();
        assert!(lines.next_line(&mut out).unwrap().is_some());
        assert!(out.is_empty());
        assert_eq!(lines.next_line(&mut out).unwrap(), None);
        assert_eq!(out.lines(), &["# tail"]);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let mut lines = supplier("a b\r\nc d");
        let mut out = OutputBuffer::new();
        assert_eq!(lines.next_line(&mut out).unwrap().as_deref(), Some("a b"));
        assert_eq!(lines.next_line(&mut out).unwrap().as_deref(), Some("c d"));
        assert_eq!(lines.line_number(), 2);
    }

    #[test]
    fn test_require_reports_missing_field() {
        let mut lines = supplier("# nothing here\n");
        let mut out = OutputBuffer::new();
        let err = lines.require(&mut out, Field::MaxDistance).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedSource {
                field: Field::MaxDistance
            }
        ));
    }
}
