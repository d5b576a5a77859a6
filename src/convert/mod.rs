//! Legacy-to-current conversion engine
//!
//! Dispatch reads the type tag from the first significant line and hands the
//! rest of the source to the converter for that type. Each converter consumes
//! its fixed field order, then streams data rows until the source runs out.
//!
//! ## Legacy field order
//!
//! - **points**: dimension, max distance, function descriptor, rows
//! - **metric**: function descriptor, function values (or a placeholder), y label, max distance, rows
//! - **bifiltration** / **firep**: x label, y label, rows

mod labeled;
mod metric;
mod points;

use crate::buffer::OutputBuffer;
use crate::error::{ConvertError, Field};
use crate::format::FileType;
use crate::supplier::LineSupplier;
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

pub use points::split_function_value;

/// Result of a successful conversion, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub file_type: FileType,
    pub lines: Vec<String>,
}

impl Converted {
    /// Serialize with every line LF-terminated
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

/// Run one conversion over a significant-line supplier
pub fn convert<R: BufRead>(mut lines: LineSupplier<R>) -> Result<Converted, ConvertError> {
    let mut out = OutputBuffer::new();

    let tag = lines.require(&mut out, Field::FileType)?;
    let tag = tag.trim();
    let file_type: FileType = tag.parse().map_err(|_| ConvertError::UnrecognizedType {
        tag: tag.to_string(),
    })?;
    debug!(%file_type, "dispatching converter");

    match file_type {
        FileType::points => points::convert(&mut lines, &mut out)?,
        FileType::metric => metric::convert(&mut lines, &mut out)?,
        FileType::bifiltration | FileType::firep => {
            labeled::convert(file_type, &mut lines, &mut out)?
        }
    }

    debug!(%file_type, source_lines = lines.line_number(), output_lines = out.len(), "conversion finished");
    Ok(Converted {
        file_type,
        lines: out.into_lines(),
    })
}

/// Copy every remaining significant line into `out` unchanged
fn copy_rows<R: BufRead>(
    lines: &mut LineSupplier<R>,
    out: &mut OutputBuffer,
) -> Result<usize, ConvertError> {
    let mut rows = 0;
    while let Some(row) = lines.next_line(out)? {
        trace!(line = lines.line_number(), "data row");
        out.push(row);
        rows += 1;
    }
    Ok(rows)
}
