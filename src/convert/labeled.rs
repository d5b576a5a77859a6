//! Bifiltration and firep conversion
//!
//! Both types share one grammar: two axis labels, then rows. Only the emitted
//! type tag differs.

use super::copy_rows;
use crate::buffer::OutputBuffer;
use crate::error::{ConvertError, Field};
use crate::format::{Directive, FileType, Marker};
use crate::supplier::LineSupplier;
use std::io::BufRead;
use tracing::debug;

pub(super) fn convert<R: BufRead>(
    file_type: FileType,
    lines: &mut LineSupplier<R>,
    out: &mut OutputBuffer,
) -> Result<(), ConvertError> {
    out.push_directive(&Directive::Type(file_type));

    let xlabel = lines.require(out, Field::XLabel)?;
    out.push_directive(&Directive::XLabel(xlabel.trim().to_string()));

    let ylabel = lines.require(out, Field::YLabel)?;
    out.push_directive(&Directive::YLabel(ylabel.trim().to_string()));

    out.push_marker(Marker::DataStart);
    let rows = copy_rows(lines, out)?;
    debug!(%file_type, rows, "rows copied");
    Ok(())
}
