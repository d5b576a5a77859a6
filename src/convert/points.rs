//! Point cloud conversion
//!
//! With a function present, each legacy row ends in its function value. The
//! values are gathered into one line that the current format expects ahead of
//! the data, so rows go to a separate buffer and the two are joined once the
//! source is exhausted.

use super::copy_rows;
use crate::buffer::OutputBuffer;
use crate::error::{ConvertError, Field};
use crate::format::{Datatype, Directive, FunctionDescriptor, Marker};
use crate::supplier::LineSupplier;
use std::io::BufRead;
use tracing::{debug, trace};

pub(super) fn convert<R: BufRead>(
    lines: &mut LineSupplier<R>,
    out: &mut OutputBuffer,
) -> Result<(), ConvertError> {
    let datatype = out.reserve(&Directive::Datatype(Datatype::Points));

    // The current format infers dimension from the rows
    lines.require(out, Field::Dimension)?;

    let max_dist = lines.require(out, Field::MaxDistance)?;
    out.push_directive(&Directive::MaxDist(max_dist.trim().to_string()));

    let descriptor = FunctionDescriptor::parse(&lines.require(out, Field::Function)?);
    if descriptor == FunctionDescriptor::Absent {
        out.push_marker(Marker::DataStart);
        let rows = copy_rows(lines, out)?;
        debug!(rows, "points without function");
        return Ok(());
    }

    for directive in descriptor.directives() {
        out.push_directive(&directive);
    }
    out.set(datatype, &Directive::Datatype(Datatype::Points.with_function()));

    let mut data = OutputBuffer::new();
    let mut values = Vec::new();
    while let Some(row) = lines.next_line(&mut data)? {
        let (coordinates, value) = split_function_value(&row);
        trace!(line = lines.line_number(), value, "function value");
        values.push(value.to_string());
        data.push(coordinates);
    }
    debug!(rows = values.len(), "points with function");

    out.push_marker(Marker::FunctionValues);
    out.push(values.join(" "));
    out.push_marker(Marker::DataStart);
    out.append(data);
    Ok(())
}

/// Split a legacy data row into its coordinates and trailing function value
///
/// Coordinates are re-joined with single spaces. A row holding a single token
/// yields empty coordinates.
pub fn split_function_value(row: &str) -> (String, &str) {
    let content = row.trim();
    match content.rsplit_once(char::is_whitespace) {
        Some((coordinates, value)) => (
            coordinates.split_whitespace().collect::<Vec<_>>().join(" "),
            value,
        ),
        None => (String::new(), content),
    }
}
