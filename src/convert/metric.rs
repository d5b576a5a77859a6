//! Metric space conversion
//!
//! Function values arrive pre-aggregated on the line after the descriptor. When
//! there is no function that line is a placeholder and is discarded.

use super::copy_rows;
use crate::buffer::OutputBuffer;
use crate::error::{ConvertError, Field};
use crate::format::{Datatype, Directive, FunctionDescriptor, Marker};
use crate::supplier::LineSupplier;
use std::io::BufRead;
use tracing::debug;

pub(super) fn convert<R: BufRead>(
    lines: &mut LineSupplier<R>,
    out: &mut OutputBuffer,
) -> Result<(), ConvertError> {
    let datatype = out.reserve(&Directive::Datatype(Datatype::Metric));

    let descriptor = FunctionDescriptor::parse(&lines.require(out, Field::Function)?);
    let values = match descriptor {
        FunctionDescriptor::Absent => {
            lines.require(out, Field::Placeholder)?;
            None
        }
        FunctionDescriptor::Present { .. } => {
            for directive in descriptor.directives() {
                out.push_directive(&directive);
            }
            out.set(datatype, &Directive::Datatype(Datatype::Metric.with_function()));
            Some(lines.require(out, Field::FunctionValues)?)
        }
    };

    let ylabel = lines.require(out, Field::YLabel)?;
    out.push_directive(&Directive::YLabel(ylabel.trim().to_string()));

    let max_dist = lines.require(out, Field::MaxDistance)?;
    out.push_directive(&Directive::MaxDist(max_dist.trim().to_string()));

    if let Some(values) = values {
        out.push_marker(Marker::FunctionValues);
        out.push(values);
    }

    out.push_marker(Marker::DataStart);
    let rows = copy_rows(lines, out)?;
    debug!(rows, "metric rows copied");
    Ok(())
}
