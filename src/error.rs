//! Error types for legacy file conversion.

use std::fmt;
use thiserror::Error;

/// Grammar field that was expected when the source ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FileType,
    Dimension,
    MaxDistance,
    Function,
    FunctionValues,
    Placeholder,
    XLabel,
    YLabel,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FileType => "file type",
            Field::Dimension => "dimension",
            Field::MaxDistance => "max distance",
            Field::Function => "function",
            Field::FunctionValues => "function values",
            Field::Placeholder => "placeholder line",
            Field::XLabel => "x label",
            Field::YLabel => "y label",
        };
        f.write_str(name)
    }
}

/// Errors that abort a single conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// First significant line is not one of the known type tags.
    #[error("unrecognized file type '{tag}'")]
    UnrecognizedType { tag: String },

    /// Source ended while a required field was still expected.
    #[error("malformed source: expected {field} line but reached end of file")]
    MalformedSource { field: Field },

    /// Reading the source failed mid-scan.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Unrecognized files are reported but do not fail a batch.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ConvertError::UnrecognizedType { .. })
    }
}
