//! RIVET Legacy Input Converter Library
//!
//! This library rewrites legacy RIVET input files (point clouds, metric spaces,
//! bifiltrations and free implicit representations) into the current
//! directive-based input format. Comments and blank lines are carried over at
//! the same relative positions.
//!
//! # Architecture
//!
//! - **Engine**: `supplier` yields significant lines and diverts the rest into
//!   the output; `convert` dispatches on the type tag to a per-type converter.
//! - **Files**: `storage` names, reads and writes files; `batch` drives several
//!   files at once and decides the exit code.
//! - **Ambient**: `config` (TOML settings) and `logging` (tracing subscriber).
//!
//! # Example
//!
//! ```
//! use rivet_convert::convert_str;
//!
//! let converted = convert_str("firep\ntime\nscale\n1 2\n").unwrap();
//! assert_eq!(converted.lines[0], "--type firep");
//! ```

pub mod batch;
pub mod buffer;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod logging;
pub mod storage;
pub mod supplier;

use std::io::{BufRead, Cursor};

// Re-export commonly used types
pub use batch::{FileOutcome, convert_all, exit_code};
pub use config::ConvertConfig;
pub use convert::Converted;
pub use error::{ConvertError, Field};
pub use format::FileType;
pub use storage::{Storage, convert_file, destination_for};

/// Convert a legacy source read from any buffered reader
pub fn convert_reader<R: BufRead>(reader: R) -> Result<Converted, ConvertError> {
    convert::convert(supplier::LineSupplier::new(reader))
}

/// Convert legacy text held in memory
pub fn convert_str(source: &str) -> Result<Converted, ConvertError> {
    convert_reader(Cursor::new(source.as_bytes()))
}
