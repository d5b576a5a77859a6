//! Vocabulary of both file formats
//!
//! This module holds the pieces of the legacy grammar that need interpretation
//! (the file type tag and the function descriptor) and the directive lines the
//! current format understands.

use std::fmt;
use std::str::FromStr;

/// Descriptor text meaning "this file carries no function values"
pub const NO_FUNCTION: &str = "no function";

/// Prefix on a function descriptor that requests a reversed x axis
pub const REVERSE_MARKER: &str = "[-]";

/// Kind of input declared on the first significant line of a legacy file
///
/// Uses lowercase naming to match the tags written in the files.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Point cloud, one point per data row
    points,
    /// Metric space given as a distance matrix
    metric,
    /// Bifiltration given as a list of simplices with grades
    bifiltration,
    /// Free implicit representation
    firep,
}

impl FileType {
    /// The tag as it appears in both the legacy and the current format
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::points => "points",
            FileType::metric => "metric",
            FileType::bifiltration => "bifiltration",
            FileType::firep => "firep",
        }
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(FileType::points),
            "metric" => Ok(FileType::metric),
            "bifiltration" => Ok(FileType::bifiltration),
            "firep" => Ok(FileType::firep),
            _ => Err(format!(
                "Invalid file type '{}'. Valid options are: points, metric, bifiltration, firep",
                s
            )),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `--datatype` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datatype {
    Points,
    PointsWithFunction,
    Metric,
    MetricWithFunction,
}

impl Datatype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Datatype::Points => "points",
            Datatype::PointsWithFunction => "points_fn",
            Datatype::Metric => "metric",
            Datatype::MetricWithFunction => "metric_fn",
        }
    }

    /// The function-bearing variant of this datatype
    pub fn with_function(self) -> Self {
        match self {
            Datatype::Points | Datatype::PointsWithFunction => Datatype::PointsWithFunction,
            Datatype::Metric | Datatype::MetricWithFunction => Datatype::MetricWithFunction,
        }
    }
}

/// Parsed form of the legacy function descriptor line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionDescriptor {
    /// The literal `no function`
    Absent,
    /// A function axis label, optionally reversed with the `[-]` prefix
    Present { label: String, reverse: bool },
}

impl FunctionDescriptor {
    /// Interpret a descriptor line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        let content = line.trim();
        if content == NO_FUNCTION {
            return FunctionDescriptor::Absent;
        }
        match content.strip_prefix(REVERSE_MARKER) {
            Some(rest) => FunctionDescriptor::Present {
                label: rest.trim().to_string(),
                reverse: true,
            },
            None => FunctionDescriptor::Present {
                label: content.to_string(),
                reverse: false,
            },
        }
    }

    /// Directives that announce the function axis (`--xreverse`, `--xlabel`)
    pub fn directives(&self) -> Vec<Directive> {
        match self {
            FunctionDescriptor::Absent => Vec::new(),
            FunctionDescriptor::Present { label, reverse } => {
                let mut directives = Vec::with_capacity(2);
                if *reverse {
                    directives.push(Directive::XReverse);
                }
                directives.push(Directive::XLabel(label.clone()));
                directives
            }
        }
    }
}

/// A single directive line of the current format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Datatype(Datatype),
    Type(FileType),
    MaxDist(String),
    XLabel(String),
    YLabel(String),
    XReverse,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Datatype(datatype) => write!(f, "--datatype {}", datatype.as_str()),
            Directive::Type(file_type) => write!(f, "--type {}", file_type),
            Directive::MaxDist(value) => write!(f, "--maxdist {}", value),
            Directive::XLabel(text) => write!(f, "--xlabel {}", text),
            Directive::YLabel(text) => write!(f, "--ylabel {}", text),
            Directive::XReverse => f.write_str("--xreverse"),
        }
    }
}

/// Section marker comments, each preceded by a blank separator line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    FunctionValues,
    DataStart,
}

impl Marker {
    pub fn comment(&self) -> &'static str {
        match self {
            Marker::FunctionValues => "# function values",
            Marker::DataStart => "# data starts here",
        }
    }
}
