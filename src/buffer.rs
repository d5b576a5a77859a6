//! Output buffer for a single conversion
//!
//! Lines are stored without terminators. The buffer is append-only apart from
//! [`OutputBuffer::set`], which rewrites a line previously returned as a [`Slot`].

use crate::format::{Directive, Marker};

/// Position of a line that may be rewritten once more of the source is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(usize);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_directive(&mut self, directive: &Directive) {
        self.lines.push(directive.to_string());
    }

    /// Append a section marker comment preceded by its blank separator line
    pub fn push_marker(&mut self, marker: Marker) {
        self.lines.push(String::new());
        self.lines.push(marker.comment().to_string());
    }

    /// Append a directive and remember where it went
    pub fn reserve(&mut self, directive: &Directive) -> Slot {
        self.push_directive(directive);
        Slot(self.lines.len() - 1)
    }

    /// Overwrite a reserved line
    pub fn set(&mut self, slot: Slot, directive: &Directive) {
        self.lines[slot.0] = directive.to_string();
    }

    /// Move every line of `other` to the end of this buffer
    pub fn append(&mut self, mut other: OutputBuffer) {
        self.lines.append(&mut other.lines);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
