//! Position tracking for source locations
//!
//!     Parse errors report where they happened. Internally every stage works with byte
//!     offsets; [`SourceLocation`] converts those offsets into line:column pairs once an
//!     error actually has to be reported.
//!
//!     Lines and columns are 0-based in the data and 1-based when displayed. Columns are
//!     counted in bytes, matching the offsets the lexer produces.

use serde::Serialize;
use std::fmt;

/// A byte offset together with its line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a position. O(log n) in the number of lines.
    pub fn position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i.saturating_sub(1));

        let column = byte_offset - self.line_starts[line];

        Position::new(byte_offset, line, column)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
