//! Error types for parsing and link access

use crate::lino::ast::range::Position;
use thiserror::Error;

/// Errors that can occur while parsing links notation
///
/// A single malformed line fails the whole parse; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quote run opened a reference and no matching closing run followed
    #[error("unterminated quote starting at {position}")]
    UnterminatedQuote { position: Position },

    /// A `)` with no matching `(`, or a `(` never closed
    #[error("unbalanced parentheses at {position}")]
    UnbalancedParentheses { position: Position },

    /// A `:` where an identifier was required but missing, or a second `:` in one link
    #[error("invalid colon placement at {position}: {reason}")]
    InvalidColonPlacement { position: Position, reason: String },

    /// The input exceeds the configured byte ceiling
    #[error("input is {size} bytes, larger than the {limit} byte limit")]
    InputTooLarge { size: usize, limit: usize },

    /// Nesting exceeds the configured depth ceiling
    #[error("nesting at {position} exceeds the depth limit of {limit}")]
    RecursionTooDeep { limit: usize, position: Position },
}

impl ParseError {
    /// Where the error happened, if it is tied to a source location
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::UnterminatedQuote { position }
            | ParseError::UnbalancedParentheses { position }
            | ParseError::InvalidColonPlacement { position, .. }
            | ParseError::RecursionTooDeep { position, .. } => Some(*position),
            ParseError::InputTooLarge { .. } => None,
        }
    }

    /// Render the error with the surrounding source lines.
    pub fn render(&self, source: &str) -> String {
        let mut report = format!("Error: {}\n", self);
        if let Some(position) = self.position() {
            report.push('\n');
            report.push_str(&format_source_context(source, position.line));
        }
        report
    }
}

/// A multi-part identifier was read through the single-reference accessor
///
/// This is a contract violation by the caller, never a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier has {} parts ({}) and cannot be read as a single reference", .parts.len(), .parts.join(" "))]
pub struct MultiReferenceAccess {
    pub parts: Vec<String>,
}

/// Format source code context around an error line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(source: &str, error_line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}
