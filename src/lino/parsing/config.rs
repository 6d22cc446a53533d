//! Parser configuration

use serde::{Deserialize, Serialize};

/// 10 MiB
pub const DEFAULT_MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How the parser treats a `:` with no identifier in front of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strictness {
    /// `: value` and a bare `:` are [`InvalidColonPlacement`](crate::lino::ast::ParseError::InvalidColonPlacement)
    #[default]
    Strict,
    /// An empty identifier reads as no identifier: `: a b` is `(a b)`
    Lenient,
}

/// Limits and options for one [`Parser`](crate::lino::parsing::Parser).
///
/// Immutable once handed to a parser; share it freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Inputs longer than this many bytes fail before scanning starts
    pub max_input_size: usize,
    /// Ceiling on both parenthesis nesting and indentation nesting
    pub max_depth: usize,
    pub strictness: Strictness,
    /// Merge runs of plain references that spell a multi-part identifier defined in the
    /// same document into one reference
    pub multi_ref_context: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            strictness: Strictness::Strict,
            multi_ref_context: false,
        }
    }
}

impl ParserConfig {
    pub fn with_max_input_size(mut self, bytes: usize) -> Self {
        self.max_input_size = bytes;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_multi_ref_context(mut self, enabled: bool) -> Self {
        self.multi_ref_context = enabled;
        self
    }

    pub fn is_lenient(&self) -> bool {
        self.strictness == Strictness::Lenient
    }
}
