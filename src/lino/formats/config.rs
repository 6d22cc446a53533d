//! Formatter configuration

use serde::{Deserialize, Serialize};

const DEFAULT_INDENT: &str = "  ";

/// Knobs for rendering links back to text. Built once per format call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Drop outer parentheses wherever the text still parses back the same
    pub less_parentheses: bool,
    /// Line length limit, only consulted when `indent_long_lines` is set
    pub max_line_length: usize,
    pub indent_long_lines: bool,
    /// Switch to block layout above this many values
    pub max_inline_refs: Option<usize>,
    /// Merge adjacent top-level links that share an identifier
    pub group_consecutive: bool,
    /// Prefix for each value line in block layout. Only spaces and tabs read back as
    /// indentation, so anything else falls back to two spaces.
    pub indent_string: String,
    /// Keep inline layout even when a block would be triggered
    pub prefer_inline: bool,
    /// Write multi-part identifiers as one quoted reference: `'some example'`
    pub quote_multi_references: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            less_parentheses: false,
            max_line_length: 80,
            indent_long_lines: false,
            max_inline_refs: None,
            group_consecutive: false,
            indent_string: DEFAULT_INDENT.to_string(),
            prefer_inline: true,
            quote_multi_references: false,
        }
    }
}

impl FormatConfig {
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::default()
    }

    /// The block-layout prefix actually written.
    pub fn indent_unit(&self) -> &str {
        let usable = !self.indent_string.is_empty()
            && self.indent_string.chars().all(|ch| matches!(ch, ' ' | '\t'));
        if usable {
            &self.indent_string
        } else {
            DEFAULT_INDENT
        }
    }

    /// True when `line` is over the limit and long lines should be indented.
    pub fn should_indent_by_length(&self, line: &str) -> bool {
        self.indent_long_lines && line.chars().count() > self.max_line_length
    }

    /// True when `ref_count` values exceed `max_inline_refs`.
    pub fn should_indent_by_ref_count(&self, ref_count: usize) -> bool {
        self.max_inline_refs.is_some_and(|max| ref_count > max)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormatConfigBuilder {
    config: FormatConfig,
}

impl FormatConfigBuilder {
    pub fn less_parentheses(mut self, value: bool) -> Self {
        self.config.less_parentheses = value;
        self
    }

    pub fn max_line_length(mut self, value: usize) -> Self {
        self.config.max_line_length = value;
        self
    }

    pub fn indent_long_lines(mut self, value: bool) -> Self {
        self.config.indent_long_lines = value;
        self
    }

    pub fn max_inline_refs(mut self, value: Option<usize>) -> Self {
        self.config.max_inline_refs = value;
        self
    }

    pub fn group_consecutive(mut self, value: bool) -> Self {
        self.config.group_consecutive = value;
        self
    }

    pub fn indent_string(mut self, value: impl Into<String>) -> Self {
        self.config.indent_string = value.into();
        self
    }

    pub fn prefer_inline(mut self, value: bool) -> Self {
        self.config.prefer_inline = value;
        self
    }

    pub fn quote_multi_references(mut self, value: bool) -> Self {
        self.config.quote_multi_references = value;
        self
    }

    pub fn build(self) -> FormatConfig {
        self.config
    }
}
