//! Indentation tracking
//!
//!     Builds the item tree from logical lines. The first line's indentation is the base;
//!     every line is measured relative to it, so a document embedded at any constant
//!     offset parses the same as the unindented document.
//!
//!     Within a run of siblings, the first line fixes the indentation all siblings share.
//!     Any unit is accepted: whatever the first child uses becomes the rule for its run.
//!
//!         parent
//!            child one        <- fixes the run at 3 spaces
//!            child two
//!              grandchild     <- deeper: child of "child two"
//!         next parent         <- shallower: run ends, control returns upward
//!
//!     A line deeper than its siblings attaches to the sibling right before it. A line
//!     that ends a child run but is still deeper than the parent run starts a fresh child
//!     run of the same parent, so no line is ever dropped.

use crate::lino::ast::error::ParseError;
use crate::lino::ast::range::SourceLocation;
use crate::lino::lexing::LogicalLine;
use crate::lino::parsing::ir::RawItem;
use crate::lino::parsing::item::ItemParser;

pub struct IndentationTracker<'a> {
    lines: &'a [LogicalLine<'a>],
    items: &'a ItemParser<'a>,
    locator: &'a SourceLocation,
    max_depth: usize,
    base: usize,
    pos: usize,
}

impl<'a> IndentationTracker<'a> {
    pub fn new(
        lines: &'a [LogicalLine<'a>],
        items: &'a ItemParser<'a>,
        locator: &'a SourceLocation,
        max_depth: usize,
    ) -> Self {
        let base = lines.first().map_or(0, |line| line.indent);
        Self {
            lines,
            items,
            locator,
            max_depth,
            base,
            pos: 0,
        }
    }

    /// Indentation relative to the first line
    fn normalized(&self, line: &LogicalLine<'_>) -> usize {
        line.indent.saturating_sub(self.base)
    }

    pub fn parse_document(mut self) -> Result<Vec<RawItem>, ParseError> {
        let mut roots = Vec::new();
        while self.pos < self.lines.len() {
            roots.extend(self.parse_run(0)?);
        }
        Ok(roots)
    }

    /// Parse one run of siblings starting at the current line.
    fn parse_run(&mut self, depth: usize) -> Result<Vec<RawItem>, ParseError> {
        let lines = self.lines;
        let Some(first) = lines.get(self.pos) else {
            return Ok(Vec::new());
        };
        if depth > self.max_depth {
            return Err(ParseError::RecursionTooDeep {
                limit: self.max_depth,
                position: self.locator.position(first.offset),
            });
        }
        let sibling_indent = self.normalized(first);
        let mut run: Vec<RawItem> = Vec::new();

        while let Some(line) = lines.get(self.pos) {
            let indent = self.normalized(line);
            if indent < sibling_indent {
                break;
            }
            if indent > sibling_indent {
                let children = self.parse_run(depth + 1)?;
                if let Some(previous) = run.last_mut() {
                    previous.children.extend(children);
                }
                continue;
            }
            run.push(self.items.parse_line(line)?);
            self.pos += 1;
        }

        Ok(run)
    }
}
