//! Parsing module for links notation
//!
//! This module provides the processing pipeline from source text to links:
//! 1. **Segmentation**: source split into logical lines (see [`crate::lino::lexing`])
//! 2. **Structuring**: lines classified and arranged into a raw item tree by indentation
//! 3. **Normalization**: the raw tree folded into canonical [`Link`] values
//!
//! ## Invariants
//!
//! - The three surface forms `(id: a b)`, `id: a b` and an `id:` block with indented `a`
//!   and `b` all parse to the same link.
//! - Adding the same number of leading spaces to every line does not change the result.
//! - One malformed line fails the whole parse.

pub mod config;
pub mod indentation;
pub mod ir;
pub mod item;
pub mod multi_ref;
pub mod normalization;

pub use config::{ParserConfig, Strictness};
pub use ir::RawItem;
pub use normalization::{combine, normalize};

use crate::lino::ast::{Document, Link, ParseError, SourceLocation};
use crate::lino::lexing::segment;
use indentation::IndentationTracker;
use item::ItemParser;
use multi_ref::recognize_multi_references;
use tracing::debug;

/// A configured parser.
///
/// Holds only configuration, so one instance can serve any number of parses, from any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, source: &str) -> Result<Vec<Link>, ParseError> {
        if source.len() > self.config.max_input_size {
            return Err(ParseError::InputTooLarge {
                size: source.len(),
                limit: self.config.max_input_size,
            });
        }

        let locator = SourceLocation::new(source);
        let lines = segment(source, &locator)?;
        debug!(lines = lines.len(), bytes = source.len(), "segmented source");

        let item_parser = ItemParser::new(&locator, &self.config);
        let items =
            IndentationTracker::new(&lines, &item_parser, &locator, self.config.max_depth)
                .parse_document()?;

        let mut links = normalize(&items);
        if self.config.multi_ref_context {
            links = recognize_multi_references(links);
        }
        debug!(roots = items.len(), links = links.len(), "normalized document");
        Ok(links)
    }

    pub fn parse_document(&self, source: &str) -> Result<Document, ParseError> {
        self.parse(source).map(Document::new)
    }
}

/// Parse with the default configuration.
pub fn parse(source: &str) -> Result<Vec<Link>, ParseError> {
    Parser::default().parse(source)
}

pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    Parser::default().parse_document(source)
}
