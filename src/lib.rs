//! # links-notation
//!
//! A parser and formatter for links notation: an ordered forest of links, where every link
//! has an optional identifier and an ordered list of values that are links themselves.
//!
//! The same link can be written three ways, and all three parse to the same value:
//!
//!     (id: v1 v2)
//!     id: v1 v2
//!     id:
//!       v1
//!       v2
//!
//! File Layout
//!
//!     src/lino
//!       ├── ast        Link, Identifier, Document, errors, positions
//!       ├── lexing     reference scanner, tokens, logical lines
//!       ├── parsing    line shapes, indentation, normalization
//!       ├── formats    serializer, escaping, grouping
//!       ├── config     layered configuration loading
//!       └── testing    fluent assertions for tests
//!
//! The two entry points are [`parse`] and [`format_links`]. For structural test
//! assertions, see the [testing module](lino::testing).

pub mod lino;

pub use lino::ast::{
    Document, Identifier, Link, LinkBuilder, MultiReferenceAccess, ParseError, Position,
};
pub use lino::formats::{format, format_link, format_links, FormatConfig};
pub use lino::parsing::{parse, parse_document, Parser, ParserConfig, Strictness};
