//! Data model for links notation
//!
//!     - [`Link`]: identifier plus ordered values, the only node type
//!     - [`Identifier`]: none, single, or multi-part
//!     - [`Document`]: the top-level forest
//!     - [`ParseError`] / [`MultiReferenceAccess`]: the two error families
//!
//!     Links are immutable values once built: no parent pointers, no shared state. They are
//!     produced by the parser or assembled directly through [`LinkBuilder`].

pub mod builder;
pub mod document;
pub mod error;
pub mod identifier;
pub mod link;
pub mod range;

pub use builder::LinkBuilder;
pub use document::Document;
pub use error::{format_source_context, MultiReferenceAccess, ParseError};
pub use identifier::Identifier;
pub use link::Link;
pub use range::{Position, SourceLocation};
