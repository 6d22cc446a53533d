//! Lexing for links notation
//!
//!     Three layers, leaves first:
//!
//!     - [`reference`]: the counted-delimiter scanner for one reference
//!     - [`tokens`]: logos token stream for the content of one logical line
//!     - [`line_segmentation`]: splitting source into logical lines
//!
//!     Nothing here knows about links; the parsing module turns lines and tokens into
//!     structure.

pub mod line_segmentation;
pub mod reference;
pub mod tokens;

pub use line_segmentation::{segment, LogicalLine};
pub use reference::{
    is_quote, is_reference_boundary, scan_reference, Scanned, UnterminatedQuote, QUOTE_CHARS,
};
pub use tokens::{tokenize, LexError, Token};
