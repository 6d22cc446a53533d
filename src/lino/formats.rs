//! Output formatting for links
//!
//! This module turns links back into links notation text:
//! - [`FormatConfig`]: layout and parenthesization knobs
//! - [`escaping`]: spelling of single references
//! - [`grouping`]: merging of adjacent same-identifier links
//! - [`serializer`]: the layout engine
//!
//! Formatting never fails and does not depend on the parser.

pub mod config;
pub mod escaping;
pub mod grouping;
pub mod serializer;

pub use config::{FormatConfig, FormatConfigBuilder};
pub use escaping::{escape_reference, needs_parentheses, needs_quoting};
pub use grouping::group_consecutive;
pub use serializer::{format_link, format_links, LinkSerializer};

/// Format links with the default configuration.
pub fn format(links: &[crate::lino::ast::Link]) -> String {
    format_links(links, &FormatConfig::default())
}
