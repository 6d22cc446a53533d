//! Links notation serializer
//!
//!     Renders links back to text so that parsing the text yields the same links. Layout is
//!     decided per top-level link:
//!
//!         (id: a b)           inline, the default
//!         id: a b             inline under `less_parentheses`
//!         id:                 block, once `max_inline_refs` or the line length limit is
//!           a                 exceeded and `prefer_inline` is off
//!           b
//!
//!     Values nested inside a link are always inline and always parenthesized when they
//!     are links of their own. Only top-level links get block layout.
//!
//!     A leaf with a multi-part identifier is written `(some example:)`; without the colon
//!     the words would read back as two separate values.

use crate::lino::ast::identifier::Identifier;
use crate::lino::ast::link::Link;
use crate::lino::formats::config::FormatConfig;
use crate::lino::formats::escaping::{escape_reference, needs_parentheses};
use crate::lino::formats::grouping::group_consecutive;
use tracing::trace;

/// Format a list of top-level links, one per line (or block).
///
/// Grouping looks at identifiers as they are written, so two links whose identifiers
/// print the same merge, and links that print as nothing do not separate a run.
pub fn format_links(links: &[Link], config: &FormatConfig) -> String {
    let serializer = LinkSerializer::new(config);
    if !config.group_consecutive {
        return serializer.serialize_all(links);
    }
    let written: Vec<Link> = links
        .iter()
        .filter(|link| !serializer.renders_empty(link))
        .map(|link| Link {
            identifier: serializer.written_identifier(&link.identifier),
            values: link.values.clone(),
        })
        .collect();
    serializer.serialize_all(&group_consecutive(&written))
}

/// Format one link as a top-level entry.
pub fn format_link(link: &Link, config: &FormatConfig) -> String {
    LinkSerializer::new(config).serialize(link)
}

/// An identifier as it will be written
struct RenderedIdentifier {
    text: String,
    /// Several words that must be followed by a colon to stay one identifier
    multi: bool,
    needs_parentheses: bool,
}

pub struct LinkSerializer<'a> {
    config: &'a FormatConfig,
}

impl<'a> LinkSerializer<'a> {
    pub fn new(config: &'a FormatConfig) -> Self {
        Self { config }
    }

    pub fn serialize_all(&self, links: &[Link]) -> String {
        links
            .iter()
            .filter(|link| !self.renders_empty(link))
            .map(|link| self.serialize(link))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True for a top-level link that prints as an empty line
    fn renders_empty(&self, link: &Link) -> bool {
        self.config.less_parentheses
            && link.values.is_empty()
            && self.written_identifier(&link.identifier).is_none()
    }

    /// Serialize a top-level link.
    pub fn serialize(&self, link: &Link) -> String {
        let identifier = self.identifier(&link.identifier);

        if link.values.is_empty() {
            return match identifier {
                None if self.config.less_parentheses => String::new(),
                None => "()".to_string(),
                Some(id) if id.multi => format!("({}:)", id.text),
                Some(id) if self.config.less_parentheses && !id.needs_parentheses => id.text,
                Some(id) => format!("({})", id.text),
            };
        }

        let values = self.inline_values(&link.values);
        let inline = match &identifier {
            Some(id) if self.config.less_parentheses && !id.needs_parentheses => {
                format!("{}: {}", id.text, values)
            }
            Some(id) => format!("({}: {})", id.text, values),
            None if self.config.less_parentheses && self.all_writable_references(&link.values) => {
                values
            }
            None => format!("({})", values),
        };

        let block = !self.config.prefer_inline
            && (self.config.should_indent_by_ref_count(link.values.len())
                || self.config.should_indent_by_length(&inline));
        trace!(block, values = link.values.len(), "chose layout");

        if block {
            self.block(identifier, &link.values)
        } else {
            inline
        }
    }

    fn block(&self, identifier: Option<RenderedIdentifier>, values: &[Link]) -> String {
        let indent = self.config.indent_unit();
        match identifier {
            Some(id) => {
                let mut lines = vec![format!("{}:", id.text)];
                lines.extend(
                    values
                        .iter()
                        .map(|value| format!("{}{}", indent, self.block_value(value))),
                );
                lines.join("\n")
            }
            // Anonymous blocks stay one parenthesized logical line spread over lines
            None => {
                let mut lines = vec!["(".to_string()];
                lines.extend(
                    values
                        .iter()
                        .map(|value| format!("{}{}", indent, self.value(value))),
                );
                lines.push(")".to_string());
                lines.join("\n")
            }
        }
    }

    /// A value on its own line under an `id:` marker.
    ///
    /// An anonymous single-value line is unwrapped when read back, so an anonymous link
    /// holding one value gets an extra pair of parentheses to survive that.
    fn block_value(&self, value: &Link) -> String {
        let text = self.value(value);
        if self.identifier(&value.identifier).is_none() && value.values.len() == 1 {
            format!("({})", text)
        } else {
            text
        }
    }

    /// Bare values stay unambiguous only if each one writes as a reference; a lone `()`
    /// would read back as an empty link.
    fn all_writable_references(&self, values: &[Link]) -> bool {
        values
            .iter()
            .all(|value| value.is_leaf() && self.identifier(&value.identifier).is_some())
    }

    fn inline_values(&self, values: &[Link]) -> String {
        values
            .iter()
            .map(|value| self.value(value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize a link nested as a value of another link.
    fn value(&self, link: &Link) -> String {
        let identifier = self.identifier(&link.identifier);
        if link.values.is_empty() {
            return match identifier {
                None => "()".to_string(),
                Some(id) if id.multi => format!("({}:)", id.text),
                Some(id) => id.text,
            };
        }
        let values = self.inline_values(&link.values);
        match identifier {
            Some(id) => format!("({}: {})", id.text, values),
            None => format!("({})", values),
        }
    }

    /// The identifier a reader gets back from the written text.
    ///
    /// Empty parts cannot be spelled and are dropped. A quoted multi-part identifier
    /// reads back as one reference.
    fn written_identifier(&self, identifier: &Identifier) -> Identifier {
        let parts: Vec<String> = identifier
            .parts()
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        match Identifier::from_parts(parts) {
            Identifier::Multi(parts) if self.config.quote_multi_references => {
                Identifier::Single(parts.join(" "))
            }
            written => written,
        }
    }

    /// Render an identifier, or `None` when nothing writable remains.
    fn identifier(&self, identifier: &Identifier) -> Option<RenderedIdentifier> {
        match self.written_identifier(identifier) {
            Identifier::None => None,
            Identifier::Single(reference) => Some(RenderedIdentifier {
                needs_parentheses: needs_parentheses(&reference),
                text: escape_reference(&reference),
                multi: false,
            }),
            Identifier::Multi(parts) => Some(RenderedIdentifier {
                text: parts
                    .iter()
                    .map(|part| escape_reference(part))
                    .collect::<Vec<_>>()
                    .join(" "),
                multi: true,
                needs_parentheses: true,
            }),
        }
    }
}
