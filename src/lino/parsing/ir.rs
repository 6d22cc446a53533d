//! Intermediate representation between line parsing and normalization
//!
//!     A [`RawItem`] still tells apart values written inline on a line from children
//!     attached by indentation. Normalization folds both into plain [`Link`] values.

use crate::lino::ast::identifier::Identifier;
use crate::lino::ast::link::Link;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawItem {
    pub identifier: Identifier,
    /// Values written on the same logical line, including nested groups
    pub values: Vec<RawItem>,
    /// Items attached by deeper indentation
    pub children: Vec<RawItem>,
    /// `id:` with nothing after the colon; its values come from its children
    pub is_indented_marker: bool,
    /// Byte offset where the item starts in the source
    pub offset: usize,
}

impl RawItem {
    pub fn reference(reference: impl Into<String>, offset: usize) -> Self {
        Self {
            identifier: Identifier::Single(reference.into()),
            offset,
            ..Self::default()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// An inline plain reference: identifier, no values, no children
    pub fn is_reference(&self) -> bool {
        self.identifier.is_some()
            && self.values.is_empty()
            && self.children.is_empty()
            && !self.is_indented_marker
    }

    /// The link written on this item's own line, ignoring children.
    pub fn inline_link(&self) -> Link {
        Link {
            identifier: self.identifier.clone(),
            values: self.values.iter().map(RawItem::inline_link).collect(),
        }
    }
}
