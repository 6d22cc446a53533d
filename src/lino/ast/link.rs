//! The link value type
//!
//!     A link has an identifier and an ordered list of values, each itself a link. A link
//!     without values is a leaf: a plain reference when it carries an identifier, the
//!     empty link `()` when it does not. Links are plain values with structural equality;
//!     order of values is significant.

use crate::lino::ast::builder::LinkBuilder;
use crate::lino::ast::error::MultiReferenceAccess;
use crate::lino::ast::identifier::Identifier;
use crate::lino::formats::{format_link, FormatConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Identifier::is_none")]
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Link>,
}

impl Link {
    pub fn new(identifier: impl Into<Identifier>, values: Vec<Link>) -> Self {
        Self {
            identifier: identifier.into(),
            values,
        }
    }

    /// A leaf carrying a single reference
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            identifier: Identifier::Single(reference.into()),
            values: Vec::new(),
        }
    }

    /// A link without identifier
    pub fn anonymous(values: Vec<Link>) -> Self {
        Self {
            identifier: Identifier::None,
            values,
        }
    }

    /// The empty link, written `()`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> LinkBuilder {
        LinkBuilder::new()
    }

    /// The identifier as one reference. Fails for multi-part identifiers.
    pub fn id(&self) -> Result<Option<&str>, MultiReferenceAccess> {
        self.identifier.single()
    }

    /// All identifier parts, or `None` for an anonymous link.
    pub fn ids(&self) -> Option<Vec<&str>> {
        if self.identifier.is_none() {
            None
        } else {
            Some(self.identifier.parts())
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.values.is_empty()
    }

    /// A leaf with an identifier
    pub fn is_reference(&self) -> bool {
        self.values.is_empty() && self.identifier.is_some()
    }

    /// Neither identifier nor values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.identifier.is_none()
    }

    /// Pair this link with another inside an anonymous link: `(self other)`.
    pub fn combine(&self, other: &Link) -> Link {
        Link::anonymous(vec![self.clone(), other.clone()])
    }

    /// Collapse anonymous single-value wrappers.
    ///
    /// `((a))` simplifies to `a`. Links with an identifier keep it and only their
    /// values are simplified.
    pub fn simplify(self) -> Link {
        let Link {
            identifier,
            mut values,
        } = self;
        if identifier.is_none() && values.len() == 1 {
            return values.remove(0).simplify();
        }
        Link {
            identifier,
            values: values.into_iter().map(Link::simplify).collect(),
        }
    }

    /// Total number of links in this tree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.values.iter().map(Link::node_count).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.values.iter().map(Link::depth).max().unwrap_or(0)
    }
}

impl From<&str> for Link {
    fn from(reference: &str) -> Self {
        Link::reference(reference)
    }
}

impl From<String> for Link {
    fn from(reference: String) -> Self {
        Link::reference(reference)
    }
}

/// Tuples build a link from its parts: a leading `&str` or `String` is the identifier,
/// and every other element becomes a value. `("id", "a", "b")` is `(id: a b)`.
macro_rules! link_from_named_tuple {
    ($head:ty, $($value:ident: $element:ty),+) => {
        impl From<($head, $($element),+)> for Link {
            fn from((identifier, $($value),+): ($head, $($element),+)) -> Self {
                Link::new(identifier, vec![$(Link::from($value)),+])
            }
        }
    };
}

/// A tuple of links is an anonymous link over them.
macro_rules! link_from_anonymous_tuple {
    (@link $value:ident) => { Link };
    ($($value:ident),+) => {
        impl From<($(link_from_anonymous_tuple!(@link $value)),+)> for Link {
            fn from(($($value),+): ($(link_from_anonymous_tuple!(@link $value)),+)) -> Self {
                Link::anonymous(vec![$($value),+])
            }
        }
    };
}

link_from_named_tuple!(&str, a: &str);
link_from_named_tuple!(&str, a: &str, b: &str);
link_from_named_tuple!(&str, a: &str, b: &str, c: &str);
link_from_named_tuple!(String, a: String);
link_from_named_tuple!(String, a: String, b: String);
link_from_named_tuple!(String, a: String, b: String, c: String);
link_from_named_tuple!(&str, a: Link);
link_from_named_tuple!(&str, a: Link, b: Link);
link_from_named_tuple!(&str, a: Link, b: Link, c: Link);
link_from_anonymous_tuple!(a, b);
link_from_anonymous_tuple!(a, b, c);
link_from_anonymous_tuple!(a, b, c, d);

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_link(self, &FormatConfig::default()))
    }
}
