//! Link identifiers
//!
//!     An identifier is absent, a single reference, or an ordered sequence of two or more
//!     references. The multi form only comes out of the parser for unquoted words in front
//!     of a `:`, as in `some example: value`. A quoted token is always a single reference,
//!     whatever its content.
//!
//!     [`Identifier::single`] is the narrow accessor: it refuses to read a multi identifier
//!     as one reference instead of silently joining or truncating it.

use crate::lino::ast::error::MultiReferenceAccess;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "parts", rename_all = "snake_case")]
pub enum Identifier {
    #[default]
    None,
    Single(String),
    Multi(Vec<String>),
}

impl Identifier {
    /// Build an identifier from its parts: none, one, or several.
    pub fn from_parts(mut parts: Vec<String>) -> Self {
        match parts.len() {
            0 => Identifier::None,
            1 => Identifier::Single(parts.remove(0)),
            _ => Identifier::Multi(parts),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Identifier::None)
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Identifier::Multi(_))
    }

    /// The identifier as exactly one reference.
    ///
    /// Fails with [`MultiReferenceAccess`] for a multi identifier.
    pub fn single(&self) -> Result<Option<&str>, MultiReferenceAccess> {
        match self {
            Identifier::None => Ok(None),
            Identifier::Single(reference) => Ok(Some(reference)),
            Identifier::Multi(parts) => Err(MultiReferenceAccess {
                parts: parts.clone(),
            }),
        }
    }

    /// Every part of the identifier, in order. Empty for [`Identifier::None`].
    pub fn parts(&self) -> Vec<&str> {
        match self {
            Identifier::None => Vec::new(),
            Identifier::Single(reference) => vec![reference.as_str()],
            Identifier::Multi(parts) => parts.iter().map(String::as_str).collect(),
        }
    }

    pub fn part_count(&self) -> usize {
        match self {
            Identifier::None => 0,
            Identifier::Single(_) => 1,
            Identifier::Multi(parts) => parts.len(),
        }
    }
}

impl From<&str> for Identifier {
    fn from(reference: &str) -> Self {
        Identifier::Single(reference.to_string())
    }
}

impl From<String> for Identifier {
    fn from(reference: String) -> Self {
        Identifier::Single(reference)
    }
}

impl From<Vec<String>> for Identifier {
    fn from(parts: Vec<String>) -> Self {
        Identifier::from_parts(parts)
    }
}

impl From<Vec<&str>> for Identifier {
    fn from(parts: Vec<&str>) -> Self {
        Identifier::from_parts(parts.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_normalizes_arity() {
        assert_eq!(Identifier::from_parts(vec![]), Identifier::None);
        assert_eq!(
            Identifier::from_parts(vec!["a".into()]),
            Identifier::Single("a".into())
        );
        assert_eq!(
            Identifier::from_parts(vec!["a".into(), "b".into()]),
            Identifier::Multi(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_single_accessor() {
        assert_eq!(Identifier::None.single(), Ok(None));
        assert_eq!(Identifier::from("id").single(), Ok(Some("id")));
    }

    #[test]
    fn test_single_accessor_refuses_multi() {
        let id = Identifier::from(vec!["some", "example"]);
        let err = id.single().unwrap_err();
        assert_eq!(err.parts, vec!["some".to_string(), "example".to_string()]);
    }

    #[test]
    fn test_parts_never_fail() {
        assert!(Identifier::None.parts().is_empty());
        assert_eq!(Identifier::from("a").parts(), vec!["a"]);
        assert_eq!(Identifier::from(vec!["a", "b"]).parts(), vec!["a", "b"]);
        assert_eq!(Identifier::from(vec!["a", "b"]).part_count(), 2);
    }

    #[test]
    fn test_multi_equality_is_elementwise() {
        assert_ne!(
            Identifier::from(vec!["a", "b"]),
            Identifier::from(vec!["b", "a"])
        );
        assert_ne!(Identifier::from(vec!["a", "b"]), Identifier::from("a b"));
    }
}
