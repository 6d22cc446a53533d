//! Fluent construction of links

use crate::lino::ast::identifier::Identifier;
use crate::lino::ast::link::Link;

/// Builds a [`Link`] step by step.
///
/// ```text
/// Link::builder().id("papa").value("loves").value("mama").build()
///     => (papa: loves mama)
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    identifier: Identifier,
    values: Vec<Link>,
}

impl LinkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, reference: impl Into<String>) -> Self {
        self.identifier = Identifier::Single(reference.into());
        self
    }

    /// Set a multi-part identifier. One part yields a single identifier.
    pub fn ids<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier = Identifier::from_parts(parts.into_iter().map(Into::into).collect());
        self
    }

    /// Append a reference value.
    pub fn value(mut self, reference: impl Into<String>) -> Self {
        self.values.push(Link::reference(reference));
        self
    }

    pub fn values<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(references.into_iter().map(Link::reference));
        self
    }

    /// Append a nested link value.
    pub fn link(mut self, link: Link) -> Self {
        self.values.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.values.extend(links);
        self
    }

    pub fn build(self) -> Link {
        Link {
            identifier: self.identifier,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_named() {
        let link = LinkBuilder::new().id("papa").values(["loves", "mama"]).build();
        assert_eq!(
            link,
            Link::new("papa", vec![Link::reference("loves"), Link::reference("mama")])
        );
    }

    #[test]
    fn test_builder_multi_id_and_nested() {
        let inner = Link::builder().id("inner").value("value").build();
        let link = Link::builder()
            .ids(["some", "example"])
            .link(inner.clone())
            .build();
        assert_eq!(link.identifier, Identifier::from(vec!["some", "example"]));
        assert_eq!(link.values, vec![inner]);
    }

    #[test]
    fn test_builder_single_part_ids() {
        let link = Link::builder().ids(["only"]).build();
        assert_eq!(link, Link::reference("only"));
    }

    #[test]
    fn test_builder_empty() {
        assert_eq!(LinkBuilder::new().build(), Link::empty());
    }
}
