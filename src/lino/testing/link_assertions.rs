//! Fluent assertions over parsed links
//!
//!     Tests describe the expected structure instead of walking fields by hand:
//!
//!     ```rust,ignore
//!     let links = parse("(papa: loves (mama: is wonderful))").unwrap();
//!     assert_links(&links).count(1).link(0, |papa| {
//!         papa.identifier("papa")
//!             .value_count(2)
//!             .value(0, |v| v.reference("loves"))
//!             .value(1, |mama| mama.identifier("mama").references(&["is", "wonderful"]))
//!     });
//!     ```
//!
//!     Failures name the path to the offending link, e.g. `links[0].values[1]`.

use crate::lino::ast::{Identifier, Link};

/// Start assertions over a top-level link list
pub fn assert_links(links: &[Link]) -> LinksAssertion<'_> {
    LinksAssertion { links }
}

/// Start assertions over one link
pub fn assert_link(link: &Link) -> LinkAssertion<'_> {
    LinkAssertion {
        link,
        context: "link".to_string(),
    }
}

fn summarize(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| link.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct LinksAssertion<'a> {
    links: &'a [Link],
}

impl<'a> LinksAssertion<'a> {
    /// Assert the number of top-level links
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.links.len(),
            expected,
            "Expected {} links, found {}: [{}]",
            expected,
            self.links.len(),
            summarize(self.links)
        );
        self
    }

    /// Assert on a specific link by index
    pub fn link<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LinkAssertion<'a>) -> LinkAssertion<'a>,
    {
        assert!(
            index < self.links.len(),
            "Link index {} out of bounds ({} links: [{}])",
            index,
            self.links.len(),
            summarize(self.links)
        );
        assertion(LinkAssertion {
            link: &self.links[index],
            context: format!("links[{}]", index),
        });
        self
    }
}

pub struct LinkAssertion<'a> {
    link: &'a Link,
    context: String,
}

impl<'a> LinkAssertion<'a> {
    /// Assert a single-reference identifier
    pub fn identifier(self, expected: &str) -> Self {
        assert_eq!(
            self.link.identifier,
            Identifier::Single(expected.to_string()),
            "{}: Expected identifier '{}', found {:?} in {}",
            self.context,
            expected,
            self.link.identifier,
            self.link
        );
        self
    }

    /// Assert a multi-part identifier
    pub fn identifier_parts(self, expected: &[&str]) -> Self {
        let expected_id = Identifier::from(expected.to_vec());
        assert!(
            expected_id.is_multi(),
            "{}: identifier_parts needs at least two parts",
            self.context
        );
        assert_eq!(
            self.link.identifier, expected_id,
            "{}: Expected identifier parts {:?}, found {:?}",
            self.context, expected, self.link.identifier
        );
        self
    }

    pub fn anonymous(self) -> Self {
        assert!(
            self.link.identifier.is_none(),
            "{}: Expected no identifier, found {:?}",
            self.context,
            self.link.identifier
        );
        self
    }

    /// Assert a leaf carrying exactly this reference
    pub fn reference(self, expected: &str) -> Self {
        assert!(
            self.link.is_reference(),
            "{}: Expected reference '{}', found link {}",
            self.context,
            expected,
            self.link
        );
        self.identifier(expected)
    }

    pub fn empty(self) -> Self {
        assert!(
            self.link.is_empty(),
            "{}: Expected empty link, found {}",
            self.context,
            self.link
        );
        self
    }

    pub fn value_count(self, expected: usize) -> Self {
        assert_eq!(
            self.link.values.len(),
            expected,
            "{}: Expected {} values, found {}: [{}]",
            self.context,
            expected,
            self.link.values.len(),
            summarize(&self.link.values)
        );
        self
    }

    /// Assert every value is a plain reference, matching `expected` in order
    pub fn references(self, expected: &[&str]) -> Self {
        let actual: Vec<Option<&str>> = self
            .link
            .values
            .iter()
            .map(|value| {
                if value.is_reference() {
                    value.id().ok().flatten()
                } else {
                    None
                }
            })
            .collect();
        let expected_refs: Vec<Option<&str>> = expected.iter().map(|r| Some(*r)).collect();
        assert_eq!(
            actual, expected_refs,
            "{}: Expected reference values {:?}, found [{}]",
            self.context,
            expected,
            summarize(&self.link.values)
        );
        self
    }

    /// Assert on a specific value by index
    pub fn value<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LinkAssertion<'a>) -> LinkAssertion<'a>,
    {
        assert!(
            index < self.link.values.len(),
            "{}: Value index {} out of bounds ({} values)",
            self.context,
            index,
            self.link.values.len()
        );
        assertion(LinkAssertion {
            link: &self.link.values[index],
            context: format!("{}.values[{}]", self.context, index),
        });
        self
    }

    /// Assert the link equals `expected` structurally
    pub fn equals(self, expected: &Link) -> Self {
        assert_eq!(
            self.link, expected,
            "{}: Expected {}, found {}",
            self.context, expected, self.link
        );
        self
    }
}
