//! Document: the ordered top-level forest of a parsed text

use crate::lino::ast::link::Link;
use crate::lino::formats::{format_links, FormatConfig};
use serde::{Deserialize, Serialize};

/// Top-level links in source order. There is no implicit root link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub links: Vec<Link>,
}

impl Document {
    pub fn new(links: Vec<Link>) -> Self {
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn into_links(self) -> Vec<Link> {
        self.links
    }

    pub fn format(&self, config: &FormatConfig) -> String {
        format_links(&self.links, config)
    }
}

impl From<Vec<Link>> for Document {
    fn from(links: Vec<Link>) -> Self {
        Self::new(links)
    }
}

impl IntoIterator for Document {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
