//! Short constructors for expected links in tests

use crate::lino::ast::{Identifier, Link};

pub fn reference(reference: &str) -> Link {
    Link::reference(reference)
}

pub fn refs(references: &[&str]) -> Vec<Link> {
    references.iter().map(|r| Link::reference(*r)).collect()
}

pub fn named(identifier: &str, values: Vec<Link>) -> Link {
    Link::new(identifier, values)
}

pub fn multi(parts: &[&str], values: Vec<Link>) -> Link {
    Link::new(Identifier::from(parts.to_vec()), values)
}

pub fn anonymous(values: Vec<Link>) -> Link {
    Link::anonymous(values)
}
