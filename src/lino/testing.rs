//! Testing utilities
//!
//!     Structure tests go through [`assert_links`] rather than poking at fields, so a change
//!     in how links are represented only touches the assertion library. Expected values are
//!     built with the [`factories`] helpers.
//!
//!     Integration tests in `tests/` use the same helpers together with rstest tables,
//!     proptest properties for the round-trip guarantees, and insta inline snapshots for
//!     formatter layouts.

pub mod factories;
mod link_assertions;

pub use factories::{anonymous, multi, named, reference, refs};
pub use link_assertions::{assert_link, assert_links, LinkAssertion, LinksAssertion};
