//! Tree normalization
//!
//!     Turns the raw item tree into canonical links. Inline values and indented children
//!     are different things in the raw tree; after normalization only values remain.
//!
//!     Indented marker (`id:` with children): the children become the values.
//!
//!         id:              =>   (id: v1 v2)
//!           v1
//!           v2
//!
//!     Any other item with children: the item is emitted on its own, then each
//!     descendant is emitted combined with its full ancestor chain, the same link
//!     explicit parentheses would have produced.
//!
//!         a                =>   a
//!           b                   (a b)
//!             c                 ((a b) c)
//!
//!     Path combination is a pure function over an explicit ancestor list; nothing is
//!     shared between calls.

use crate::lino::ast::link::Link;
use crate::lino::parsing::ir::RawItem;

/// Normalize root items into the top-level link list.
pub fn normalize(items: &[RawItem]) -> Vec<Link> {
    let mut out = Vec::new();
    for item in items {
        normalize_item(item, &[], &mut out);
    }
    out
}

fn normalize_item(item: &RawItem, path: &[Link], out: &mut Vec<Link>) {
    if item.is_indented_marker && item.has_children() {
        let link = Link {
            identifier: item.identifier.clone(),
            values: item.children.iter().map(marker_value).collect(),
        };
        out.push(combine(path, link));
        return;
    }

    let link = item.inline_link();
    if !item.has_children() {
        out.push(combine(path, link));
        return;
    }

    out.push(combine(path, link.clone()));
    let mut child_path = path.to_vec();
    child_path.push(link);
    for child in &item.children {
        normalize_item(child, &child_path, out);
    }
}

/// The value one child of an indented marker contributes.
fn marker_value(child: &RawItem) -> Link {
    if child.is_indented_marker && child.has_children() {
        return Link {
            identifier: child.identifier.clone(),
            values: child.children.iter().map(marker_value).collect(),
        };
    }
    // An anonymous line that wraps a single value stands for that value
    if child.identifier.is_none() && child.values.len() == 1 && !child.has_children() {
        return child.values[0].inline_link();
    }
    let mut link = child.inline_link();
    link.values.extend(child.children.iter().map(marker_value));
    link
}

/// Nest `current` under its ancestor chain.
///
/// `[]` gives `current`, `[a]` gives `(a current)`, `[a, b]` gives `((a b) current)`.
pub fn combine(path: &[Link], current: Link) -> Link {
    match path.split_last() {
        None => current,
        Some((last, ancestors)) => {
            Link::anonymous(vec![combine(ancestors, last.clone()), current])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lino::ast::identifier::Identifier;

    fn r(reference: &str) -> Link {
        Link::reference(reference)
    }

    fn raw(reference: &str) -> RawItem {
        RawItem::reference(reference, 0)
    }

    #[test]
    fn test_combine_empty_path() {
        assert_eq!(combine(&[], r("x")), r("x"));
    }

    #[test]
    fn test_combine_single_ancestor() {
        assert_eq!(combine(&[r("a")], r("b")), Link::anonymous(vec![r("a"), r("b")]));
    }

    #[test]
    fn test_combine_chain_nests_to_the_left() {
        let expected = Link::anonymous(vec![
            Link::anonymous(vec![Link::anonymous(vec![r("a"), r("b")]), r("c")]),
            r("d"),
        ]);
        assert_eq!(combine(&[r("a"), r("b"), r("c")], r("d")), expected);
    }

    #[test]
    fn test_marker_children_become_values() {
        let item = RawItem {
            identifier: Identifier::from("id"),
            is_indented_marker: true,
            children: vec![raw("v1"), raw("v2")],
            ..RawItem::default()
        };
        assert_eq!(normalize(&[item]), vec![Link::new("id", vec![r("v1"), r("v2")])]);
    }

    #[test]
    fn test_marker_unwraps_anonymous_single_value_child() {
        let wrapped = RawItem {
            values: vec![RawItem {
                identifier: Identifier::from("x"),
                values: vec![raw("y")],
                ..RawItem::default()
            }],
            ..RawItem::default()
        };
        let item = RawItem {
            identifier: Identifier::from("id"),
            is_indented_marker: true,
            children: vec![wrapped],
            ..RawItem::default()
        };
        assert_eq!(
            normalize(&[item]),
            vec![Link::new("id", vec![Link::new("x", vec![r("y")])])]
        );
    }

    #[test]
    fn test_marker_keeps_named_single_value_child() {
        let named = RawItem {
            identifier: Identifier::from("x"),
            values: vec![raw("y")],
            ..RawItem::default()
        };
        let item = RawItem {
            identifier: Identifier::from("id"),
            is_indented_marker: true,
            children: vec![named],
            ..RawItem::default()
        };
        assert_eq!(
            normalize(&[item]),
            vec![Link::new("id", vec![Link::new("x", vec![r("y")])])]
        );
    }

    #[test]
    fn test_nested_markers() {
        let inner = RawItem {
            identifier: Identifier::from("inner"),
            is_indented_marker: true,
            children: vec![raw("value")],
            ..RawItem::default()
        };
        let outer = RawItem {
            identifier: Identifier::from("outer"),
            is_indented_marker: true,
            children: vec![inner],
            ..RawItem::default()
        };
        assert_eq!(
            normalize(&[outer]),
            vec![Link::new("outer", vec![Link::new("inner", vec![r("value")])])]
        );
    }

    #[test]
    fn test_marker_without_children_is_leaf() {
        let item = RawItem {
            identifier: Identifier::from("lonely"),
            is_indented_marker: true,
            ..RawItem::default()
        };
        assert_eq!(normalize(&[item]), vec![r("lonely")]);
    }

    #[test]
    fn test_every_node_on_path_is_emitted() {
        let c = raw("c");
        let b = RawItem {
            children: vec![c],
            ..raw("b")
        };
        let a = RawItem {
            children: vec![b],
            ..raw("a")
        };
        let ab = Link::anonymous(vec![r("a"), r("b")]);
        assert_eq!(
            normalize(&[a]),
            vec![r("a"), ab.clone(), Link::anonymous(vec![ab, r("c")])]
        );
    }
}
