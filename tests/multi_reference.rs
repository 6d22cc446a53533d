//! Multi-part identifiers: access rules and context recognition

use links_notation::lino::testing::{assert_links, multi, named, reference, refs};
use links_notation::{parse, Identifier, Link, MultiReferenceAccess, Parser, ParserConfig};

fn aware() -> Parser {
    Parser::new(ParserConfig::default().with_multi_ref_context(true))
}

#[test]
fn test_single_accessor_rejects_multi() {
    let links = parse("(some example: value)").unwrap();
    let err = links[0].id().unwrap_err();
    assert_eq!(
        err,
        MultiReferenceAccess {
            parts: vec!["some".to_string(), "example".to_string()]
        }
    );
    assert_eq!(
        err.to_string(),
        "identifier has 2 parts (some example) and cannot be read as a single reference"
    );
    assert_eq!(links[0].ids(), Some(vec!["some", "example"]));
}

#[test]
fn test_single_accessor_on_single_and_none() {
    let links = parse("(id: a)\n(a b)").unwrap();
    assert_eq!(links[0].id(), Ok(Some("id")));
    assert_eq!(links[1].id(), Ok(None));
    assert_eq!(links[1].ids(), None);
}

#[test]
fn test_known_phrase_becomes_one_value() {
    let links = aware()
        .parse("(some example: value)\n(some example has meaning)")
        .unwrap();
    assert_links(&links).count(2).link(1, |l| {
        l.anonymous()
            .value_count(3)
            .value(0, |v| v.identifier_parts(&["some", "example"]).value_count(0))
            .value(1, |v| v.reference("has"))
    });
}

#[test]
fn test_recognition_reaches_nested_values() {
    let links = aware()
        .parse("(new york: city)\n(trip: (to new york) by train)")
        .unwrap();
    let new_york = multi(&["new", "york"], vec![]);
    assert_eq!(
        links[1],
        named(
            "trip",
            vec![
                Link::anonymous(vec![reference("to"), new_york]),
                reference("by"),
                reference("train"),
            ]
        )
    );
}

#[test]
fn test_longest_phrase_wins() {
    let links = aware()
        .parse("(new york: city)\n(new york city: borough)\n(see new york city now)")
        .unwrap();
    assert_eq!(
        links[2].values,
        vec![
            reference("see"),
            multi(&["new", "york", "city"], vec![]),
            reference("now"),
        ]
    );
}

#[test]
fn test_partial_phrase_is_left_alone() {
    let links = aware()
        .parse("(some example: value)\n(some other example)")
        .unwrap();
    assert_eq!(links[1].values, refs(&["some", "other", "example"]));
}

#[test]
fn test_without_context_words_stay_separate() {
    let links = parse("(some example: value)\n(some example has meaning)").unwrap();
    assert_eq!(links[1].values.len(), 4);
    assert!(links[1]
        .values
        .iter()
        .all(|v| matches!(v.identifier, Identifier::Single(_))));
}
