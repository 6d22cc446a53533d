//! Multi-reference context recognition
//!
//!     Opt-in pass over a normalized forest. Every multi-part identifier defined anywhere
//!     in the document becomes a known phrase; wherever consecutive plain reference values
//!     spell a known phrase, they are replaced by one reference carrying the multi-part
//!     identifier. Longer phrases win over shorter ones that share a prefix.
//!
//!         (some example: value)
//!         (some example has meaning)
//!
//!     reads the second line as three values: `some example`, `has`, `meaning`.

use crate::lino::ast::identifier::Identifier;
use crate::lino::ast::link::Link;
use tracing::debug;

pub fn recognize_multi_references(links: Vec<Link>) -> Vec<Link> {
    let mut phrases: Vec<Vec<String>> = Vec::new();
    for link in &links {
        collect_phrases(link, &mut phrases);
    }
    if phrases.is_empty() {
        return links;
    }
    phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.len()));
    debug!(phrases = phrases.len(), "recognizing multi-part references");

    links
        .into_iter()
        .map(|link| rewrite(link, &phrases))
        .collect()
}

fn collect_phrases(link: &Link, phrases: &mut Vec<Vec<String>>) {
    if let Identifier::Multi(parts) = &link.identifier {
        if !phrases.contains(parts) {
            phrases.push(parts.clone());
        }
    }
    for value in &link.values {
        collect_phrases(value, phrases);
    }
}

fn rewrite(link: Link, phrases: &[Vec<String>]) -> Link {
    let Link { identifier, values } = link;
    let values: Vec<Link> = values.into_iter().map(|v| rewrite(v, phrases)).collect();

    let mut merged = Vec::with_capacity(values.len());
    let mut i = 0;
    while i < values.len() {
        match phrases
            .iter()
            .find(|phrase| spells_phrase(&values[i..], phrase))
        {
            Some(phrase) => {
                merged.push(Link {
                    identifier: Identifier::Multi(phrase.clone()),
                    values: Vec::new(),
                });
                i += phrase.len();
            }
            None => {
                merged.push(values[i].clone());
                i += 1;
            }
        }
    }

    Link {
        identifier,
        values: merged,
    }
}

fn spells_phrase(values: &[Link], phrase: &[String]) -> bool {
    values.len() >= phrase.len()
        && values.iter().zip(phrase).all(|(value, part)| {
            value.values.is_empty()
                && matches!(&value.identifier, Identifier::Single(r) if r == part)
        })
}
