//! Grouping of consecutive top-level links

use crate::lino::ast::link::Link;

/// Merge runs of adjacent links sharing an identifier into one link.
///
/// Only links with an identifier and at least one value take part; anonymous links and
/// plain references always stand alone. Links with the same identifier separated by any
/// other link are never merged.
pub fn group_consecutive(links: &[Link]) -> Vec<Link> {
    let mut grouped: Vec<Link> = Vec::with_capacity(links.len());
    let mut previous_mergeable = false;

    for link in links {
        let mergeable = link.identifier.is_some() && !link.values.is_empty();
        if mergeable && previous_mergeable {
            if let Some(previous) = grouped.last_mut() {
                if previous.identifier == link.identifier {
                    previous.values.extend(link.values.iter().cloned());
                    continue;
                }
            }
        }
        grouped.push(link.clone());
        previous_mergeable = mergeable;
    }

    grouped
}
