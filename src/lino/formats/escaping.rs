//! Reference escaping
//!
//!     The inverse of the reference scanner: pick a spelling for a reference that scans
//!     back to exactly the same string.
//!
//!     - No special characters: written bare.
//!     - No `'` inside: wrapped in single quotes.
//!     - `'` but no `"` inside: wrapped in double quotes.
//!     - Both inside: wrapped in single quotes with every embedded `'` doubled, which the
//!       scanner reads as an escape. If the reference itself starts with `'`, double quotes
//!       take the role instead, since a leading `'` would lengthen the opening run.
//!
//!     The wrapping quote never starts the content, so the opening run is always one
//!     character long and the level-1 escape rules apply.

use once_cell::sync::Lazy;
use regex::Regex;

static NEEDS_QUOTING: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[ \t\r\n:()"'`]"#).unwrap());

/// True if `reference` cannot be written as a bare simple reference
pub fn needs_quoting(reference: &str) -> bool {
    NEEDS_QUOTING.is_match(reference)
}

/// True if a bare leaf line holding this identifier text would read differently
pub fn needs_parentheses(text: &str) -> bool {
    text.contains([' ', ':', '(', ')'])
}

/// Spell `reference` so it scans back unchanged.
///
/// The empty reference has no spelling: a quoted empty string would open a longer quote
/// run instead. It comes back as an empty string and callers leave it out.
pub fn escape_reference(reference: &str) -> String {
    if !needs_quoting(reference) {
        return reference.to_string();
    }

    let has_single = reference.contains('\'');
    let has_double = reference.contains('"');
    match (has_single, has_double) {
        (false, _) => format!("'{}'", reference),
        (true, false) => format!("\"{}\"", reference),
        (true, true) => {
            let quote = if reference.starts_with('\'') { '"' } else { '\'' };
            let doubled = reference.replace(quote, &format!("{quote}{quote}"));
            format!("{quote}{doubled}{quote}")
        }
    }
}
