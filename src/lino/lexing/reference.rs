//! Reference scanner
//!
//!     Recognizes one atomic reference starting at a byte offset. Two kinds exist:
//!
//!     - Simple: the maximal run of characters that are not whitespace, `(`, `)` or `:`.
//!       A simple reference never starts with a quote character.
//!     - Quoted: opened by a run of N identical quote characters (`"`, `'` or `` ` ``).
//!       N is the quote level and is unbounded. Inside, a run of 2N quotes is an escape for
//!       N literal quotes; a run of exactly N quotes closes the reference. Anything else is
//!       literal content, newlines included.
//!
//!     The opening run is counted before any content is read and that count is the only
//!     closing criterion. This is what keeps `"a" "b"` two references rather than one
//!     greedy span from the first quote to the last.
//!
//!     The token lexer and the line segmenter both call into [`scan_reference`], so there
//!     is exactly one implementation of the quoting rules.

/// The three quote characters. All ASCII, so byte positions next to them are char boundaries.
pub const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

pub fn is_quote(ch: char) -> bool {
    QUOTE_CHARS.contains(&ch)
}

/// Characters that end a simple reference
pub fn is_reference_boundary(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | '(' | ')' | ':')
}

/// A recognized reference and the offset just past it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned {
    pub reference: String,
    pub end: usize,
    /// 0 for a simple reference, otherwise the length of the opening quote run
    pub quote_level: usize,
}

/// A quote run opened at `offset` was never closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnterminatedQuote {
    pub offset: usize,
}

/// Scan one reference at byte `pos` of `text`.
///
/// Returns `Ok(None)` when nothing reference-like starts at `pos` (end of input, a
/// boundary character, or a position that is not a char boundary).
pub fn scan_reference(text: &str, pos: usize) -> Result<Option<Scanned>, UnterminatedQuote> {
    let Some(rest) = text.get(pos..) else {
        return Ok(None);
    };
    match rest.chars().next() {
        None => Ok(None),
        Some(ch) if is_quote(ch) => scan_quoted(text, pos, ch as u8).map(Some),
        Some(_) => Ok(scan_simple(text, pos)),
    }
}

fn scan_simple(text: &str, start: usize) -> Option<Scanned> {
    let end = text[start..]
        .find(is_reference_boundary)
        .map_or(text.len(), |i| start + i);
    if end == start {
        return None;
    }
    Some(Scanned {
        reference: text[start..end].to_string(),
        end,
        quote_level: 0,
    })
}

fn scan_quoted(text: &str, start: usize, quote: u8) -> Result<Scanned, UnterminatedQuote> {
    let bytes = text.as_bytes();
    let level = run_length(bytes, start, quote);
    let quote_str = &text[start..start + level];

    let mut reference = String::new();
    let mut chunk_start = start + level;
    let mut i = chunk_start;

    while i < bytes.len() {
        if bytes[i] != quote {
            i += 1;
            continue;
        }
        let run = run_length(bytes, i, quote);
        if run >= 2 * level {
            reference.push_str(&text[chunk_start..i]);
            reference.push_str(quote_str);
            i += 2 * level;
            chunk_start = i;
        } else if run == level {
            reference.push_str(&text[chunk_start..i]);
            return Ok(Scanned {
                reference,
                end: i + level,
                quote_level: level,
            });
        } else {
            i += 1;
        }
    }

    Err(UnterminatedQuote { offset: start })
}

fn run_length(bytes: &[u8], from: usize, quote: u8) -> usize {
    bytes[from..].iter().take_while(|&&b| b == quote).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Scanned {
        scan_reference(text, 0).unwrap().unwrap()
    }

    #[test]
    fn test_simple_reference_stops_at_boundaries() {
        assert_eq!(scan("abc def").reference, "abc");
        assert_eq!(scan("abc:def").reference, "abc");
        assert_eq!(scan("abc)").end, 3);
        assert_eq!(scan("a\"b").reference, "a\"b");
    }

    #[test]
    fn test_no_match_on_boundary_or_end() {
        assert_eq!(scan_reference("(a)", 0), Ok(None));
        assert_eq!(scan_reference(": a", 0), Ok(None));
        assert_eq!(scan_reference("abc", 3), Ok(None));
    }

    #[test]
    fn test_single_level_quotes() {
        let scanned = scan("\"hello world\" rest");
        assert_eq!(scanned.reference, "hello world");
        assert_eq!(scanned.end, 13);
        assert_eq!(scanned.quote_level, 1);
    }

    #[test]
    fn test_adjacent_quoted_references_stay_separate() {
        let text = "\"first\" \"second\"";
        let first = scan_reference(text, 0).unwrap().unwrap();
        assert_eq!(first.reference, "first");
        let second = scan_reference(text, first.end + 1).unwrap().unwrap();
        assert_eq!(second.reference, "second");
    }

    #[test]
    fn test_doubled_run_is_escape() {
        assert_eq!(scan("'it''s'").reference, "it's");
        assert_eq!(scan("\"\"a\"\"\"\"b\"\"").reference, "a\"\"b");
    }

    #[test]
    fn test_other_quote_chars_are_literal() {
        assert_eq!(scan("'say \"hi\"'").reference, "say \"hi\"");
        assert_eq!(scan("`a'b\"c`").reference, "a'b\"c");
    }

    #[test]
    fn test_shorter_run_inside_higher_level_is_literal() {
        assert_eq!(scan("'''a'b''c'''").reference, "a'b''c");
    }

    #[test]
    fn test_escape_before_close() {
        assert_eq!(scan("'x'''").reference, "x'");
    }

    #[test]
    fn test_newlines_inside_quotes() {
        assert_eq!(scan("'line one\nline two'").reference, "line one\nline two");
    }

    #[test]
    fn test_multibyte_content() {
        let scanned = scan("'héllo wörld' x");
        assert_eq!(scanned.reference, "héllo wörld");
        assert_eq!(&"'héllo wörld' x"[scanned.end..], " x");
        assert_eq!(scan("naïve:").reference, "naïve");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            scan_reference("ab 'never closed", 3),
            Err(UnterminatedQuote { offset: 3 })
        );
        assert_eq!(
            scan_reference("\"\"", 0),
            Err(UnterminatedQuote { offset: 0 })
        );
    }

    #[test]
    fn test_high_quote_level() {
        let q = "\"".repeat(7);
        let text = format!("{q}deep{q}");
        let scanned = scan(&text);
        assert_eq!(scanned.reference, "deep");
        assert_eq!(scanned.quote_level, 7);
        assert_eq!(scanned.end, text.len());
    }
}
