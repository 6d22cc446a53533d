//! Line segmentation
//!
//!     Splits source text into logical lines. A newline ends a logical line only outside
//!     quotes and outside parentheses, so a parenthesized expression or a quoted reference
//!     may span several physical lines:
//!
//!         (papa:
//!           loves mama)
//!         'a reference
//!         over two lines'
//!
//!     is two logical lines. Quoted spans are skipped with the same scanner the token lexer
//!     uses; a quote character only opens a reference at the start of a token, so the `'`
//!     in `it's` is literal here exactly as it is for the lexer.
//!
//!     Blank logical lines are dropped. Each line keeps its raw count of leading spaces and tabs;
//!     normalizing that against the document's base indentation is the indentation
//!     tracker's job.

use crate::lino::ast::error::ParseError;
use crate::lino::ast::range::SourceLocation;
use crate::lino::lexing::reference::scan_reference;

/// One logical line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalLine<'a> {
    /// Content with leading indentation and trailing whitespace removed
    pub content: &'a str,
    /// Byte offset of `content` in the source
    pub offset: usize,
    /// Raw number of leading spaces and tabs, one column each
    pub indent: usize,
}

fn is_padding(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r')
}

pub fn segment<'a>(
    source: &'a str,
    locator: &SourceLocation,
) -> Result<Vec<LogicalLine<'a>>, ParseError> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut open_parens: Vec<usize> = Vec::new();
    let mut line_start = 0;
    let mut at_token_start = true;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                if open_parens.is_empty() {
                    push_line(&mut lines, source, line_start, i);
                    line_start = i + 1;
                }
                at_token_start = true;
                i += 1;
            }
            b'(' => {
                open_parens.push(i);
                at_token_start = true;
                i += 1;
            }
            b')' => {
                if open_parens.pop().is_none() {
                    return Err(ParseError::UnbalancedParentheses {
                        position: locator.position(i),
                    });
                }
                at_token_start = true;
                i += 1;
            }
            b' ' | b'\t' | b'\r' | b':' => {
                at_token_start = true;
                i += 1;
            }
            b'"' | b'\'' | b'`' if at_token_start => match scan_reference(source, i) {
                Ok(Some(scanned)) => i = scanned.end,
                Ok(None) => i += 1,
                Err(unterminated) => {
                    return Err(ParseError::UnterminatedQuote {
                        position: locator.position(unterminated.offset),
                    })
                }
            },
            _ => {
                at_token_start = false;
                i += 1;
            }
        }
    }

    if let Some(&unclosed) = open_parens.first() {
        return Err(ParseError::UnbalancedParentheses {
            position: locator.position(unclosed),
        });
    }
    push_line(&mut lines, source, line_start, bytes.len());

    Ok(lines)
}

fn push_line<'a>(lines: &mut Vec<LogicalLine<'a>>, source: &'a str, start: usize, end: usize) {
    let raw = &source[start..end];
    let indent = raw.bytes().take_while(|&b| matches!(b, b' ' | b'\t')).count();
    let trimmed_start = raw.trim_start_matches(is_padding);
    let content = trimmed_start.trim_end_matches(is_padding);
    if content.is_empty() {
        return;
    }
    lines.push(LogicalLine {
        content,
        offset: start + (raw.len() - trimmed_start.len()),
        indent,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> Vec<LogicalLine<'_>> {
        segment(source, &SourceLocation::new(source)).unwrap()
    }

    fn contents(source: &str) -> Vec<&str> {
        lines(source).into_iter().map(|l| l.content).collect()
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(contents("a: b\nc d\n"), vec!["a: b", "c d"]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(contents("\n\na\n   \n\t\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_indent_and_offset() {
        let result = lines("a:\n    b\n  c");
        assert_eq!(result[1].indent, 4);
        assert_eq!(result[1].offset, 7);
        assert_eq!(result[2].indent, 2);
        assert_eq!(result[2].content, "c");
    }

    #[test]
    fn test_tabs_count_as_indent() {
        let result = lines("a:\n\tb\n\t\tc\n \td");
        assert_eq!(result[1].indent, 1);
        assert_eq!(result[1].content, "b");
        assert_eq!(result[2].indent, 2);
        assert_eq!(result[3].indent, 2);
    }

    #[test]
    fn test_crlf_stripped() {
        assert_eq!(contents("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_parentheses_join_lines() {
        assert_eq!(
            contents("(papa:\n  loves mama)\nnext"),
            vec!["(papa:\n  loves mama)", "next"]
        );
    }

    #[test]
    fn test_quotes_join_lines() {
        assert_eq!(
            contents("'two\nlines' x\ny"),
            vec!["'two\nlines' x", "y"]
        );
    }

    #[test]
    fn test_parens_inside_quotes_ignored() {
        assert_eq!(contents("'(' a\n')' b"), vec!["'(' a", "')' b"]);
    }

    #[test]
    fn test_apostrophe_inside_word_is_literal() {
        assert_eq!(contents("it's\nfine"), vec!["it's", "fine"]);
    }

    #[test]
    fn test_stray_close_paren() {
        let source = "a\nb)";
        let err = segment(source, &SourceLocation::new(source)).unwrap_err();
        match err {
            ParseError::UnbalancedParentheses { position } => {
                assert_eq!((position.line, position.column), (1, 1));
            }
            other => panic!("Expected UnbalancedParentheses, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_paren() {
        let source = "ok\n(a (b)";
        let err = segment(source, &SourceLocation::new(source)).unwrap_err();
        assert_eq!(err.position().map(|p| p.offset), Some(3));
    }

    #[test]
    fn test_unterminated_quote() {
        let source = "a\n\"never";
        let err = segment(source, &SourceLocation::new(source)).unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedQuote { .. }));
        assert_eq!(err.position().map(|p| p.line), Some(1));
    }
}
