//! Token definitions for links notation
//!
//! Tokens are produced with the logos derive macro. Quoted references need the counted
//! delimiter rules, which a regular expression cannot express, so the `Quoted` variant only
//! matches the opening run and hands over to [`scan_reference`] to find the close.
use crate::lino::lexing::reference::scan_reference;
use logos::{Lexer, Logos};
use std::ops::Range;

/// Errors raised while tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// Input no token pattern accepts
    #[default]
    UnexpectedInput,
    /// Opening quote run at this byte offset has no close
    UnterminatedQuote { offset: usize },
}

/// All tokens of links notation
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(":")]
    Colon,

    // Newlines inside a logical line are plain separators
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r#"[^ \t\r\n():"'`][^ \t\r\n():]*"#, |lex| lex.slice().to_string())]
    Simple(String),

    #[regex(r#""+|'+|`+"#, quoted)]
    Quoted(String),
}

fn quoted(lex: &mut Lexer<Token>) -> Result<String, LexError> {
    let start = lex.span().start;
    match scan_reference(lex.source(), start) {
        Ok(Some(scanned)) => {
            lex.bump(scanned.end - lex.span().end);
            Ok(scanned.reference)
        }
        Ok(None) => Err(LexError::UnexpectedInput),
        Err(unterminated) => Err(LexError::UnterminatedQuote {
            offset: unterminated.offset,
        }),
    }
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// The reference carried by a `Simple` or `Quoted` token
    pub fn reference(&self) -> Option<&str> {
        match self {
            Token::Simple(r) | Token::Quoted(r) => Some(r),
            _ => None,
        }
    }
}

/// Tokenize `source`, dropping nothing. Spans are byte ranges into `source`.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, (LexError, Range<usize>)> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, span)),
            Err(err) => Err((err, span)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .filter(|t| !t.is_whitespace())
            .collect()
    }

    #[test]
    fn test_punctuation_and_simple() {
        assert_eq!(
            kinds("(id: a b)"),
            vec![
                Token::OpenParen,
                Token::Simple("id".into()),
                Token::Colon,
                Token::Simple("a".into()),
                Token::Simple("b".into()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_quoted_spans_cover_delimiters() {
        let tokens = tokenize("'a b' c").unwrap();
        assert_eq!(tokens[0], (Token::Quoted("a b".into()), 0..5));
        assert_eq!(tokens[2], (Token::Simple("c".into()), 6..7));
    }

    #[test]
    fn test_quoted_tokens_at_any_level() {
        assert_eq!(
            kinds("\"first\" \"second\""),
            vec![Token::Quoted("first".into()), Token::Quoted("second".into())]
        );
        assert_eq!(
            kinds("```a``````b```"),
            vec![Token::Quoted("a```b".into())]
        );
    }

    #[test]
    fn test_quote_inside_simple_is_literal() {
        assert_eq!(kinds("it's"), vec![Token::Simple("it's".into())]);
    }

    #[test]
    fn test_unterminated_quote_reports_offset() {
        let err = tokenize("a 'oops").unwrap_err();
        assert_eq!(err.0, LexError::UnterminatedQuote { offset: 2 });
    }

    #[test]
    fn test_newline_is_whitespace() {
        assert_eq!(
            kinds("(a\n  b)"),
            vec![
                Token::OpenParen,
                Token::Simple("a".into()),
                Token::Simple("b".into()),
                Token::CloseParen,
            ]
        );
    }
}
