//! Item parser: one logical line to one [`RawItem`]
//!
//!     The line's tokens are first grouped into a small tree of references, colons and
//!     parenthesized groups. The top level of that tree decides the shape, tried in order:
//!
//!         (id: a b)     parenthesized, the whole line is one group
//!         id:           indented marker, values come from indented children
//!         id: a b       named, one top-level colon
//!         a b           bare values
//!
//!     Unquoted words in front of a colon form a multi-part identifier (`some example: x`);
//!     one quoted token is always a single identifier (`'some example': x`).
//!
//!     A line consisting of nothing but one reference, bare or in parentheses, is that
//!     reference: `a` and `(a)` both read as the leaf `a`. Nested groups never collapse,
//!     so `((a))` is an anonymous link holding `a`.

use crate::lino::ast::error::ParseError;
use crate::lino::ast::identifier::Identifier;
use crate::lino::ast::range::SourceLocation;
use crate::lino::lexing::{tokenize, LexError, LogicalLine, Token};
use crate::lino::parsing::config::ParserConfig;
use crate::lino::parsing::ir::RawItem;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Ref { reference: String, offset: usize },
    Group { nodes: Vec<Node>, offset: usize },
    Colon { offset: usize },
}

impl Node {
    fn offset(&self) -> usize {
        match self {
            Node::Ref { offset, .. } | Node::Group { offset, .. } | Node::Colon { offset } => {
                *offset
            }
        }
    }

    fn is_colon(&self) -> bool {
        matches!(self, Node::Colon { .. })
    }
}

/// The shape a logical line was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    Parenthesized,
    IndentedMarker,
    Named,
    Values,
}

pub struct ItemParser<'a> {
    locator: &'a SourceLocation,
    config: &'a ParserConfig,
}

impl<'a> ItemParser<'a> {
    pub fn new(locator: &'a SourceLocation, config: &'a ParserConfig) -> Self {
        Self { locator, config }
    }

    pub fn parse_line(&self, line: &LogicalLine<'_>) -> Result<RawItem, ParseError> {
        let nodes = self.build_nodes(line.content, line.offset)?;
        let shape = classify(&nodes);
        trace!(?shape, offset = line.offset, "classified line");

        match shape {
            LineShape::Parenthesized => match nodes.into_iter().next() {
                Some(Node::Group { nodes, offset }) => self.parse_group(nodes, offset, true),
                _ => Ok(RawItem::default()),
            },
            LineShape::IndentedMarker => {
                let colon_offset = nodes.last().map_or(line.offset, Node::offset);
                let identifier = self.identifier(&nodes[..nodes.len() - 1], colon_offset)?;
                Ok(RawItem {
                    identifier,
                    is_indented_marker: true,
                    offset: line.offset,
                    ..RawItem::default()
                })
            }
            LineShape::Named | LineShape::Values => self.parse_group(nodes, line.offset, true),
        }
    }

    /// Group tokens into nodes with an explicit stack, checking the depth ceiling.
    fn build_nodes(&self, content: &str, base: usize) -> Result<Vec<Node>, ParseError> {
        let tokens = tokenize(content).map_err(|(err, span)| match err {
            LexError::UnterminatedQuote { offset } => ParseError::UnterminatedQuote {
                position: self.locator.position(base + offset),
            },
            // Every character starts some token, so only a quote run can fail to lex
            LexError::UnexpectedInput => ParseError::UnterminatedQuote {
                position: self.locator.position(base + span.start),
            },
        })?;

        let mut current: Vec<Node> = Vec::new();
        let mut open: Vec<(Vec<Node>, usize)> = Vec::new();

        for (token, span) in tokens {
            let offset = base + span.start;
            match token {
                Token::Whitespace => {}
                Token::OpenParen => {
                    if open.len() >= self.config.max_depth {
                        return Err(ParseError::RecursionTooDeep {
                            limit: self.config.max_depth,
                            position: self.locator.position(offset),
                        });
                    }
                    open.push((std::mem::take(&mut current), offset));
                }
                Token::CloseParen => {
                    let Some((parent, start)) = open.pop() else {
                        return Err(ParseError::UnbalancedParentheses {
                            position: self.locator.position(offset),
                        });
                    };
                    let nodes = std::mem::replace(&mut current, parent);
                    current.push(Node::Group {
                        nodes,
                        offset: start,
                    });
                }
                Token::Colon => current.push(Node::Colon { offset }),
                Token::Simple(reference) | Token::Quoted(reference) => {
                    current.push(Node::Ref { reference, offset })
                }
            }
        }

        if let Some((_, start)) = open.first() {
            return Err(ParseError::UnbalancedParentheses {
                position: self.locator.position(*start),
            });
        }
        Ok(current)
    }

    /// Split a node list at its colon into identifier and values.
    fn parse_group(
        &self,
        nodes: Vec<Node>,
        offset: usize,
        line_level: bool,
    ) -> Result<RawItem, ParseError> {
        let colons: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_colon())
            .map(|(i, _)| i)
            .collect();

        match colons.as_slice() {
            [] => {
                let values = self.values(nodes)?;
                Ok(collapse_lone_reference(
                    RawItem {
                        values,
                        offset,
                        ..RawItem::default()
                    },
                    line_level,
                ))
            }
            [split] => {
                let split = *split;
                let identifier = self.identifier(&nodes[..split], nodes[split].offset())?;
                let values = self.values(nodes.into_iter().skip(split + 1).collect())?;
                Ok(collapse_lone_reference(
                    RawItem {
                        identifier,
                        values,
                        offset,
                        ..RawItem::default()
                    },
                    line_level,
                ))
            }
            [_, second, ..] => Err(ParseError::InvalidColonPlacement {
                position: self.locator.position(nodes[*second].offset()),
                reason: "a link takes at most one ':'".to_string(),
            }),
        }
    }

    fn identifier(&self, nodes: &[Node], colon_offset: usize) -> Result<Identifier, ParseError> {
        if nodes.is_empty() {
            if self.config.is_lenient() {
                return Ok(Identifier::None);
            }
            return Err(ParseError::InvalidColonPlacement {
                position: self.locator.position(colon_offset),
                reason: "an identifier is required before ':'".to_string(),
            });
        }

        let mut parts = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Ref { reference, .. } => parts.push(reference.clone()),
                other => {
                    return Err(ParseError::InvalidColonPlacement {
                        position: self.locator.position(other.offset()),
                        reason: "only references may precede ':'".to_string(),
                    })
                }
            }
        }
        Ok(Identifier::from_parts(parts))
    }

    fn values(&self, nodes: Vec<Node>) -> Result<Vec<RawItem>, ParseError> {
        nodes
            .into_iter()
            .map(|node| match node {
                Node::Ref { reference, offset } => Ok(RawItem::reference(reference, offset)),
                Node::Group { nodes, offset } => self.parse_group(nodes, offset, false),
                Node::Colon { offset } => Err(ParseError::InvalidColonPlacement {
                    position: self.locator.position(offset),
                    reason: "unexpected ':' among values".to_string(),
                }),
            })
            .collect()
    }
}

/// A whole line that is just one anonymous reference reads as that reference.
fn collapse_lone_reference(mut item: RawItem, line_level: bool) -> RawItem {
    if line_level
        && item.identifier.is_none()
        && item.values.len() == 1
        && item.values[0].is_reference()
    {
        if let Some(reference) = item.values.pop() {
            return reference;
        }
    }
    item
}

fn classify(nodes: &[Node]) -> LineShape {
    let colons = nodes.iter().filter(|n| n.is_colon()).count();
    match nodes {
        [Node::Group { .. }] => LineShape::Parenthesized,
        [.., Node::Colon { .. }] if colons == 1 => LineShape::IndentedMarker,
        _ if colons > 0 => LineShape::Named,
        _ => LineShape::Values,
    }
}
