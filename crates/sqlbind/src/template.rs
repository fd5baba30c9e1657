//! `{}` template parsing.
//!
//! `{}` marks a hole, `{{` and `}}` are literal braces. Anything else inside
//! braces is rejected.

use crate::error::{BindError, BindResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Brace(char),
    Hole,
}

/// A parsed template.
#[derive(Debug, Clone)]
pub(crate) struct Template<'a> {
    source: &'a str,
    pieces: Vec<Piece<'a>>,
}

impl<'a> Template<'a> {
    pub(crate) fn parse(source: &'a str) -> BindResult<Self> {
        let mut pieces = Vec::new();
        let bytes = source.as_bytes();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'{' | b'}' => {
                    if start < i {
                        pieces.push(Piece::Text(&source[start..i]));
                    }
                    let next = bytes.get(i + 1).copied();
                    match (bytes[i], next) {
                        (b'{', Some(b'{')) => pieces.push(Piece::Brace('{')),
                        (b'}', Some(b'}')) => pieces.push(Piece::Brace('}')),
                        (b'{', Some(b'}')) => pieces.push(Piece::Hole),
                        (b'{', _) => {
                            return Err(BindError::template(
                                source,
                                format!("unsupported or unclosed hole at byte {i}, use {{}}"),
                            ));
                        }
                        _ => {
                            return Err(BindError::template(
                                source,
                                format!("single '}}' encountered at byte {i}"),
                            ));
                        }
                    }
                    i += 2;
                    start = i;
                }
                _ => i += 1,
            }
        }
        if start < bytes.len() {
            pieces.push(Piece::Text(&source[start..]));
        }

        Ok(Self { source, pieces })
    }

    pub(crate) fn holes(&self) -> usize {
        self.pieces.iter().filter(|p| **p == Piece::Hole).count()
    }

    /// Render with one token per hole, in order.
    pub(crate) fn render(&self, tokens: &[String]) -> BindResult<String> {
        if tokens.len() != self.holes() {
            return Err(BindError::Arity {
                template: self.source.to_string(),
                holes: self.holes(),
                values: tokens.len(),
            });
        }

        let mut out = String::with_capacity(self.source.len() + tokens.len() * 4);
        let mut tokens = tokens.iter();
        for piece in &self.pieces {
            match piece {
                Piece::Text(s) => out.push_str(s),
                Piece::Brace(c) => out.push(*c),
                Piece::Hole => {
                    if let Some(tok) = tokens.next() {
                        out.push_str(tok);
                    }
                }
            }
        }
        Ok(out)
    }
}
