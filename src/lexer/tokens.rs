//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::{Chars, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The digits making up a literal or operator. Absent for brackets and [`TokenKind::Eof`].
    pub value: Option<String>,
    /// Zero-based line of the token's first character.
    pub line_number: usize,
    /// Offset of the last line terminator before the token, or `0` on the first line.
    pub line_start: Chars,
    pub range: Span,
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `す`
    OpenBracket,
    /// `のうち。`
    CloseBracket,
    /// A run of `も` and `の` in value position.
    NumberLiteral,
    /// A run of `も` and `の` directly after an open bracket.
    Operator,
    Eof,
}
impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::OpenBracket => "openbracket",
            TokenKind::CloseBracket => "closebracket",
            TokenKind::NumberLiteral => "numberliteral",
            TokenKind::Operator => "operator",
            TokenKind::Eof => "eof",
        }
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
