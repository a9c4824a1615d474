use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("then");
        set.insert("else");
        set.insert("endif");
        set.insert("while");
        set.insert("do");
        set.insert("endwhile");
        set.insert("skip");
        set
    };
}

/// Symbol lexemes, longest first. The scanner tries them in this order, so a
/// new multi-character symbol only needs an entry here.
pub const SYMBOLS: &[&str] = &[":=", "+", "-", "*", "/", "(", ")", ";", "="];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    Symbol,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::Symbol => "SYMBOL",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| *kind == self.kind)
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == keyword
    }
}

/// A single character the scanner could not place in any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorUnit {
    pub character: char,
    pub span: Span,
}

impl ErrorUnit {
    pub const KIND_NAME: &'static str = "ERROR";
}

impl Display for ErrorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", Self::KIND_NAME, self.character)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanItem {
    Token(Token),
    Error(ErrorUnit),
}

impl ScanItem {
    pub fn span(&self) -> &Span {
        match self {
            ScanItem::Token(token) => &token.span,
            ScanItem::Error(error) => &error.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ScanItem::Token(token) => token.kind.name(),
            ScanItem::Error(_) => ErrorUnit::KIND_NAME,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            ScanItem::Token(token) => Some(token),
            ScanItem::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ScanItem::Error(_))
    }
}

impl Display for ScanItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanItem::Token(token) => token.fmt(f),
            ScanItem::Error(error) => error.fmt(f),
        }
    }
}
