use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("binary", TokenKind::Binary);
        map.insert("unary", TokenKind::Unary);
        map.insert("var", TokenKind::Var);
        map
    };
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    EOF,

    // Reserved
    Def,
    Extern,
    If,
    Then,
    Else,
    For,
    In,
    Binary,
    Unary,
    Var,

    Identifier(String),
    Number(f64),
    /// Any other single character, including every operator symbol.
    Char(char),
}

impl TokenKind {
    pub fn is_char(&self, c: char) -> bool {
        *self == TokenKind::Char(c)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Then => write!(f, "then"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::For => write!(f, "for"),
            TokenKind::In => write!(f, "in"),
            TokenKind::Binary => write!(f, "binary"),
            TokenKind::Unary => write!(f, "unary"),
            TokenKind::Var => write!(f, "var"),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Char(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// One-line description used by `--tokens`.
    pub fn debug(&self) -> String {
        let kind = match &self.kind {
            TokenKind::Identifier(name) => format!("Identifier ({})", name),
            TokenKind::Number(value) => format!("Number ({})", value),
            TokenKind::Char(c) => format!("Char ({:?})", c),
            other => format!("{:?}", other),
        };
        format!("{} {}", self.span.start, kind)
    }
}
