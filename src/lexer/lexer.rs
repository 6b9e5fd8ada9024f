use std::{
    io::{self, BufRead, Cursor},
    rc::Rc,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns the matched text into a token, or `None` if the text is skipped.
pub type RegexHandler = fn(&str) -> Option<TokenKind>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Anything no pattern matches becomes a single `Char` token.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^#.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9.]+").unwrap(), handler: number_handler },
    ];
}

/// Pulls tokens out of a character stream on demand.
///
/// Input is buffered one line at a time. No token spans a line break, so
/// this sees exactly what a single character of lookahead would.
pub struct Lexer {
    input: Box<dyn BufRead>,
    line: String,
    pos: usize,
    /// 1-based column of `pos`, in characters
    column: u32,
    line_number: u32,
    file: Rc<String>,
    exhausted: bool,
    io_error: Option<io::Error>,
}

impl Lexer {
    pub fn new(input: Box<dyn BufRead>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            input,
            line: String::new(),
            pos: 0,
            column: 1,
            line_number: 0,
            file: file_name,
            exhausted: false,
            io_error: None,
        }
    }

    pub fn from_source(source: String, file: Option<String>) -> Lexer {
        Lexer::new(Box::new(Cursor::new(source)), file)
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns EOF without touching the input again.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.pos >= self.line.len() {
                if !self.fill_line() {
                    let here = self.position();
                    return MK_TOKEN!(TokenKind::EOF, Span { start: here.clone(), end: here });
                }
                continue;
            }

            let start = self.position();
            let remainder = &self.line[self.pos..];

            let matched = PATTERNS
                .iter()
                .find_map(|pattern| {
                    pattern.regex.find(remainder).map(|m| {
                        (m.len(), m.as_str().chars().count(), (pattern.handler)(m.as_str()))
                    })
                });

            let (len, chars, kind) = match matched {
                Some(found) => found,
                None => match remainder.chars().next() {
                    Some(c) => (c.len_utf8(), 1, Some(TokenKind::Char(c))),
                    None => (remainder.len(), 0, None),
                },
            };

            self.advance_n(len, chars);

            if let Some(kind) = kind {
                return MK_TOKEN!(kind, Span { start, end: self.position() });
            }
        }
    }

    /// Moves past `bytes` bytes of the current line, which hold `chars` characters.
    pub fn advance_n(&mut self, bytes: usize, chars: usize) {
        self.pos += bytes;
        self.column += chars as u32;
    }

    pub fn position(&self) -> Position {
        Position::new(self.line_number.max(1), self.column, Rc::clone(&self.file))
    }

    pub fn at_eof(&self) -> bool {
        self.exhausted && self.pos >= self.line.len()
    }

    /// The read failure that ended the input early, if there was one.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.io_error.as_ref()
    }

    fn fill_line(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        let mut next = String::new();
        match self.input.read_line(&mut next) {
            Ok(0) => {
                self.exhausted = true;
                false
            }
            Ok(_) => {
                self.line = next;
                self.pos = 0;
                self.column = 1;
                self.line_number += 1;
                true
            }
            Err(error) => {
                self.io_error = Some(error);
                self.exhausted = true;
                let rest = self.line.len() - self.pos;
                let chars = self.line[self.pos..].chars().count();
                self.advance_n(rest, chars);
                false
            }
        }
    }
}

fn skip_handler(_matched: &str) -> Option<TokenKind> {
    None
}

fn symbol_handler(matched: &str) -> Option<TokenKind> {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        Some(kind.clone())
    } else {
        Some(TokenKind::Identifier(String::from(matched)))
    }
}

fn number_handler(matched: &str) -> Option<TokenKind> {
    Some(TokenKind::Number(parse_number_literal(matched)))
}

/// Converts a run of digits and dots to a number, using the longest
/// prefix that reads as one (`1.2.3` is 1.2, a lone `.` is 0).
pub fn parse_number_literal(text: &str) -> f64 {
    let prefix = match text.match_indices('.').nth(1) {
        Some((index, _)) => &text[..index],
        None => text,
    };

    prefix.parse().unwrap_or(0.0)
}

/// Tokenizes a whole string, EOF token included.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::from_source(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
