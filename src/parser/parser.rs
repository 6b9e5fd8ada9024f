//! Parser session.
//!
//! This module contains the `Parser` struct, which owns all state for one
//! input source: the lexer, the current token and the operator table.
//! Sessions share nothing, so several can run side by side, each with its
//! own operators.

use crate::{
    ast::definitions::{FunctionDef, Prototype},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    definitions::{parse_definition, parse_extern, parse_top_level_expr},
    lookups::OperatorTable,
};

/// Outcome of a parse function.
///
/// `Err` is a hard failure. `Ok(None)` means "no result": the input ended
/// before the construct was complete.
pub type ParseResult<T> = Result<Option<T>, Error>;

/// How many prefix operators and parentheses may enclose an operand.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The parser session.
///
/// Holds the single token of lookahead the grammar needs. Every parse
/// function takes the session by mutable reference.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token being looked at, not yet consumed
    current: Token,
    /// Binary operator precedences visible to this session
    operators: OperatorTable,
    /// Operands currently being parsed, innermost included
    depth: usize,
}

impl Parser {
    /// Creates a session and reads its first token.
    pub fn new(mut lexer: Lexer, operators: OperatorTable) -> Self {
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            operators,
            depth: 0,
        }
    }

    /// Creates a session over an in-memory string with the built-in operators.
    pub fn from_source(source: &str) -> Self {
        Parser::new(
            Lexer::from_source(String::from(source), None),
            OperatorTable::with_builtins(),
        )
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Consumes the current token, returning it, and reads the next one.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    pub fn is_eof(&self) -> bool {
        self.current.is_eof()
    }

    /// Precedence of the current token as a binary operator, -1 if it is not one.
    pub fn current_precedence(&self) -> i32 {
        self.operators.precedence_of(&self.current.kind)
    }

    /// Fails at the current token: "no result" at end of input, otherwise
    /// an `UnexpectedTokenDetailed` error carrying `message`.
    pub fn fail<T>(&self, message: &str) -> ParseResult<T> {
        if self.is_eof() {
            return Ok(None);
        }

        Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current.to_string(),
                message: String::from(message),
            },
            self.get_position(),
        ))
    }

    /// Consumes the current token if it is `expected_kind`.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - What was expected, for the error
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.current.kind != expected_kind {
            return self.fail(message);
        }

        Ok(Some(self.advance()))
    }

    /// Expects a token of the specified kind with a default message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> ParseResult<Token> {
        let message = format!("expected `{}`", expected_kind);
        self.expect_error(expected_kind, &message)
    }

    /// Consumes an identifier and returns its name.
    pub fn expect_identifier(&mut self, message: &str) -> ParseResult<String> {
        if let TokenKind::Identifier(name) = &self.current.kind {
            let name = name.clone();
            self.advance();
            return Ok(Some(name));
        }

        self.fail(message)
    }

    /// Enters one more level of operand nesting, failing past `MAX_NESTING_DEPTH`.
    /// Every successful call is paired with `leave_nesting`.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn operators_mut(&mut self) -> &mut OperatorTable {
        &mut self.operators
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// definition := 'def' prototype expr
    pub fn parse_definition(&mut self) -> ParseResult<FunctionDef> {
        parse_definition(self)
    }

    /// extern := 'extern' prototype
    pub fn parse_extern(&mut self) -> ParseResult<Prototype> {
        parse_extern(self)
    }

    /// A bare expression, wrapped in an anonymous zero-argument function.
    pub fn parse_top_level_expr(&mut self) -> ParseResult<FunctionDef> {
        parse_top_level_expr(self)
    }
}
