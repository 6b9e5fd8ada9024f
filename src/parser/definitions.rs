use crate::{
    ast::definitions::{FunctionDef, Prototype},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, TRY_PARSE,
};

use super::{
    expr::parse_expr,
    lookups::{DEFAULT_BINARY_PRECEDENCE, MAX_PRECEDENCE, MIN_PRECEDENCE},
    parser::{ParseResult, Parser},
};

enum PrototypeKind {
    Function(String),
    Unary(char),
    Binary(char, u32),
}

/// prototype := identifier '(' identifier* ')'
///            | 'unary' opchar '(' identifier ')'
///            | 'binary' opchar number? '(' identifier identifier ')'
pub fn parse_prototype(parser: &mut Parser) -> ParseResult<Prototype> {
    let start = parser.get_position();

    let kind = match parser.current_token_kind().clone() {
        TokenKind::Identifier(name) => {
            parser.advance();
            PrototypeKind::Function(name)
        }
        TokenKind::Unary => {
            parser.advance();
            PrototypeKind::Unary(TRY_PARSE!(parse_operator_symbol(parser)))
        }
        TokenKind::Binary => {
            parser.advance();
            let symbol = TRY_PARSE!(parse_operator_symbol(parser));
            PrototypeKind::Binary(symbol, parse_precedence(parser)?)
        }
        _ => return parser.fail("expected function name in prototype"),
    };

    TRY_PARSE!(parser.expect_error(TokenKind::Char('('), "expected '(' in prototype"));

    let mut params: Vec<String> = vec![];
    while let TokenKind::Identifier(name) = parser.current_token_kind() {
        if params.contains(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateParameter { name: name.clone() },
                parser.get_position(),
            ));
        }

        params.push(name.clone());
        parser.advance();
    }

    TRY_PARSE!(parser.expect_error(TokenKind::Char(')'), "expected ')' in prototype"));

    let prototype = match kind {
        PrototypeKind::Function(name) => Prototype::new(&name, params),
        PrototypeKind::Unary(symbol) => {
            check_arity(Prototype::unary_operator(symbol, params), symbol, 1, &start)?
        }
        PrototypeKind::Binary(symbol, precedence) => check_arity(
            Prototype::binary_operator(symbol, params, precedence),
            symbol,
            2,
            &start,
        )?,
    };

    Ok(Some(prototype))
}

/// The symbol following `unary` or `binary`.
fn parse_operator_symbol(parser: &mut Parser) -> ParseResult<char> {
    match parser.current_token_kind() {
        TokenKind::Char(symbol) => {
            let symbol = *symbol;
            parser.advance();
            Ok(Some(symbol))
        }
        TokenKind::EOF => Ok(None),
        other => Err(Error::new(
            ErrorImpl::InvalidOperator {
                token: other.to_string(),
            },
            parser.get_position(),
        )),
    }
}

/// Optional precedence literal of a `binary` declaration.
fn parse_precedence(parser: &mut Parser) -> Result<u32, Error> {
    let value = match parser.current_token_kind() {
        TokenKind::Number(value) => *value,
        _ => return Ok(DEFAULT_BINARY_PRECEDENCE),
    };

    if value < MIN_PRECEDENCE as f64 || value > MAX_PRECEDENCE as f64 {
        return Err(Error::new(
            ErrorImpl::InvalidPrecedence { precedence: value },
            parser.get_position(),
        ));
    }

    parser.advance();

    Ok(value as u32)
}

fn check_arity(prototype: Prototype, symbol: char, expected: usize, start: &Position) -> Result<Prototype, Error> {
    if prototype.arity() == expected {
        return Ok(prototype);
    }

    Err(Error::new(
        ErrorImpl::ArityMismatch {
            operator: symbol,
            expected,
            received: prototype.arity(),
        },
        start.clone(),
    ))
}

/// definition := 'def' prototype expr
pub fn parse_definition(parser: &mut Parser) -> ParseResult<FunctionDef> {
    parser.advance();

    let prototype = TRY_PARSE!(parse_prototype(parser));
    let body = TRY_PARSE!(parse_expr(parser));

    Ok(Some(FunctionDef::new(prototype, body)))
}

/// extern := 'extern' prototype
pub fn parse_extern(parser: &mut Parser) -> ParseResult<Prototype> {
    parser.advance();

    parse_prototype(parser)
}

pub fn parse_top_level_expr(parser: &mut Parser) -> ParseResult<FunctionDef> {
    let body = TRY_PARSE!(parse_expr(parser));

    Ok(Some(FunctionDef::new(Prototype::anonymous(), body)))
}
