use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    TRY_PARSE,
};

use super::parser::{ParseResult, Parser};

/// expr := unary (binop unary)*
pub fn parse_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let lhs = TRY_PARSE!(parse_unary(parser));

    parse_bin_op_rhs(parser, 0, lhs)
}

/// Folds `binop unary` pairs into `lhs` for as long as the operators bind
/// at least as tightly as `min_precedence`.
///
/// An operator that binds tighter than the one before it pulls the
/// preceding operand into its own subtree, so `1+2*3` nests the `*`.
/// Operators of equal precedence associate to the left.
pub fn parse_bin_op_rhs(parser: &mut Parser, min_precedence: i32, mut lhs: Expr) -> ParseResult<Expr> {
    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Char(op) => *op,
            _ => return Ok(Some(lhs)),
        };

        let precedence = parser.operators().precedence(op);
        if precedence < min_precedence {
            return Ok(Some(lhs));
        }

        parser.advance();

        let mut rhs = TRY_PARSE!(parse_unary(parser));

        if precedence < parser.current_precedence() {
            rhs = TRY_PARSE!(parse_bin_op_rhs(parser, precedence + 1, rhs));
        }

        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// unary := primary | unop unary
///
/// Any character other than `(` and `,` in operand position is a prefix
/// operator. Whether a matching `unary` function exists is left to the
/// backend.
///
/// Every operand passes through here, so this is where nesting depth is
/// bounded.
pub fn parse_unary(parser: &mut Parser) -> ParseResult<Expr> {
    parser.enter_nesting()?;
    let unary = parse_nested_unary(parser);
    parser.leave_nesting();

    unary
}

fn parse_nested_unary(parser: &mut Parser) -> ParseResult<Expr> {
    let opcode = match parser.current_token_kind() {
        TokenKind::Char(c) if *c != '(' && *c != ',' => *c,
        _ => return parse_primary(parser),
    };

    parser.advance();
    let operand = TRY_PARSE!(parse_unary(parser));

    Ok(Some(Expr::unary(opcode, operand)))
}

pub fn parse_primary(parser: &mut Parser) -> ParseResult<Expr> {
    match parser.current_token_kind().clone() {
        TokenKind::Identifier(name) => parse_identifier_expr(parser, name),
        TokenKind::Number(value) => {
            parser.advance();
            Ok(Some(Expr::Number(value)))
        }
        TokenKind::Char('(') => parse_paren_expr(parser),
        TokenKind::If => parse_if_expr(parser),
        TokenKind::For => parse_for_expr(parser),
        TokenKind::Var => parse_var_expr(parser),
        TokenKind::EOF => Ok(None),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().to_string(),
            },
            parser.get_position(),
        )),
    }
}

/// identifier | identifier '(' (expr (',' expr)*)? ')'
fn parse_identifier_expr(parser: &mut Parser, name: String) -> ParseResult<Expr> {
    parser.advance();

    if !parser.current_token_kind().is_char('(') {
        return Ok(Some(Expr::Variable(name)));
    }

    parser.advance();

    let mut args = vec![];

    if !parser.current_token_kind().is_char(')') {
        loop {
            args.push(TRY_PARSE!(parse_expr(parser)));

            if parser.current_token_kind().is_char(')') {
                break;
            }

            if !parser.current_token_kind().is_char(',') {
                return parser.fail("expected ')' or ',' in argument list");
            }

            parser.advance();
        }
    }

    parser.advance();

    Ok(Some(Expr::Call { callee: name, args }))
}

fn parse_paren_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();

    let expr = TRY_PARSE!(parse_expr(parser));
    TRY_PARSE!(parser.expect(TokenKind::Char(')')));

    Ok(Some(expr))
}

/// 'if' expr 'then' expr 'else' expr
fn parse_if_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();

    let cond = TRY_PARSE!(parse_expr(parser));
    TRY_PARSE!(parser.expect_error(TokenKind::Then, "expected then"));

    let then = TRY_PARSE!(parse_expr(parser));
    TRY_PARSE!(parser.expect_error(TokenKind::Else, "expected else"));

    let otherwise = TRY_PARSE!(parse_expr(parser));

    Ok(Some(Expr::if_then_else(cond, then, otherwise)))
}

/// 'for' identifier '=' expr ',' expr (',' expr)? 'in' expr
fn parse_for_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();

    let var_name = TRY_PARSE!(parser.expect_identifier("expected identifier after for"));
    TRY_PARSE!(parser.expect_error(TokenKind::Char('='), "expected '=' after for"));

    let start = TRY_PARSE!(parse_expr(parser));
    TRY_PARSE!(parser.expect_error(TokenKind::Char(','), "expected ',' after for start value"));

    let end = TRY_PARSE!(parse_expr(parser));

    let step = if parser.current_token_kind().is_char(',') {
        parser.advance();
        Some(Box::new(TRY_PARSE!(parse_expr(parser))))
    } else {
        None
    };

    TRY_PARSE!(parser.expect_error(TokenKind::In, "expected 'in' after for"));

    let body = TRY_PARSE!(parse_expr(parser));

    Ok(Some(Expr::For {
        var_name,
        start: Box::new(start),
        end: Box::new(end),
        step,
        body: Box::new(body),
    }))
}

/// 'var' identifier ('=' expr)? (',' identifier ('=' expr)?)* 'in' expr
fn parse_var_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();

    let mut bindings = vec![];
    let mut message = "expected identifier after var";

    loop {
        let name = TRY_PARSE!(parser.expect_identifier(message));

        let init = if parser.current_token_kind().is_char('=') {
            parser.advance();
            Some(TRY_PARSE!(parse_expr(parser)))
        } else {
            None
        };

        bindings.push((name, init));

        if !parser.current_token_kind().is_char(',') {
            break;
        }

        parser.advance();
        message = "expected identifier list after var";
    }

    TRY_PARSE!(parser.expect_error(TokenKind::In, "expected 'in' keyword after 'var'"));

    let body = TRY_PARSE!(parse_expr(parser));

    Ok(Some(Expr::VarIn {
        bindings,
        body: Box::new(body),
    }))
}
