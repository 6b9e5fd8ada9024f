//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `TRY_PARSE!` - Unwraps a parse result, propagating both hard failures
//!   and "no result"
//!
//! These macros reduce boilerplate in the lexer and parser.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number(42.0), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Evaluates a `ParseResult`, returning early from the enclosing parse
/// function on failure.
///
/// A hard failure (`Err`) is propagated with `?`. A "no result" (`Ok(None)`)
/// makes the enclosing function return `Ok(None)` as well, so no partial
/// AST is ever built.
///
/// # Example
///
/// ```ignore
/// let cond = TRY_PARSE!(parse_expr(parser));
/// ```
#[macro_export]
macro_rules! TRY_PARSE {
    ($result:expr) => {
        match $result? {
            Some(value) => value,
            None => return Ok(None),
        }
    };
}
