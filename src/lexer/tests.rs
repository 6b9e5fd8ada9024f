//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals, including malformed ones
//! - Operators and punctuation
//! - Comments and whitespace
//! - End of input behaviour

use super::{
    lexer::{parse_number_literal, tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.ks".to_string()))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = kinds("def extern if then else for in binary unary var");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Def,
            TokenKind::Extern,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Binary,
            TokenKind::Unary,
            TokenKind::Var,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = kinds("foo bar2 definitely x1y2 Var");

    assert_eq!(tokens[0], TokenKind::Identifier("foo".to_string()));
    assert_eq!(tokens[1], TokenKind::Identifier("bar2".to_string()));
    assert_eq!(tokens[2], TokenKind::Identifier("definitely".to_string()));
    assert_eq!(tokens[3], TokenKind::Identifier("x1y2".to_string()));
    assert_eq!(tokens[4], TokenKind::Identifier("Var".to_string()));
    assert_eq!(tokens[5], TokenKind::EOF);
}

#[test]
fn test_underscore_is_not_part_of_identifier() {
    let tokens = kinds("foo_bar");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier("foo".to_string()),
            TokenKind::Char('_'),
            TokenKind::Identifier("bar".to_string()),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = kinds("42 3.14 0 .5 100.");

    assert_eq!(tokens[0], TokenKind::Number(42.0));
    assert_eq!(tokens[1], TokenKind::Number(3.14));
    assert_eq!(tokens[2], TokenKind::Number(0.0));
    assert_eq!(tokens[3], TokenKind::Number(0.5));
    assert_eq!(tokens[4], TokenKind::Number(100.0));
    assert_eq!(tokens[5], TokenKind::EOF);
}

#[test]
fn test_malformed_numbers_use_longest_prefix() {
    assert_eq!(kinds("1.2.3"), vec![TokenKind::Number(1.2), TokenKind::EOF]);
    assert_eq!(kinds("."), vec![TokenKind::Number(0.0), TokenKind::EOF]);
    assert_eq!(parse_number_literal("..5"), 0.0);
    assert_eq!(parse_number_literal("12..4"), 12.0);
}

#[test]
fn test_number_followed_by_identifier() {
    let tokens = kinds("2x");

    assert_eq!(
        tokens,
        vec![TokenKind::Number(2.0), TokenKind::Identifier("x".to_string()), TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = kinds("+ - * < = ( ) , ; | ! &");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Char('+'),
            TokenKind::Char('-'),
            TokenKind::Char('*'),
            TokenKind::Char('<'),
            TokenKind::Char('='),
            TokenKind::Char('('),
            TokenKind::Char(')'),
            TokenKind::Char(','),
            TokenKind::Char(';'),
            TokenKind::Char('|'),
            TokenKind::Char('!'),
            TokenKind::Char('&'),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_adjacent_operators_are_separate_tokens() {
    assert_eq!(
        kinds("a==b"),
        vec![
            TokenKind::Identifier("a".to_string()),
            TokenKind::Char('='),
            TokenKind::Char('='),
            TokenKind::Identifier("b".to_string()),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_non_ascii_character() {
    assert_eq!(kinds("λ"), vec![TokenKind::Char('λ'), TokenKind::EOF]);
}

#[test]
fn test_whitespace_and_comments_only() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \t\r\n  "), vec![TokenKind::EOF]);
    assert_eq!(kinds("# just a comment\n   # another\n"), vec![TokenKind::EOF]);
    assert_eq!(kinds("# comment without newline"), vec![TokenKind::EOF]);
}

#[test]
fn test_comment_ends_at_newline() {
    let tokens = kinds("x # ignored y\ny");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier("x".to_string()),
            TokenKind::Identifier("y".to_string()),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::from_source("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier("x".to_string()));
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert!(lexer.at_eof());
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("def foo\n  bar".to_string(), Some("test.ks".to_string()));

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[1].span.end.column, 8);
    assert_eq!(tokens[2].span.start.line, 2);
    assert_eq!(tokens[2].span.start.column, 3);
    assert_eq!(tokens[2].span.start.source.as_str(), "test.ks");
}

#[test]
fn test_default_source_name() {
    let mut lexer = Lexer::from_source("1".to_string(), None);

    assert_eq!(lexer.next_token().span.start.source.as_str(), "shell");
}

#[test]
fn test_columns_on_long_line() {
    let source = "a+".repeat(50_000) + "a";
    let tokens = tokenize(source, None);

    assert_eq!(tokens.len(), 100_002);
    assert_eq!(tokens[99_999].kind, TokenKind::Char('+'));
    assert_eq!(tokens[99_999].span.start.column, 100_000);
    assert_eq!(tokens[100_000].span.start.column, 100_001);
    assert_eq!(tokens[100_001].span.start.column, 100_002);
    assert_eq!(tokens[100_001].span.start.line, 1);
}

#[test]
fn test_columns_count_characters() {
    let tokens = tokenize("é λx # ü\ny".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Char('é'));
    assert_eq!(tokens[1].span.start.column, 3);
    assert_eq!(tokens[2].kind, TokenKind::Identifier("x".to_string()));
    assert_eq!(tokens[2].span.start.column, 4);
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[3].span.start.column, 1);
}
