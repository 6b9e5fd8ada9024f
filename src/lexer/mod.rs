//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts a character
//! stream into tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, numbers and single characters
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The lexer is total: every input produces a token stream ending in EOF.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
