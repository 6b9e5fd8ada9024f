//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into top-level forms. It combines recursive descent with precedence
//! climbing for binary operators and handles:
//!
//! - Function definitions, externs and bare top-level expressions
//! - Expression parsing (unary and binary ops, calls, control flow, `var`)
//! - Prototypes for user-defined unary and binary operators
//! - Error reporting, including "no result" when input runs out mid-form
//!
//! Binary operator precedence comes from a live `OperatorTable`, which
//! backends extend as operator definitions are accepted.

pub mod definitions;
pub mod expr;
pub mod lookups;
pub mod parser;
