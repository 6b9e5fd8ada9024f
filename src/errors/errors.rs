use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::InvalidPrecedence { .. } => "InvalidPrecedence",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::DuplicateParameter { .. } => "DuplicateParameter",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::Codegen { .. } => "Codegen",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unknown token `{}` when expecting an expression",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::InvalidOperator { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot be declared as an operator, expected a single symbol",
                token
            )),
            ErrorImpl::InvalidPrecedence { precedence } => ErrorTip::Suggestion(format!(
                "Invalid precedence `{}`, must be 1..100",
                precedence
            )),
            ErrorImpl::ArityMismatch {
                operator,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` takes {} operands, received {}",
                operator, expected, received
            )),
            ErrorImpl::DuplicateParameter { name } => {
                ErrorTip::Suggestion(format!("Parameter `{}` is declared twice", name))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nests deeper than {} levels, split it up",
                limit
            )),
            ErrorImpl::Codegen { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("invalid operator symbol: {token:?}")]
    InvalidOperator { token: String },
    #[error("invalid precedence {precedence}: must be 1..100")]
    InvalidPrecedence { precedence: f64 },
    #[error("operator {operator:?} expects {expected} operands, received {received}")]
    ArityMismatch {
        operator: char,
        expected: usize,
        received: usize,
    },
    #[error("parameter {name:?} declared twice")]
    DuplicateParameter { name: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("code generation failed: {message}")]
    Codegen { message: String },
}
