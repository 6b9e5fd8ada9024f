use std::fmt::Display;

use super::ast::Expr;

/// Name given to the prototype wrapping a bare top-level expression.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

/// Prototype
///
/// A function's name and parameter list. Operator prototypes are named
/// `unary<sym>` or `binary<sym>`, so the symbol is always the last
/// character of `name` and the arity is the parameter count.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    pub is_operator: bool,
    /// Binding power of a binary operator, 0 for everything else.
    pub precedence: u32,
}

impl Prototype {
    pub fn new(name: &str, params: Vec<String>) -> Self {
        Prototype {
            name: String::from(name),
            params,
            is_operator: false,
            precedence: 0,
        }
    }

    pub fn anonymous() -> Self {
        Prototype::new(ANONYMOUS_FUNCTION_NAME, vec![])
    }

    pub fn unary_operator(symbol: char, params: Vec<String>) -> Self {
        Prototype {
            name: format!("unary{}", symbol),
            params,
            is_operator: true,
            precedence: 0,
        }
    }

    pub fn binary_operator(symbol: char, params: Vec<String>, precedence: u32) -> Self {
        Prototype {
            name: format!("binary{}", symbol),
            params,
            is_operator: true,
            precedence,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_unary_op(&self) -> bool {
        self.is_operator && self.params.len() == 1
    }

    pub fn is_binary_op(&self) -> bool {
        self.is_operator && self.params.len() == 2
    }

    pub fn operator_symbol(&self) -> Option<char> {
        if self.is_operator {
            self.name.chars().last()
        } else {
            None
        }
    }

    pub fn binary_precedence(&self) -> Option<u32> {
        if self.is_binary_op() {
            Some(self.precedence)
        } else {
            None
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS_FUNCTION_NAME
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(" "))?;
        if let Some(precedence) = self.binary_precedence() {
            write!(f, " [precedence {}]", precedence)?;
        }
        Ok(())
    }
}

/// Function Definition
/// A prototype with a body. `extern` declarations stay bare prototypes.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub prototype: Prototype,
    pub body: Expr,
}

impl FunctionDef {
    pub fn new(prototype: Prototype, body: Expr) -> Self {
        FunctionDef { prototype, body }
    }
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(def {} {})", self.prototype, self.body)
    }
}
