use std::fmt::Display;

/// Expression
///
/// Every expression evaluates to a single f64. Nodes are never mutated once
/// built; consumers dispatch on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Unary {
        opcode: char,
        operand: Box<Expr>,
    },
    Binary {
        op: char,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
    },
    If {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    For {
        var_name: String,
        start: Box<Expr>,
        end: Box<Expr>,
        step: Option<Box<Expr>>,
        body: Box<Expr>,
    },
    /// `var a = 1, b in body`. Bindings keep source order.
    VarIn {
        bindings: Vec<(String, Option<Expr>)>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: f64) -> Expr {
        Expr::Number(value)
    }

    pub fn variable(name: &str) -> Expr {
        Expr::Variable(String::from(name))
    }

    pub fn unary(opcode: char, operand: Expr) -> Expr {
        Expr::Unary {
            opcode,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: char, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn call(callee: &str, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: String::from(callee),
            args,
        }
    }

    pub fn if_then_else(cond: Expr, then: Expr, otherwise: Expr) -> Expr {
        Expr::If {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }
}

/// Renders the tree as an S-expression, e.g. `(+ 1 (* 2 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Unary { opcode, operand } => write!(f, "(unary{} {})", opcode, operand),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", op, lhs, rhs),
            Expr::Call { callee, args } => {
                write!(f, "(call {}", callee)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Expr::If {
                cond,
                then,
                otherwise,
            } => write!(f, "(if {} {} {})", cond, then, otherwise),
            Expr::For {
                var_name,
                start,
                end,
                step,
                body,
            } => {
                write!(f, "(for {} {} {}", var_name, start, end)?;
                if let Some(step) = step {
                    write!(f, " {}", step)?;
                }
                write!(f, " {})", body)
            }
            Expr::VarIn { bindings, body } => {
                write!(f, "(var (")?;
                for (index, (name, init)) in bindings.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    match init {
                        Some(init) => write!(f, "({} {})", name, init)?,
                        None => write!(f, "({})", name)?,
                    }
                }
                write!(f, ") {})", body)
            }
        }
    }
}
