use std::io::Write;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    parser::lookups::OperatorTable,
    Position,
};

use super::driver::{Backend, Form};

/// A backend that prints each form as an S-expression instead of
/// generating code. It accepts every binary operator definition and
/// registers the operator, like a code generator would once the operator
/// function has been emitted.
pub struct AstPrinter<W: Write> {
    out: W,
}

impl<W: Write> AstPrinter<W> {
    pub fn new(out: W) -> Self {
        AstPrinter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: String) -> Result<(), Error> {
        writeln!(self.out, "{}", line).map_err(|error| {
            Error::new(
                ErrorImpl::Codegen {
                    message: error.to_string(),
                },
                Position::null(),
            )
        })
    }
}

impl<W: Write> Backend for AstPrinter<W> {
    fn accept(&mut self, form: &Form, operators: &mut OperatorTable) -> Result<(), Error> {
        match form {
            Form::Definition(def) => {
                self.emit(format!("Parsed a function definition: {}", def))?;

                if operators.register(&def.prototype) {
                    self.emit(format!(
                        "Registered operator `{}` with precedence {}",
                        def.prototype.operator_symbol().unwrap_or_default(),
                        def.prototype.precedence
                    ))?;
                }

                Ok(())
            }
            Form::Extern(proto) => self.emit(format!("Parsed an extern: {}", proto)),
            Form::TopLevelExpr(def) => self.emit(format!("Parsed a top-level expression: {}", def.body)),
        }
    }

    fn report(&mut self, error: Option<&Error>) {
        let _ = self.emit(display_error(error));
    }
}

/// Renders a failure for the terminal:
///
/// ```text
/// Error: UnexpectedTokenDetailed (Unexpected token: `(`, expected ')' in prototype)
/// -> shell:1:11
/// ```
pub fn display_error(error: Option<&Error>) -> String {
    let error = match error {
        Some(error) => error,
        None => return String::from("Error: unexpected end of input"),
    };

    let headline = if let ErrorTip::None = error.get_tip() {
        format!("Error: {} ({})", error.get_error_name(), error.kind())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}", headline, error.get_position())
}
