use std::io::Write;

use crate::{
    ast::definitions::{FunctionDef, Prototype},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    parser::{lookups::OperatorTable, parser::Parser},
};

pub const DEFAULT_PROMPT: &str = "ready> ";

/// One parsed top-level form.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Definition(FunctionDef),
    Extern(Prototype),
    TopLevelExpr(FunctionDef),
}

/// The consumer of parsed forms, standing in for code generation.
pub trait Backend {
    /// Takes one parsed form. A backend that accepts a binary operator
    /// definition registers it in `operators`; the parser sees the operator
    /// from the next form on.
    fn accept(&mut self, form: &Form, operators: &mut OperatorTable) -> Result<(), Error>;

    /// Reports a failure. `None` means the input ended in the middle of a form.
    fn report(&mut self, error: Option<&Error>);
}

/// What one call to `Driver::step` did.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A `;` between forms was skipped.
    Separator,
    Accepted(Form),
    /// Parsed, but the backend refused the form.
    Rejected(Form, Error),
    /// Parsing failed and `skipped` was discarded to resynchronise.
    Failed { error: Option<Error>, skipped: Token },
    Finished,
}

impl Step {
    /// Whether the driver is waiting on a fresh form after this step.
    /// A `;` only separates forms, so it does not ask again.
    pub fn wants_prompt(&self) -> bool {
        !matches!(self, Step::Separator | Step::Finished)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub definitions: usize,
    pub externs: usize,
    pub expressions: usize,
    pub rejected: usize,
    pub failures: usize,
}

pub struct Driver<B: Backend> {
    parser: Parser,
    backend: B,
    prompt: Option<String>,
    summary: Summary,
}

impl<B: Backend> Driver<B> {
    pub fn new(parser: Parser, backend: B) -> Self {
        Driver {
            parser,
            backend,
            prompt: None,
            summary: Summary::default(),
        }
    }

    /// Writes `prompt` to stderr whenever the driver waits for the next form.
    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }

    /// Dispatches on the current token and handles one top-level form.
    pub fn step(&mut self) -> Step {
        let parsed = match self.parser.current_token_kind() {
            TokenKind::EOF => return Step::Finished,
            TokenKind::Char(';') => {
                self.parser.advance();
                return Step::Separator;
            }
            TokenKind::Def => self.parser.parse_definition().map(|def| def.map(Form::Definition)),
            TokenKind::Extern => self.parser.parse_extern().map(|proto| proto.map(Form::Extern)),
            _ => self
                .parser
                .parse_top_level_expr()
                .map(|def| def.map(Form::TopLevelExpr)),
        };

        let form = match parsed {
            Ok(Some(form)) => form,
            Ok(None) => return self.recover(None),
            Err(error) => return self.recover(Some(error)),
        };

        if let Err(error) = self.backend.accept(&form, self.parser.operators_mut()) {
            self.backend.report(Some(&error));
            self.summary.rejected += 1;
            return Step::Rejected(form, error);
        }

        match &form {
            Form::Definition(_) => self.summary.definitions += 1,
            Form::Extern(_) => self.summary.externs += 1,
            Form::TopLevelExpr(_) => self.summary.expressions += 1,
        }

        Step::Accepted(form)
    }

    /// Runs until the input is exhausted.
    pub fn run(&mut self) -> Summary {
        loop {
            let step = self.step();

            if step == Step::Finished {
                break;
            }

            if step.wants_prompt() {
                self.show_prompt();
            }
        }

        self.summary.clone()
    }

    pub fn show_prompt(&self) {
        if let Some(prompt) = &self.prompt {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "{}", prompt);
            let _ = stderr.flush();
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // Skipping a single token is the whole recovery strategy.
    fn recover(&mut self, error: Option<Error>) -> Step {
        self.backend.report(error.as_ref());
        self.summary.failures += 1;

        let skipped = self.parser.advance();
        Step::Failed { error, skipped }
    }
}
