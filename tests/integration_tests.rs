//! Integration tests for the top-level driver.
//!
//! These tests feed whole programs through lexer, parser and driver and
//! check the forms handed to the backend, error recovery, and when
//! user-defined operators become visible.

use kaleidoscope::{
    ast::ast::Expr,
    driver::{
        driver::{Backend, Driver, Form, Step, Summary},
        printer::AstPrinter,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::{lookups::OperatorTable, parser::Parser},
    Position,
};

fn printer_driver(source: &str) -> Driver<AstPrinter<Vec<u8>>> {
    let parser = Parser::new(
        Lexer::from_source(source.to_string(), Some("test.ks".to_string())),
        OperatorTable::with_builtins(),
    );
    Driver::new(parser, AstPrinter::new(Vec::new()))
}

fn output(driver: Driver<AstPrinter<Vec<u8>>>) -> String {
    String::from_utf8(driver.into_backend().into_inner()).unwrap()
}

fn accepted_body(step: Step) -> Expr {
    match step {
        Step::Accepted(Form::TopLevelExpr(def)) => def.body,
        other => panic!("expected a top-level expression, got {:?}", other),
    }
}

/// Accepts everything but never registers operators.
#[derive(Default)]
struct Recorder {
    forms: Vec<Form>,
    reports: Vec<Option<Error>>,
}

impl Backend for Recorder {
    fn accept(&mut self, form: &Form, _operators: &mut OperatorTable) -> Result<(), Error> {
        self.forms.push(form.clone());
        Ok(())
    }

    fn report(&mut self, error: Option<&Error>) {
        self.reports.push(error.cloned());
    }
}

/// Refuses externs.
struct NoExterns;

impl Backend for NoExterns {
    fn accept(&mut self, form: &Form, _operators: &mut OperatorTable) -> Result<(), Error> {
        match form {
            Form::Extern(proto) => Err(Error::new(
                ErrorImpl::Codegen {
                    message: format!("cannot link {}", proto.name),
                },
                Position::null(),
            )),
            _ => Ok(()),
        }
    }

    fn report(&mut self, _error: Option<&Error>) {}
}

#[test]
fn test_operator_defined_then_used() {
    let mut driver = printer_driver("def binary| 5 (x y) x\na|b|c");

    match driver.step() {
        Step::Accepted(Form::Definition(def)) => assert_eq!(def.prototype.name, "binary|"),
        other => panic!("expected a definition, got {:?}", other),
    }

    assert_eq!(
        accepted_body(driver.step()),
        Expr::binary(
            '|',
            Expr::binary('|', Expr::variable("a"), Expr::variable("b")),
            Expr::variable("c")
        )
    );
    assert_eq!(driver.step(), Step::Finished);

    let text = output(driver);
    assert!(text.contains("Registered operator `|` with precedence 5"));
    assert!(text.contains("Parsed a top-level expression: (| (| a b) c)"));
}

#[test]
fn test_operator_is_invisible_inside_its_own_definition() {
    let mut driver = printer_driver("def binary% 7 (a b) a % b\nx % y");

    match driver.step() {
        Step::Accepted(Form::Definition(def)) => assert_eq!(def.body, Expr::variable("a")),
        other => panic!("expected a definition, got {:?}", other),
    }

    // The leftover `% b` starts the next form, where `%` is a prefix operator.
    assert_eq!(accepted_body(driver.step()), Expr::unary('%', Expr::variable("b")));

    assert_eq!(
        accepted_body(driver.step()),
        Expr::binary('%', Expr::variable("x"), Expr::variable("y"))
    );
}

#[test]
fn test_backend_that_does_not_register_keeps_operator_unknown() {
    let parser = Parser::from_source("def binary| 5 (x y) x; a|b");
    let mut driver = Driver::new(parser, Recorder::default());

    let summary = driver.run();
    let recorder = driver.into_backend();

    assert_eq!(summary.definitions, 1);
    assert_eq!(
        recorder.forms.last(),
        Some(&Form::TopLevelExpr(kaleidoscope::ast::definitions::FunctionDef::new(
            kaleidoscope::ast::definitions::Prototype::anonymous(),
            Expr::unary('|', Expr::variable("b"))
        )))
    );
}

#[test]
fn test_recovery_skips_exactly_one_token() {
    let mut driver = printer_driver("def foo(x (y) x");

    match driver.step() {
        Step::Failed {
            error: Some(error),
            skipped,
        } => {
            assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
            assert_eq!(error.get_position().column, 11);
            assert_eq!(skipped.kind, TokenKind::Char('('));
        }
        other => panic!("expected a failure, got {:?}", other),
    }

    // Parsing resumes right after the skipped `(`.
    assert_eq!(accepted_body(driver.step()), Expr::variable("y"));
    assert_eq!(
        accepted_body(driver.step()),
        Expr::unary(')', Expr::variable("x"))
    );
    assert_eq!(driver.step(), Step::Finished);

    let text = output(driver);
    assert!(text.starts_with(
        "Error: UnexpectedTokenDetailed (Unexpected token: `(`, expected ')' in prototype)\n-> test.ks:1:11\n"
    ));
}

#[test]
fn test_incomplete_form_at_end_of_input() {
    let mut driver = printer_driver("def foo(x");

    match driver.step() {
        Step::Failed { error, skipped } => {
            assert_eq!(error, None);
            assert!(skipped.is_eof());
        }
        other => panic!("expected a failure, got {:?}", other),
    }
    assert_eq!(driver.step(), Step::Finished);
    assert_eq!(driver.summary().failures, 1);

    assert_eq!(output(driver), "Error: unexpected end of input\n");
}

#[test]
fn test_separators_and_summary() {
    let mut driver = printer_driver(
        "# a tiny program\n\
         extern sin(x);\n\
         def double(x) x * 2;;\n\
         double(sin(1)) + 1;\n\
         then;\n",
    );

    assert_eq!(driver.step(), Step::Accepted(Form::Extern(kaleidoscope::ast::definitions::Prototype::new(
        "sin",
        vec!["x".to_string()]
    ))));
    assert_eq!(driver.step(), Step::Separator);

    let summary = driver.run();

    assert_eq!(
        summary,
        Summary {
            definitions: 1,
            externs: 1,
            expressions: 1,
            rejected: 0,
            failures: 1,
        }
    );

    let text = output(driver);
    assert!(text.contains("Parsed an extern: sin(x)"));
    assert!(text.contains("Parsed a function definition: (def double(x) (* x 2))"));
    assert!(text.contains("Parsed a top-level expression: (+ (call double (call sin 1)) 1)"));
    assert!(text.contains("Error: UnexpectedToken (Unknown token `then` when expecting an expression)"));
}

#[test]
fn test_backend_rejection_does_not_skip_tokens() {
    let parser = Parser::from_source("extern cos(x) cos(1)");
    let mut driver = Driver::new(parser, NoExterns);

    match driver.step() {
        Step::Rejected(Form::Extern(proto), error) => {
            assert_eq!(proto.name, "cos");
            assert_eq!(error.get_error_name(), "Codegen");
        }
        other => panic!("expected a rejection, got {:?}", other),
    }

    assert_eq!(
        accepted_body(driver.step()),
        Expr::call("cos", vec![Expr::number(1.0)])
    );
    assert_eq!(driver.summary().rejected, 1);
    assert_eq!(driver.summary().expressions, 1);
}

#[test]
fn test_unary_operator_definition_and_use() {
    let mut driver = printer_driver("def unary!(v) if v then 0 else 1\n!x + 1");

    driver.run();

    let text = output(driver);
    assert!(text.contains("Parsed a function definition: (def unary!(v) (if v 0 1))"));
    assert!(text.contains("Parsed a top-level expression: (+ (unary! x) 1)"));
    assert!(!text.contains("Registered operator"));
}

#[test]
fn test_fresh_sessions_give_identical_forms() {
    let source = "def binary : 1 (x y) y\nx : y : z\nvar a = 1 in a : 2";

    let run = || {
        let mut driver = Driver::new(Parser::from_source(source), Recorder::default());
        driver.run();
        driver.into_backend().forms
    };

    assert_eq!(run(), run());
}

#[test]
fn test_operator_precedence_can_be_redefined() {
    let mut driver = printer_driver("def binary+ 50 (a b) a\n1 * 2 + 3");

    driver.step();

    assert_eq!(driver.parser().operators().precedence('+'), 50);
    assert_eq!(
        accepted_body(driver.step()),
        Expr::binary(
            '*',
            Expr::number(1.0),
            Expr::binary('+', Expr::number(2.0), Expr::number(3.0))
        )
    );
}

#[test]
fn test_separator_does_not_ask_for_another_prompt() {
    let mut driver = printer_driver("1;");

    let first = driver.step();
    assert!(matches!(first, Step::Accepted(Form::TopLevelExpr(_))));
    assert!(first.wants_prompt());

    let second = driver.step();
    assert_eq!(second, Step::Separator);
    assert!(!second.wants_prompt());

    assert!(!driver.step().wants_prompt());
}

#[test]
fn test_failures_ask_for_another_prompt() {
    let mut driver = printer_driver("then");

    assert!(driver.step().wants_prompt());
}
