use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use kaleidoscope::{
    driver::{
        driver::{Driver, DEFAULT_PROMPT},
        printer::AstPrinter,
    },
    lexer::lexer::Lexer,
    parser::{lookups::OperatorTable, parser::Parser},
};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Parses Kaleidoscope and prints every top-level form", long_about = None)]
struct Args {
    /// File to parse, stdin when omitted
    file: Option<PathBuf>,
    /// Print the token stream and exit
    #[arg(long)]
    tokens: bool,
    /// Print the operator table after the input is exhausted
    #[arg(long)]
    operators: bool,
    /// Never show a prompt, even on a terminal
    #[arg(long)]
    no_prompt: bool,
    /// Prompt shown before each form when reading from a terminal
    #[arg(long, default_value_t = String::from(DEFAULT_PROMPT))]
    prompt: String,
}

fn main() -> ExitCode {
    let args = <Args as clap::Parser>::parse();

    let (input, file_name, interactive): (Box<dyn BufRead>, String, bool) = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => (Box::new(BufReader::new(file)), display_name(path), false),
            Err(error) => {
                eprintln!("Error: failed to open {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let interactive = io::stdin().is_terminal();
            (Box::new(BufReader::new(io::stdin())), String::from("shell"), interactive)
        }
    };

    let mut lexer = Lexer::new(input, Some(file_name));

    if args.tokens {
        loop {
            let token = lexer.next_token();
            println!("{}", token.debug());

            if token.is_eof() {
                break;
            }
        }

        if report_io_error(&lexer) {
            return ExitCode::FAILURE;
        }

        return ExitCode::SUCCESS;
    }

    let prompt = if interactive && !args.no_prompt {
        Some(args.prompt.clone())
    } else {
        None
    };

    if let Some(prompt) = &prompt {
        eprint!("{}", prompt);
    }

    let start = Instant::now();

    let parser = Parser::new(lexer, OperatorTable::with_builtins());
    let mut driver = Driver::new(parser, AstPrinter::new(io::stdout())).with_prompt(prompt);
    let summary = driver.run();

    if !interactive {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    eprintln!(
        "{} definitions, {} externs, {} expressions, {} rejected, {} failures",
        summary.definitions, summary.externs, summary.expressions, summary.rejected, summary.failures
    );

    if args.operators {
        for (symbol, precedence) in driver.parser().operators().entries() {
            println!("{} {}", symbol, precedence);
        }
    }

    let io_failed = report_io_error(driver.parser().lexer());

    if io_failed || summary.failures + summary.rejected > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Returns true if reading the input failed.
fn report_io_error(lexer: &Lexer) -> bool {
    match lexer.io_error() {
        Some(error) => {
            eprintln!("Error: input ended early: {}", error);
            true
        }
        None => false,
    }
}
