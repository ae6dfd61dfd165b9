use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use simplex::config::{HISTORY_FILE, PROMPT, VERSION, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use simplex::env::IoStreams;
use simplex::error::InterpError;
use simplex::eval::{bootstrap, eval_program};
use simplex::highlighter::SimplexHelper;
use simplex::parser::{parse_one, parse_program};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// An interpreter for Simplex, a small parenthesized-prefix expression language.
#[derive(Parser, Debug)]
#[command(name = "simplex")]
#[command(version = VERSION)]
#[command(about = "A small parenthesized-prefix Lisp-like expression language")]
struct CliArgs {
    /// Script file to execute (optional - if not provided, starts the REPL
    /// when stdin is a terminal, or reads a program from stdin otherwise)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match args.script {
        Some(path) => run_file(&path),
        None if std::io::stdin().is_terminal() => {
            run_repl();
            ExitCode::SUCCESS
        }
        None => run_stdin(),
    }
}

fn run_file(path: &PathBuf) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot read script file {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    run_program(&source)
}

fn run_stdin() -> ExitCode {
    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("cannot read stdin: {e}");
        return ExitCode::FAILURE;
    }
    run_program(&source)
}

/// Evaluates a whole program read from a file or piped stdin, rendering any
/// error between dashed rules to stderr and exiting non-zero.
fn run_program(source: &str) -> ExitCode {
    let io = IoStreams::new(Box::new(std::io::stdin()), Box::new(std::io::stdout()));
    let result = bootstrap(io).and_then(|mut table| {
        let program = parse_program(source)?;
        eval_program(&program, &mut table)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            print_error_block(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_error_block(e: &InterpError) {
    let rule = "-".repeat(80);
    eprintln!("{rule}");
    eprintln!("{e}");
    eprintln!("{rule}");
}

fn run_repl() {
    let io = IoStreams::new(Box::new(std::io::stdin()), Box::new(std::io::stdout()));
    let mut table = match bootstrap(io) {
        Ok(table) => table,
        Err(e) => {
            print_error_block(&e);
            return;
        }
    };

    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<SimplexHelper, rustyline::history::DefaultHistory> =
        match Editor::with_config(config) {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("failed to initialize REPL: {e}");
                return;
            }
        };
    rl.set_helper(Some(SimplexHelper::new()));
    let _ = rl.load_history(HISTORY_FILE);

    println!("{WELCOME_MESSAGE}");
    println!("{WELCOME_SUBTITLE}");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "(quit)" || trimmed == "(exit)" {
                    break;
                }
                match parse_one(trimmed) {
                    Ok(expr) => match eval_program(&wrap_as_program(expr), &mut table) {
                        Ok(value) => println!("=> {}", value.to_display_string()),
                        Err(e) => eprintln!("{e}"),
                    },
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
}

fn wrap_as_program(expr: simplex::ast::Node) -> simplex::ast::Node {
    let mut program = simplex::ast::Node::new(simplex::nodekind::NodeKind::Program, expr.line, expr.col);
    program.children.push(expr);
    program
}
