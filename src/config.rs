// ABOUTME: Version banner, REPL prompt/history constants for the Simplex interpreter

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = "Simplex Interpreter";
pub const WELCOME_SUBTITLE: &str = "A small parenthesized-prefix expression language";

pub const PROMPT: &str = "simplex> ";
pub const HISTORY_FILE: &str = ".simplex_history";

pub const HELP_TEXT: &str = r#"
Available REPL commands:
  (quit) or (exit)     - Exit the REPL
  (help)               - Show this help message

Type any Simplex expression to evaluate it. Use Ctrl-D to exit.
"#;

pub const BUILTINS_SUMMARY: &str = r#"
Built-in functions:

Arithmetic:     + - * /
Comparison:     = < > <= >=
Structural:     cons car cdr list sequence
Dicts:          dict dict.get dict.set
Strings/IO:     string print read readLine
Constants:      nil endl true false

Special forms:  lambda let if cond

Library (bundled): append len reverse readLine <= >=

Type (help) for more information.
"#;
