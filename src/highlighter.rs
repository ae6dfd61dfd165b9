// ABOUTME: Syntax highlighter for the REPL, colorizing Simplex tokens via ANSI codes

use rustyline::completion::Completer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;
use std::collections::HashSet;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_PARENS: &str = "\x1b[1;34m";
const COLOR_SPECIAL_FORM: &str = "\x1b[1;35m";
const COLOR_BUILTIN: &str = "\x1b[36m";
const COLOR_NUMBER: &str = "\x1b[33m";
const COLOR_STRING: &str = "\x1b[32m";
const COLOR_BOOLEAN: &str = "\x1b[33m";

/// REPL helper providing syntax-aware color highlighting for Simplex source.
pub struct SimplexHelper;

impl SimplexHelper {
    pub fn new() -> Self {
        SimplexHelper
    }
}

impl Default for SimplexHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for SimplexHelper {}

impl Completer for SimplexHelper {
    type Candidate = String;
}

impl Hinter for SimplexHelper {
    type Hint = String;
}

impl Validator for SimplexHelper {}

impl Highlighter for SimplexHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let special_forms = get_special_forms();
        let builtins = get_builtins();
        let highlighted = highlight_line(line, &special_forms, &builtins);
        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Tokenizes a line and wraps each recognized token in ANSI color codes.
/// Simplex has no comment syntax and strings are delimited by `'`, not `"`;
/// there is no quote/quasiquote/unquote character and no `#t`/`#f` literal
/// — `true`/`false` are ordinary identifiers colored as booleans.
fn highlight_line(line: &str, special_forms: &HashSet<&'static str>, builtins: &HashSet<&'static str>) -> String {
    let mut result = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\'' => {
                result.push_str(COLOR_STRING);
                result.push('\'');
                i += 1;
                let mut found_close = false;
                while i < chars.len() {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        result.push(chars[i]);
                        result.push(chars[i + 1]);
                        i += 2;
                    } else if chars[i] == '\'' {
                        result.push('\'');
                        i += 1;
                        found_close = true;
                        break;
                    } else {
                        result.push(chars[i]);
                        i += 1;
                    }
                }
                result.push_str(COLOR_RESET);
                if !found_close {
                    while i < chars.len() {
                        result.push(chars[i]);
                        i += 1;
                    }
                }
            }

            '0'..='9' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i < chars.len() && chars[i] == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit() {
                    i += 1;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                let num_str: String = chars[start..i].iter().collect();
                result.push_str(COLOR_NUMBER);
                result.push_str(&num_str);
                result.push_str(COLOR_RESET);
            }

            '(' | ')' => {
                result.push_str(COLOR_PARENS);
                result.push(chars[i]);
                i += 1;
                result.push_str(COLOR_RESET);
            }

            ' ' | '\t' | '\n' | '\r' => {
                result.push(chars[i]);
                i += 1;
            }

            _ => {
                let start = i;
                while i < chars.len() && !chars[i].is_whitespace() && chars[i] != '(' && chars[i] != ')' && chars[i] != '\'' {
                    i += 1;
                }
                let symbol: String = chars[start..i].iter().collect();

                if symbol == "true" || symbol == "false" {
                    result.push_str(COLOR_BOOLEAN);
                    result.push_str(&symbol);
                    result.push_str(COLOR_RESET);
                } else if special_forms.contains(symbol.as_str()) {
                    result.push_str(COLOR_SPECIAL_FORM);
                    result.push_str(&symbol);
                    result.push_str(COLOR_RESET);
                } else if builtins.contains(symbol.as_str()) {
                    result.push_str(COLOR_BUILTIN);
                    result.push_str(&symbol);
                    result.push_str(COLOR_RESET);
                } else {
                    result.push_str(&symbol);
                }
            }
        }
    }

    result
}

fn get_special_forms() -> HashSet<&'static str> {
    ["lambda", "let", "if", "cond"].iter().copied().collect()
}

fn get_builtins() -> HashSet<&'static str> {
    [
        "+", "-", "*", "/", "=", "<", ">", "<=", ">=", "sequence", "cons", "car", "cdr", "list",
        "dict", "dict.get", "dict.set", "string", "print", "read", "readLine", "append", "len",
        "reverse", "nil", "endl", "help",
    ]
    .iter()
    .copied()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_is_colored() {
        let h = highlight_line("42", &get_special_forms(), &get_builtins());
        assert!(h.contains(COLOR_NUMBER));
    }

    #[test]
    fn string_literal_is_colored() {
        let h = highlight_line("'hello'", &get_special_forms(), &get_builtins());
        assert!(h.contains(COLOR_STRING));
    }

    #[test]
    fn special_form_is_colored() {
        let h = highlight_line("(let x 5)", &get_special_forms(), &get_builtins());
        assert!(h.contains(COLOR_SPECIAL_FORM));
        assert!(h.contains(COLOR_PARENS));
    }

    #[test]
    fn builtin_is_colored() {
        let h = highlight_line("(+ 1 2)", &get_special_forms(), &get_builtins());
        assert!(h.contains(COLOR_BUILTIN));
    }

    #[test]
    fn boolean_identifiers_are_colored() {
        let h = highlight_line("true false", &get_special_forms(), &get_builtins());
        assert!(h.contains(COLOR_BOOLEAN));
    }

    #[test]
    fn unclosed_string_colors_to_end_of_line() {
        let h = highlight_line("'unterminated", &get_special_forms(), &get_builtins());
        assert!(h.contains(COLOR_STRING));
    }
}
