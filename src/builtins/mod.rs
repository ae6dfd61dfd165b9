// ABOUTME: Registers every native built-in into a fresh top-level symbol table

mod arithmetic;
mod comparison;
mod help;
mod strings;
mod structural;

use crate::env::SymbolTable;

/// Installs the full native built-in library. Called once, before the
/// bundled Simplex-source library is evaluated, matching the source's
/// `stdlib::addSymbols` step in `Evaluator`'s constructor.
pub fn register_builtins(table: &mut SymbolTable) {
    arithmetic::register(table);
    comparison::register(table);
    structural::register(table);
    strings::register(table);
    help::register(table);
}
