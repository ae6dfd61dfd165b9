// ABOUTME: The lexical symbol table: flat name->value map plus injected I/O streams

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::rc::Rc;

/// The two byte streams a running program talks to. Shared via `Rc` so
/// every snapshot copy of a [`SymbolTable`] still reaches the same
/// underlying stream regardless of call depth.
pub struct IoStreams {
    input: RefCell<Box<dyn Read>>,
    output: RefCell<Box<dyn Write>>,
}

impl IoStreams {
    pub fn new(input: Box<dyn Read>, output: Box<dyn Write>) -> Rc<Self> {
        Rc::new(IoStreams {
            input: RefCell::new(input),
            output: RefCell::new(output),
        })
    }

    /// Reads a single byte; `None` on EOF.
    pub fn read_byte(&self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.input.borrow_mut().read(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf[0]),
            Err(_) => None,
        }
    }

    pub fn write(&self, bytes: &[u8]) {
        let _ = self.output.borrow_mut().write_all(bytes);
    }

    pub fn flush(&self) {
        let _ = self.output.borrow_mut().flush();
    }
}

/// A scoped name -> value mapping, no parent pointer. Lexical scope is
/// implemented by VALUE, not by a lookup chain: `augment` shallow-copies
/// the current bindings and overlays the new ones, producing an
/// independent table a closure can own outright. The top-level table is
/// mutated in place by `let`; augmented copies exist only for the
/// duration of one function call and are discarded afterward.
#[derive(Clone)]
pub struct SymbolTable {
    bindings: HashMap<String, Value>,
    io: Rc<IoStreams>,
}

impl SymbolTable {
    pub fn new(io: Rc<IoStreams>) -> Self {
        SymbolTable {
            bindings: HashMap::new(),
            io,
        }
    }

    pub fn io(&self) -> &Rc<IoStreams> {
        &self.io
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value` in THIS table (used by `let` and by
    /// built-in registration at startup).
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Returns a new table: a shallow copy of the current bindings with
    /// `extra` overlaid on top, shadowing same-named entries. This is the
    /// snapshot a `lambda` takes at definition time (`extra` empty) and
    /// the per-call frame a function application builds (`extra` the
    /// parameter bindings).
    pub fn augment(&self, extra: HashMap<String, Value>) -> SymbolTable {
        let mut bindings = self.bindings.clone();
        bindings.extend(extra);
        SymbolTable {
            bindings,
            io: Rc::clone(&self.io),
        }
    }

    /// A snapshot with no additional bindings overlaid — what a `lambda`
    /// captures at definition time.
    pub fn snapshot(&self) -> SymbolTable {
        self.augment(HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_table() -> SymbolTable {
        SymbolTable::new(IoStreams::new(Box::new(Cursor::new(Vec::new())), Box::new(Vec::new())))
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut t = test_table();
        t.set("x", Value::Integer(5));
        assert_eq!(t.get("x"), Some(&Value::Integer(5)));
    }

    #[test]
    fn augment_shadows_without_mutating_original() {
        let mut t = test_table();
        t.set("x", Value::Integer(1));
        let mut extra = HashMap::new();
        extra.insert("x".to_string(), Value::Integer(2));
        let augmented = t.augment(extra);
        assert_eq!(augmented.get("x"), Some(&Value::Integer(2)));
        assert_eq!(t.get("x"), Some(&Value::Integer(1)));
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut t = test_table();
        t.set("x", Value::Integer(1));
        let snap = t.snapshot();
        t.set("x", Value::Integer(2));
        assert_eq!(snap.get("x"), Some(&Value::Integer(1)));
        assert_eq!(t.get("x"), Some(&Value::Integer(2)));
    }
}
