// ABOUTME: string conversion, print/read I/O, and the endl/nil constants

use crate::ast::Node;
use crate::env::{IoStreams, SymbolTable};
use crate::error::{InterpError, InterpResult};
use crate::value::Value;
use std::rc::Rc;

fn string(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.is_empty() {
        return Err(InterpError::runtime(node.line, node.col, "not enough parameters to `string`"));
    }
    if args.len() > 1 {
        return Err(InterpError::runtime(node.line, node.col, "too many parameters to `string`"));
    }
    // A byte-cons chain re-prints as itself; any other kind falls back to
    // its deterministic display form (mirrors the original's print-or-
    // to_string fallback).
    let mut buf = Vec::new();
    match args[0].print_bytes(node, &mut buf) {
        Ok(()) => Ok(Value::from_bytes(&buf)),
        Err(_) => Ok(Value::from_str(&args[0].to_display_string())),
    }
}

fn print(io: &Rc<IoStreams>, node: &Node, args: &[Value]) -> InterpResult<Value> {
    for arg in args {
        let mut buf = Vec::new();
        arg.print_bytes(node, &mut buf)?;
        io.write(&buf);
    }
    io.flush();
    Ok(Value::Nil)
}

fn read(io: &Rc<IoStreams>, node: &Node, args: &[Value]) -> InterpResult<Value> {
    if !args.is_empty() {
        return Err(InterpError::runtime(node.line, node.col, "too many parameters to `read`"));
    }
    Ok(match io.read_byte() {
        Some(b) => Value::Byte(b),
        None => Value::Nil,
    })
}

pub fn register(table: &mut SymbolTable) {
    table.set("string", Value::Function(Rc::new(string)));

    let io = Rc::clone(table.io());
    table.set("print", Value::Function(Rc::new(move |node: &Node, args: &[Value]| print(&io, node, args))));

    let io = Rc::clone(table.io());
    table.set("read", Value::Function(Rc::new(move |node: &Node, args: &[Value]| read(&io, node, args))));

    table.set("endl", Value::from_str("\n"));
    table.set("nil", Value::Nil);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodekind::NodeKind;

    fn n() -> Node {
        Node::new(NodeKind::Invalid, 1, 1)
    }

    #[test]
    fn string_converts_integer_to_its_display_form() {
        let r = string(&n(), &[Value::Integer(42)]).unwrap();
        assert_eq!(r.as_string(&n()).unwrap(), "42");
    }

    #[test]
    fn string_of_byte_cons_chain_reprints_the_bytes() {
        let r = string(&n(), &[Value::from_str("hi")]).unwrap();
        assert_eq!(r.as_string(&n()).unwrap(), "hi");
    }
}
