// ABOUTME: The `help` built-in, printing the REPL quick-reference text

use crate::ast::Node;
use crate::config::{BUILTINS_SUMMARY, HELP_TEXT};
use crate::env::{IoStreams, SymbolTable};
use crate::error::InterpResult;
use crate::value::Value;
use std::rc::Rc;

fn help(io: &Rc<IoStreams>, node: &Node, args: &[Value]) -> InterpResult<Value> {
    if !args.is_empty() {
        return Err(crate::error::InterpError::runtime(
            node.line,
            node.col,
            format!("expected 0 parameters to `help`, found {}", args.len()),
        ));
    }
    io.write(HELP_TEXT.as_bytes());
    io.write(BUILTINS_SUMMARY.as_bytes());
    io.flush();
    Ok(Value::Nil)
}

pub fn register(table: &mut SymbolTable) {
    let io = Rc::clone(table.io());
    table.set("help", Value::Function(Rc::new(move |node: &Node, args: &[Value]| help(&io, node, args))));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodekind::NodeKind;
    use std::io::Cursor;

    #[test]
    fn help_writes_reference_text_to_output_stream() {
        let io = IoStreams::new(Box::new(Cursor::new(Vec::new())), Box::new(Vec::new()));
        let mut table = SymbolTable::new(io);
        register(&mut table);
        let node = Node::new(NodeKind::Invalid, 1, 1);
        let result = match table.get("help").cloned().unwrap() {
            Value::Function(f) => f(&node, &[]),
            _ => panic!("expected function"),
        };
        assert!(result.is_ok());
    }

    #[test]
    fn help_rejects_arguments() {
        let io = IoStreams::new(Box::new(Cursor::new(Vec::new())), Box::new(Vec::new()));
        let mut table = SymbolTable::new(io);
        register(&mut table);
        let node = Node::new(NodeKind::Invalid, 1, 1);
        let result = match table.get("help").cloned().unwrap() {
            Value::Function(f) => f(&node, &[Value::Integer(1)]),
            _ => panic!("expected function"),
        };
        assert!(result.is_err());
    }
}
