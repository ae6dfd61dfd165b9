// ABOUTME: =, <, > over comparable values

use crate::ast::Node;
use crate::env::SymbolTable;
use crate::error::{InterpError, InterpResult};
use crate::value::{Value, ValueKind};
use std::rc::Rc;

fn equals(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() < 2 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected at least 2 parameters to `=`, found {}", args.len()),
        ));
    }
    let reference = &args[0];
    let all_equal = args[1..].iter().all(|a| a == reference);
    Ok(Value::Boolean(all_equal))
}

fn ordering(node: &Node, name: &str, args: &[Value], int_cmp: fn(i64, i64) -> bool, float_cmp: fn(f64, f64) -> bool) -> InterpResult<Value> {
    if args.len() != 2 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected 2 parameters to `{name}`, found {}", args.len()),
        ));
    }
    let (a, b) = (&args[0], &args[1]);
    if a.kind() != b.kind() {
        return Err(InterpError::type_mismatch(node.line, node.col, a.kind(), b.kind()));
    }
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Ok(Value::Boolean(int_cmp(*x, *y))),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Boolean(float_cmp(*x, *y))),
        _ => Err(InterpError::type_mismatch(node.line, node.col, ValueKind::Integer, a.kind())),
    }
}

fn lessthan(node: &Node, args: &[Value]) -> InterpResult<Value> {
    ordering(node, "<", args, |x, y| x < y, |x, y| x < y)
}

fn greaterthan(node: &Node, args: &[Value]) -> InterpResult<Value> {
    ordering(node, ">", args, |x, y| x > y, |x, y| x > y)
}

pub fn register(table: &mut SymbolTable) {
    table.set("=", Value::Function(Rc::new(equals)));
    table.set("<", Value::Function(Rc::new(lessthan)));
    table.set(">", Value::Function(Rc::new(greaterthan)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodekind::NodeKind;

    fn n() -> Node {
        Node::new(NodeKind::Invalid, 1, 1)
    }

    #[test]
    fn equals_is_symmetric() {
        let a = equals(&n(), &[Value::Integer(1), Value::Integer(1)]).unwrap();
        let b = equals(&n(), &[Value::Integer(1), Value::Integer(1)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mixed_kind_ordering_is_type_mismatch() {
        let err = lessthan(&n(), &[Value::Integer(1), Value::Float(2.0)]).unwrap_err();
        assert!(matches!(err, InterpError::TypeMismatch { .. }));
    }

    #[test]
    fn greaterthan_basic() {
        let r = greaterthan(&n(), &[Value::Integer(5), Value::Integer(2)]).unwrap();
        assert_eq!(r, Value::Boolean(true));
    }
}
