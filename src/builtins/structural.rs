// ABOUTME: sequence, cons/car/cdr/list, and the dict family

use crate::ast::Node;
use crate::env::SymbolTable;
use crate::error::{InterpError, InterpResult};
use crate::value::Value;
use std::collections::BTreeMap;
use std::rc::Rc;

fn sequence(node: &Node, args: &[Value]) -> InterpResult<Value> {
    args.last()
        .cloned()
        .ok_or_else(|| InterpError::runtime(node.line, node.col, "`sequence` requires at least 1 parameter"))
}

fn cons(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() != 2 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected 2 parameters to `cons`, found {}", args.len()),
        ));
    }
    Ok(Value::cons(args[0].clone(), args[1].clone()))
}

fn car(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() != 1 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected 1 parameter to `car`, found {}", args.len()),
        ));
    }
    args[0].car(node).cloned()
}

fn cdr(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() != 1 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected 1 parameter to `cdr`, found {}", args.len()),
        ));
    }
    args[0].cdr(node).cloned()
}

fn list(_node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.is_empty() {
        return Ok(Value::cons(Value::Nil, Value::Nil));
    }
    let mut result = Value::Nil;
    for item in args.iter().rev() {
        result = Value::cons(item.clone(), result);
    }
    Ok(result)
}

fn dict(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() % 2 != 0 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            "expected an even number of parameters to `dict`",
        ));
    }
    let mut map = BTreeMap::new();
    for pair in args.chunks(2) {
        let key = pair[0].as_string(node)?;
        map.insert(key, pair[1].clone());
    }
    Ok(Value::Dict(map))
}

fn dict_get(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() != 2 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected 2 parameters to `dict.get`, found {}", args.len()),
        ));
    }
    let key = args[0].as_string(node)?;
    let map = match &args[1] {
        Value::Dict(m) => m,
        other => {
            return Err(InterpError::type_mismatch(
                node.line,
                node.col,
                crate::value::ValueKind::Dict,
                other.kind(),
            ))
        }
    };
    map.get(&key).cloned().ok_or_else(|| {
        InterpError::runtime(node.line, node.col, format!("key not found in dict: {key}"))
    })
}

fn dict_set(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() != 3 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected 3 parameters to `dict.set`, found {}", args.len()),
        ));
    }
    let key = args[0].as_string(node)?;
    let value = args[1].clone();
    let mut map = match &args[2] {
        Value::Dict(m) => m.clone(),
        other => {
            return Err(InterpError::type_mismatch(
                node.line,
                node.col,
                crate::value::ValueKind::Dict,
                other.kind(),
            ))
        }
    };
    map.insert(key, value);
    Ok(Value::Dict(map))
}

pub fn register(table: &mut SymbolTable) {
    table.set("sequence", Value::Function(Rc::new(sequence)));
    table.set("cons", Value::Function(Rc::new(cons)));
    table.set("car", Value::Function(Rc::new(car)));
    table.set("cdr", Value::Function(Rc::new(cdr)));
    table.set("list", Value::Function(Rc::new(list)));
    table.set("dict", Value::Function(Rc::new(dict)));
    table.set("dict.get", Value::Function(Rc::new(dict_get)));
    table.set("dict.set", Value::Function(Rc::new(dict_set)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodekind::NodeKind;

    fn n() -> Node {
        Node::new(NodeKind::Invalid, 1, 1)
    }

    #[test]
    fn list_equals_nested_cons() {
        let a = Value::Integer(1);
        let b = Value::Integer(2);
        let c = Value::Integer(3);
        let via_list = list(&n(), &[a.clone(), b.clone(), c.clone()]).unwrap();
        let via_cons = Value::cons(a, Value::cons(b, Value::cons(c, Value::Nil)));
        assert_eq!(via_list, via_cons);
    }

    #[test]
    fn empty_list_is_cons_nil_nil() {
        let v = list(&n(), &[]).unwrap();
        assert_eq!(v, Value::cons(Value::Nil, Value::Nil));
    }

    #[test]
    fn dict_set_is_functional_update() {
        let node = n();
        let d1 = dict(&node, &[Value::from_str("k"), Value::Integer(1)]).unwrap();
        let d2 = dict_set(&node, &[Value::from_str("k"), Value::Integer(2), d1.clone()]).unwrap();
        assert_eq!(dict_get(&node, &[Value::from_str("k"), d1]).unwrap(), Value::Integer(1));
        assert_eq!(dict_get(&node, &[Value::from_str("k"), d2]).unwrap(), Value::Integer(2));
    }

    #[test]
    fn car_of_non_cons_is_type_mismatch() {
        let err = car(&n(), &[Value::Integer(1)]).unwrap_err();
        assert!(matches!(err, InterpError::TypeMismatch { .. }));
    }
}
