// ABOUTME: +, -, *, / with integer/float promotion rules

use crate::ast::Node;
use crate::env::SymbolTable;
use crate::error::{InterpError, InterpResult};
use crate::value::{Value, ValueKind};
use std::rc::Rc;

enum Num {
    Int(i64),
    Float(f64),
}

fn numeric(node: &Node, v: &Value) -> InterpResult<Num> {
    match v {
        Value::Integer(i) => Ok(Num::Int(*i)),
        Value::Float(f) => Ok(Num::Float(*f)),
        other => Err(InterpError::type_mismatch(
            node.line,
            node.col,
            ValueKind::Integer,
            other.kind(),
        )),
    }
}

fn as_f64(n: &Num) -> f64 {
    match n {
        Num::Int(i) => *i as f64,
        Num::Float(f) => *f,
    }
}

fn arity_error(node: &Node, name: &str, expected: &str, actual: usize) -> InterpError {
    InterpError::runtime(
        node.line,
        node.col,
        format!("expected {expected} parameters to `{name}`, found {actual}"),
    )
}

fn plus(node: &Node, args: &[Value]) -> InterpResult<Value> {
    match args.len() {
        1 => {
            numeric(node, &args[0])?;
            Ok(args[0].clone())
        }
        2 => {
            let a = numeric(node, &args[0])?;
            let b = numeric(node, &args[1])?;
            Ok(match (a, b) {
                (Num::Int(x), Num::Int(y)) => Value::Integer(x + y),
                (a, b) => Value::Float(as_f64(&a) + as_f64(&b)),
            })
        }
        n => Err(arity_error(node, "+", "1 or 2", n)),
    }
}

fn minus(node: &Node, args: &[Value]) -> InterpResult<Value> {
    match args.len() {
        1 => {
            let n = numeric(node, &args[0])?;
            Ok(match n {
                Num::Int(x) => Value::Integer(-x),
                Num::Float(x) => Value::Float(-x),
            })
        }
        2 => {
            let a = numeric(node, &args[0])?;
            let b = numeric(node, &args[1])?;
            Ok(match (a, b) {
                (Num::Int(x), Num::Int(y)) => Value::Integer(x - y),
                (a, b) => Value::Float(as_f64(&a) - as_f64(&b)),
            })
        }
        n => Err(arity_error(node, "-", "1 or 2", n)),
    }
}

fn times(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.is_empty() {
        return Err(arity_error(node, "*", "at least 1", 0));
    }
    let nums: Vec<Num> = args
        .iter()
        .map(|a| numeric(node, a))
        .collect::<InterpResult<_>>()?;
    let all_int = nums.iter().all(|n| matches!(n, Num::Int(_)));
    if all_int {
        let mut product: i64 = 1;
        for n in &nums {
            if let Num::Int(i) = n {
                product *= i;
            }
        }
        Ok(Value::Integer(product))
    } else {
        let mut product = 1.0;
        for n in &nums {
            product *= as_f64(n);
        }
        Ok(Value::Float(product))
    }
}

fn divide(node: &Node, args: &[Value]) -> InterpResult<Value> {
    if args.len() != 2 {
        return Err(arity_error(node, "/", "2", args.len()));
    }
    let a = numeric(node, &args[0])?;
    let b = numeric(node, &args[1])?;
    Ok(match (a, b) {
        (Num::Int(x), Num::Int(y)) => Value::Integer(x / y),
        (a, b) => Value::Float(as_f64(&a) / as_f64(&b)),
    })
}

pub fn register(table: &mut SymbolTable) {
    table.set("+", Value::Function(Rc::new(plus)));
    table.set("-", Value::Function(Rc::new(minus)));
    table.set("*", Value::Function(Rc::new(times)));
    table.set("/", Value::Function(Rc::new(divide)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodekind::NodeKind;

    fn n() -> Node {
        Node::new(NodeKind::Invalid, 1, 1)
    }

    #[test]
    fn integer_addition_closes_over_integers() {
        let r = plus(&n(), &[Value::Integer(3), Value::Integer(4)]).unwrap();
        assert_eq!(r, Value::Integer(7));
    }

    #[test]
    fn mixed_addition_promotes_to_float() {
        let r = plus(&n(), &[Value::Float(34.2), Value::Integer(5)]).unwrap();
        assert_eq!(r, Value::Float(39.2));
    }

    #[test]
    fn unary_minus_negates() {
        let r = minus(&n(), &[Value::Integer(5)]).unwrap();
        assert_eq!(r, Value::Integer(-5));
    }

    #[test]
    fn integer_division_truncates() {
        let r = divide(&n(), &[Value::Integer(7), Value::Integer(2)]).unwrap();
        assert_eq!(r, Value::Integer(3));
    }

    #[test]
    fn times_all_integer_stays_integer() {
        let r = times(&n(), &[Value::Integer(2), Value::Integer(3), Value::Integer(4)]).unwrap();
        assert_eq!(r, Value::Integer(24));
    }
}
