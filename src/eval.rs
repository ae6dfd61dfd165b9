// ABOUTME: Tree-walking evaluator: special forms, application, and bootstrap

use crate::ast::Node;
use crate::builtins::register_builtins;
use crate::env::{IoStreams, SymbolTable};
use crate::error::{InterpError, InterpResult};
use crate::nodekind::NodeKind;
use crate::parser::parse_program;
use crate::stdlib::BUNDLED_LIBRARY_SOURCE;
use crate::value::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// Builds a ready-to-use top-level symbol table: native built-ins first,
/// then the bundled Simplex-source library evaluated on top of them, the
/// same two-stage bootstrap the reference evaluator performs in its
/// constructor.
pub fn bootstrap(io: Rc<IoStreams>) -> InterpResult<SymbolTable> {
    let mut table = SymbolTable::new(io);
    register_builtins(&mut table);
    let library = parse_program(BUNDLED_LIBRARY_SOURCE)?;
    eval_node(&library, &mut table)?;
    Ok(table)
}

/// Evaluates a full program: every top-level expression runs in turn
/// against `table`, which is mutated in place by top-level `let`s. Returns
/// the value of the last expression. Iterates rather than recursing at
/// this level so a long flat program doesn't grow the call stack.
pub fn eval_program(node: &Node, table: &mut SymbolTable) -> InterpResult<Value> {
    debug_assert_eq!(node.kind, NodeKind::Program);
    let mut result = Value::Invalid;
    for child in &node.children {
        result = eval_node(child, table)?;
    }
    Ok(result)
}

pub fn eval_node(node: &Node, table: &mut SymbolTable) -> InterpResult<Value> {
    match node.kind {
        NodeKind::Program => eval_program(node, table),
        NodeKind::Literal => eval_literal(node),
        NodeKind::Identifier => eval_identifier(node, table),
        NodeKind::Application => eval_application(node, table),
        other => unreachable!("evaluator invoked on non-evaluable node kind {other}"),
    }
}

fn eval_literal(node: &Node) -> InterpResult<Value> {
    let child = &node.children[0];
    Ok(match child.kind {
        NodeKind::Integer => Value::Integer(child.int),
        NodeKind::Float => Value::Float(child.float),
        NodeKind::String => Value::from_str(&child.string),
        other => unreachable!("literal child had unexpected kind {other}"),
    })
}

fn eval_identifier(node: &Node, table: &SymbolTable) -> InterpResult<Value> {
    match node.string.as_str() {
        "true" => return Ok(Value::Boolean(true)),
        "false" => return Ok(Value::Boolean(false)),
        _ => {}
    }
    table.get(&node.string).cloned().ok_or_else(|| {
        InterpError::runtime(node.line, node.col, format!("undeclared identifier: {}", node.string))
    })
}

/// Extracts the flat parameter-expression list out of an
/// `OptionalParameterList` node: empty if no parameters were given,
/// otherwise the children of its sole `ParameterList` child.
fn parameter_nodes(opt_param_list: &Node) -> &[Node] {
    match opt_param_list.children.first() {
        Some(parameter_list) => &parameter_list.children,
        None => &[],
    }
}

fn eval_parameters(opt_param_list: &Node, table: &mut SymbolTable) -> InterpResult<Vec<Value>> {
    parameter_nodes(opt_param_list)
        .iter()
        .map(|expr| eval_node(expr, table))
        .collect()
}

fn eval_application(node: &Node, table: &mut SymbolTable) -> InterpResult<Value> {
    let head = &node.children[0];
    let opt_param_list = &node.children[1];

    if head.kind == NodeKind::Identifier {
        match head.string.as_str() {
            "lambda" => return eval_lambda(node, opt_param_list, table),
            "let" => return eval_let(node, opt_param_list, table),
            "if" => return eval_if(node, opt_param_list, table),
            "cond" => return eval_cond(node, opt_param_list, table),
            _ => {}
        }
    }

    let function = eval_node(head, table)?;
    let args = eval_parameters(opt_param_list, table)?;
    call(&function, node, &args)
}

pub fn call(function: &Value, node: &Node, args: &[Value]) -> InterpResult<Value> {
    match function {
        Value::Function(f) => f(node, args),
        other => Err(InterpError::type_mismatch(
            node.line,
            node.col,
            crate::value::ValueKind::Function,
            other.kind(),
        )),
    }
}

/// `(lambda p1 p2 ... pn body)` — captures the current table by snapshot
/// (value copy, no live reference to the defining scope) and returns a
/// `Function` that augments that snapshot with the call's argument
/// bindings each time it's invoked.
fn eval_lambda(node: &Node, opt_param_list: &Node, table: &SymbolTable) -> InterpResult<Value> {
    let params = parameter_nodes(opt_param_list);
    if params.is_empty() {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            "`lambda` requires a body expression",
        ));
    }
    let (param_nodes, body_node) = params.split_at(params.len() - 1);
    for p in param_nodes {
        if p.kind != NodeKind::Identifier {
            return Err(InterpError::runtime(
                p.line,
                p.col,
                format!("`lambda` parameters must be identifiers, found {}", p.kind),
            ));
        }
    }
    let param_names: Vec<String> = param_nodes.iter().map(|p| p.string.clone()).collect();
    let body = Rc::new(body_node[0].clone());
    let captured = table.snapshot();

    Ok(Value::Function(Rc::new(move |call_node: &Node, args: &[Value]| {
        if args.len() != param_names.len() {
            return Err(InterpError::runtime(
                call_node.line,
                call_node.col,
                format!(
                    "expected {} argument{}, found {}",
                    param_names.len(),
                    if param_names.len() == 1 { "" } else { "s" },
                    args.len()
                ),
            ));
        }
        let extra: HashMap<String, Value> = param_names
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();
        let mut call_table = captured.augment(extra);
        eval_node(&body, &mut call_table)
    })))
}

/// `(let name expr)` — evaluates `expr` in the CURRENT table and binds
/// `name` there, mutating whichever scope is currently executing (the
/// top-level table, or the per-call frame inside a lambda body). Returns
/// `true`.
fn eval_let(node: &Node, opt_param_list: &Node, table: &mut SymbolTable) -> InterpResult<Value> {
    let params = parameter_nodes(opt_param_list);
    if params.len() != 2 || params[0].kind != NodeKind::Identifier {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            "`let` requires exactly 2 parameters: an identifier and an expression",
        ));
    }
    let value = eval_node(&params[1], table)?;
    table.set(params[0].string.clone(), value);
    Ok(Value::Boolean(true))
}

/// `(if cond then else)`.
fn eval_if(node: &Node, opt_param_list: &Node, table: &mut SymbolTable) -> InterpResult<Value> {
    let params = parameter_nodes(opt_param_list);
    if params.len() != 3 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            format!("expected 3 parameters to `if`, found {}", params.len()),
        ));
    }
    let condition = eval_node(&params[0], table)?;
    if condition.as_bool(&params[0])? {
        eval_node(&params[1], table)
    } else {
        eval_node(&params[2], table)
    }
}

/// `(cond c1 e1 c2 e2 ... ck ek)` — even arity, first true condition wins.
fn eval_cond(node: &Node, opt_param_list: &Node, table: &mut SymbolTable) -> InterpResult<Value> {
    let params = parameter_nodes(opt_param_list);
    if params.len() % 2 != 0 {
        return Err(InterpError::runtime(
            node.line,
            node.col,
            "`cond` must take an even number of parameters (pairs of condition and expression)",
        ));
    }
    let mut pairs = params.chunks(2);
    while let Some([condition_node, expr_node]) = pairs.next() {
        let condition = eval_node(condition_node, table)?;
        if condition.as_bool(condition_node)? {
            return eval_node(expr_node, table);
        }
    }
    Err(InterpError::runtime(
        node.line,
        node.col,
        "`cond` expression did not return a value (no condition evaluated to true)",
    ))
}
