// ABOUTME: Integration tests covering the documented end-to-end evaluation scenarios

use simplex::env::IoStreams;
use simplex::eval::{bootstrap, eval_program};
use simplex::parser::parse_program;
use simplex::value::Value;
use std::io::Cursor;

fn run(source: &str) -> Value {
    let io = IoStreams::new(Box::new(Cursor::new(Vec::new())), Box::new(Vec::new()));
    let mut table = bootstrap(io).expect("bootstrap should succeed");
    let program = parse_program(source).expect("program should parse");
    eval_program(&program, &mut table).expect("program should evaluate")
}

fn run_err(source: &str) -> simplex::error::InterpError {
    let io = IoStreams::new(Box::new(Cursor::new(Vec::new())), Box::new(Vec::new()));
    let mut table = bootstrap(io).expect("bootstrap should succeed");
    let program = parse_program(source).expect("program should parse");
    eval_program(&program, &mut table).expect_err("program should fail")
}

#[test]
fn integer_arithmetic() {
    assert_eq!(run("(+ 3 4)"), Value::Integer(7));
    assert_eq!(run("(* 3 4 5)"), Value::Integer(60));
    assert_eq!(run("(- 10 3)"), Value::Integer(7));
    assert_eq!(run("(/ 10 3)"), Value::Integer(3));
}

#[test]
fn float_promotion_on_mixed_arithmetic() {
    assert_eq!(run("(+ 34.2 5)"), Value::Float(39.2));
}

#[test]
fn lambda_defines_and_applies_a_two_argument_function() {
    let program = "(sequence (let add (lambda x y (+ x y))) (add 3 4))";
    assert_eq!(run(program), Value::Integer(7));
}

#[test]
fn let_sequence_threads_bindings_through_a_program() {
    assert_eq!(run("(sequence (let a 2) (let b 9) (+ a b))"), Value::Integer(11));
}

#[test]
fn if_selects_the_else_branch_on_false() {
    assert_eq!(run("(if false 'hello' 'world')"), Value::from_str("world"));
}

#[test]
fn cond_returns_the_first_matching_branch() {
    assert_eq!(
        run("(cond false 'foo' true 'bar' false 'baz')"),
        Value::from_str("bar")
    );
}

#[test]
fn lists_built_with_list_and_cons_compare_equal() {
    let via_list = run("(list 1 2 3)");
    let via_cons = run("(cons 1 (cons 2 (cons 3 nil)))");
    assert_eq!(via_list, via_cons);
}

#[test]
fn dict_get_set_round_trips_through_a_functional_update() {
    let program = "(sequence (let d (dict 'x' 1)) (let d2 (dict.set 'x' 2 d)) (list (dict.get 'x' d) (dict.get 'x' d2)))";
    let result = run(program);
    let expected = run("(list 1 2)");
    assert_eq!(result, expected);
}

#[test]
fn closures_capture_a_snapshot_not_a_live_reference() {
    let program = "(sequence (let x 1) (let f (lambda x)) (let x 2) (f))";
    assert_eq!(run(program), Value::Integer(1));
}

#[test]
fn bundled_append_and_reverse_compose() {
    let program = "(reverse (append (list 1 2) (list 3 4)))";
    let expected = run("(list 4 3 2 1)");
    assert_eq!(run(program), expected);
}

#[test]
fn undeclared_identifier_is_a_runtime_error() {
    let err = run_err("(+ unknownName 1)");
    assert!(err.to_string().contains("undeclared identifier: unknownName"));
}

#[test]
fn calling_a_non_function_is_a_type_mismatch() {
    let err = run_err("(5 1 2)");
    assert!(err.to_string().contains("type mismatch error"));
}

#[test]
fn cond_with_no_true_branch_is_a_runtime_error() {
    let err = run_err("(cond false 1 false 2)");
    assert!(err.to_string().contains("did not return a value"));
}

#[test]
fn help_builtin_returns_nil_without_arguments() {
    assert_eq!(run("(help)"), Value::Nil);
}

#[test]
fn unterminated_expression_is_a_parse_error() {
    let io = IoStreams::new(Box::new(Cursor::new(Vec::new())), Box::new(Vec::new()));
    let err = bootstrap(io)
        .and_then(|mut table| {
            let program = parse_program("(+ 1 2")?;
            eval_program(&program, &mut table)
        })
        .expect_err("unterminated expression should fail to parse");
    assert!(err.to_string().contains("parse error"));
}
