// ABOUTME: Recursive-descent parser turning source text into an AST of Node

use crate::ast::Node;
use crate::cursor::Cursor;
use crate::error::{InterpError, InterpResult};
use crate::nodekind::NodeKind;

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Consumes exactly `token` from the cursor or raises a parse error naming
/// `kind` as the node being attempted. Mirrors the source's `expect()`.
fn expect(kind: NodeKind, cursor: &mut Cursor, token: &str) -> InterpResult<()> {
    let (line, col) = (cursor.line(), cursor.col());
    if token.len() > cursor.size() {
        let remaining = String::from_utf8_lossy(cursor.remaining()).into_owned();
        return Err(InterpError::parse(kind, token, remaining, line, col));
    }
    let actual = String::from_utf8_lossy(&cursor.remaining()[..token.len()]).into_owned();
    if actual != token {
        return Err(InterpError::parse(kind, token, actual, line, col));
    }
    cursor.advance(token.len());
    Ok(())
}

/// Parses the whole program: a flat sequence of top-level expressions,
/// iterated rather than recursed so a long program doesn't exhaust the
/// call stack (see SPEC_FULL.md / DESIGN.md on recursion depth).
pub fn parse_program(source: &str) -> InterpResult<Node> {
    let mut cursor = Cursor::new(source);
    let mut program = Node::new(NodeKind::Program, 1, 1);
    loop {
        parse_optional_whitespace(&mut cursor)?;
        if cursor.size() == 0 {
            break;
        }
        program.children.push(parse_expression(&mut cursor)?);
    }
    Ok(program)
}

/// Parses exactly one top-level expression and returns it along with
/// however much source text still follows it (used by the REPL, which
/// evaluates one expression per line).
pub fn parse_one(source: &str) -> InterpResult<Node> {
    let mut cursor = Cursor::new(source);
    parse_optional_whitespace(&mut cursor)?;
    parse_expression(&mut cursor)
}

fn parse_expression(cursor: &mut Cursor) -> InterpResult<Node> {
    let kind = NodeKind::Expression;
    parse_optional_whitespace(cursor)?;
    if cursor.size() == 0 {
        return Err(InterpError::parse(kind, "(", "EOF", cursor.line(), cursor.col()));
    }
    let next = cursor.peek();
    let result = if next == b'(' {
        parse_application(cursor)?
    } else if next == b'\'' || next.is_ascii_digit() {
        parse_literal(cursor)?
    } else {
        parse_identifier(cursor)?
    };
    parse_optional_whitespace(cursor)?;
    Ok(result)
}

fn parse_application(cursor: &mut Cursor) -> InterpResult<Node> {
    let kind = NodeKind::Application;
    let (line, col) = (cursor.line(), cursor.col());
    expect(kind, cursor, "(")?;
    let mut node = Node::new(kind, line, col);
    node.children.push(parse_expression(cursor)?);
    node.children.push(parse_optional_parameter_list(cursor)?);
    parse_optional_whitespace(cursor)?;
    expect(kind, cursor, ")")?;
    Ok(node)
}

fn parse_literal(cursor: &mut Cursor) -> InterpResult<Node> {
    let kind = NodeKind::Literal;
    if cursor.size() == 0 {
        return Err(InterpError::parse(kind, "any valid literal", "EOF", cursor.line(), cursor.col()));
    }
    let (line, col) = (cursor.line(), cursor.col());
    let inner = if cursor.peek() == b'\'' {
        parse_string(cursor)?
    } else {
        parse_number(cursor)?
    };
    let mut node = Node::new(kind, line, col);
    node.children.push(inner);
    Ok(node)
}

fn parse_number(cursor: &mut Cursor) -> InterpResult<Node> {
    let kind = NodeKind::Number;
    let (line, col) = (cursor.line(), cursor.col());
    let mut text = String::new();
    let mut is_float = false;
    while cursor.size() > 0 {
        let next = cursor.peek();
        if !text.is_empty() && next == b'.' {
            text.push('.');
            is_float = true;
        } else {
            if is_whitespace(next) || next == b')' {
                break;
            }
            if !next.is_ascii_digit() {
                return Err(InterpError::parse_byte(
                    kind,
                    "digits 0 through 9",
                    next,
                    cursor.line(),
                    cursor.col(),
                ));
            }
            text.push(next as char);
        }
        cursor.next();
    }
    if is_float {
        let value: f64 = text.parse().map_err(|_| {
            InterpError::parse(kind, "a valid floating-point number", text.clone(), line, col)
        })?;
        Ok(Node::float(line, col, value))
    } else {
        let value: i64 = text.parse().map_err(|_| {
            InterpError::parse(kind, "a valid integer", text.clone(), line, col)
        })?;
        Ok(Node::integer(line, col, value))
    }
}

fn parse_string(cursor: &mut Cursor) -> InterpResult<Node> {
    let kind = NodeKind::String;
    let (line, col) = (cursor.line(), cursor.col());
    expect(kind, cursor, "'")?;
    let mut bytes: Vec<u8> = Vec::new();
    let mut found_end = false;
    while cursor.size() != 0 {
        let mut next = cursor.peek();
        if next == b'\'' {
            found_end = true;
            break;
        }
        if next == b'\\' {
            if cursor.size() < 2 {
                return Err(InterpError::parse(
                    kind,
                    "any character followed by escape sequence (\\)",
                    "EOF",
                    cursor.line(),
                    cursor.col(),
                ));
            }
            bytes.push(cursor.next());
            next = cursor.peek();
        }
        bytes.push(next);
        cursor.next();
    }
    if !found_end {
        return Err(InterpError::parse(kind, "end of string marker (')", "EOF", cursor.line(), cursor.col()));
    }
    expect(kind, cursor, "'")?;
    Ok(Node::string_node(line, col, String::from_utf8_lossy(&bytes).into_owned()))
}

fn parse_identifier(cursor: &mut Cursor) -> InterpResult<Node> {
    let kind = NodeKind::Identifier;
    if cursor.size() == 0 {
        return Err(InterpError::parse(kind, "any valid identifier", "EOF", cursor.line(), cursor.col()));
    }
    let (line, col) = (cursor.line(), cursor.col());
    let next = cursor.peek();
    if next == b'\'' {
        return Err(InterpError::parse_byte(
            kind,
            "non-whitespace character other than '\\'', '(' and ')'",
            next,
            cursor.line(),
            cursor.col(),
        ));
    }
    let mut bytes: Vec<u8> = Vec::new();
    while cursor.size() != 0 {
        let next = cursor.peek();
        if is_whitespace(next) || next == b')' {
            break;
        }
        if next == b'(' {
            return Err(InterpError::parse_byte(
                kind,
                "non-whitespace character other than '('",
                next,
                cursor.line(),
                cursor.col(),
            ));
        }
        bytes.push(next);
        cursor.next();
    }
    if bytes.is_empty() {
        let actual = if cursor.size() == 0 {
            "EOF".to_string()
        } else {
            (cursor.peek() as char).to_string()
        };
        return Err(InterpError::parse(kind, "at least one non-whitespace character", actual, line, col));
    }
    Ok(Node::identifier(line, col, String::from_utf8_lossy(&bytes).into_owned()))
}

fn parse_optional_whitespace(cursor: &mut Cursor) -> InterpResult<()> {
    if cursor.size() == 0 || !is_whitespace(cursor.peek()) {
        return Ok(());
    }
    parse_whitespace(cursor)
}

fn parse_whitespace(cursor: &mut Cursor) -> InterpResult<()> {
    let mut found = false;
    while cursor.size() != 0 {
        let next = cursor.peek();
        if is_whitespace(next) {
            found = true;
        } else if !found {
            return Err(InterpError::parse_byte(
                NodeKind::Whitespace,
                "Any of: ' ', \\r, \\n, \\t",
                next,
                cursor.line(),
                cursor.col(),
            ));
        } else {
            break;
        }
        cursor.next();
    }
    Ok(())
}

fn parse_optional_parameter_list(cursor: &mut Cursor) -> InterpResult<Node> {
    let kind = NodeKind::OptionalParameterList;
    let (line, col) = (cursor.line(), cursor.col());
    let mut node = Node::new(kind, line, col);
    if cursor.size() == 0 || cursor.peek() != b')' {
        let mut parameter_list = Node::new(NodeKind::ParameterList, cursor.line(), cursor.col());
        parse_parameter_list(cursor, &mut parameter_list)?;
        node.children.push(parameter_list);
    }
    Ok(node)
}

fn parse_parameter_list(cursor: &mut Cursor, node: &mut Node) -> InterpResult<()> {
    node.children.push(parse_expression(cursor)?);
    parse_optional_whitespace(cursor)?;
    if cursor.size() == 0 {
        return Err(InterpError::parse(
            NodeKind::ParameterList,
            "end of expression ')'",
            "EOF",
            cursor.line(),
            cursor.col(),
        ));
    }
    if cursor.peek() == b')' {
        return Ok(());
    }
    parse_parameter_list(cursor, node)
}
