// ABOUTME: Structured parse/runtime/type errors, rendered as "LINE|COL: message"

use crate::nodekind::NodeKind;
use crate::value::ValueKind;
use thiserror::Error;

/// The three error kinds the interpreter can raise. All of them carry the
/// source location of the offending token so the rendered message can be
/// used directly as a diagnostic, matching the reference implementation's
/// `LINE|COL: ...` wire format byte for byte.
#[derive(Debug, Error, Clone)]
pub enum InterpError {
    #[error("{line}|{col}: parse error while attempting to parse {node_kind}: expected {expected}, found {actual}")]
    Parse {
        node_kind: NodeKind,
        expected: String,
        actual: String,
        line: usize,
        col: usize,
    },

    #[error("{line}|{col}: {message}")]
    Runtime {
        message: String,
        line: usize,
        col: usize,
    },

    #[error("{line}|{col}: type mismatch error: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
        line: usize,
        col: usize,
    },
}

impl InterpError {
    pub fn parse(
        node_kind: NodeKind,
        expected: impl Into<String>,
        actual: impl Into<String>,
        line: usize,
        col: usize,
    ) -> Self {
        InterpError::Parse {
            node_kind,
            expected: expected.into(),
            actual: actual.into(),
            line,
            col,
        }
    }

    pub fn parse_byte(
        node_kind: NodeKind,
        expected: impl Into<String>,
        actual: u8,
        line: usize,
        col: usize,
    ) -> Self {
        InterpError::Parse {
            node_kind,
            expected: expected.into(),
            actual: (actual as char).to_string(),
            line,
            col,
        }
    }

    pub fn runtime(line: usize, col: usize, message: impl Into<String>) -> Self {
        InterpError::Runtime {
            message: message.into(),
            line,
            col,
        }
    }

    pub fn type_mismatch(line: usize, col: usize, expected: ValueKind, actual: ValueKind) -> Self {
        InterpError::TypeMismatch {
            expected,
            actual,
            line,
            col,
        }
    }
}

pub type InterpResult<T> = Result<T, InterpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_renders_line_col_prefix() {
        let e = InterpError::parse(NodeKind::Identifier, "EOF", "(", 4, 2);
        assert_eq!(
            e.to_string(),
            "4|2: parse error while attempting to parse identifier: expected EOF, found ("
        );
    }

    #[test]
    fn runtime_error_renders_line_col_prefix() {
        let e = InterpError::runtime(1, 9, "undeclared identifier: x");
        assert_eq!(e.to_string(), "1|9: undeclared identifier: x");
    }

    #[test]
    fn type_mismatch_renders_kind_names() {
        let e = InterpError::type_mismatch(2, 5, ValueKind::Cons, ValueKind::Integer);
        assert_eq!(
            e.to_string(),
            "2|5: type mismatch error: expected cons, found integer"
        );
    }
}
