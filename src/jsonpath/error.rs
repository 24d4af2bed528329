//! Error types for path compilation.

use thiserror::Error;

/// Errors that can occur while compiling a path expression.
///
/// Every variant is reported as an invalid path expression; the variants only
/// differ in how much context they carry about the offending construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Unexpected character at a specific position.
    #[error("Invalid path expression: unexpected '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// Unexpected end of input.
    #[error("Invalid path expression: unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },
    /// Invalid syntax with description.
    #[error("Invalid path expression: {message}")]
    InvalidSyntax { message: String },
}

impl PathError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        PathError::InvalidSyntax {
            message: message.into(),
        }
    }

    pub(crate) fn unexpected(position: usize, found: char, expected: impl Into<String>) -> Self {
        PathError::UnexpectedToken {
            position,
            found: found.to_string(),
            expected: expected.into(),
        }
    }

    pub(crate) fn end(expected: impl Into<String>) -> Self {
        PathError::UnexpectedEnd {
            expected: expected.into(),
        }
    }
}
