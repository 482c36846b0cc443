//! Parse error types for language packs.

use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input ended inside a section.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// A section keyword appeared a second time.
    #[error("duplicate section '{section}' at {line}:{column}")]
    DuplicateSection {
        line: usize,
        column: usize,
        section: String,
    },
}
