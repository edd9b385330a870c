//! Error types and source span tracking for register-set text.

use alloc::string::String;
use core::fmt;

/// Source location for diagnostics.
///
/// Tracks the line, column, byte offset, and length of a token in the
/// register-set text being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number (byte offset within line).
    pub col: u32,
    /// 0-based byte offset from start of source.
    pub offset: usize,
    /// Byte length of the spanned region.
    pub len: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub fn new(line: u32, col: u32, offset: usize, len: usize) -> Self {
        Self {
            line,
            col,
            offset,
            len,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Error produced when register-set text cannot be parsed.
///
/// The set algebra itself never fails; only the textual front end does.
/// Serialize-only: `expected` is a static description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseError {
    /// Name is neither a register nor a known machine-state field.
    UnknownName {
        /// The name that was not recognized.
        name: String,
        /// Source location of the name.
        span: Span,
    },

    /// A character or token that does not belong in a register list.
    UnexpectedToken {
        /// The offending text.
        found: String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Source location of the token.
        span: Span,
    },

    /// Input ended before the list was closed.
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
        /// Location just past the last byte of input.
        span: Span,
    },
}

impl ParseError {
    /// Source location the error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnknownName { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEnd { span, .. } => *span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownName { name, span } => {
                write!(f, "{}: unknown register or field '{}'", span, name)
            }
            ParseError::UnexpectedToken {
                found,
                expected,
                span,
            } => {
                write!(f, "{}: expected {}, found '{}'", span, expected, found)
            }
            ParseError::UnexpectedEnd { expected, span } => {
                write!(f, "{}: expected {}, found end of input", span, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
