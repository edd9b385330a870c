//! Lexer for register-set text.
//!
//! Produces [`Token`]s for the list syntax `{rax, xmm3, eflags.cf}` and the
//! raw-lane suffix `; lanes=[0x1, 0x0, 0x0, 0x0]`.  Each
//! token borrows its text from the input and carries a [`Span`] so parse
//! errors can point at the offending name.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::{ParseError, Span};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// Token classification.
    pub kind: TokenKind,
    /// Source text of the token.
    pub text: &'src str,
    /// Source location.
    pub span: Span,
}

/// The type of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Register, unit or dotted field name (`rax`, `fpu_data`, `eflags.cf`).
    Ident,
    /// Comma separator.
    Comma,
    /// Open brace `{`.
    OpenBrace,
    /// Close brace `}`.
    CloseBrace,
    /// Percent sign `%` (AT&T register prefix).
    Percent,
    /// Semicolon `;` before the raw-lane suffix.
    Semicolon,
    /// Equals sign `=`.
    Equals,
    /// Open bracket `[`.
    OpenBracket,
    /// Close bracket `]`.
    CloseBracket,
    /// Integer literal, decimal or `0x` hexadecimal; validated by the parser.
    Number,
    /// End of input.
    Eof,
}

#[inline]
fn is_ident_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

#[inline]
fn is_ident_continue(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_' || ch == b'.'
}

/// Tokenize register-set text.
///
/// Whitespace (including newlines) separates tokens; `#` starts a comment
/// that runs to end of line.  The returned vector always ends with
/// [`TokenKind::Eof`].
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedToken`] for a character that cannot start
/// any token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut pos = 0;
    let mut line: u32 = 1;
    let mut col: u32 = 1;

    while pos < len {
        let ch = bytes[pos];

        if ch == b' ' || ch == b'\t' || ch == b'\r' {
            pos += 1;
            col += 1;
            continue;
        }

        if ch == b'\n' {
            pos += 1;
            line += 1;
            col = 1;
            continue;
        }

        // Comment: # to EOL
        if ch == b'#' {
            while pos < len && bytes[pos] != b'\n' {
                pos += 1;
            }
            continue;
        }

        let punct = match ch {
            b',' => Some(TokenKind::Comma),
            b'{' => Some(TokenKind::OpenBrace),
            b'}' => Some(TokenKind::CloseBrace),
            b'%' => Some(TokenKind::Percent),
            b';' => Some(TokenKind::Semicolon),
            b'=' => Some(TokenKind::Equals),
            b'[' => Some(TokenKind::OpenBracket),
            b']' => Some(TokenKind::CloseBracket),
            _ => None,
        };
        if let Some(kind) = punct {
            tokens.push(Token {
                kind,
                text: &source[pos..=pos],
                span: Span::new(line, col, pos, 1),
            });
            pos += 1;
            col += 1;
            continue;
        }

        if is_ident_start(ch) || ch.is_ascii_digit() {
            let kind = if ch.is_ascii_digit() {
                TokenKind::Number
            } else {
                TokenKind::Ident
            };
            let start = pos;
            while pos < len && is_ident_continue(bytes[pos]) {
                pos += 1;
            }
            tokens.push(Token {
                kind,
                text: &source[start..pos],
                span: Span::new(line, col, start, pos - start),
            });
            col += (pos - start) as u32;
            continue;
        }

        // Report the whole (possibly multi-byte) character.
        let found = source[pos..].chars().next().unwrap_or(ch as char).to_string();
        return Err(ParseError::UnexpectedToken {
            span: Span::new(line, col, pos, found.len()),
            found,
            expected: "register name, ',' or '}'",
        });
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        text: "",
        span: Span::new(line, col, len, 0),
    });
    Ok(tokens)
}
