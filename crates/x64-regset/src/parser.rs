//! Parser for register-set text.
//!
//! Accepts the form [`RegisterSet`]'s `Display` writes, `{rax, xmm3, eflags.cf}`,
//! as well as a bare list without braces (`rax, xmm3`).  Names are resolved
//! case-insensitively; registers may carry an AT&T `%` prefix.  A trailing
//! comma is allowed.
//!
//! Bits that no name covers are written as a raw-lane suffix,
//! `{rcx; lanes=[0x1000000000000, 0x0, 0x0, 0x0]}`; the lanes are ORed into
//! the set.

use alloc::string::ToString;

use crate::element::Element;
use crate::env::parse_field;
use crate::error::ParseError;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::reg_set::RegisterSet;
use crate::register::parse_register;

/// Resolve a single name to a set element: a register (`eax`, `%ymm2`), a
/// unit pseudo-register (`fpu_data`) or a dotted bit field (`mxcsr.rc`).
#[must_use]
pub fn parse_element(name: &str) -> Option<Element> {
    parse_register(name)
        .map(|reg| reg.element())
        .or_else(|| parse_field(name))
}

/// Parse register-set text.
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the first unknown name, misplaced
/// token, or missing closing brace.
///
/// # Examples
///
/// ```rust
/// use x64_regset::{parse_set, Eflags, Register};
///
/// let set = parse_set("{rdi, rsi, eflags.df}").unwrap();
/// assert!(set.contains(Register::Sil));
/// assert!(set.contains(Eflags::DF));
/// ```
pub fn parse_set(source: &str) -> Result<RegisterSet, ParseError> {
    let tokens = tokenize(source)?;
    Parser::new(&tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Token<'a> {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    fn advance(&mut self) -> Token<'a> {
        let tok = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn unexpected(tok: Token<'_>, expected: &'static str) -> ParseError {
        if tok.kind == TokenKind::Eof {
            ParseError::UnexpectedEnd {
                expected,
                span: tok.span,
            }
        } else {
            ParseError::UnexpectedToken {
                found: tok.text.to_string(),
                expected,
                span: tok.span,
            }
        }
    }

    fn parse(&mut self) -> Result<RegisterSet, ParseError> {
        let braced = self.peek().kind == TokenKind::OpenBrace;
        if braced {
            self.advance();
        }
        let close = if braced {
            TokenKind::CloseBrace
        } else {
            TokenKind::Eof
        };

        let mut set = RegisterSet::empty();
        while self.peek().kind != close {
            if self.at_lanes() {
                set |= self.parse_lanes()?;
                break;
            }
            set.insert(self.parse_name()?);
            let tok = self.peek();
            match tok.kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::Semicolon => {
                    self.advance();
                    if !self.at_lanes() {
                        return Err(Self::unexpected(self.peek(), "'lanes='"));
                    }
                }
                kind if kind == close => {}
                _ => {
                    return Err(Self::unexpected(
                        tok,
                        if braced { "',' or '}'" } else { "','" },
                    ));
                }
            }
        }
        let tok = self.advance();
        if tok.kind != close {
            return Err(Self::unexpected(
                tok,
                if braced { "'}'" } else { "end of input" },
            ));
        }

        if braced {
            let tok = self.peek();
            if tok.kind != TokenKind::Eof {
                return Err(Self::unexpected(tok, "end of input"));
            }
        }
        Ok(set)
    }

    /// `lanes=` starts the raw-lane suffix; `lanes` alone is not a name.
    fn at_lanes(&self) -> bool {
        let tok = self.peek();
        tok.kind == TokenKind::Ident
            && tok.text.eq_ignore_ascii_case("lanes")
            && self
                .tokens
                .get(self.pos + 1)
                .is_some_and(|next| next.kind == TokenKind::Equals)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        let tok = self.advance();
        if tok.kind == kind {
            Ok(())
        } else {
            Err(Self::unexpected(tok, expected))
        }
    }

    /// `lanes=[l0, l1, l2, l3]`
    fn parse_lanes(&mut self) -> Result<RegisterSet, ParseError> {
        self.advance();
        self.expect(TokenKind::Equals, "'='")?;
        self.expect(TokenKind::OpenBracket, "'['")?;
        let mut lanes = [0u64; 4];
        for (i, lane) in lanes.iter_mut().enumerate() {
            if i > 0 {
                self.expect(TokenKind::Comma, "','")?;
            }
            *lane = self.parse_lane()?;
        }
        self.expect(TokenKind::CloseBracket, "']'")?;
        Ok(RegisterSet::from_lanes(lanes))
    }

    fn parse_lane(&mut self) -> Result<u64, ParseError> {
        let tok = self.advance();
        if tok.kind != TokenKind::Number {
            return Err(Self::unexpected(tok, "lane value"));
        }
        let value = match tok
            .text
            .strip_prefix("0x")
            .or_else(|| tok.text.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => tok.text.parse(),
        };
        value.map_err(|_| ParseError::UnexpectedToken {
            found: tok.text.to_string(),
            expected: "64-bit lane value",
            span: tok.span,
        })
    }

    fn parse_name(&mut self) -> Result<Element, ParseError> {
        let mut tok = self.advance();
        if tok.kind == TokenKind::Percent {
            tok = self.advance();
        }
        if tok.kind != TokenKind::Ident {
            return Err(Self::unexpected(tok, "register name"));
        }
        parse_element(tok.text).ok_or_else(|| ParseError::UnknownName {
            name: tok.text.to_string(),
            span: tok.span,
        })
    }
}
