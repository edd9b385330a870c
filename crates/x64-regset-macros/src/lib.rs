//! Compile-time register set literals for [`x64-regset`](https://crates.io/crates/x64-regset).
//!
//! Provides the [`regset!`] macro that parses register-set text at compile
//! time and expands to a `RegisterSet` constant expression.
//!
//! # Usage
//!
//! ```rust,ignore
//! use x64_regset::RegisterSet;
//! use x64_regset_macros::regset;
//!
//! const SCRATCH: RegisterSet = regset!("rax, rcx, rdx, r8, r9, r10, r11");
//! const FLAGS: RegisterSet = regset!("{eflags.cf, eflags.zf}");
//! ```

use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};
use x64_regset::lexer::{tokenize, TokenKind};
use x64_regset::ParseError;

/// Parse register-set text at compile time, producing a `RegisterSet`.
///
/// # Syntax
///
/// ```rust,ignore
/// regset!("name, name, ...")
/// ```
///
/// The text accepts the same forms as `RegisterSet::from_str`: registers
/// (`eax`, `%ymm3`), unit pseudo-registers (`fpu_opcode`) and dotted bit
/// fields (`mxcsr.daz`), with or without surrounding braces.
///
/// # Compile-time errors
///
/// If the text names an unknown register or is malformed, the macro emits a
/// `compile_error!` at the literal naming the offending entry and its
/// line:column inside the text.
#[proc_macro]
pub fn regset(input: TokenStream) -> TokenStream {
    match regset_impl(input) {
        Ok(ts) => ts,
        Err(err) => err.into_compile_error(),
    }
}

// ─── Implementation ─────────────────────────────────────────────────────────

fn regset_impl(input: TokenStream) -> Result<TokenStream, Diagnostic> {
    let mut tokens = input.into_iter().peekable();
    let (source, span) = parse_string_literal(&mut tokens)?;
    if let Some(extra) = tokens.next() {
        return Err(Diagnostic::new(
            extra.span(),
            "unexpected extra tokens after register list",
        ));
    }
    let set = x64_regset::parse_set(&source)
        .map_err(|e| Diagnostic::new(span, &describe_error(&source, &e)))?;
    Ok(lanes_to_expr(set.lanes()))
}

/// Names the list entry an error points at, with its position inside the literal.
fn describe_error(source: &str, err: &ParseError) -> String {
    let at = err.span();
    let entry = entry_number(source, at.offset);
    match err {
        ParseError::UnknownName { name, .. } => format!(
            "`{name}` (entry {entry} of the register list, at {at}) is not a register, unit or bit field"
        ),
        ParseError::UnexpectedToken {
            found, expected, ..
        } => format!(
            "unexpected `{found}` in entry {entry} of the register list at {at}, expected {expected}"
        ),
        ParseError::UnexpectedEnd { expected, .. } => {
            format!("register list ends early at {at}, expected {expected}")
        }
    }
}

/// 1-based position of the comma-separated entry containing `offset`.
fn entry_number(source: &str, offset: usize) -> usize {
    let commas = match tokenize(source) {
        Ok(tokens) => tokens
            .iter()
            .filter(|tok| tok.kind == TokenKind::Comma && tok.span.offset < offset)
            .count(),
        // Lexing failed; count raw commas up to the bad character.
        Err(_) => source.get(..offset).map_or(0, |head| head.matches(',').count()),
    };
    commas + 1
}

fn parse_string_literal(
    tokens: &mut std::iter::Peekable<proc_macro::token_stream::IntoIter>,
) -> Result<(String, Span), Diagnostic> {
    let tt = tokens
        .next()
        .ok_or_else(|| {
            Diagnostic::new(Span::call_site(), "expected register list string literal")
        })?;
    // `macro_rules!` forwarding wraps fragments in invisible groups.
    if let TokenTree::Group(group) = &tt {
        if group.delimiter() == Delimiter::None {
            let mut inner = group.stream().into_iter().peekable();
            return parse_string_literal(&mut inner);
        }
    }
    let TokenTree::Literal(lit) = &tt else {
        return Err(Diagnostic::new(
            tt.span(),
            "expected string literal",
        ));
    };
    let raw = lit.to_string();
    let content = if raw.starts_with("r#\"") {
        raw.strip_prefix("r#\"")
            .and_then(|s| s.strip_suffix("\"#"))
            .ok_or_else(|| Diagnostic::new(tt.span(), "malformed raw string"))?
    } else if raw.starts_with("r\"") {
        raw.strip_prefix("r\"")
            .and_then(|s| s.strip_suffix('"'))
            .ok_or_else(|| Diagnostic::new(tt.span(), "malformed raw string"))?
    } else if raw.starts_with('"') {
        let inner = raw
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .ok_or_else(|| Diagnostic::new(tt.span(), "malformed string literal"))?;
        return Ok((unescape_string(inner), tt.span()));
    } else {
        return Err(Diagnostic::new(
            tt.span(),
            "expected string literal",
        ));
    };
    Ok((content.to_string(), tt.span()))
}

/// Register names need only the whitespace escapes.
fn unescape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn lanes_to_expr(lanes: [u64; 4]) -> TokenStream {
    let inner = lanes
        .iter()
        .map(|lane| format!("{lane:#018x}u64"))
        .collect::<Vec<_>>()
        .join(", ");
    let code = format!("::x64_regset::RegisterSet::from_lanes([{inner}])");
    code.parse().expect("generated code should parse")
}

// ─── Diagnostics ────────────────────────────────────────────────────────────

/// A `compile_error!` anchored at one span of the macro input.
struct Diagnostic {
    message: String,
    span: Span,
}

impl Diagnostic {
    fn new(span: Span, message: &str) -> Self {
        Self {
            message: message.to_string(),
            span,
        }
    }

    /// Builds `compile_error!("...")` token by token so every token carries the span.
    fn into_compile_error(self) -> TokenStream {
        let mut message = Literal::string(&self.message);
        message.set_span(self.span);
        let mut args = Group::new(
            Delimiter::Parenthesis,
            TokenStream::from(TokenTree::Literal(message)),
        );
        args.set_span(self.span);
        let mut bang = Punct::new('!', Spacing::Alone);
        bang.set_span(self.span);
        [
            TokenTree::Ident(Ident::new("compile_error", self.span)),
            TokenTree::Punct(bang),
            TokenTree::Group(args),
        ]
        .into_iter()
        .collect()
    }
}
