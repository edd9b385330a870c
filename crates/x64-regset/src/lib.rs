//! # x64-regset — Register Sets for x86-64
//!
//! `x64-regset` models a set of x86-64 registers, register bit-fields and
//! pseudo-registers as four `u64` lanes.  Sub-register aliasing is built into
//! the bit layout: inserting `rax` makes `eax`, `ax`, `al` and `ah` members,
//! while inserting `al` alone does not make `rax` one.  Every operation is a
//! handful of bitwise instructions on a `Copy` value, which suits liveness,
//! clobber and dependency analyses in code generators and binary tools.
//!
//! ## Quick Start
//!
//! ```rust
//! use x64_regset::{Eflags, MemoryOperand, Register, RegisterSet};
//!
//! let mut live = RegisterSet::empty() + Register::Rax + Eflags::ZF;
//! live += &MemoryOperand::based(Register::Rbx).with_index(Register::Rcx, 8);
//!
//! assert!(live.contains(Register::Ah));
//! assert!(live.contains(Register::Ecx));
//! assert!(!live.contains(Register::Rdx));
//! assert_eq!(live.to_string(), "{rax, rcx, rbx, eflags.zf}");
//! ```
//!
//! ## Features
//!
//! - **Alias-aware** — general-purpose registers at 8/16/32/64 bits, legacy
//!   high bytes, `xmm`/`ymm`, `mm`, `st`, segment registers, `rip`.
//! - **Machine-state fields** — individual EFLAGS, x87 control/status/tag and
//!   MXCSR fields, plus the FPU last-data/instruction/opcode units.
//! - **Set algebra** — `|`, `&`, `-`, `!` and their assign forms.
//! - **Text form** — `Display` and `FromStr` over `{rax, xmm3, eflags.cf}`.
//! - **`no_std` + `alloc`**, optional `serde`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Pedantic lint policy ─────────────────────────────────────────────────
// Mask layout code is dense hex and narrowing casts between index widths.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::unreadable_literal,
    clippy::match_same_arms,
    clippy::redundant_closure_for_method_calls,
    clippy::wildcard_imports,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::doc_markdown,
    clippy::too_many_lines,
    clippy::manual_let_else,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

extern crate alloc;

/// Named register sets: register classes and System V AMD64 conventions.
pub mod abi;
/// Set elements and the per-kind lane layout.
pub mod element;
/// EFLAGS, x87 and MXCSR bit fields; FPU pointer units.
pub mod env;
/// Error types and source-span diagnostics.
pub mod error;
/// Zero-copy lexer for register-set text.
pub mod lexer;
/// Memory operands.
pub mod operand;
/// Register-set text parser.
pub mod parser;
/// The four-lane register set.
pub mod reg_set;
/// x86-64 register model and name lookup.
pub mod register;

// Re-exports
pub use element::{Element, ElementKind, Layout};
pub use env::{
    parse_field, Eflags, FpuControl, FpuData, FpuInstruction, FpuOpcode, FpuStatus, FpuTag, Mxcsr,
};
pub use error::{ParseError, Span};
pub use operand::MemoryOperand;
pub use parser::{parse_element, parse_set};
pub use reg_set::{Elements, RegisterSet};
pub use register::{parse_register, Register, UnknownRegister};
