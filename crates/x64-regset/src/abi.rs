//! Named register sets: register classes and the System V AMD64 calling
//! convention.
//!
//! All sets are `const` so they can seed liveness or clobber analyses without
//! runtime setup.

use crate::element::ElementKind;
use crate::env::{Eflags, FpuData, FpuInstruction, FpuOpcode};
use crate::reg_set::RegisterSet;
use crate::register::Register;

macro_rules! set {
    ($($elem:expr),* $(,)?) => {
        RegisterSet::empty()$(.with($elem.element()))*
    };
}

// ─── Register classes ───────────────────────────────────────────────────────

/// Every general-purpose register at every width, high bytes included.
pub const GENERAL_PURPOSE: RegisterSet = RegisterSet::all_of(ElementKind::Quad);

/// `ymm0`-`ymm15`, and therefore every `xmm` register.
pub const VECTOR: RegisterSet = RegisterSet::all_of(ElementKind::Ymm);

/// x87 and MMX state: the stack, the MMX aliases, the FPU pointer units and
/// every defined control, status and tag field.
pub const X87: RegisterSet = RegisterSet::all_of(ElementKind::St)
    .union(RegisterSet::all_of(ElementKind::Mm))
    .union(RegisterSet::all_of(ElementKind::FpuControl))
    .union(RegisterSet::all_of(ElementKind::FpuStatus))
    .union(RegisterSet::all_of(ElementKind::FpuTag))
    .union(set![FpuData, FpuInstruction, FpuOpcode]);

/// The arithmetic status flags: CF, PF, AF, ZF, SF, OF.
pub const STATUS_FLAGS: RegisterSet = set![
    Eflags::CF,
    Eflags::PF,
    Eflags::AF,
    Eflags::ZF,
    Eflags::SF,
    Eflags::OF,
];

/// Segment registers.
pub const SEGMENT: RegisterSet = RegisterSet::all_of(ElementKind::Sreg);

// ─── System V AMD64 ─────────────────────────────────────────────────────────

/// Integer and SSE argument registers: `rdi rsi rdx rcx r8 r9` and
/// `xmm0`-`xmm7`.
pub const SYSV_ARGUMENTS: RegisterSet = set![
    Register::Rdi,
    Register::Rsi,
    Register::Rdx,
    Register::Rcx,
    Register::R8,
    Register::R9,
    Register::Xmm0,
    Register::Xmm1,
    Register::Xmm2,
    Register::Xmm3,
    Register::Xmm4,
    Register::Xmm5,
    Register::Xmm6,
    Register::Xmm7,
];

/// Return-value registers: `rax rdx`, `xmm0 xmm1`, `st0 st1`.
pub const SYSV_RETURNS: RegisterSet = set![
    Register::Rax,
    Register::Rdx,
    Register::Xmm0,
    Register::Xmm1,
    Register::St0,
    Register::St1,
];

/// Registers a callee must preserve: `rbx rsp rbp r12`-`r15`.
pub const SYSV_CALLEE_SAVED: RegisterSet = set![
    Register::Rbx,
    Register::Rsp,
    Register::Rbp,
    Register::R12,
    Register::R13,
    Register::R14,
    Register::R15,
];

/// Registers a call may clobber: the remaining general-purpose registers,
/// all vector registers, x87/MMX registers and the status flags.
pub const SYSV_CALLER_SAVED: RegisterSet = set![
    Register::Rax,
    Register::Rcx,
    Register::Rdx,
    Register::Rsi,
    Register::Rdi,
    Register::R8,
    Register::R9,
    Register::R10,
    Register::R11,
]
.union(VECTOR)
.union(RegisterSet::all_of(ElementKind::St))
.union(RegisterSet::all_of(ElementKind::Mm))
.union(STATUS_FLAGS);
