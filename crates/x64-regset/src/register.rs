//! The x86-64 register model consumed by register sets.
//!
//! [`Register`] names every architectural register a set can hold.  Each one
//! maps to exactly one [`Element`] through [`Register::element`]; the element
//! carries the class and number that decide which set bits the register
//! claims.

use core::fmt;
use core::str::FromStr;

use crate::element::{Element, ElementKind};

/// x86-64 register.
///
/// Covers the general-purpose registers at every width, the instruction
/// pointer, segment registers, SSE/AVX vector registers, MMX registers and the
/// x87 stack.  Each variant encodes its own class and number
/// (see [`Register::element`] and [`Register::number`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Register {
    // -- 64-bit general-purpose registers (RAX–R15) --
    /// RAX — 64-bit accumulator.
    Rax,
    /// RCX — 64-bit counter.
    Rcx,
    /// RDX — 64-bit data.
    Rdx,
    /// RBX — 64-bit base.
    Rbx,
    /// RSP — 64-bit stack pointer.
    Rsp,
    /// RBP — 64-bit frame pointer.
    Rbp,
    /// RSI — 64-bit source index.
    Rsi,
    /// RDI — 64-bit destination index.
    Rdi,
    /// R8–R15 — extended 64-bit registers (require REX prefix).
    R8,
    /// Extended 64-bit register.
    R9,
    /// Extended 64-bit register.
    R10,
    /// Extended 64-bit register.
    R11,
    /// Extended 64-bit register.
    R12,
    /// Extended 64-bit register.
    R13,
    /// Extended 64-bit register.
    R14,
    /// Extended 64-bit register.
    R15,
    // -- 32-bit general-purpose registers --
    /// EAX — 32-bit accumulator.
    Eax,
    /// ECX — 32-bit counter.
    Ecx,
    /// EDX — 32-bit data.
    Edx,
    /// EBX — 32-bit base.
    Ebx,
    /// ESP — 32-bit stack pointer.
    Esp,
    /// EBP — 32-bit frame pointer.
    Ebp,
    /// ESI — 32-bit source index.
    Esi,
    /// EDI — 32-bit destination index.
    Edi,
    /// R8D–R15D — low 32 bits of extended registers.
    R8d,
    /// Low 32 bits of R9.
    R9d,
    /// Low 32 bits of R10.
    R10d,
    /// Low 32 bits of R11.
    R11d,
    /// Low 32 bits of R12.
    R12d,
    /// Low 32 bits of R13.
    R13d,
    /// Low 32 bits of R14.
    R14d,
    /// Low 32 bits of R15.
    R15d,
    // -- 16-bit general-purpose registers --
    /// AX — 16-bit accumulator.
    Ax,
    /// CX — 16-bit counter.
    Cx,
    /// DX — 16-bit data.
    Dx,
    /// BX — 16-bit base.
    Bx,
    /// SP — 16-bit stack pointer.
    Sp,
    /// BP — 16-bit frame pointer.
    Bp,
    /// SI — 16-bit source index.
    Si,
    /// DI — 16-bit destination index.
    Di,
    /// R8W–R15W — low 16 bits of extended registers.
    R8w,
    /// Low 16 bits of R9.
    R9w,
    /// Low 16 bits of R10.
    R10w,
    /// Low 16 bits of R11.
    R11w,
    /// Low 16 bits of R12.
    R12w,
    /// Low 16 bits of R13.
    R13w,
    /// Low 16 bits of R14.
    R14w,
    /// Low 16 bits of R15.
    R15w,
    // -- 8-bit general-purpose registers --
    /// AL — low byte of RAX.
    Al,
    /// CL — low byte of RCX.
    Cl,
    /// DL — low byte of RDX.
    Dl,
    /// BL — low byte of RBX.
    Bl,
    /// SPL — low byte of RSP (requires REX).
    Spl,
    /// BPL — low byte of RBP (requires REX).
    Bpl,
    /// SIL — low byte of RSI (requires REX).
    Sil,
    /// DIL — low byte of RDI (requires REX).
    Dil,
    /// R8B–R15B — low byte of extended registers.
    R8b,
    /// Low byte of R9.
    R9b,
    /// Low byte of R10.
    R10b,
    /// Low byte of R11.
    R11b,
    /// Low byte of R12.
    R12b,
    /// Low byte of R13.
    R13b,
    /// Low byte of R14.
    R14b,
    /// Low byte of R15.
    R15b,
    // -- Legacy high-byte registers --
    /// AH — high byte of AX (incompatible with REX prefix).
    Ah,
    /// CH — high byte of CX (incompatible with REX prefix).
    Ch,
    /// DH — high byte of DX (incompatible with REX prefix).
    Dh,
    /// BH — high byte of BX (incompatible with REX prefix).
    Bh,
    // -- Instruction pointer --
    /// RIP — 64-bit instruction pointer (for RIP-relative addressing).
    Rip,
    /// EIP — 32-bit instruction pointer.
    Eip,
    // -- Segment registers, in `sreg` encoding order --
    /// ES — extra segment.
    Es,
    /// CS — code segment.
    Cs,
    /// SS — stack segment.
    Ss,
    /// DS — data segment.
    Ds,
    /// FS — additional segment (used for TLS on x86-64 Linux).
    Fs,
    /// GS — additional segment (used for TLS on x86-64 Windows/macOS).
    Gs,
    // -- 128-bit SSE registers --
    /// XMM0 — SSE register 0.
    Xmm0,
    /// SSE register 1.
    Xmm1,
    /// SSE register 2.
    Xmm2,
    /// SSE register 3.
    Xmm3,
    /// SSE register 4.
    Xmm4,
    /// SSE register 5.
    Xmm5,
    /// SSE register 6.
    Xmm6,
    /// SSE register 7.
    Xmm7,
    /// XMM8–XMM15 — extended SSE registers (require REX prefix).
    Xmm8,
    /// Extended SSE register 9.
    Xmm9,
    /// Extended SSE register 10.
    Xmm10,
    /// Extended SSE register 11.
    Xmm11,
    /// Extended SSE register 12.
    Xmm12,
    /// Extended SSE register 13.
    Xmm13,
    /// Extended SSE register 14.
    Xmm14,
    /// Extended SSE register 15.
    Xmm15,
    // -- 256-bit AVX registers --
    /// YMM0 — AVX register 0.
    Ymm0,
    /// AVX register 1.
    Ymm1,
    /// AVX register 2.
    Ymm2,
    /// AVX register 3.
    Ymm3,
    /// AVX register 4.
    Ymm4,
    /// AVX register 5.
    Ymm5,
    /// AVX register 6.
    Ymm6,
    /// AVX register 7.
    Ymm7,
    /// YMM8–YMM15 — extended AVX registers.
    Ymm8,
    /// Extended AVX register 9.
    Ymm9,
    /// Extended AVX register 10.
    Ymm10,
    /// Extended AVX register 11.
    Ymm11,
    /// Extended AVX register 12.
    Ymm12,
    /// Extended AVX register 13.
    Ymm13,
    /// Extended AVX register 14.
    Ymm14,
    /// Extended AVX register 15.
    Ymm15,
    // -- MMX registers --
    /// MM0 — MMX register 0 (aliases the x87 stack storage).
    Mm0,
    /// MMX register 1.
    Mm1,
    /// MMX register 2.
    Mm2,
    /// MMX register 3.
    Mm3,
    /// MMX register 4.
    Mm4,
    /// MMX register 5.
    Mm5,
    /// MMX register 6.
    Mm6,
    /// MMX register 7.
    Mm7,
    // -- x87 stack registers --
    /// ST0 — top of the x87 register stack.
    St0,
    /// x87 stack register 1.
    St1,
    /// x87 stack register 2.
    St2,
    /// x87 stack register 3.
    St3,
    /// x87 stack register 4.
    St4,
    /// x87 stack register 5.
    St5,
    /// x87 stack register 6.
    St6,
    /// x87 stack register 7.
    St7,
}

/// 64-bit registers by number.
const QUADS: [Register; 16] = [
    Register::Rax,
    Register::Rcx,
    Register::Rdx,
    Register::Rbx,
    Register::Rsp,
    Register::Rbp,
    Register::Rsi,
    Register::Rdi,
    Register::R8,
    Register::R9,
    Register::R10,
    Register::R11,
    Register::R12,
    Register::R13,
    Register::R14,
    Register::R15,
];

/// 32-bit registers by number.
const DOUBLES: [Register; 16] = [
    Register::Eax,
    Register::Ecx,
    Register::Edx,
    Register::Ebx,
    Register::Esp,
    Register::Ebp,
    Register::Esi,
    Register::Edi,
    Register::R8d,
    Register::R9d,
    Register::R10d,
    Register::R11d,
    Register::R12d,
    Register::R13d,
    Register::R14d,
    Register::R15d,
];

/// 16-bit registers by number.
const WORDS: [Register; 16] = [
    Register::Ax,
    Register::Cx,
    Register::Dx,
    Register::Bx,
    Register::Sp,
    Register::Bp,
    Register::Si,
    Register::Di,
    Register::R8w,
    Register::R9w,
    Register::R10w,
    Register::R11w,
    Register::R12w,
    Register::R13w,
    Register::R14w,
    Register::R15w,
];

/// Low-byte registers by number.
const BYTES: [Register; 16] = [
    Register::Al,
    Register::Cl,
    Register::Dl,
    Register::Bl,
    Register::Spl,
    Register::Bpl,
    Register::Sil,
    Register::Dil,
    Register::R8b,
    Register::R9b,
    Register::R10b,
    Register::R11b,
    Register::R12b,
    Register::R13b,
    Register::R14b,
    Register::R15b,
];

/// High-byte registers by number minus 4.
const HIGH_BYTES: [Register; 4] = [Register::Ah, Register::Ch, Register::Dh, Register::Bh];

/// Segment registers by `sreg` number.
const SREGS: [Register; 6] = [
    Register::Es,
    Register::Cs,
    Register::Ss,
    Register::Ds,
    Register::Fs,
    Register::Gs,
];

/// SSE registers by number.
const XMMS: [Register; 16] = [
    Register::Xmm0,
    Register::Xmm1,
    Register::Xmm2,
    Register::Xmm3,
    Register::Xmm4,
    Register::Xmm5,
    Register::Xmm6,
    Register::Xmm7,
    Register::Xmm8,
    Register::Xmm9,
    Register::Xmm10,
    Register::Xmm11,
    Register::Xmm12,
    Register::Xmm13,
    Register::Xmm14,
    Register::Xmm15,
];

/// AVX registers by number.
const YMMS: [Register; 16] = [
    Register::Ymm0,
    Register::Ymm1,
    Register::Ymm2,
    Register::Ymm3,
    Register::Ymm4,
    Register::Ymm5,
    Register::Ymm6,
    Register::Ymm7,
    Register::Ymm8,
    Register::Ymm9,
    Register::Ymm10,
    Register::Ymm11,
    Register::Ymm12,
    Register::Ymm13,
    Register::Ymm14,
    Register::Ymm15,
];

/// MMX registers by number.
const MMS: [Register; 8] = [
    Register::Mm0,
    Register::Mm1,
    Register::Mm2,
    Register::Mm3,
    Register::Mm4,
    Register::Mm5,
    Register::Mm6,
    Register::Mm7,
];

/// x87 stack registers by number.
const STS: [Register; 8] = [
    Register::St0,
    Register::St1,
    Register::St2,
    Register::St3,
    Register::St4,
    Register::St5,
    Register::St6,
    Register::St7,
];

impl Register {
    /// Every register, in declaration order.
    pub const ALL: [Register; 124] = [
        Register::Rax,
        Register::Rcx,
        Register::Rdx,
        Register::Rbx,
        Register::Rsp,
        Register::Rbp,
        Register::Rsi,
        Register::Rdi,
        Register::R8,
        Register::R9,
        Register::R10,
        Register::R11,
        Register::R12,
        Register::R13,
        Register::R14,
        Register::R15,
        Register::Eax,
        Register::Ecx,
        Register::Edx,
        Register::Ebx,
        Register::Esp,
        Register::Ebp,
        Register::Esi,
        Register::Edi,
        Register::R8d,
        Register::R9d,
        Register::R10d,
        Register::R11d,
        Register::R12d,
        Register::R13d,
        Register::R14d,
        Register::R15d,
        Register::Ax,
        Register::Cx,
        Register::Dx,
        Register::Bx,
        Register::Sp,
        Register::Bp,
        Register::Si,
        Register::Di,
        Register::R8w,
        Register::R9w,
        Register::R10w,
        Register::R11w,
        Register::R12w,
        Register::R13w,
        Register::R14w,
        Register::R15w,
        Register::Al,
        Register::Cl,
        Register::Dl,
        Register::Bl,
        Register::Spl,
        Register::Bpl,
        Register::Sil,
        Register::Dil,
        Register::R8b,
        Register::R9b,
        Register::R10b,
        Register::R11b,
        Register::R12b,
        Register::R13b,
        Register::R14b,
        Register::R15b,
        Register::Ah,
        Register::Ch,
        Register::Dh,
        Register::Bh,
        Register::Rip,
        Register::Eip,
        Register::Es,
        Register::Cs,
        Register::Ss,
        Register::Ds,
        Register::Fs,
        Register::Gs,
        Register::Xmm0,
        Register::Xmm1,
        Register::Xmm2,
        Register::Xmm3,
        Register::Xmm4,
        Register::Xmm5,
        Register::Xmm6,
        Register::Xmm7,
        Register::Xmm8,
        Register::Xmm9,
        Register::Xmm10,
        Register::Xmm11,
        Register::Xmm12,
        Register::Xmm13,
        Register::Xmm14,
        Register::Xmm15,
        Register::Ymm0,
        Register::Ymm1,
        Register::Ymm2,
        Register::Ymm3,
        Register::Ymm4,
        Register::Ymm5,
        Register::Ymm6,
        Register::Ymm7,
        Register::Ymm8,
        Register::Ymm9,
        Register::Ymm10,
        Register::Ymm11,
        Register::Ymm12,
        Register::Ymm13,
        Register::Ymm14,
        Register::Ymm15,
        Register::Mm0,
        Register::Mm1,
        Register::Mm2,
        Register::Mm3,
        Register::Mm4,
        Register::Mm5,
        Register::Mm6,
        Register::Mm7,
        Register::St0,
        Register::St1,
        Register::St2,
        Register::St3,
        Register::St4,
        Register::St5,
        Register::St6,
        Register::St7,
    ];

    /// Set element for this register.
    ///
    /// `rip` and `eip` both map to the instruction-pointer unit.
    #[must_use]
    pub const fn element(self) -> Element {
        Element::new(self.kind(), self.number())
    }

    /// Register class this register belongs to.
    #[must_use]
    pub const fn kind(self) -> ElementKind {
        use Register::*;
        match self {
            Rax | Rcx | Rdx | Rbx | Rsp | Rbp | Rsi | Rdi | R8 | R9 | R10 | R11 | R12 | R13
            | R14 | R15 => ElementKind::Quad,
            Eax | Ecx | Edx | Ebx | Esp | Ebp | Esi | Edi | R8d | R9d | R10d | R11d | R12d
            | R13d | R14d | R15d => ElementKind::Double,
            Ax | Cx | Dx | Bx | Sp | Bp | Si | Di | R8w | R9w | R10w | R11w | R12w | R13w
            | R14w | R15w => ElementKind::Word,
            Al | Cl | Dl | Bl | Spl | Bpl | Sil | Dil | R8b | R9b | R10b | R11b | R12b | R13b
            | R14b | R15b => ElementKind::Byte,
            Ah | Ch | Dh | Bh => ElementKind::HighByte,
            Rip | Eip => ElementKind::Rip,
            Es | Cs | Ss | Ds | Fs | Gs => ElementKind::Sreg,
            Xmm0 | Xmm1 | Xmm2 | Xmm3 | Xmm4 | Xmm5 | Xmm6 | Xmm7 | Xmm8 | Xmm9 | Xmm10 | Xmm11
            | Xmm12 | Xmm13 | Xmm14 | Xmm15 => ElementKind::Xmm,
            Ymm0 | Ymm1 | Ymm2 | Ymm3 | Ymm4 | Ymm5 | Ymm6 | Ymm7 | Ymm8 | Ymm9 | Ymm10 | Ymm11
            | Ymm12 | Ymm13 | Ymm14 | Ymm15 => ElementKind::Ymm,
            Mm0 | Mm1 | Mm2 | Mm3 | Mm4 | Mm5 | Mm6 | Mm7 => ElementKind::Mm,
            St0 | St1 | St2 | St3 | St4 | St5 | St6 | St7 => ElementKind::St,
        }
    }

    /// Register number within its class.
    ///
    /// General-purpose and vector registers report 0-15 (REX-extended
    /// registers report 8-15).  The high-byte registers report their encoding
    /// slot 4-7, segment registers their `sreg` encoding
    /// (es=0, cs=1, ss=2, ds=3, fs=4, gs=5).
    #[must_use]
    pub const fn number(self) -> u8 {
        use Register::*;
        match self {
            Rax | Eax | Ax | Al | Xmm0 | Ymm0 | Mm0 | St0 | Es | Rip | Eip => 0,
            Rcx | Ecx | Cx | Cl | Xmm1 | Ymm1 | Mm1 | St1 | Cs => 1,
            Rdx | Edx | Dx | Dl | Xmm2 | Ymm2 | Mm2 | St2 | Ss => 2,
            Rbx | Ebx | Bx | Bl | Xmm3 | Ymm3 | Mm3 | St3 | Ds => 3,
            Rsp | Esp | Sp | Spl | Ah | Xmm4 | Ymm4 | Mm4 | St4 | Fs => 4,
            Rbp | Ebp | Bp | Bpl | Ch | Xmm5 | Ymm5 | Mm5 | St5 | Gs => 5,
            Rsi | Esi | Si | Sil | Dh | Xmm6 | Ymm6 | Mm6 | St6 => 6,
            Rdi | Edi | Di | Dil | Bh | Xmm7 | Ymm7 | Mm7 | St7 => 7,
            R8 | R8d | R8w | R8b | Xmm8 | Ymm8 => 8,
            R9 | R9d | R9w | R9b | Xmm9 | Ymm9 => 9,
            R10 | R10d | R10w | R10b | Xmm10 | Ymm10 => 10,
            R11 | R11d | R11w | R11b | Xmm11 | Ymm11 => 11,
            R12 | R12d | R12w | R12b | Xmm12 | Ymm12 => 12,
            R13 | R13d | R13w | R13b | Xmm13 | Ymm13 => 13,
            R14 | R14d | R14w | R14b | Xmm14 | Ymm14 => 14,
            R15 | R15d | R15w | R15b | Xmm15 | Ymm15 => 15,
        }
    }

    /// Whether this is an extended register (number 8-15) requiring
    /// REX/VEX.R, .X or .B.
    #[must_use]
    pub const fn is_extended(self) -> bool {
        self.number() >= 8
    }

    /// Whether this is a high-byte register (AH, CH, DH, BH).
    /// These cannot be used with REX prefix.
    #[must_use]
    pub const fn is_high_byte(self) -> bool {
        matches!(self.kind(), ElementKind::HighByte)
    }

    /// Size of the register in bits.
    #[must_use]
    pub const fn size_bits(self) -> u16 {
        match self.kind() {
            ElementKind::Byte | ElementKind::HighByte => 8,
            ElementKind::Word | ElementKind::Sreg => 16,
            ElementKind::Double => 32,
            ElementKind::Quad | ElementKind::Mm => 64,
            ElementKind::Rip => {
                if matches!(self, Register::Eip) {
                    32
                } else {
                    64
                }
            }
            ElementKind::St => 80,
            ElementKind::Xmm => 128,
            ElementKind::Ymm => 256,
            _ => 0,
        }
    }

    /// The register an element names, if it names one.
    ///
    /// The instruction-pointer unit resolves to `rip`.
    #[must_use]
    pub fn from_element(element: Element) -> Option<Register> {
        let i = usize::from(element.index());
        let table: &[Register] = match element.kind() {
            ElementKind::Quad => &QUADS,
            ElementKind::Double => &DOUBLES,
            ElementKind::Word => &WORDS,
            ElementKind::Byte => &BYTES,
            ElementKind::HighByte => return HIGH_BYTES.get(i.checked_sub(4)?).copied(),
            ElementKind::Sreg => &SREGS,
            ElementKind::Xmm => &XMMS,
            ElementKind::Ymm => &YMMS,
            ElementKind::Mm => &MMS,
            ElementKind::St => &STS,
            ElementKind::Rip => return Some(Register::Rip),
            _ => return None,
        };
        table.get(i).copied()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero-allocation: write Debug chars lowercased directly to the formatter.
        use fmt::Write as _;
        struct LowerWriter<'a, 'b>(&'a mut fmt::Formatter<'b>);
        impl fmt::Write for LowerWriter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                for c in s.chars() {
                    self.0.write_char(c.to_ascii_lowercase())?;
                }
                Ok(())
            }
        }
        write!(LowerWriter(f), "{:?}", self)
    }
}

/// Error returned by [`Register::from_str`] for an unrecognized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRegister;

impl fmt::Display for UnknownRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown x86-64 register name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownRegister {}

impl FromStr for Register {
    type Err = UnknownRegister;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_register(s).ok_or(UnknownRegister)
    }
}

/// Lowercase into a stack buffer; names longer than the buffer are truncated
/// and therefore never match.
fn to_lower_buf<'b>(s: &str, buf: &'b mut [u8]) -> &'b str {
    let len = s.len().min(buf.len());
    buf[..len].copy_from_slice(&s.as_bytes()[..len]);
    buf[..len].make_ascii_lowercase();
    // Input was valid UTF-8 and ASCII lowercase preserves validity,
    // so from_utf8 only fails when truncation split a code point.
    core::str::from_utf8(&buf[..len]).unwrap_or("")
}

/// Parse a register name — **case-insensitive**, zero heap allocations.
///
/// Accepts an optional AT&T `%` prefix (`%rax`).
#[must_use]
pub fn parse_register(name: &str) -> Option<Register> {
    let name = name.strip_prefix('%').unwrap_or(name);
    if name.len() > 8 {
        return None;
    }
    // Stack-based lowercase (register names are at most 5 chars).
    let mut buf = [0u8; 8];
    parse_register_lower(to_lower_buf(name, &mut buf))
}

/// Inner register parser — expects **already-lowered** input.
fn parse_register_lower(name: &str) -> Option<Register> {
    use Register::*;
    match name {
        "rax" => Some(Rax),
        "rcx" => Some(Rcx),
        "rdx" => Some(Rdx),
        "rbx" => Some(Rbx),
        "rsp" => Some(Rsp),
        "rbp" => Some(Rbp),
        "rsi" => Some(Rsi),
        "rdi" => Some(Rdi),
        "r8" => Some(R8),
        "r9" => Some(R9),
        "r10" => Some(R10),
        "r11" => Some(R11),
        "r12" => Some(R12),
        "r13" => Some(R13),
        "r14" => Some(R14),
        "r15" => Some(R15),
        "eax" => Some(Eax),
        "ecx" => Some(Ecx),
        "edx" => Some(Edx),
        "ebx" => Some(Ebx),
        "esp" => Some(Esp),
        "ebp" => Some(Ebp),
        "esi" => Some(Esi),
        "edi" => Some(Edi),
        "r8d" => Some(R8d),
        "r9d" => Some(R9d),
        "r10d" => Some(R10d),
        "r11d" => Some(R11d),
        "r12d" => Some(R12d),
        "r13d" => Some(R13d),
        "r14d" => Some(R14d),
        "r15d" => Some(R15d),
        "ax" => Some(Ax),
        "cx" => Some(Cx),
        "dx" => Some(Dx),
        "bx" => Some(Bx),
        "sp" => Some(Sp),
        "bp" => Some(Bp),
        "si" => Some(Si),
        "di" => Some(Di),
        "r8w" => Some(R8w),
        "r9w" => Some(R9w),
        "r10w" => Some(R10w),
        "r11w" => Some(R11w),
        "r12w" => Some(R12w),
        "r13w" => Some(R13w),
        "r14w" => Some(R14w),
        "r15w" => Some(R15w),
        "al" => Some(Al),
        "cl" => Some(Cl),
        "dl" => Some(Dl),
        "bl" => Some(Bl),
        "spl" => Some(Spl),
        "bpl" => Some(Bpl),
        "sil" => Some(Sil),
        "dil" => Some(Dil),
        "r8b" => Some(R8b),
        "r9b" => Some(R9b),
        "r10b" => Some(R10b),
        "r11b" => Some(R11b),
        "r12b" => Some(R12b),
        "r13b" => Some(R13b),
        "r14b" => Some(R14b),
        "r15b" => Some(R15b),
        "ah" => Some(Ah),
        "ch" => Some(Ch),
        "dh" => Some(Dh),
        "bh" => Some(Bh),
        "rip" => Some(Rip),
        "eip" => Some(Eip),
        "es" => Some(Es),
        "cs" => Some(Cs),
        "ss" => Some(Ss),
        "ds" => Some(Ds),
        "fs" => Some(Fs),
        "gs" => Some(Gs),
        "xmm0" => Some(Xmm0),
        "xmm1" => Some(Xmm1),
        "xmm2" => Some(Xmm2),
        "xmm3" => Some(Xmm3),
        "xmm4" => Some(Xmm4),
        "xmm5" => Some(Xmm5),
        "xmm6" => Some(Xmm6),
        "xmm7" => Some(Xmm7),
        "xmm8" => Some(Xmm8),
        "xmm9" => Some(Xmm9),
        "xmm10" => Some(Xmm10),
        "xmm11" => Some(Xmm11),
        "xmm12" => Some(Xmm12),
        "xmm13" => Some(Xmm13),
        "xmm14" => Some(Xmm14),
        "xmm15" => Some(Xmm15),
        "ymm0" => Some(Ymm0),
        "ymm1" => Some(Ymm1),
        "ymm2" => Some(Ymm2),
        "ymm3" => Some(Ymm3),
        "ymm4" => Some(Ymm4),
        "ymm5" => Some(Ymm5),
        "ymm6" => Some(Ymm6),
        "ymm7" => Some(Ymm7),
        "ymm8" => Some(Ymm8),
        "ymm9" => Some(Ymm9),
        "ymm10" => Some(Ymm10),
        "ymm11" => Some(Ymm11),
        "ymm12" => Some(Ymm12),
        "ymm13" => Some(Ymm13),
        "ymm14" => Some(Ymm14),
        "ymm15" => Some(Ymm15),
        "mm0" => Some(Mm0),
        "mm1" => Some(Mm1),
        "mm2" => Some(Mm2),
        "mm3" => Some(Mm3),
        "mm4" => Some(Mm4),
        "mm5" => Some(Mm5),
        "mm6" => Some(Mm6),
        "mm7" => Some(Mm7),
        "st0" => Some(St0),
        "st1" => Some(St1),
        "st2" => Some(St2),
        "st3" => Some(St3),
        "st4" => Some(St4),
        "st5" => Some(St5),
        "st6" => Some(St6),
        "st7" => Some(St7),
        // Common aliases
        "st" => Some(St0),
        _ => None,
    }
}
