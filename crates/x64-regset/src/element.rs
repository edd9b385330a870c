//! Set elements: a register class tag plus a small index.
//!
//! Every register, register bit-field, and pseudo-register that can live in a
//! [`RegisterSet`](crate::RegisterSet) is reduced to an [`Element`].  The
//! [`ElementKind::layout`] table is the only place that knows which lane a kind
//! occupies and which bits its mask template claims; insertion and containment
//! are written once against that table.

use core::fmt;
use core::ops::Range;

use crate::env::{
    Eflags, FpuControl, FpuData, FpuInstruction, FpuOpcode, FpuStatus, FpuTag, Mxcsr,
};
use crate::register::Register;

/// Mask templates, before the index shift.
///
/// Lane 0 uses a 16-bit stride: low bytes in bits 0-15, word (and high byte)
/// in 16-31, doubleword in 32-47, quadword in 48-63.  A wider template claims
/// the bits of every narrower alias at the same index.
pub(crate) mod mask {
    // Lane 0
    pub const LOW: u64 = 0x0000_0000_0000_0001;
    pub const HIGH: u64 = 0x0000_0000_0001_0000;
    pub const WORD: u64 = 0x0000_0000_0001_0001;
    pub const DOUBLE: u64 = 0x0000_0001_0001_0001;
    pub const QUAD: u64 = 0x0001_0001_0001_0001;

    // Lane 1
    pub const XMM: u64 = 0x0000_0000_0000_0001;
    pub const YMM: u64 = 0x0000_0000_0001_0001;
    pub const MM: u64 = 0x0000_0001_0000_0000;
    pub const ST: u64 = 0x0000_0100_0000_0000;
    pub const SREG: u64 = 0x0001_0000_0000_0000;
    pub const DATA: u64 = 0x0100_0000_0000_0000;
    pub const INSTR: u64 = 0x0200_0000_0000_0000;
    pub const OPCODE: u64 = 0x0400_0000_0000_0000;
    pub const RIP: u64 = 0x0800_0000_0000_0000;

    // Lane 2
    pub const EFLAG: u64 = 0x0000_0000_0000_0001;
    pub const CONTROL: u64 = 0x0000_0001_0000_0000;
    pub const STATUS: u64 = 0x0001_0000_0000_0000;

    // Lane 3
    pub const TAG: u64 = 0x0000_0000_0000_0001;
    pub const MXCSR: u64 = 0x0000_0000_0001_0000;
}

/// The register class of a set element.
///
/// Kinds in different lanes never alias.  Within lane 0 (general-purpose) and
/// lane 1 (vector), wider kinds contain narrower ones at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// Low byte of a general-purpose register (`al` … `r15b`), index 0-15.
    Byte,
    /// Legacy high byte (`ah`, `ch`, `dh`, `bh`), index 4-7.
    HighByte,
    /// 16-bit general-purpose register, index 0-15.
    Word,
    /// 32-bit general-purpose register, index 0-15.
    Double,
    /// 64-bit general-purpose register, index 0-15.
    Quad,
    /// 128-bit SSE register, index 0-15.
    Xmm,
    /// 256-bit AVX register, index 0-15.
    Ymm,
    /// MMX register, index 0-7.
    Mm,
    /// x87 stack register, index 0-7.
    St,
    /// Segment register, index 0-5.
    Sreg,
    /// FPU last data pointer.
    FpuData,
    /// FPU last instruction pointer.
    FpuInstruction,
    /// FPU last opcode.
    FpuOpcode,
    /// Instruction pointer.
    Rip,
    /// EFLAGS bit, index 0-31.
    Eflags,
    /// FPU control-word bit, index 0-15.
    FpuControl,
    /// FPU status-word bit, index 0-15.
    FpuStatus,
    /// FPU tag-word bit, index 0-15.
    FpuTag,
    /// MXCSR bit, index 0-15.
    Mxcsr,
}

/// Placement of an [`ElementKind`] inside a register set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Lane (0-3) that holds the kind.
    pub lane: usize,
    /// Bits claimed at index `bias`; shifted left by `index - bias`.
    pub template: u64,
    /// Lowest valid index.  Only the high-byte registers are biased (by 4).
    pub bias: u8,
}

impl ElementKind {
    /// All kinds, in lane order.
    pub const ALL: [ElementKind; 19] = [
        ElementKind::Byte,
        ElementKind::HighByte,
        ElementKind::Word,
        ElementKind::Double,
        ElementKind::Quad,
        ElementKind::Xmm,
        ElementKind::Ymm,
        ElementKind::Mm,
        ElementKind::St,
        ElementKind::Sreg,
        ElementKind::FpuData,
        ElementKind::FpuInstruction,
        ElementKind::FpuOpcode,
        ElementKind::Rip,
        ElementKind::Eflags,
        ElementKind::FpuControl,
        ElementKind::FpuStatus,
        ElementKind::FpuTag,
        ElementKind::Mxcsr,
    ];

    /// Lane, mask template and index bias for this kind.
    #[must_use]
    pub const fn layout(self) -> Layout {
        use ElementKind as K;
        let (lane, template, bias) = match self {
            K::Byte => (0, mask::LOW, 0),
            K::HighByte => (0, mask::HIGH, 4),
            K::Word => (0, mask::WORD, 0),
            K::Double => (0, mask::DOUBLE, 0),
            K::Quad => (0, mask::QUAD, 0),
            K::Xmm => (1, mask::XMM, 0),
            K::Ymm => (1, mask::YMM, 0),
            K::Mm => (1, mask::MM, 0),
            K::St => (1, mask::ST, 0),
            K::Sreg => (1, mask::SREG, 0),
            K::FpuData => (1, mask::DATA, 0),
            K::FpuInstruction => (1, mask::INSTR, 0),
            K::FpuOpcode => (1, mask::OPCODE, 0),
            K::Rip => (1, mask::RIP, 0),
            K::Eflags => (2, mask::EFLAG, 0),
            K::FpuControl => (2, mask::CONTROL, 0),
            K::FpuStatus => (2, mask::STATUS, 0),
            K::FpuTag => (3, mask::TAG, 0),
            K::Mxcsr => (3, mask::MXCSR, 0),
        };
        Layout {
            lane,
            template,
            bias,
        }
    }

    /// Index positions the kind's template can be shifted to.
    ///
    /// For bit-field kinds this spans the whole unit, reserved bits included;
    /// [`admits`](Self::admits) accepts only the defined fields.
    #[must_use]
    pub const fn indices(self) -> Range<u8> {
        use ElementKind as K;
        match self {
            K::Byte | K::Word | K::Double | K::Quad | K::Xmm | K::Ymm => 0..16,
            K::HighByte => 4..8,
            K::Mm | K::St => 0..8,
            K::Sreg => 0..6,
            K::FpuData | K::FpuInstruction | K::FpuOpcode | K::Rip => 0..1,
            K::Eflags => 0..32,
            K::FpuControl | K::FpuStatus | K::FpuTag | K::Mxcsr => 0..16,
        }
    }

    /// Whether `index` names an architecturally defined element of this kind.
    ///
    /// Registers admit their whole [`indices`](Self::indices) range; bit-field
    /// kinds admit a field's most significant bit and nothing else, so
    /// `eflags` bit 1 and the low bit of `fpu_tag.tag0` are rejected.
    #[must_use]
    pub const fn admits(self, index: u8) -> bool {
        use ElementKind as K;
        let range = self.indices();
        if index < range.start || index >= range.end {
            return false;
        }
        match self {
            K::Eflags | K::FpuControl | K::FpuStatus | K::FpuTag | K::Mxcsr => {
                let mut i = 0;
                while i < CANONICAL.len() {
                    let element = CANONICAL[i];
                    if element.kind as u8 == self as u8 && element.index == index {
                        return true;
                    }
                    i += 1;
                }
                false
            }
            _ => true,
        }
    }
}

/// A single register, register bit-field, or pseudo-register.
///
/// Construct one from a [`Register`], a bit-field constant such as
/// [`Eflags::CF`], or directly with [`Element::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawElement")
)]
pub struct Element {
    kind: ElementKind,
    index: u8,
}

/// Unvalidated wire form; deserialization goes through [`Element::checked`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawElement {
    kind: ElementKind,
    index: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawElement> for Element {
    type Error = &'static str;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        Element::checked(raw.kind, raw.index).ok_or("element index out of range for its kind")
    }
}

impl Element {
    /// Create an element.
    ///
    /// The index is trusted: an index the kind does not
    /// [`admit`](ElementKind::admits) panics in debug builds and yields
    /// meaningless bits otherwise.
    #[must_use]
    pub const fn new(kind: ElementKind, index: u8) -> Self {
        debug_assert!(kind.admits(index), "element index out of range");
        Self { kind, index }
    }

    /// Create an element, rejecting indices the kind does not admit.
    #[must_use]
    pub const fn checked(kind: ElementKind, index: u8) -> Option<Self> {
        if kind.admits(index) {
            Some(Self { kind, index })
        } else {
            None
        }
    }

    /// Register class.
    #[must_use]
    pub const fn kind(self) -> ElementKind {
        self.kind
    }

    /// Index within the class.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Lane and bits this element claims.
    #[must_use]
    pub const fn mask(self) -> (usize, u64) {
        let layout = self.kind.layout();
        (layout.lane, layout.template << (self.index - layout.bias))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ElementKind::FpuData => return f.write_str(FpuData::NAME),
            ElementKind::FpuInstruction => return f.write_str(FpuInstruction::NAME),
            ElementKind::FpuOpcode => return f.write_str(FpuOpcode::NAME),
            _ => {}
        }
        if let Some(reg) = Register::from_element(*self) {
            return write!(f, "{}", reg);
        }
        match crate::env::describe(self.kind, self.index) {
            Some((unit, field)) => write!(f, "{}.{}", unit, field),
            None => write!(f, "{:?}[{}]", self.kind, self.index),
        }
    }
}

impl From<Register> for Element {
    fn from(reg: Register) -> Self {
        reg.element()
    }
}

macro_rules! field_into_element {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(field: $ty) -> Self {
                    field.element()
                }
            }
        )*
    };
}

field_into_element!(Eflags, FpuControl, FpuStatus, FpuTag, Mxcsr);

/// Number of entries in [`CANONICAL`].
pub(crate) const CANONICAL_LEN: usize = 16 * 4
    + 4
    + 16 * 2
    + 8
    + 8
    + 6
    + 4
    + Eflags::ALL.len()
    + FpuControl::ALL.len()
    + FpuStatus::ALL.len()
    + FpuTag::ALL.len()
    + Mxcsr::ALL.len();

/// Every architecturally defined element, widest alias first per physical
/// register.  Drives iteration, rendering and [`RegisterSet::all_of`](crate::RegisterSet::all_of).
pub(crate) const CANONICAL: [Element; CANONICAL_LEN] = canonical();

const fn canonical() -> [Element; CANONICAL_LEN] {
    use ElementKind as K;

    let mut out = [Element {
        kind: K::Byte,
        index: 0,
    }; CANONICAL_LEN];
    let mut n = 0;

    macro_rules! push {
        ($kind:expr, $index:expr) => {{
            out[n] = Element {
                kind: $kind,
                index: $index,
            };
            n += 1;
        }};
    }
    macro_rules! push_fields {
        ($ty:ident, $kind:expr) => {{
            let mut i = 0;
            while i < $ty::ALL.len() {
                push!($kind, $ty::ALL[i].index());
                i += 1;
            }
        }};
    }

    let mut i = 0;
    while i < 16 {
        push!(K::Quad, i);
        push!(K::Double, i);
        push!(K::Word, i);
        push!(K::Byte, i);
        if i < 4 {
            push!(K::HighByte, i + 4);
        }
        i += 1;
    }
    let mut i = 0;
    while i < 16 {
        push!(K::Ymm, i);
        push!(K::Xmm, i);
        i += 1;
    }
    let mut i = 0;
    while i < 8 {
        push!(K::Mm, i);
        i += 1;
    }
    let mut i = 0;
    while i < 8 {
        push!(K::St, i);
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        push!(K::Sreg, i);
        i += 1;
    }
    push!(K::FpuData, 0);
    push!(K::FpuInstruction, 0);
    push!(K::FpuOpcode, 0);
    push!(K::Rip, 0);

    push_fields!(Eflags, K::Eflags);
    push_fields!(FpuControl, K::FpuControl);
    push_fields!(FpuStatus, K::FpuStatus);
    push_fields!(FpuTag, K::FpuTag);
    push_fields!(Mxcsr, K::Mxcsr);

    assert!(n == CANONICAL_LEN);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn templates_fit_their_lane() {
        for kind in ElementKind::ALL {
            let Some(top) = kind.indices().rev().find_map(|i| Element::checked(kind, i)) else {
                panic!("{:?} admits no index", kind);
            };
            let (lane, bits) = top.mask();
            assert_eq!(lane, kind.layout().lane);
            assert_eq!(
                bits.count_ones(),
                kind.layout().template.count_ones(),
                "{:?} template shifted out of its lane",
                kind
            );
        }
    }

    #[test]
    fn high_byte_lands_on_word_slot() {
        let (_, ah) = Element::new(ElementKind::HighByte, 4).mask();
        let (_, ax) = Element::new(ElementKind::Word, 0).mask();
        assert_eq!(ah, 1 << 16);
        assert_eq!(ax & ah, ah);
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(Element::checked(ElementKind::HighByte, 3).is_none());
        assert!(Element::checked(ElementKind::HighByte, 8).is_none());
        assert!(Element::checked(ElementKind::HighByte, 7).is_some());
        assert!(Element::checked(ElementKind::Sreg, 6).is_none());
        assert!(Element::checked(ElementKind::Rip, 1).is_none());
        assert!(Element::checked(ElementKind::Eflags, 21).is_some());
    }

    #[test]
    fn checked_rejects_reserved_field_bits() {
        assert!(Element::checked(ElementKind::Eflags, 1).is_none());
        assert!(Element::checked(ElementKind::Eflags, 31).is_none());
        assert!(Element::checked(ElementKind::Eflags, 12).is_none());
        assert!(Element::checked(ElementKind::FpuTag, 0).is_none());
        assert!(Element::checked(ElementKind::FpuTag, 1).is_some());
        assert!(Element::checked(ElementKind::FpuStatus, 11).is_none());
        assert!(Element::checked(ElementKind::FpuStatus, 13).is_some());
        assert!(Element::checked(ElementKind::Mxcsr, 13).is_none());
        assert!(Element::checked(ElementKind::Mxcsr, 14).is_some());
    }

    #[test]
    fn admitted_field_bits_match_universe() {
        for kind in ElementKind::ALL {
            let layout = kind.layout();
            for index in kind.indices() {
                let (_, bits) = Element { kind, index }.mask();
                let universe = crate::RegisterSet::universe().lanes()[layout.lane];
                let defined = (bits & universe) == bits;
                if kind.admits(index) {
                    assert!(defined, "{:?} {} admitted but outside universe", kind, index);
                }
            }
        }
    }

    #[test]
    fn canonical_entries_are_admitted_and_distinct() {
        for (i, a) in CANONICAL.iter().enumerate() {
            assert!(a.kind().admits(a.index()), "{:?}", a);
            for b in &CANONICAL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn element_display() {
        assert_eq!(Element::new(ElementKind::Quad, 0).to_string(), "rax");
        assert_eq!(Element::new(ElementKind::HighByte, 7).to_string(), "bh");
        assert_eq!(Element::new(ElementKind::Ymm, 12).to_string(), "ymm12");
        assert_eq!(Element::new(ElementKind::Sreg, 4).to_string(), "fs");
        assert_eq!(Element::new(ElementKind::Rip, 0).to_string(), "rip");
        assert_eq!(Element::new(ElementKind::FpuOpcode, 0).to_string(), "fpu_opcode");
        assert_eq!(Element::new(ElementKind::Eflags, 0).to_string(), "eflags.cf");
        assert_eq!(Element::new(ElementKind::Eflags, 13).to_string(), "eflags.iopl");
        assert_eq!(Element::new(ElementKind::FpuTag, 5).to_string(), "fpu_tag.tag2");
        assert_eq!(Element::new(ElementKind::Mxcsr, 6).to_string(), "mxcsr.daz");
    }
}
