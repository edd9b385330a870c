//! [`RegisterSet`]: a fixed four-lane bit set over the register file.
//!
//! Each lane is a `u64` holding register classes that never alias classes in
//! another lane:
//!
//! | Lane | Contents |
//! |------|----------|
//! | 0 | general-purpose registers at every width, plus the legacy high bytes |
//! | 1 | XMM/YMM, MMX, x87 stack, segment registers, FPU pointer units, RIP |
//! | 2 | EFLAGS, FPU control word and FPU status word fields |
//! | 3 | FPU tag word and MXCSR fields |
//!
//! Insertion ORs an element's shifted mask template into its lane; because a
//! wide register's template includes the bits of its narrower aliases,
//! `contains` respects physical overlap without per-class logic.

use core::fmt;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign,
};
use core::str::FromStr;

use crate::element::{Element, ElementKind, CANONICAL};
use crate::env::{
    Eflags, FpuControl, FpuData, FpuInstruction, FpuOpcode, FpuStatus, FpuTag, Mxcsr,
};
use crate::error::ParseError;
use crate::operand::MemoryOperand;
use crate::register::Register;

/// Every architecturally meaningful bit, per lane.
const UNIVERSE: [u64; 4] = [
    0xffff_ffff_ffff_ffff,
    0x0f3f_ffff_ffff_ffff,
    0xe7ff_1a3f_003f_6fd5,
    0x0000_0000_dfff_aaaa,
];

/// A set of registers, register bit-fields and pseudo-registers.
///
/// Plain `Copy` value; equality compares all four lanes bit for bit.
///
/// # Examples
///
/// ```rust
/// use x64_regset::{Register, RegisterSet};
///
/// let set = RegisterSet::empty() + Register::Rax;
/// assert!(set.contains(Register::Eax));
/// assert!(set.contains(Register::Ah));
/// assert!(!set.contains(Register::Cl));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterSet {
    lanes: [u64; 4],
}

impl RegisterSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { lanes: [0; 4] }
    }

    /// Every architecturally valid register and field.
    ///
    /// Only lane 0 is all ones; the other lanes leave reserved positions
    /// clear.
    #[must_use]
    pub const fn universe() -> Self {
        Self { lanes: UNIVERSE }
    }

    /// Build a set from raw lanes.  Bits outside the universe are kept.
    #[must_use]
    pub const fn from_lanes(lanes: [u64; 4]) -> Self {
        Self { lanes }
    }

    /// Raw lanes.
    #[must_use]
    pub const fn lanes(&self) -> [u64; 4] {
        self.lanes
    }

    /// Copy of `self` with `element` added.
    #[must_use]
    pub const fn with(self, element: Element) -> Self {
        let (lane, bits) = element.mask();
        let mut lanes = self.lanes;
        lanes[lane] |= bits;
        Self { lanes }
    }

    /// Union, usable in `const` context.  Same as `self | other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            lanes: [
                self.lanes[0] | other.lanes[0],
                self.lanes[1] | other.lanes[1],
                self.lanes[2] | other.lanes[2],
                self.lanes[3] | other.lanes[3],
            ],
        }
    }

    /// Add `element` in place.
    pub fn insert(&mut self, element: impl Into<Element>) -> &mut Self {
        let (lane, bits) = element.into().mask();
        self.lanes[lane] |= bits;
        self
    }

    /// Add the registers a memory operand reads: base, index and segment
    /// override, each when present.
    pub fn insert_memory(&mut self, mem: &MemoryOperand) -> &mut Self {
        for reg in mem.registers() {
            self.insert(reg);
        }
        self
    }

    /// Whether every bit `element` claims is present.
    ///
    /// Bits are shared between aliases, so this can hold for a register that
    /// was never inserted itself: `al` plus `ah` together satisfy `ax`.
    #[must_use]
    pub fn contains(&self, element: impl Into<Element>) -> bool {
        self.contains_element(element.into())
    }

    const fn contains_element(&self, element: Element) -> bool {
        let (lane, bits) = element.mask();
        self.lanes[lane] & bits == bits
    }

    /// Whether no bit is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lanes[0] == 0 && self.lanes[1] == 0 && self.lanes[2] == 0 && self.lanes[3] == 0
    }

    /// Whether the two sets share any bit, i.e. touch overlapping storage.
    #[must_use]
    pub fn intersects(&self, other: &RegisterSet) -> bool {
        !(*self & *other).is_empty()
    }

    /// Whether every bit of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &RegisterSet) -> bool {
        (*self - *other).is_empty()
    }

    /// Every architecturally defined element of one kind.
    ///
    /// For bit-field kinds only named fields are included, so the result is
    /// always within [`universe`](Self::universe).
    #[must_use]
    pub const fn all_of(kind: ElementKind) -> Self {
        let mut set = Self::empty();
        let mut i = 0;
        while i < CANONICAL.len() {
            let element = CANONICAL[i];
            if element.kind() as u8 == kind as u8 {
                set = set.with(element);
            }
            i += 1;
        }
        set
    }

    /// Members of the set, one per physical register or field.
    ///
    /// A register is reported at the widest width the set fully contains;
    /// narrower aliases it covers are skipped.  Bits that do not make up a
    /// whole element are never reported; see [`unnamed`](Self::unnamed).
    #[must_use]
    pub fn elements(&self) -> Elements {
        Elements {
            set: *self,
            covered: Self::empty(),
            next: 0,
        }
    }

    /// Bits of the set that [`elements`](Self::elements) does not account for.
    ///
    /// These are alias slots left behind by a difference (`rax - eax` keeps
    /// the upper slot of `rax`) and bits outside the universe.  The union of
    /// the reported elements and this remainder is the set itself.
    ///
    /// ```rust
    /// use x64_regset::{Register, RegisterSet};
    ///
    /// let partial = RegisterSet::from(Register::Rax) - RegisterSet::from(Register::Eax);
    /// assert_eq!(partial.elements().count(), 0);
    /// assert_eq!(partial.unnamed(), partial);
    /// ```
    #[must_use]
    pub fn unnamed(&self) -> Self {
        *self - self.elements().collect::<Self>()
    }
}

/// Iterator returned by [`RegisterSet::elements`].
#[derive(Debug, Clone)]
pub struct Elements {
    set: RegisterSet,
    covered: RegisterSet,
    next: usize,
}

impl Iterator for Elements {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        while let Some(&element) = CANONICAL.get(self.next) {
            self.next += 1;
            if self.set.contains_element(element) && !self.covered.contains_element(element) {
                self.covered.insert(element);
                return Some(element);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CANONICAL.len() - self.next))
    }
}

// ─── Set algebra ────────────────────────────────────────────────────────────

impl BitOrAssign for RegisterSet {
    fn bitor_assign(&mut self, rhs: Self) {
        for (l, r) in self.lanes.iter_mut().zip(rhs.lanes) {
            *l |= r;
        }
    }
}

impl BitAndAssign for RegisterSet {
    fn bitand_assign(&mut self, rhs: Self) {
        for (l, r) in self.lanes.iter_mut().zip(rhs.lanes) {
            *l &= r;
        }
    }
}

impl SubAssign for RegisterSet {
    fn sub_assign(&mut self, rhs: Self) {
        for (l, r) in self.lanes.iter_mut().zip(rhs.lanes) {
            *l &= !r;
        }
    }
}

impl BitOr for RegisterSet {
    type Output = RegisterSet;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl BitAnd for RegisterSet {
    type Output = RegisterSet;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

impl Sub for RegisterSet {
    type Output = RegisterSet;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Raw bitwise complement of every lane.
///
/// Reserved positions are flipped too, so `!RegisterSet::empty()` is all
/// ones rather than [`RegisterSet::universe`].  Use `universe() - set` for
/// the complement within the universe.
impl Not for RegisterSet {
    type Output = RegisterSet;

    fn not(self) -> Self {
        Self {
            lanes: self.lanes.map(|lane| !lane),
        }
    }
}

// ─── Element operators ──────────────────────────────────────────────────────

macro_rules! element_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Add<$ty> for RegisterSet {
                type Output = RegisterSet;

                fn add(mut self, rhs: $ty) -> RegisterSet {
                    self.insert(rhs);
                    self
                }
            }

            impl AddAssign<$ty> for RegisterSet {
                fn add_assign(&mut self, rhs: $ty) {
                    self.insert(rhs);
                }
            }

            impl From<$ty> for RegisterSet {
                fn from(value: $ty) -> Self {
                    RegisterSet::empty() + value
                }
            }
        )*
    };
}

element_ops!(
    Element,
    Register,
    Eflags,
    FpuControl,
    FpuStatus,
    FpuTag,
    Mxcsr,
    FpuData,
    FpuInstruction,
    FpuOpcode,
);

impl Add<&MemoryOperand> for RegisterSet {
    type Output = RegisterSet;

    fn add(mut self, rhs: &MemoryOperand) -> RegisterSet {
        self.insert_memory(rhs);
        self
    }
}

impl AddAssign<&MemoryOperand> for RegisterSet {
    fn add_assign(&mut self, rhs: &MemoryOperand) {
        self.insert_memory(rhs);
    }
}

impl<E: Into<Element>> Extend<E> for RegisterSet {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<E: Into<Element>> FromIterator<E> for RegisterSet {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = RegisterSet::empty();
        set.extend(iter);
        set
    }
}

// ─── Text ───────────────────────────────────────────────────────────────────

/// `{rax, xmm3, eflags.cf}`
///
/// Bits no element accounts for follow as raw lanes after a semicolon,
/// `{rcx; lanes=[0x1000000000000, 0x0, 0x0, 0x0]}`, so the text always parses
/// back to the same set.
impl fmt::Display for RegisterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut named = Self::empty();
        for element in self.elements() {
            if !named.is_empty() {
                f.write_str(", ")?;
            }
            named.insert(element);
            write!(f, "{}", element)?;
        }
        let rest = *self - named;
        if !rest.is_empty() {
            if !named.is_empty() {
                f.write_str("; ")?;
            }
            let [a, b, c, d] = rest.lanes;
            write!(f, "lanes=[{a:#x}, {b:#x}, {c:#x}, {d:#x}]")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for RegisterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegisterSet([{:#018x}, {:#018x}, {:#018x}, {:#018x}])",
            self.lanes[0], self.lanes[1], self.lanes[2], self.lanes[3]
        )
    }
}

impl FromStr for RegisterSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_set(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn universe_is_union_of_all_elements() {
        let mut set = RegisterSet::empty();
        for element in CANONICAL {
            set.insert(element);
        }
        assert_eq!(set, RegisterSet::universe());
    }

    #[test]
    fn universe_lanes_literal() {
        assert_eq!(
            RegisterSet::universe().lanes(),
            [
                0xffff_ffff_ffff_ffff,
                0x0f3f_ffff_ffff_ffff,
                0xe7ff_1a3f_003f_6fd5,
                0x0000_0000_dfff_aaaa,
            ]
        );
    }

    #[test]
    fn quad_insertion_sets_all_alias_slots() {
        let set = RegisterSet::empty() + Register::Rax;
        assert_eq!(set.lanes(), [0x0001_0001_0001_0001, 0, 0, 0]);
        let set = RegisterSet::empty() + Register::R15;
        assert_eq!(set.lanes(), [0x8000_8000_8000_8000, 0, 0, 0]);
    }

    #[test]
    fn high_byte_uses_bias_of_four() {
        let set = RegisterSet::empty() + Register::Ah;
        assert_eq!(set.lanes(), [1 << 16, 0, 0, 0]);
        let set = RegisterSet::empty() + Register::Bh;
        assert_eq!(set.lanes(), [1 << 19, 0, 0, 0]);
    }

    #[test]
    fn low_and_high_byte_satisfy_word() {
        let set = RegisterSet::empty() + Register::Al + Register::Ah;
        assert!(set.contains(Register::Ax));
        assert!(!set.contains(Register::Eax));
    }

    #[test]
    fn lane_one_through_three_positions() {
        assert_eq!((RegisterSet::empty() + Register::Mm0).lanes()[1], 1 << 32);
        assert_eq!((RegisterSet::empty() + Register::St7).lanes()[1], 1 << 47);
        assert_eq!((RegisterSet::empty() + Register::Gs).lanes()[1], 1 << 53);
        assert_eq!((RegisterSet::empty() + FpuData).lanes()[1], 1 << 56);
        assert_eq!((RegisterSet::empty() + Register::Rip).lanes()[1], 1 << 59);
        assert_eq!((RegisterSet::empty() + Eflags::ID).lanes()[2], 1 << 21);
        assert_eq!((RegisterSet::empty() + FpuControl::X).lanes()[2], 1 << 44);
        assert_eq!((RegisterSet::empty() + FpuStatus::B).lanes()[2], 1 << 63);
        assert_eq!((RegisterSet::empty() + FpuTag::TAG7).lanes()[3], 1 << 15);
        assert_eq!((RegisterSet::empty() + Mxcsr::FZ).lanes()[3], 1 << 31);
    }

    #[test]
    fn with_is_pure() {
        let base = RegisterSet::empty();
        let grown = base.with(Register::Xmm1.element());
        assert!(base.is_empty());
        assert!(grown.contains(Register::Xmm1));
    }

    #[test]
    fn insert_chains() {
        let mut set = RegisterSet::empty();
        set.insert(Register::Rdi).insert(Eflags::CF).insert(Mxcsr::RC);
        assert!(set.contains(Register::Dil));
        assert!(set.contains(Eflags::CF));
        assert!(set.contains(Mxcsr::RC));
    }

    #[test]
    fn memory_operand_contributes_base_index_segment() {
        let mem = MemoryOperand::based(Register::Rbp)
            .with_index(Register::R12d, 8)
            .with_segment(Register::Fs);
        let set = RegisterSet::empty() + &mem;
        assert!(set.contains(Register::Rbp));
        assert!(set.contains(Register::R12d));
        assert!(!set.contains(Register::R12));
        assert!(set.contains(Register::Fs));
        assert_eq!(
            set,
            RegisterSet::empty() + Register::Rbp + Register::R12d + Register::Fs
        );
    }

    #[test]
    fn empty_memory_operand_adds_nothing() {
        let mut set = RegisterSet::empty() + Register::Rax;
        set += &MemoryOperand::absolute(0x1000);
        assert_eq!(set, RegisterSet::empty() + Register::Rax);
    }

    #[test]
    fn all_of_stays_in_universe() {
        for kind in ElementKind::ALL {
            let set = RegisterSet::all_of(kind);
            assert!(set.is_subset(&RegisterSet::universe()), "{:?}", kind);
            assert!(!set.is_empty(), "{:?}", kind);
        }
        assert_eq!(RegisterSet::all_of(ElementKind::Quad).lanes(), [u64::MAX, 0, 0, 0]);
        assert_eq!(RegisterSet::all_of(ElementKind::Eflags).lanes()[2], 0x003f_6fd5);
    }

    #[test]
    fn intersects_detects_aliasing() {
        let a = RegisterSet::from(Register::Eax);
        let b = RegisterSet::from(Register::Ah);
        let c = RegisterSet::from(Register::Ecx);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn elements_reports_widest_alias_once() {
        let set =
            RegisterSet::empty() + Register::Rax + Register::Cl + Register::Ymm2 + Register::Xmm3;
        let names: Vec<_> = set.elements().map(|e| e.to_string()).collect();
        assert_eq!(names, ["rax", "cl", "ymm2", "xmm3"]);
    }

    #[test]
    fn elements_reports_high_byte_without_word() {
        let set = RegisterSet::empty() + Register::Ch + Register::Bl;
        let names: Vec<_> = set.elements().map(|e| e.to_string()).collect();
        assert_eq!(names, ["ch", "bl"]);
    }

    #[test]
    fn display_format() {
        let set = RegisterSet::empty() + Register::Rsp + Eflags::ZF + FpuOpcode + FpuTag::TAG1;
        assert_eq!(set.to_string(), "{rsp, fpu_opcode, eflags.zf, fpu_tag.tag1}");
        assert_eq!(RegisterSet::empty().to_string(), "{}");
    }

    #[test]
    fn partial_alias_left_by_difference() {
        let pair = RegisterSet::empty() + Register::Rax + Register::Rcx;
        let set = pair - RegisterSet::from(Register::Eax);
        assert_eq!(set.elements().count(), 1);
        assert_eq!(set.unnamed().lanes(), [1 << 48, 0, 0, 0]);
        assert_eq!(set.to_string(), "{rcx; lanes=[0x1000000000000, 0x0, 0x0, 0x0]}");
        assert_eq!(set.to_string().parse::<RegisterSet>().unwrap(), set);

        let only_upper = RegisterSet::from(Register::Rax) - RegisterSet::from(Register::Eax);
        assert_eq!(only_upper.to_string(), "{lanes=[0x1000000000000, 0x0, 0x0, 0x0]}");
        assert_eq!(only_upper.to_string().parse::<RegisterSet>().unwrap(), only_upper);
    }

    #[test]
    fn reserved_bits_are_unnamed() {
        let full = !RegisterSet::empty();
        assert_eq!(full.unnamed(), full - RegisterSet::universe());
        assert_eq!(full.to_string().parse::<RegisterSet>().unwrap(), full);
        assert!(RegisterSet::universe().unnamed().is_empty());
    }

    #[test]
    fn debug_shows_lanes() {
        let set = RegisterSet::empty() + Register::Al;
        assert_eq!(
            format!("{:?}", set),
            "RegisterSet([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])"
        );
    }

    #[test]
    fn complement_is_raw() {
        assert_eq!(!RegisterSet::empty(), RegisterSet::from_lanes([u64::MAX; 4]));
        assert_ne!(!RegisterSet::empty(), RegisterSet::universe());
        assert_eq!(!!RegisterSet::universe(), RegisterSet::universe());
    }

    #[test]
    fn collect_from_registers() {
        let set: RegisterSet = [Register::Rax, Register::Rbx].into_iter().collect();
        assert_eq!(set, RegisterSet::empty() + Register::Rax + Register::Rbx);
    }
}
