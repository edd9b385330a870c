//! Memory operands, as far as register sets are concerned.
//!
//! Only the registers an addressing expression reads matter here: the base,
//! the index and the segment override.  Scale and displacement are carried so
//! that callers can keep a single operand type.

use crate::register::Register;

/// Memory operand: `segment:[base + index*scale + disp]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryOperand {
    /// Base register (e.g., `rbp` in `[rbp+8]`), or `rip` for RIP-relative
    /// addressing.
    pub base: Option<Register>,
    /// Index register for SIB addressing (e.g., `rsi` in `[rbx+rsi*4]`).
    pub index: Option<Register>,
    /// SIB scale factor: 1, 2, 4, or 8.
    pub scale: u8,
    /// Displacement (constant offset) in bytes.
    pub disp: i64,
    /// Segment override prefix, if any (e.g., `fs:`).
    pub segment: Option<Register>,
}

impl Default for MemoryOperand {
    fn default() -> Self {
        Self {
            base: None,
            index: None,
            scale: 1,
            disp: 0,
            segment: None,
        }
    }
}

impl MemoryOperand {
    /// `[disp]` — absolute address, no registers.
    #[must_use]
    pub fn absolute(disp: i64) -> Self {
        Self {
            disp,
            ..Self::default()
        }
    }

    /// `[base]`.
    #[must_use]
    pub fn based(base: Register) -> Self {
        Self {
            base: Some(base),
            ..Self::default()
        }
    }

    /// `[rip + disp]`.
    #[must_use]
    pub fn rip_relative(disp: i64) -> Self {
        Self {
            base: Some(Register::Rip),
            disp,
            ..Self::default()
        }
    }

    /// Add an index register with the given scale.
    #[must_use]
    pub fn with_index(mut self, index: Register, scale: u8) -> Self {
        self.index = Some(index);
        self.scale = scale;
        self
    }

    /// Set the displacement.
    #[must_use]
    pub fn with_disp(mut self, disp: i64) -> Self {
        self.disp = disp;
        self
    }

    /// Add a segment override.
    #[must_use]
    pub fn with_segment(mut self, segment: Register) -> Self {
        self.segment = Some(segment);
        self
    }

    /// Whether a base register is present.
    #[must_use]
    pub fn has_base(&self) -> bool {
        self.base.is_some()
    }

    /// Whether an index register is present.
    #[must_use]
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    /// Whether a segment override is present.
    #[must_use]
    pub fn has_segment(&self) -> bool {
        self.segment.is_some()
    }

    /// Registers read to form the address: base, index, segment override.
    pub fn registers(&self) -> impl Iterator<Item = Register> {
        [self.base, self.index, self.segment].into_iter().flatten()
    }
}
