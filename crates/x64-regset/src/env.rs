//! Machine-state bit fields and whole-unit pseudo-registers.
//!
//! EFLAGS, the x87 control/status/tag words and MXCSR are tracked per field
//! rather than per word.  A field spanning several bits (IOPL, the x87
//! precision and rounding controls, TOP, each 2-bit tag, the MXCSR rounding
//! control) is represented in a set by its most significant bit, so every
//! field occupies exactly one set bit.

use core::fmt;

use crate::element::{Element, ElementKind};

macro_rules! bit_fields {
    (
        $(#[$meta:meta])*
        $ty:ident => $kind:ident, $prefix:literal {
            $( $(#[$fmeta:meta])* $field:ident = $name:literal, $lsb:literal, $width:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $ty {
            lsb: u8,
            width: u8,
        }

        impl $ty {
            $(
                $(#[$fmeta])*
                pub const $field: $ty = $ty { lsb: $lsb, width: $width };
            )*

            /// Every architecturally defined field, in bit order.
            pub const ALL: &'static [$ty] = &[$($ty::$field),*];

            /// Unit name used as the prefix of the dotted text form.
            pub const PREFIX: &'static str = $prefix;

            /// Least significant bit of the field.
            #[must_use]
            pub const fn lsb(self) -> u8 {
                self.lsb
            }

            /// Width of the field in bits.
            #[must_use]
            pub const fn width(self) -> u8 {
                self.width
            }

            /// Bit that represents the field in a register set (its most
            /// significant bit).
            #[must_use]
            pub const fn index(self) -> u8 {
                self.lsb + self.width - 1
            }

            /// Field name without the unit prefix.
            #[must_use]
            pub fn name(self) -> &'static str {
                match (self.lsb, self.width) {
                    $( ($lsb, $width) => $name, )*
                    _ => "reserved",
                }
            }

            /// Look up a field by name, case-insensitively.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|field| field.name().eq_ignore_ascii_case(name))
            }

            /// Look up the field tracked by set bit `index`.
            #[must_use]
            pub fn from_index(index: u8) -> Option<Self> {
                Self::ALL.iter().copied().find(|field| field.index() == index)
            }

            /// Set element for this field.
            #[must_use]
            pub const fn element(self) -> Element {
                Element::new(ElementKind::$kind, self.index())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}", $prefix, self.name())
            }
        }
    };
}

bit_fields! {
    /// A field of the EFLAGS register.
    Eflags => Eflags, "eflags" {
        /// Carry flag.
        CF = "cf", 0, 1;
        /// Parity flag.
        PF = "pf", 2, 1;
        /// Auxiliary carry flag.
        AF = "af", 4, 1;
        /// Zero flag.
        ZF = "zf", 6, 1;
        /// Sign flag.
        SF = "sf", 7, 1;
        /// Trap flag.
        TF = "tf", 8, 1;
        /// Interrupt enable flag.
        IF = "if", 9, 1;
        /// Direction flag.
        DF = "df", 10, 1;
        /// Overflow flag.
        OF = "of", 11, 1;
        /// I/O privilege level (2 bits).
        IOPL = "iopl", 12, 2;
        /// Nested task.
        NT = "nt", 14, 1;
        /// Resume flag.
        RF = "rf", 16, 1;
        /// Virtual-8086 mode.
        VM = "vm", 17, 1;
        /// Alignment check.
        AC = "ac", 18, 1;
        /// Virtual interrupt flag.
        VIF = "vif", 19, 1;
        /// Virtual interrupt pending.
        VIP = "vip", 20, 1;
        /// CPUID available.
        ID = "id", 21, 1;
    }
}

bit_fields! {
    /// A field of the x87 FPU control word.
    FpuControl => FpuControl, "fpu_control" {
        /// Invalid-operation mask.
        IM = "im", 0, 1;
        /// Denormal-operand mask.
        DM = "dm", 1, 1;
        /// Zero-divide mask.
        ZM = "zm", 2, 1;
        /// Overflow mask.
        OM = "om", 3, 1;
        /// Underflow mask.
        UM = "um", 4, 1;
        /// Precision mask.
        PM = "pm", 5, 1;
        /// Precision control (2 bits).
        PC = "pc", 8, 2;
        /// Rounding control (2 bits).
        RC = "rc", 10, 2;
        /// Infinity control.
        X = "x", 12, 1;
    }
}

bit_fields! {
    /// A field of the x87 FPU status word.
    FpuStatus => FpuStatus, "fpu_status" {
        /// Invalid-operation exception.
        IE = "ie", 0, 1;
        /// Denormal-operand exception.
        DE = "de", 1, 1;
        /// Zero-divide exception.
        ZE = "ze", 2, 1;
        /// Overflow exception.
        OE = "oe", 3, 1;
        /// Underflow exception.
        UE = "ue", 4, 1;
        /// Precision exception.
        PE = "pe", 5, 1;
        /// Stack fault.
        SF = "sf", 6, 1;
        /// Exception summary status.
        ES = "es", 7, 1;
        /// Condition code 0.
        C0 = "c0", 8, 1;
        /// Condition code 1.
        C1 = "c1", 9, 1;
        /// Condition code 2.
        C2 = "c2", 10, 1;
        /// Top-of-stack pointer (3 bits).
        TOP = "top", 11, 3;
        /// Condition code 3.
        C3 = "c3", 14, 1;
        /// FPU busy.
        B = "b", 15, 1;
    }
}

bit_fields! {
    /// One 2-bit tag of the x87 FPU tag word.
    FpuTag => FpuTag, "fpu_tag" {
        /// Tag of physical register 0.
        TAG0 = "tag0", 0, 2;
        /// Tag of physical register 1.
        TAG1 = "tag1", 2, 2;
        /// Tag of physical register 2.
        TAG2 = "tag2", 4, 2;
        /// Tag of physical register 3.
        TAG3 = "tag3", 6, 2;
        /// Tag of physical register 4.
        TAG4 = "tag4", 8, 2;
        /// Tag of physical register 5.
        TAG5 = "tag5", 10, 2;
        /// Tag of physical register 6.
        TAG6 = "tag6", 12, 2;
        /// Tag of physical register 7.
        TAG7 = "tag7", 14, 2;
    }
}

bit_fields! {
    /// A field of the MXCSR control/status register.
    Mxcsr => Mxcsr, "mxcsr" {
        /// Invalid-operation flag.
        IE = "ie", 0, 1;
        /// Denormal flag.
        DE = "de", 1, 1;
        /// Divide-by-zero flag.
        ZE = "ze", 2, 1;
        /// Overflow flag.
        OE = "oe", 3, 1;
        /// Underflow flag.
        UE = "ue", 4, 1;
        /// Precision flag.
        PE = "pe", 5, 1;
        /// Denormals are zeros.
        DAZ = "daz", 6, 1;
        /// Invalid-operation mask.
        IM = "im", 7, 1;
        /// Denormal mask.
        DM = "dm", 8, 1;
        /// Divide-by-zero mask.
        ZM = "zm", 9, 1;
        /// Overflow mask.
        OM = "om", 10, 1;
        /// Underflow mask.
        UM = "um", 11, 1;
        /// Precision mask.
        PM = "pm", 12, 1;
        /// Rounding control (2 bits).
        RC = "rc", 13, 2;
        /// Flush to zero.
        FZ = "fz", 15, 1;
    }
}

macro_rules! unit_registers {
    ($( $(#[$meta:meta])* $ty:ident => $kind:ident, $name:literal; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $ty;

            impl $ty {
                /// Text name.
                pub const NAME: &'static str = $name;

                /// Set element for this unit.
                #[must_use]
                pub const fn element(self) -> Element {
                    Element::new(ElementKind::$kind, 0)
                }
            }

            impl From<$ty> for Element {
                fn from(unit: $ty) -> Self {
                    unit.element()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str($name)
                }
            }
        )*
    };
}

unit_registers! {
    /// The x87 last data (operand) pointer, as a single unit.
    FpuData => FpuData, "fpu_data";
    /// The x87 last instruction pointer, as a single unit.
    FpuInstruction => FpuInstruction, "fpu_instruction";
    /// The x87 last opcode, as a single unit.
    FpuOpcode => FpuOpcode, "fpu_opcode";
}

/// Unit prefix and field name for a bit-field element.
///
/// `None` for kinds that are not bit fields and for reserved bit positions.
pub(crate) fn describe(kind: ElementKind, index: u8) -> Option<(&'static str, &'static str)> {
    match kind {
        ElementKind::Eflags => Eflags::from_index(index).map(|f| (Eflags::PREFIX, f.name())),
        ElementKind::FpuControl => {
            FpuControl::from_index(index).map(|f| (FpuControl::PREFIX, f.name()))
        }
        ElementKind::FpuStatus => {
            FpuStatus::from_index(index).map(|f| (FpuStatus::PREFIX, f.name()))
        }
        ElementKind::FpuTag => FpuTag::from_index(index).map(|f| (FpuTag::PREFIX, f.name())),
        ElementKind::Mxcsr => Mxcsr::from_index(index).map(|f| (Mxcsr::PREFIX, f.name())),
        _ => None,
    }
}

/// Resolve a machine-state name: a unit (`fpu_opcode`) or a dotted field
/// (`eflags.cf`, `mxcsr.daz`).  Case-insensitive.
#[must_use]
pub fn parse_field(name: &str) -> Option<Element> {
    let Some((unit, field)) = name.split_once('.') else {
        return [
            (FpuData::NAME, FpuData.element()),
            (FpuInstruction::NAME, FpuInstruction.element()),
            (FpuOpcode::NAME, FpuOpcode.element()),
        ]
        .into_iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, e)| e);
    };
    if unit.eq_ignore_ascii_case(Eflags::PREFIX) {
        Eflags::from_name(field).map(Eflags::element)
    } else if unit.eq_ignore_ascii_case(FpuControl::PREFIX) {
        FpuControl::from_name(field).map(FpuControl::element)
    } else if unit.eq_ignore_ascii_case(FpuStatus::PREFIX) {
        FpuStatus::from_name(field).map(FpuStatus::element)
    } else if unit.eq_ignore_ascii_case(FpuTag::PREFIX) {
        FpuTag::from_name(field).map(FpuTag::element)
    } else if unit.eq_ignore_ascii_case(Mxcsr::PREFIX) {
        Mxcsr::from_name(field).map(Mxcsr::element)
    } else {
        None
    }
}
