//! Serde round-trip tests for `x64_regset` value types.
//!
//! Validates that public types serialize to JSON and deserialize back to
//! identical values.

#![cfg(feature = "serde")]

use x64_regset::{
    Eflags, Element, ElementKind, MemoryOperand, ParseError, Register, RegisterSet, Span,
};

/// Helper: serialize to JSON, deserialize back, assert equality.
fn round_trip<T>(val: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + core::fmt::Debug,
{
    let json = serde_json::to_string(val).expect("serialize");
    let back: T = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(val, &back, "round-trip mismatch for JSON: {json}");
}

// ─── Span ───────────────────────────────────────────────────────────────────

#[test]
fn serde_span() {
    round_trip(&Span::new(1, 5, 10, 3));
    round_trip(&Span::default());
}

// ─── Register ───────────────────────────────────────────────────────────────

#[test]
fn serde_register_all() {
    for reg in Register::ALL {
        round_trip(&reg);
    }
}

// ─── Element ────────────────────────────────────────────────────────────────

#[test]
fn serde_element() {
    for kind in ElementKind::ALL {
        round_trip(&kind);
        for element in kind.indices().filter_map(|i| Element::checked(kind, i)) {
            round_trip(&element);
        }
    }
    round_trip(&Eflags::IOPL.element());
}

#[test]
fn serde_element_rejects_bad_index() {
    let bad = r#"{"kind":"HighByte","index":2}"#;
    assert!(serde_json::from_str::<Element>(bad).is_err());
    let good = r#"{"kind":"HighByte","index":4}"#;
    assert_eq!(
        serde_json::from_str::<Element>(good).unwrap(),
        Register::Ah.element()
    );
}

#[test]
fn serde_element_rejects_reserved_field_bits() {
    let reserved = r#"{"kind":"Eflags","index":1}"#;
    assert!(serde_json::from_str::<Element>(reserved).is_err());
    let tag0_low = r#"{"kind":"FpuTag","index":0}"#;
    assert!(serde_json::from_str::<Element>(tag0_low).is_err());
    let iopl = r#"{"kind":"Eflags","index":13}"#;
    let element = serde_json::from_str::<Element>(iopl).unwrap();
    assert_eq!(element, Eflags::IOPL.element());
    let set = RegisterSet::from(element);
    assert_eq!(set.to_string(), "{eflags.iopl}");
    assert_eq!(set.to_string().parse::<RegisterSet>().unwrap(), set);
}

// ─── RegisterSet ────────────────────────────────────────────────────────────

#[test]
fn serde_register_set() {
    round_trip(&RegisterSet::empty());
    round_trip(&RegisterSet::universe());
    round_trip(&(RegisterSet::empty() + Register::Rax + Register::Ymm7 + Eflags::CF));
    round_trip(&!RegisterSet::empty());
}

#[test]
fn serde_register_set_is_lanes() {
    let json = serde_json::to_string(&RegisterSet::from_lanes([1, 2, 3, 4])).unwrap();
    assert_eq!(json, r#"{"lanes":[1,2,3,4]}"#);
}

// ─── MemoryOperand ──────────────────────────────────────────────────────────

#[test]
fn serde_memory_operand() {
    round_trip(&MemoryOperand::default());
    round_trip(
        &MemoryOperand::based(Register::Rbp)
            .with_index(Register::Rcx, 8)
            .with_disp(-16)
            .with_segment(Register::Gs),
    );
    round_trip(&MemoryOperand::rip_relative(0x40));
}

// ─── ParseError ─────────────────────────────────────────────────────────────

#[test]
fn serde_parse_error_serializes() {
    let err = "{rax, bogus}".parse::<RegisterSet>().unwrap_err();
    assert!(matches!(err, ParseError::UnknownName { .. }));
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"UnknownName\""), "{json}");
    assert!(json.contains("\"bogus\""), "{json}");
}
