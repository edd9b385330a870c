#![cfg(not(target_arch = "wasm32"))]
//! Cross-validation tests: decode with iced-x86, build sets with x64_regset.
//!
//! Each instruction is decoded by iced-x86; its register and memory operands
//! are mapped onto `x64_regset` registers by name and fed through
//! `insert_memory` / `insert`.  This checks the register naming and the
//! memory-operand decomposition against an independent x86-64 decoder.

use iced_x86::{
    Decoder, DecoderOptions, Instruction, Mnemonic as IcedMnemonic, OpKind,
    Register as IcedRegister,
};
use x64_regset::{parse_register, MemoryOperand, Register, RegisterSet};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Decode one 64-bit instruction, asserting the whole buffer is consumed.
fn decode(bytes: &[u8]) -> Instruction {
    let mut decoder = Decoder::with_ip(64, bytes, 0, DecoderOptions::NONE);
    let instr = decoder.decode();
    assert_ne!(
        instr.mnemonic(),
        IcedMnemonic::INVALID,
        "iced-x86 decoded INVALID for {:02X?}",
        bytes
    );
    assert_eq!(instr.len(), bytes.len(), "trailing bytes in {:02X?}", bytes);
    instr
}

/// Map an iced-x86 register onto ours by name.  iced spells the REX low
/// bytes `r8l`..`r15l`; we spell them `r8b`..`r15b`.
fn map_register(reg: IcedRegister) -> Option<Register> {
    if reg == IcedRegister::None {
        return None;
    }
    let mut name = format!("{reg:?}").to_lowercase();
    let numbered_low = name.len() > 2
        && name.starts_with('r')
        && name.ends_with('l')
        && name[1..name.len() - 1].bytes().all(|b| b.is_ascii_digit());
    if numbered_low {
        name.pop();
        name.push('b');
    }
    let ours = parse_register(&name)
        .unwrap_or_else(|| panic!("no x64_regset register for iced {reg:?} (`{name}`)"));
    Some(ours)
}

/// The memory operand of `instr`, rebuilt as an `x64_regset::MemoryOperand`.
fn memory_operand(instr: &Instruction) -> MemoryOperand {
    MemoryOperand {
        base: map_register(instr.memory_base()),
        index: map_register(instr.memory_index()),
        scale: instr.memory_index_scale() as u8,
        disp: instr.memory_displacement64() as i64,
        segment: map_register(instr.segment_prefix()),
    }
}

/// Registers read to address memory.
fn address_set(bytes: &[u8]) -> RegisterSet {
    let instr = decode(bytes);
    assert!(
        (0..instr.op_count()).any(|i| instr.op_kind(i) == OpKind::Memory),
        "no memory operand in {:02X?}",
        bytes
    );
    RegisterSet::empty() + &memory_operand(&instr)
}

/// Register operands, in operand order.
fn register_operands(bytes: &[u8]) -> Vec<Register> {
    let instr = decode(bytes);
    (0..instr.op_count())
        .filter(|&i| instr.op_kind(i) == OpKind::Register)
        .filter_map(|i| map_register(instr.op_register(i)))
        .collect()
}

fn set_of(regs: &[Register]) -> RegisterSet {
    regs.iter().copied().collect()
}

// ─── Memory operands ──────────────────────────────────────────────────────────

#[test]
fn sib_base_and_index() {
    // mov [rax+rcx*8+0x10], rdx
    let bytes = [0x48, 0x89, 0x54, 0xC8, 0x10];
    let instr = decode(&bytes);
    let mem = memory_operand(&instr);
    assert_eq!(mem.scale, 8);
    assert_eq!(mem.disp, 0x10);
    assert_eq!(
        RegisterSet::empty() + &mem,
        set_of(&[Register::Rax, Register::Rcx])
    );
    assert_eq!(register_operands(&bytes), [Register::Rdx]);
}

#[test]
fn segment_override() {
    // mov eax, fs:[rbx]
    let set = address_set(&[0x64, 0x8B, 0x03]);
    assert_eq!(set, set_of(&[Register::Rbx, Register::Fs]));
}

#[test]
fn segment_only_absolute() {
    // mov rax, gs:[0]
    let set = address_set(&[0x65, 0x48, 0x8B, 0x04, 0x25, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(set, set_of(&[Register::Gs]));
}

#[test]
fn rip_relative() {
    // lea rax, [rip+0x10]
    let set = address_set(&[0x48, 0x8D, 0x05, 0x10, 0x00, 0x00, 0x00]);
    assert_eq!(set, set_of(&[Register::Rip]));
}

#[test]
fn extended_base_and_index() {
    // mov al, [r12+r13*2]
    let bytes = [0x43, 0x8A, 0x04, 0x6C];
    let set = address_set(&bytes);
    assert_eq!(set, set_of(&[Register::R12, Register::R13]));
    assert_eq!(register_operands(&bytes), [Register::Al]);
}

#[test]
fn address_size_override_uses_32_bit_registers() {
    // mov eax, [ebx+esi]
    let set = address_set(&[0x67, 0x8B, 0x04, 0x33]);
    assert_eq!(set, set_of(&[Register::Ebx, Register::Esi]));
    assert!(!set.contains(Register::Rbx));
    assert!(set.contains(Register::Bx));
}

// ─── Register operands ────────────────────────────────────────────────────────

#[test]
fn legacy_high_bytes() {
    // mov ah, bh
    let regs = register_operands(&[0x8A, 0xE7]);
    assert_eq!(regs, [Register::Ah, Register::Bh]);
    let set = set_of(&regs);
    assert!((RegisterSet::empty() + Register::Rax).contains(Register::Ah));
    assert!(set.intersects(&RegisterSet::from(Register::Bx)));
    assert!(!set.intersects(&RegisterSet::from(Register::Spl)));
}

#[test]
fn rex_low_bytes() {
    // mov spl, dil
    let regs = register_operands(&[0x40, 0x8A, 0xE7]);
    assert_eq!(regs, [Register::Spl, Register::Dil]);
    assert!(!set_of(&regs).intersects(&RegisterSet::from(Register::Ah)));
    assert!((RegisterSet::empty() + Register::Rdi).contains(Register::Dil));
}

#[test]
fn numbered_low_bytes() {
    // movzx r8d, r9b
    let regs = register_operands(&[0x45, 0x0F, 0xB6, 0xC1]);
    assert_eq!(regs, [Register::R8d, Register::R9b]);
    let set = set_of(&regs);
    assert!(set.contains(Register::R8w));
    assert!(!set.contains(Register::R9w));
}

#[test]
fn vex_ymm_contains_xmm() {
    // vmovaps ymm0, ymm1
    let regs = register_operands(&[0xC5, 0xFC, 0x28, 0xC1]);
    assert_eq!(regs, [Register::Ymm0, Register::Ymm1]);
    let set = set_of(&regs);
    assert!(set.contains(Register::Xmm1));
    assert!(!set.contains(Register::Ymm2));
}

#[test]
fn sse_xmm_does_not_contain_ymm() {
    // movaps xmm2, xmm3
    let regs = register_operands(&[0x0F, 0x28, 0xD3]);
    assert_eq!(regs, [Register::Xmm2, Register::Xmm3]);
    assert!(!set_of(&regs).contains(Register::Ymm3));
}

#[test]
fn iced_names_resolve() {
    for reg in [
        IcedRegister::RAX,
        IcedRegister::R15D,
        IcedRegister::R10W,
        IcedRegister::R15L,
        IcedRegister::SIL,
        IcedRegister::CH,
        IcedRegister::ES,
        IcedRegister::RIP,
        IcedRegister::EIP,
        IcedRegister::XMM15,
        IcedRegister::YMM8,
        IcedRegister::MM7,
        IcedRegister::ST0,
    ] {
        let ours = map_register(reg).unwrap();
        assert!(
            ours.to_string().eq_ignore_ascii_case(&format!("{reg:?}"))
                || ours.to_string().ends_with('b'),
            "{reg:?} -> {ours}"
        );
    }
}
