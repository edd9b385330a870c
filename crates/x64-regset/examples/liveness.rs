//! Backward liveness over a straight-line block.
//!
//! Run with: `cargo run --example liveness`

use x64_regset::{abi, Eflags, MemoryOperand, Register, RegisterSet};

/// One instruction: what it writes, what it reads.
struct Step {
    text: &'static str,
    defs: RegisterSet,
    uses: RegisterSet,
}

fn main() {
    println!("=== x64_regset liveness example ===\n");

    let load = MemoryOperand::based(Register::Rdi).with_index(Register::Rsi, 8);
    let block = [
        Step {
            text: "mov rax, [rdi+rsi*8]",
            defs: RegisterSet::from(Register::Rax),
            uses: RegisterSet::empty() + &load,
        },
        Step {
            text: "add eax, ecx",
            defs: RegisterSet::empty()
                + Register::Eax
                + Eflags::CF
                + Eflags::PF
                + Eflags::AF
                + Eflags::ZF
                + Eflags::SF
                + Eflags::OF,
            uses: RegisterSet::empty() + Register::Eax + Register::Ecx,
        },
        Step {
            text: "setc dl",
            defs: RegisterSet::from(Register::Dl),
            uses: RegisterSet::from(Eflags::CF),
        },
        Step {
            text: "movzx eax, dl",
            defs: RegisterSet::from(Register::Eax),
            uses: RegisterSet::from(Register::Dl),
        },
        Step {
            text: "ret",
            defs: RegisterSet::empty(),
            uses: abi::SYSV_RETURNS & abi::GENERAL_PURPOSE,
        },
    ];

    // live_in = uses | (live_out - defs), walking backwards.
    let mut live = RegisterSet::empty();
    let mut rows = Vec::new();
    for step in block.iter().rev() {
        live = step.uses | (live - step.defs);
        rows.push((step.text, live));
    }

    for (text, live_in) in rows.iter().rev() {
        println!("  {:<24} live-in {}", text, live_in);
    }

    let clobbered: RegisterSet = block
        .iter()
        .map(|s| s.defs)
        .fold(RegisterSet::empty(), |a, b| a | b);
    println!("\n  clobbered:        {}", clobbered);
    println!(
        "  callee-saved hit: {}",
        clobbered.intersects(&abi::SYSV_CALLEE_SAVED)
    );
}
