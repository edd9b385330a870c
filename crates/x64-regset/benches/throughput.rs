//! Performance benchmarks for `x64_regset`.
//!
//! Measures:
//! - Single insert / contains latency
//! - Whole-set algebra
//! - Liveness-style fold over a register stream
//! - Iteration, rendering and parsing
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use x64_regset::{abi, Eflags, MemoryOperand, Register, RegisterSet};

// ─── Element operations ──────────────────────────────────────────────────────

fn bench_element_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_ops");

    group.bench_function("insert_quad", |b| {
        b.iter(|| RegisterSet::empty() + black_box(Register::R13))
    });

    group.bench_function("insert_field", |b| {
        b.iter(|| RegisterSet::empty() + black_box(Eflags::IOPL))
    });

    group.bench_function("contains_hit", |b| {
        let set = abi::SYSV_CALLER_SAVED;
        b.iter(|| black_box(set).contains(black_box(Register::Xmm5)))
    });

    group.bench_function("contains_miss", |b| {
        let set = abi::SYSV_CALLER_SAVED;
        b.iter(|| black_box(set).contains(black_box(Register::Rbx)))
    });

    group.bench_function("insert_memory", |b| {
        let mem = MemoryOperand::based(Register::Rbp)
            .with_index(Register::R12, 4)
            .with_segment(Register::Fs);
        b.iter(|| RegisterSet::empty() + black_box(&mem))
    });

    group.finish();
}

// ─── Set algebra ─────────────────────────────────────────────────────────────

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");
    let a = abi::SYSV_CALLER_SAVED;
    let b_set = abi::SYSV_ARGUMENTS | abi::SYSV_CALLEE_SAVED;

    group.bench_function("union", |b| b.iter(|| black_box(a) | black_box(b_set)));
    group.bench_function("intersection", |b| {
        b.iter(|| black_box(a) & black_box(b_set))
    });
    group.bench_function("difference", |b| b.iter(|| black_box(a) - black_box(b_set)));
    group.bench_function("complement", |b| b.iter(|| !black_box(a)));

    group.finish();
}

// ─── Liveness fold ───────────────────────────────────────────────────────────

fn bench_liveness(c: &mut Criterion) {
    let mut group = c.benchmark_group("liveness");
    let stream: Vec<(Register, Register)> = Register::ALL
        .iter()
        .copied()
        .zip(Register::ALL.iter().copied().rev())
        .cycle()
        .take(1024)
        .collect();
    group.throughput(Throughput::Elements(stream.len() as u64));

    group.bench_function("def_use_1024", |b| {
        b.iter(|| {
            let mut live = RegisterSet::empty();
            for &(def, used) in black_box(&stream) {
                live -= RegisterSet::from(def);
                live += used;
            }
            live
        })
    });

    group.finish();
}

// ─── Text ────────────────────────────────────────────────────────────────────

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let set = abi::SYSV_CALLER_SAVED | abi::SYSV_CALLEE_SAVED;
    let text = set.to_string();
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("elements", |b| {
        b.iter(|| black_box(set).elements().count())
    });
    group.bench_function("display", |b| b.iter(|| black_box(set).to_string()));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(text.as_str()).parse::<RegisterSet>().unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_element_ops,
    bench_algebra,
    bench_liveness,
    bench_text
);
criterion_main!(benches);
