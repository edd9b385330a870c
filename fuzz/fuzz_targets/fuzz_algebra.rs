#![no_main]
use libfuzzer_sys::fuzz_target;
use x64_regset::RegisterSet;

fn lanes(bytes: &[u8]) -> [u64; 4] {
    let mut out = [0u64; 4];
    for (lane, chunk) in out.iter_mut().zip(bytes.chunks(8)) {
        let mut buf = [0u8; 8];
        buf[..chunk.len()].copy_from_slice(chunk);
        *lane = u64::from_le_bytes(buf);
    }
    out
}

fuzz_target!(|data: &[u8]| {
    let (left, right) = data.split_at(data.len().min(32));
    let a = RegisterSet::from_lanes(lanes(left));
    let b = RegisterSet::from_lanes(lanes(right));

    assert_eq!(a | b, b | a);
    assert_eq!(a & b, b & a);
    assert_eq!(!!a, a);
    assert_eq!((a - b) | (a & b), a);
    assert!(!(a - b).intersects(&b));

    // Named elements plus the unnamed remainder rebuild the set, and the text
    // form carries both.
    let mut named = RegisterSet::empty();
    for element in a.elements() {
        assert!(a.contains(element));
        named.insert(element);
    }
    assert_eq!(named | a.unnamed(), a);
    let diff = a - b;
    assert_eq!(diff.to_string().parse::<RegisterSet>().ok(), Some(diff));
});
