#![no_main]
use libfuzzer_sys::fuzz_target;
use x64_regset::RegisterSet;

fuzz_target!(|data: &str| {
    // Parsing must never panic, only return Ok/Err.
    let Ok(set) = data.parse::<RegisterSet>() else {
        return;
    };

    // Anything that parses renders back to text that parses to the same set.
    let text = set.to_string();
    let back: RegisterSet = text.parse().expect("rendered set must parse");
    assert_eq!(back, set, "{data:?} -> {text}");
});
