#![no_main]

use libfuzzer_sys::fuzz_target;
use gapmine::mining::{mine, Criterion};

fuzz_target!(|data: &[u8]| {
    // First byte picks max_error and min_support, the rest is the sequence.
    // Long inputs are capped since repetitive sequences grow exponentially.
    let Some((&knobs, sequence)) = data.split_first() else {
        return;
    };
    let sequence = &sequence[..sequence.len().min(48)];

    let criterion = Criterion {
        min_len: 2,
        min_support: 2 + usize::from(knobs >> 6),
        max_error: usize::from(knobs & 0x03),
        min_score: 0.0,
    };

    if let Ok(patterns) = mine(sequence, &criterion) {
        for (pattern, occurrences) in &patterns {
            assert!(pattern.len() >= criterion.min_len);
            assert!(occurrences.len() >= criterion.min_support);
        }
    }
});
