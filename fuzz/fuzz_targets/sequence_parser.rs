#![no_main]

use libfuzzer_sys::fuzz_target;
use gapmine::input::parse_sequence;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy conversion)
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic; tokens that are not u32 are errors
        let _ = parse_sequence(input);
    }
});
