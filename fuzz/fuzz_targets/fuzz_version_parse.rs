#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Fuzz version parsing - neither path should ever panic
        let _ = text.parse::<roadie::stamp::Version>();
        let _ = roadie::stamp::parse_describe(text);
    }
});
