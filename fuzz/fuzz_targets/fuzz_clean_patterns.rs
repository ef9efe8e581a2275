#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Fuzz artifact pattern compilation - malformed globs must error, never panic
        let patterns = vec![text.to_string()];
        let _ = roadie::sweep::ArtifactSet::from_patterns(std::path::Path::new("."), &patterns);
    }
});
