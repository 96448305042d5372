#![no_main]

use libfuzzer_sys::fuzz_target;
use melee::Scenario;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary text must never panic; errors are fine.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Scenario::parse(text);
    }
});
