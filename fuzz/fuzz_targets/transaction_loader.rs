#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Neither parsing nor encoding may panic on arbitrary text
        if let Ok(rows) = basket::loader::parse_csv(input, false) {
            let _ = basket::encoder::encode(&rows);
        }
    }
});
