//! Fuzz target for roster CSV parsing.
//!
//! Goal: the parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_roster_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = orgguard_roster::parse_roster(text);

        // Same rows behind a valid header, so the row parser sees most inputs.
        let with_header = format!("{}\n{}", orgguard_roster::EXPECTED_HEADER, text);
        let _ = orgguard_roster::parse_roster(&with_header);
    }
});
