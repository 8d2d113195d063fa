//! Fuzzing target for path string parsing
//!
//! Any input must either parse or return a syntax error, and whatever
//! parses must format back to a string that parses to the same segments.

#![no_main]

use libfuzzer_sys::fuzz_target;
use schemapath_core::{format, parse};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if let Ok(segments) = parse(&text) {
        let formatted = format(&segments);
        assert_eq!(parse(&formatted).ok(), Some(segments));
    }
});
