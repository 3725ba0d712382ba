// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for JUnit report extraction
//!
//! This fuzzes `extract_report_str`, which parses an XML document into an
//! element tree and flattens it into records.

#![no_main]

use libfuzzer_sys::fuzz_target;

use junit_csv_report::extract_report_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Malformed input must come back as a skipped outcome, never a panic
        let _ = extract_report_str(input);
    }
});
