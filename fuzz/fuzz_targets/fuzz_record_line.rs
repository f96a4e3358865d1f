// SPDX-License-Identifier: PMPL-1.0-or-later
// Fuzz target for decoding backing-file lines

#![no_main]

use keyline_store::Record;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Decoding arbitrary input must fail cleanly, never panic.
        if let Ok(record) = Record::decode(line, 1) {
            // Anything that decodes must re-encode to a single line that
            // decodes to the same key.
            let encoded = record.encode();
            assert_eq!(encoded.matches('\n').count(), 1);
            let again = Record::decode(&encoded, 1).expect("re-encoded record must decode");
            assert_eq!(again.key, record.key);
        }
    }
});
