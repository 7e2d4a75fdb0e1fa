#![no_main]

use filesniff::domain::services::{signature_matcher, SignatureTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for (_, signature) in SignatureTable::builtin().iter() {
        let whole = signature_matcher::matches(data, signature);
        let prefix = signature_matcher::matches_prefix(data, signature);
        // A full-length match is always also a prefix match
        assert!(!whole || prefix);
        if data.len() != signature.len() {
            assert!(!whole);
        }
    }
});
