#![no_main]

use libfuzzer_sys::fuzz_target;
use pkce::validation::{is_unreserved, validate_code_verifier};

fuzz_target!(|data: &[u8]| {
    // Validation must agree with a byte-wise check and never panic
    let valid = validate_code_verifier(data).is_ok();
    let expected = (43..=128).contains(&data.len()) && data.iter().all(|&c| is_unreserved(c));
    assert_eq!(valid, expected);
});
