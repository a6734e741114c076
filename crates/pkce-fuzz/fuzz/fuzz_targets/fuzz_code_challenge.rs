#![no_main]

use libfuzzer_sys::fuzz_target;
use pkce::{Method, generate_code_challenge, verify_code_verifier};

fuzz_target!(|data: &[u8]| {
    let Ok(verifier) = std::str::from_utf8(data) else {
        return;
    };

    // Any verifier that derives a challenge must verify against it
    if let Ok(challenge) = generate_code_challenge(Method::S256, verifier) {
        assert!(verify_code_verifier(Method::S256, verifier, &challenge));
    }
});
