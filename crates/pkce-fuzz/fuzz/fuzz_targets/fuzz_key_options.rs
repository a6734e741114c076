#![no_main]

use libfuzzer_sys::fuzz_target;
use pkce::{Key, with_challenge_method, with_code_verifier, with_code_verifier_length};

fuzz_target!(|data: &[u8]| {
    let Some((&len, rest)) = data.split_first() else {
        return;
    };
    let method = String::from_utf8_lossy(&rest[..rest.len().min(8)]).into_owned();

    // Arbitrary option chains either fail cleanly or yield a consistent key
    if let Ok(mut key) = Key::new([
        with_code_verifier_length(usize::from(len)),
        with_challenge_method(method),
        with_code_verifier(rest.to_vec()),
    ]) {
        let expected = key.code_verifier_len();
        assert_eq!(key.code_verifier().len(), expected);
        let verifier = key.code_verifier().to_string();
        assert!(key.verify_code_verifier(&verifier));
    }
});
