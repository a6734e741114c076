//! Fuzzing library for pkce.
//!
//! This crate provides fuzzing targets for the validating entry points:
//! verifier validation, challenge derivation and verification.
//!
//! # Usage
//!
//! ```bash
//! cd crates/pkce-fuzz
//! cargo +nightly fuzz run fuzz_validate_verifier -- -max_total_time=60
//! ```

pub use pkce::{validation, verify_code_verifier};
