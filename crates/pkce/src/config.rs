//! Compile-time configuration for proof key generation.

/// Constants fixed by RFC 7636.
pub mod rfc7636 {
    /// ALPHA = %x41-5A / %x61-7A
    pub const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

    /// DIGIT = %x30-39
    pub const DIGIT: &str = "0123456789";

    /// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    pub const UNRESERVED: &str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

    /// Minimum code verifier length (section 4.1).
    pub const VERIFIER_MIN_LEN: usize = 43;

    /// Maximum code verifier length (section 4.1).
    pub const VERIFIER_MAX_LEN: usize = 128;
}

/// Library defaults applied by [`Key::new`](crate::Key::new).
pub mod defaults {
    use crate::method::Method;

    /// Transform method used until one is chosen.
    ///
    /// Stronger than the wire protocol's fallback: a server treats a missing
    /// `code_challenge_method` as `plain`.
    pub const CHALLENGE_METHOD: Method = Method::S256;

    /// Length of a generated code verifier.
    pub const CODE_VERIFIER_LEN: usize = super::rfc7636::VERIFIER_MIN_LEN;
}
