//! Error types for proof key generation and validation.
//!
//! Uses `thiserror` for the `Display` implementations. Every failure in the
//! crate funnels into one of these four variants; callers match on them.

use crate::config::rfc7636::{UNRESERVED, VERIFIER_MAX_LEN, VERIFIER_MIN_LEN};

/// Errors raised by the validating entry points.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Code verifier length is outside RFC 7636, 4.1 bounds.
    #[error(
        "code verifier must be between {min} and {max} characters long",
        min = VERIFIER_MIN_LEN,
        max = VERIFIER_MAX_LEN
    )]
    VerifierLength,

    /// Code verifier contains a byte outside the unreserved set (RFC 7636, 4.1).
    #[error(
        "code verifier must only contain unreserved characters from the set: {{'{set}'}}",
        set = UNRESERVED
    )]
    VerifierCharacters,

    /// Transform method is neither `plain` nor `S256`.
    #[error("clients must use either 'plain' or 'S256' as a transform method")]
    MethodNotSupported,

    /// Attempted to move from `S256` back to `plain` (RFC 7636, 7.2).
    ///
    /// Servers that support PKCE must support `S256`, and servers that do not
    /// support PKCE ignore the unknown `code_verifier`. An error once `S256`
    /// has been presented can only mean a faulty server or a MITM attempting
    /// a downgrade.
    #[error("clients must not downgrade to 'plain' after trying the 'S256' method")]
    MethodDowngrade,
}

/// Result type alias for proof key operations.
pub type Result<T> = std::result::Result<T, Error>;
