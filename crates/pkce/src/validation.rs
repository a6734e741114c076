//! Code verifier validation (RFC 7636, 4.1).
//!
//! Checks operate on raw bytes. Every legal character is single-byte ASCII,
//! so multi-byte UTF-8 sequences are rejected byte by byte.

use crate::config::rfc7636::{VERIFIER_MAX_LEN, VERIFIER_MIN_LEN};
use crate::error::{Error, Result};

/// Validate a code verifier: length first, then characters.
///
/// An empty verifier reports [`Error::VerifierLength`], not a character error.
pub fn validate_code_verifier(verifier: &[u8]) -> Result<()> {
    validate_verifier_len(verifier.len())?;
    validate_code_verifier_characters(verifier)
}

/// Ensure `n` lies within `[43, 128]`.
pub fn validate_verifier_len(n: usize) -> Result<()> {
    if (VERIFIER_MIN_LEN..=VERIFIER_MAX_LEN).contains(&n) {
        Ok(())
    } else {
        Err(Error::VerifierLength)
    }
}

/// Ensure every byte is in the unreserved set.
pub fn validate_code_verifier_characters(chars: &[u8]) -> Result<()> {
    if chars.iter().copied().all(is_unreserved) {
        Ok(())
    } else {
        Err(Error::VerifierCharacters)
    }
}

/// Whether `c` is an unreserved character: `A-Z a-z 0-9 - . _ ~`.
#[must_use]
pub const fn is_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'~')
}
