//! Code verifier generation and code challenge derivation.
//!
//! The primitives here perform no validation; the public entry points
//! validate first and then delegate.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::config::rfc7636::UNRESERVED;
use crate::error::Result;
use crate::method::{IntoMethod, Method};
use crate::validation::{validate_code_verifier, validate_verifier_len};

/// Generate an RFC 7636 compliant, cryptographically random code verifier.
///
/// # Errors
///
/// [`Error::VerifierLength`](crate::Error::VerifierLength) when `n` is
/// outside `[43, 128]`.
pub fn generate_code_verifier(n: usize) -> Result<String> {
    validate_verifier_len(n)?;
    Ok(random_verifier(n))
}

/// Derive the code challenge for `code_verifier` under `method`.
///
/// The verifier is validated; the method is not. Anything other than exactly
/// `plain` is transformed as `S256`.
///
/// # Errors
///
/// [`Error::VerifierLength`](crate::Error::VerifierLength) or
/// [`Error::VerifierCharacters`](crate::Error::VerifierCharacters).
pub fn generate_code_challenge(method: impl IntoMethod, code_verifier: &str) -> Result<String> {
    let verifier = code_verifier.as_bytes();
    validate_code_verifier(verifier)?;

    let method = method.into_method().unwrap_or(Method::S256);
    Ok(challenge_for(method, verifier))
}

/// Draw `n` symbols uniformly from the unreserved alphabet.
///
/// `n` must already be validated.
pub(crate) fn random_verifier(n: usize) -> String {
    let alphabet = UNRESERVED.as_bytes();
    // ThreadRng is a CSPRNG seeded from the OS; random_range is unbiased.
    let mut rng = rand::rng();
    let verifier: String =
        (0..n).map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())])).collect();

    tracing::debug!(len = n, "Generated code verifier");
    verifier
}

/// Apply the transform for `method`.
///
/// `verifier` must already be validated.
pub(crate) fn challenge_for(method: Method, verifier: &[u8]) -> String {
    match method {
        Method::Plain => String::from_utf8_lossy(verifier).into_owned(),
        Method::S256 => URL_SAFE_NO_PAD.encode(Sha256::digest(verifier)),
    }
}
