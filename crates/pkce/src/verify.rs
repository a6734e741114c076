//! Server-side code verifier verification (RFC 7636, 4.6).
//!
//! The challenge is not secret, so ordinary string equality is used.

use crate::generate::generate_code_challenge;
use crate::method::{IntoMethod, Method};

/// Check a received `code_verifier` against the previously stored
/// `code_challenge`.
///
/// Never fails: an unsupported method or an invalid verifier yields `false`.
pub fn verify_code_verifier(
    method: impl IntoMethod,
    code_verifier: &str,
    code_challenge: &str,
) -> bool {
    match method.into_method() {
        Ok(Method::Plain) => code_verifier == code_challenge,
        Ok(Method::S256) => match generate_code_challenge(Method::S256, code_verifier) {
            Ok(computed) => computed == code_challenge,
            Err(err) => {
                tracing::debug!(error = %err, "Rejected code verifier");
                false
            }
        },
        Err(err) => {
            tracing::debug!(error = %err, "Rejected code challenge method");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERIFIER: &str = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    const CHALLENGE: &str = "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM";

    #[test]
    fn test_s256_valid() {
        assert!(verify_code_verifier(Method::S256, VERIFIER, CHALLENGE));
        assert!(verify_code_verifier("S256", VERIFIER, CHALLENGE));
    }

    #[test]
    fn test_s256_invalid_verifier() {
        assert!(!verify_code_verifier(Method::S256, "wrong-verifier", CHALLENGE));
    }

    #[test]
    fn test_s256_invalid_challenge() {
        assert!(!verify_code_verifier(Method::S256, VERIFIER, "wrong-challenge"));
    }

    #[test]
    fn test_plain_compares_directly() {
        assert!(verify_code_verifier(Method::Plain, VERIFIER, VERIFIER));
        assert!(!verify_code_verifier(Method::Plain, VERIFIER, CHALLENGE));
    }

    #[test]
    fn test_plain_skips_validation() {
        assert!(verify_code_verifier("plain", "short", "short"));
    }

    #[test]
    fn test_unknown_method_never_matches() {
        assert!(!verify_code_verifier("", VERIFIER, CHALLENGE));
        assert!(!verify_code_verifier("s256", VERIFIER, CHALLENGE));
        assert!(!verify_code_verifier("yolo", VERIFIER, VERIFIER));
    }
}
