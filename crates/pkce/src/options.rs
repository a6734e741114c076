//! Options accepted by [`Key::new`].
//!
//! Order matters: [`with_code_verifier_length`] is ignored once a verifier
//! has been supplied, while [`with_code_verifier`] always resets the length.
//! So `[length(100), verifier(v43)]` and `[verifier(v43), length(100)]` both
//! end at 43, but `[length(100)]` alone generates 100.

use std::fmt;

use crate::error::Result;
use crate::key::Key;
use crate::method::{IntoMethod, Method};

/// A single configuration step for a [`Key`].
#[derive(Clone)]
pub struct KeyOption(Inner);

#[derive(Clone)]
enum Inner {
    ChallengeMethod(Result<Method>),
    CodeVerifier(Vec<u8>),
    CodeVerifierLength(usize),
}

impl KeyOption {
    pub(crate) fn apply(self, key: &mut Key) -> Result<()> {
        match self.0 {
            Inner::ChallengeMethod(method) => key.set_challenge_method(method?),
            Inner::CodeVerifier(verifier) => key.set_code_verifier(verifier),
            Inner::CodeVerifierLength(n) => key.set_code_verifier_length(n),
        }
    }
}

impl fmt::Debug for KeyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::ChallengeMethod(method) => {
                f.debug_tuple("ChallengeMethod").field(method).finish()
            }
            Inner::CodeVerifier(_) => f.debug_tuple("CodeVerifier").field(&"[REDACTED]").finish(),
            Inner::CodeVerifierLength(n) => f.debug_tuple("CodeVerifierLength").field(n).finish(),
        }
    }
}

/// Choose the challenge transform method.
///
/// Follows the same rules as [`Key::set_challenge_method`]: unknown methods
/// fail with `MethodNotSupported`, and `plain` after `S256` fails with
/// `MethodDowngrade`.
pub fn with_challenge_method(method: impl IntoMethod) -> KeyOption {
    KeyOption(Inner::ChallengeMethod(method.into_method()))
}

/// Supply your own code verifier instead of generating one.
///
/// Validated when applied; fixes the verifier length to its length.
pub fn with_code_verifier(code_verifier: impl Into<Vec<u8>>) -> KeyOption {
    KeyOption(Inner::CodeVerifier(code_verifier.into()))
}

/// Length of the code verifier to generate.
///
/// Ignored without error if a verifier was already supplied.
pub fn with_code_verifier_length(n: usize) -> KeyOption {
    KeyOption(Inner::CodeVerifierLength(n))
}
