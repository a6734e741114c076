//! The proof key: a code verifier plus the method used to derive its
//! challenge.
//!
//! A `Key` is meant for a single owner. Reading the verifier may generate
//! and store it, so the accessors take `&mut self`; share a `Key` across
//! threads only behind your own lock.

use std::fmt;

use crate::config::defaults;
use crate::error::{Error, Result};
use crate::generate::{challenge_for, random_verifier};
use crate::method::{IntoMethod, Method};
use crate::options::KeyOption;
use crate::validation::{validate_code_verifier, validate_verifier_len};
use crate::verify::verify_code_verifier;

/// Proof key for code exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    /// `None` only while options are being applied in [`Key::new`].
    challenge_method: Option<Method>,
    /// Length to generate when no verifier was supplied. Always equals the
    /// verifier's length once one is present.
    code_verifier_len: usize,
    code_verifier: Option<String>,
}

impl Key {
    /// Build a key from `options`, applied in order.
    ///
    /// Starts from a verifier length of 43 and no method, so an option may
    /// still pick `plain`. Once the options have run the method is fixed,
    /// defaulting to `S256`, and the downgrade guard applies.
    ///
    /// # Errors
    ///
    /// The first error returned by an option. Options applied before it have
    /// already run; the partially configured key is dropped.
    pub fn new(options: impl IntoIterator<Item = KeyOption>) -> Result<Self> {
        let mut key = Self::unconfigured();
        for option in options {
            option.apply(&mut key)?;
        }
        key.challenge_method = Some(key.challenge_method());

        tracing::debug!(
            method = %key.challenge_method(),
            code_verifier_len = key.code_verifier_len,
            supplied_verifier = key.code_verifier.is_some(),
            "Constructed proof key"
        );
        Ok(key)
    }

    /// Change the challenge transform method.
    ///
    /// Upgrading `plain` to `S256` is always allowed. Once `S256` has been
    /// chosen, moving back to `plain` is refused (RFC 7636, 7.2).
    ///
    /// # Errors
    ///
    /// [`Error::MethodNotSupported`] for anything but `plain`/`S256`,
    /// [`Error::MethodDowngrade`] for `S256` to `plain`. The key is left
    /// untouched on error.
    pub fn set_challenge_method(&mut self, method: impl IntoMethod) -> Result<()> {
        let method = method.into_method()?;
        if self.challenge_method == Some(Method::S256) && method == Method::Plain {
            tracing::warn!("Refused challenge method downgrade from S256 to plain");
            return Err(Error::MethodDowngrade);
        }

        self.challenge_method = Some(method);
        Ok(())
    }

    /// The method used to derive the code challenge.
    pub fn challenge_method(&self) -> Method {
        self.challenge_method.unwrap_or(defaults::CHALLENGE_METHOD)
    }

    /// Length of the verifier, generated or supplied.
    pub fn code_verifier_len(&self) -> usize {
        self.code_verifier_len
    }

    /// Whether verifier material is present, without generating any.
    pub fn has_code_verifier(&self) -> bool {
        self.code_verifier.is_some()
    }

    /// The code verifier, generated on first access if none was supplied.
    ///
    /// Repeated calls return the same verifier.
    pub fn code_verifier(&mut self) -> &str {
        let len = self.code_verifier_len;
        self.code_verifier.get_or_insert_with(|| random_verifier(len))
    }

    /// The code challenge for the current method and verifier.
    ///
    /// Recomputed on every call so it tracks method changes.
    pub fn code_challenge(&mut self) -> String {
        let method = self.challenge_method();
        challenge_for(method, self.code_verifier().as_bytes())
    }

    /// Check `code_verifier` against this key's own challenge.
    ///
    /// Only meaningful when the key holds the verifier that produced the
    /// challenge, i.e. on the side that issued it.
    pub fn verify_code_verifier(&mut self, code_verifier: &str) -> bool {
        let challenge = self.code_challenge();
        verify_code_verifier(self.challenge_method(), code_verifier, &challenge)
    }

    /// Set the length to generate. A no-op once a verifier is present.
    pub(crate) fn set_code_verifier_length(&mut self, n: usize) -> Result<()> {
        if self.code_verifier.is_some() {
            return Ok(());
        }

        validate_verifier_len(n)?;
        self.code_verifier_len = n;
        Ok(())
    }

    /// Validate and store a supplied verifier, fixing the length to match.
    pub(crate) fn set_code_verifier(&mut self, verifier: Vec<u8>) -> Result<()> {
        validate_code_verifier(&verifier)?;
        // Validated bytes are ASCII, one char each.
        let verifier: String = verifier.into_iter().map(char::from).collect();

        self.code_verifier_len = verifier.len();
        self.code_verifier = Some(verifier);
        Ok(())
    }

    fn unconfigured() -> Self {
        Self {
            challenge_method: None,
            code_verifier_len: defaults::CODE_VERIFIER_LEN,
            code_verifier: None,
        }
    }
}

/// Same as `Key::new` with no options.
impl Default for Key {
    fn default() -> Self {
        Self { challenge_method: Some(defaults::CHALLENGE_METHOD), ..Self::unconfigured() }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("challenge_method", &self.challenge_method())
            .field("code_verifier_len", &self.code_verifier_len)
            .field("code_verifier", &self.code_verifier.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
