//! Proof Key for Code Exchange
//!
//! Generation and validation of code verifiers and code challenges as
//! defined by RFC 7636. PKCE ("pixy") mitigates the authorization code
//! interception attack.
//!
//! # Terminology
//!
//! - **code verifier**: a cryptographically random string correlating the
//!   authorization request with the token request.
//! - **code challenge**: derived from the verifier and sent in the
//!   authorization request, to be verified against later.
//! - **code challenge method**: the transform (`plain` or `S256`) used to
//!   derive the challenge.
//!
//! # Example
//!
//! ```
//! use pkce::{Key, Method, verify_code_verifier, with_code_verifier_length};
//!
//! // Client: create a key and send the challenge.
//! let mut key = Key::new([with_code_verifier_length(64)])?;
//! let challenge = key.code_challenge();
//! assert_eq!(key.challenge_method(), Method::S256);
//!
//! // Server: later, check the verifier from the token request.
//! let verifier = key.code_verifier().to_string();
//! assert!(verify_code_verifier(Method::S256, &verifier, &challenge));
//! # Ok::<(), pkce::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod key;
pub mod method;
pub mod options;
pub mod params;
pub mod validation;
pub mod verify;

pub use error::{Error, Result};
pub use generate::{generate_code_challenge, generate_code_verifier};
pub use key::Key;
pub use method::{IntoMethod, Method};
pub use options::{KeyOption, with_challenge_method, with_code_verifier, with_code_verifier_length};
pub use params::{PARAM_CODE_CHALLENGE, PARAM_CODE_CHALLENGE_METHOD, PARAM_CODE_VERIFIER};
pub use verify::verify_code_verifier;
