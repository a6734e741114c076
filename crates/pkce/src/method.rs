//! Code challenge transform methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The transform used to derive a code challenge from a code verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// `code_challenge = code_verifier`
    ///
    /// For compatibility with deployments and constrained environments that
    /// cannot use `S256`.
    #[serde(rename = "plain")]
    Plain,

    /// `code_challenge = BASE64URL-ENCODE(SHA256(ASCII(code_verifier)))`
    ///
    /// Mandatory to implement on the server. A client capable of `S256` must
    /// use it.
    #[serde(rename = "S256")]
    S256,
}

impl Method {
    /// Wire spelling, as sent in `code_challenge_method`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::S256 => "S256",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Case-sensitive: only `plain` and `S256` are accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(Self::Plain),
            "S256" => Ok(Self::S256),
            _ => Err(Error::MethodNotSupported),
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// Anything that can name a transform method.
///
/// Lets the public entry points take either a typed [`Method`] or a raw wire
/// string, validating the latter at the point of use.
pub trait IntoMethod {
    /// Resolve to a [`Method`], or [`Error::MethodNotSupported`].
    fn into_method(self) -> Result<Method>;
}

impl IntoMethod for Method {
    fn into_method(self) -> Result<Method> {
        Ok(self)
    }
}

impl IntoMethod for &str {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}

impl IntoMethod for String {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}

impl IntoMethod for &String {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}
