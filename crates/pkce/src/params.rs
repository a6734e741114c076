//! Request parameter names and helpers for the HTTP layer.
//!
//! Nothing here performs a request; it only shapes the parameters a caller
//! sends.

use url::Url;

use crate::key::Key;

/// Authorization request parameter carrying the code challenge (required).
pub const PARAM_CODE_CHALLENGE: &str = "code_challenge";

/// Authorization request parameter carrying the transform method (optional).
///
/// Servers default to `plain` when it is absent, so it is always sent.
pub const PARAM_CODE_CHALLENGE_METHOD: &str = "code_challenge_method";

/// Token request parameter carrying the code verifier.
pub const PARAM_CODE_VERIFIER: &str = "code_verifier";

impl Key {
    /// Parameters for the authorization request.
    pub fn authorization_params(&mut self) -> [(&'static str, String); 2] {
        [
            (PARAM_CODE_CHALLENGE, self.code_challenge()),
            (PARAM_CODE_CHALLENGE_METHOD, self.challenge_method().to_string()),
        ]
    }

    /// Parameters for the token request.
    pub fn token_params(&mut self) -> [(&'static str, String); 1] {
        [(PARAM_CODE_VERIFIER, self.code_verifier().to_string())]
    }

    /// Append the authorization request parameters to `url`'s query.
    ///
    /// Existing query pairs are kept.
    pub fn append_authorization_params(&mut self, url: &mut Url) {
        let params = self.authorization_params();
        url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, with_challenge_method, with_code_verifier};

    const VERIFIER: &str = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    const CHALLENGE: &str = "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM";

    #[test]
    fn test_authorization_params() {
        let mut key = Key::new([with_code_verifier(VERIFIER)]).unwrap();
        let params = key.authorization_params();
        assert_eq!(params[0], ("code_challenge", CHALLENGE.to_string()));
        assert_eq!(params[1], ("code_challenge_method", "S256".to_string()));
    }

    #[test]
    fn test_token_params() {
        let mut key = Key::new([with_code_verifier(VERIFIER)]).unwrap();
        assert_eq!(key.token_params(), [("code_verifier", VERIFIER.to_string())]);
    }

    #[test]
    fn test_append_keeps_existing_query() {
        let mut key =
            Key::new([with_challenge_method(Method::Plain), with_code_verifier(VERIFIER)])
                .unwrap();
        let mut url = Url::parse("https://auth.example.com/authorize?response_type=code").unwrap();
        key.append_authorization_params(&mut url);

        assert_eq!(
            url.query(),
            Some(&*format!(
                "response_type=code&code_challenge={VERIFIER}&code_challenge_method=plain"
            ))
        );
    }
}
