/*
[INPUT]:  JWT-shaped token strings
[OUTPUT]: Validated AuthToken and unverified claim access
[POS]:    Wallet layer - token fact carried inside handshake payloads
[UPDATE]: When token shape rules or claim decoding change
*/

use std::sync::LazyLock;

use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$")
        .expect("token pattern is valid")
});

/// Three-segment, dot-separated, base64url token.
///
/// Only the shape is checked. Signature and expiry are never verified here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AuthTokenFields")]
pub struct AuthToken {
    token: String,
}

#[derive(Deserialize)]
pub(crate) struct AuthTokenFields {
    token: String,
}

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if !TOKEN_PATTERN.is_match(&token) {
            return Err(AuthError::validation(
                "token",
                "must be a three-segment dot-separated base64url string",
            ));
        }
        Ok(Self { token })
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Decode the payload segment as a JSON object, without verifying anything.
    pub fn claims(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        let payload_b64 = self
            .token
            .split('.')
            .nth(1)
            .ok_or_else(|| AuthError::validation("token", "is missing its payload segment"))?;

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .or_else(|_| URL_SAFE.decode(payload_b64))
            .map_err(|e| {
                AuthError::validation("token", format!("payload is not valid base64url: {e}"))
            })?;

        let payload: serde_json::Value = serde_json::from_slice(&payload_bytes)?;
        match payload {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(AuthError::validation(
                "token",
                "payload must decode to a JSON object",
            )),
        }
    }

    /// Read one string claim from the unverified payload
    pub fn claim_str(&self, name: &str) -> Result<Option<String>> {
        let claims = self.claims()?;
        Ok(claims
            .get(name)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }
}

impl TryFrom<AuthTokenFields> for AuthToken {
    type Error = AuthError;

    fn try_from(fields: AuthTokenFields) -> Result<Self> {
        AuthToken::new(fields.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_jwt(payload: serde_json::Value) -> String {
        let header = serde_json::json!({"alg": "none", "typ": "JWT"});
        let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
        let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
        format!("{header_b64}.{payload_b64}.signature")
    }

    #[test]
    fn test_token_shape() {
        assert!(AuthToken::new("aaa.bbb.ccc").is_ok());
        assert!(AuthToken::new("not-a-jwt").is_err());
        assert!(AuthToken::new("aaa.bbb").is_err());
        assert!(AuthToken::new("aaa.bbb.ccc.ddd").is_err());
        assert!(AuthToken::new("aa+a.bbb.ccc").is_err());
        assert!(AuthToken::new("aaa..ccc").is_err());
    }

    #[test]
    fn test_token_rejection_names_field() {
        let err = AuthToken::new("not-a-jwt").unwrap_err();
        assert_eq!(err.field(), Some("token"));
    }

    #[test]
    fn test_claims_decode_payload() {
        let token = AuthToken::new(make_test_jwt(serde_json::json!({
            "message": "hello",
            "exp": 1
        })))
        .unwrap();

        assert_eq!(token.claim_str("message").unwrap(), Some("hello".to_string()));
        assert_eq!(token.claim_str("missing").unwrap(), None);
        assert_eq!(token.claims().unwrap()["exp"], 1);
    }

    #[test]
    fn test_claims_reject_non_json_payload() {
        let token = AuthToken::new("aaa.bbb.ccc").unwrap();
        assert!(token.claims().is_err());
    }

    #[test]
    fn test_token_json_shape() {
        let token: AuthToken = serde_json::from_str(r#"{"token": "aaa.bbb.ccc"}"#).unwrap();
        assert_eq!(token.as_str(), "aaa.bbb.ccc");
        assert!(serde_json::from_str::<AuthToken>(r#"{"token": "nope"}"#).is_err());
    }
}
