/*
[INPUT]:  Second-factor provider answers for create, verify and delete
[OUTPUT]: Typed response records with validated create fields
[POS]:    Second-factor layer - provider response shapes
[UPDATE]: When provider response fields change
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, require_non_empty};

/// Answer to enrolling a new factor: `{factorSid, identity, uri, secret, message}`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CreateFactorResponseFields")]
pub struct CreateFactorResponse {
    #[serde(rename = "factorSid")]
    factor_sid: String,
    identity: String,
    uri: String,
    secret: String,
    message: String,
}

#[derive(Deserialize)]
struct CreateFactorResponseFields {
    #[serde(rename = "factorSid")]
    factor_sid: String,
    identity: String,
    uri: String,
    secret: String,
    message: String,
}

impl CreateFactorResponse {
    /// `message` may be empty; every other field must carry a value.
    pub fn new(
        factor_sid: impl Into<String>,
        identity: impl Into<String>,
        uri: impl Into<String>,
        secret: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self> {
        let factor_sid = factor_sid.into();
        let identity = identity.into();
        let uri = uri.into();
        let secret = secret.into();
        require_non_empty("factorSid", &factor_sid)?;
        require_non_empty("identity", &identity)?;
        require_non_empty("uri", &uri)?;
        require_non_empty("secret", &secret)?;
        Ok(Self {
            factor_sid,
            identity,
            uri,
            secret,
            message: message.into(),
        })
    }

    pub fn factor_sid(&self) -> &str {
        &self.factor_sid
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<CreateFactorResponseFields> for CreateFactorResponse {
    type Error = AuthError;

    fn try_from(fields: CreateFactorResponseFields) -> Result<Self> {
        CreateFactorResponse::new(
            fields.factor_sid,
            fields.identity,
            fields.uri,
            fields.secret,
            fields.message,
        )
    }
}

impl fmt::Debug for CreateFactorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateFactorResponse")
            .field("factor_sid", &self.factor_sid)
            .field("identity", &self.identity)
            .field("uri", &"<redacted>")
            .field("secret", &"<redacted>")
            .field("message", &self.message)
            .finish()
    }
}

/// Answer to checking a code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyFactorResponse {
    pub success: bool,
    pub message: String,
}

impl VerifyFactorResponse {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}

/// Answer to removing a factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFactorResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteFactorResponse {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}
