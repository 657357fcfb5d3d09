/*
[INPUT]:  Server signature over a payload, user counter-signature, operator account
[OUTPUT]: Validated SignedPayload, SignInSignedData and Login request
[POS]:    Wallet layer - two-signature sign-in variant
[UPDATE]: When the sign-in chain gains or loses a signature layer
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AuthError, Result, require_non_empty};

use super::serde_helpers;

/// Payload the server signed first, before the wallet is asked to sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SignedPayloadFields")]
pub struct SignedPayload {
    #[serde(
        rename = "serverSignature",
        serialize_with = "serde_helpers::serialize_hex"
    )]
    server_signature: Vec<u8>,
    #[serde(rename = "originalPayload")]
    original_payload: Map<String, Value>,
}

#[derive(Deserialize)]
struct SignedPayloadFields {
    #[serde(
        rename = "serverSignature",
        deserialize_with = "serde_helpers::deserialize_bytes"
    )]
    server_signature: Vec<u8>,
    #[serde(rename = "originalPayload")]
    original_payload: Value,
}

impl SignedPayload {
    pub fn new(server_signature: Vec<u8>, original_payload: Value) -> Result<Self> {
        if server_signature.is_empty() {
            return Err(AuthError::validation(
                "serverSignature",
                "must be a non-empty byte sequence",
            ));
        }
        let original_payload = match original_payload {
            Value::Object(map) if !map.is_empty() => map,
            _ => {
                return Err(AuthError::validation(
                    "originalPayload",
                    "must be a non-empty object",
                ));
            }
        };
        Ok(Self {
            server_signature,
            original_payload,
        })
    }

    pub fn server_signature(&self) -> &[u8] {
        &self.server_signature
    }

    pub fn original_payload(&self) -> &Map<String, Value> {
        &self.original_payload
    }

    /// Bytes the user counter-signs: compact JSON with keys sorted at every level
    pub fn signing_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_helpers::canonical_json(self)?)
    }
}

impl TryFrom<SignedPayloadFields> for SignedPayload {
    type Error = AuthError;

    fn try_from(fields: SignedPayloadFields) -> Result<Self> {
        SignedPayload::new(fields.server_signature, fields.original_payload)
    }
}

/// Server-signed payload plus the user's counter-signature over it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SignInSignedDataFields")]
pub struct SignInSignedData {
    #[serde(rename = "signedPayload")]
    signed_payload: SignedPayload,
    #[serde(
        rename = "userSignature",
        serialize_with = "serde_helpers::serialize_hex"
    )]
    user_signature: Vec<u8>,
}

#[derive(Deserialize)]
struct SignInSignedDataFields {
    #[serde(rename = "signedPayload")]
    signed_payload: SignedPayloadFields,
    #[serde(
        rename = "userSignature",
        deserialize_with = "serde_helpers::deserialize_bytes"
    )]
    user_signature: Vec<u8>,
}

impl SignInSignedData {
    pub fn new(signed_payload: SignedPayload, user_signature: Vec<u8>) -> Result<Self> {
        if user_signature.is_empty() {
            return Err(AuthError::validation(
                "userSignature",
                "must be a non-empty byte sequence",
            ));
        }
        Ok(Self {
            signed_payload,
            user_signature,
        })
    }

    pub fn signed_payload(&self) -> &SignedPayload {
        &self.signed_payload
    }

    pub fn user_signature(&self) -> &[u8] {
        &self.user_signature
    }
}

impl TryFrom<SignInSignedDataFields> for SignInSignedData {
    type Error = AuthError;

    fn try_from(fields: SignInSignedDataFields) -> Result<Self> {
        let signed_payload = SignedPayload::try_from(fields.signed_payload)
            .map_err(|e| e.within("signedPayload"))?;
        SignInSignedData::new(signed_payload, fields.user_signature)
    }
}

/// Wallet sign-in request: `{operator, signedData}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LoginFields")]
pub struct Login {
    operator: String,
    #[serde(rename = "signedData")]
    signed_data: SignInSignedData,
}

#[derive(Deserialize)]
struct LoginFields {
    operator: String,
    #[serde(rename = "signedData")]
    signed_data: SignInSignedDataFields,
}

impl Login {
    pub fn new(operator: impl Into<String>, signed_data: SignInSignedData) -> Result<Self> {
        let operator = operator.into();
        require_non_empty("operator", &operator)?;
        Ok(Self {
            operator,
            signed_data,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fields: LoginFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn signed_data(&self) -> &SignInSignedData {
        &self.signed_data
    }
}

impl TryFrom<LoginFields> for Login {
    type Error = AuthError;

    fn try_from(fields: LoginFields) -> Result<Self> {
        let signed_data =
            SignInSignedData::try_from(fields.signed_data).map_err(|e| e.within("signedData"))?;
        Login::new(fields.operator, signed_data)
    }
}
