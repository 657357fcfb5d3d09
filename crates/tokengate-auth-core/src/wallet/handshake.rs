/*
[INPUT]:  Endpoint URL, routing node, token fact, signature bytes, signing account
[OUTPUT]: Validated HandshakePayload, SignedData and Authenticate request
[POS]:    Wallet layer - one-shot signed authentication request
[UPDATE]: When handshake payload fields or signature encoding change
*/

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AuthError, Result, require_non_empty};

use super::serde_helpers;
use super::token::{AuthToken, AuthTokenFields};

/// What the server signed: endpoint, routing node and token fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HandshakePayloadFields")]
pub struct HandshakePayload {
    url: Url,
    node: String,
    data: AuthToken,
}

#[derive(Deserialize)]
struct HandshakePayloadFields {
    url: String,
    node: String,
    data: AuthTokenFields,
}

impl HandshakePayload {
    pub fn new(url: &str, node: impl Into<String>, data: AuthToken) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| AuthError::validation("url", format!("must be an absolute URL: {e}")))?;
        let node = node.into();
        require_non_empty("node", &node)?;
        Ok(Self { url, node, data })
    }

    /// Build from a raw token string, reporting token failures as `data.token`
    pub fn with_token(url: &str, node: impl Into<String>, token: &str) -> Result<Self> {
        let data = AuthToken::new(token).map_err(|e| e.within("data"))?;
        Self::new(url, node, data)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn data(&self) -> &AuthToken {
        &self.data
    }

    /// Bytes the server signature covers: compact JSON with sorted keys
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_helpers::canonical_json(self)?)
    }
}

impl TryFrom<HandshakePayloadFields> for HandshakePayload {
    type Error = AuthError;

    fn try_from(fields: HandshakePayloadFields) -> Result<Self> {
        let data = AuthToken::try_from(fields.data).map_err(|e| e.within("data"))?;
        HandshakePayload::new(&fields.url, fields.node, data)
    }
}

/// Signature bytes plus the account whose key produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignedDataFields")]
pub struct SignedData {
    #[serde(serialize_with = "serde_helpers::serialize_hex")]
    signature: Vec<u8>,
    #[serde(rename = "serverSigningAccount")]
    server_signing_account: String,
}

#[derive(Deserialize)]
struct SignedDataFields {
    #[serde(deserialize_with = "serde_helpers::deserialize_bytes")]
    signature: Vec<u8>,
    #[serde(rename = "serverSigningAccount")]
    server_signing_account: String,
}

impl SignedData {
    pub fn new(signature: Vec<u8>, server_signing_account: impl Into<String>) -> Result<Self> {
        if signature.is_empty() {
            return Err(AuthError::validation(
                "signature",
                "must be a non-empty byte sequence",
            ));
        }
        let server_signing_account = server_signing_account.into();
        require_non_empty("serverSigningAccount", &server_signing_account)?;
        Ok(Self {
            signature,
            server_signing_account,
        })
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn server_signing_account(&self) -> &str {
        &self.server_signing_account
    }
}

impl TryFrom<SignedDataFields> for SignedData {
    type Error = AuthError;

    fn try_from(fields: SignedDataFields) -> Result<Self> {
        SignedData::new(fields.signature, fields.server_signing_account)
    }
}

/// Complete one-shot wallet authentication request.
///
/// Children validate themselves on construction, so holding both is enough.
/// Nonce freshness and signature checks belong to the calling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthenticateFields")]
pub struct Authenticate {
    #[serde(rename = "signedData")]
    signed_data: SignedData,
    payload: HandshakePayload,
}

#[derive(Deserialize)]
struct AuthenticateFields {
    #[serde(rename = "signedData")]
    signed_data: SignedDataFields,
    payload: HandshakePayloadFields,
}

impl Authenticate {
    pub fn new(signed_data: SignedData, payload: HandshakePayload) -> Self {
        Self {
            signed_data,
            payload,
        }
    }

    /// Parse and validate, reporting nested failures as `payload.data.token` and similar
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: AuthenticateFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn signed_data(&self) -> &SignedData {
        &self.signed_data
    }

    pub fn payload(&self) -> &HandshakePayload {
        &self.payload
    }

    pub fn into_parts(self) -> (SignedData, HandshakePayload) {
        (self.signed_data, self.payload)
    }
}

impl TryFrom<AuthenticateFields> for Authenticate {
    type Error = AuthError;

    fn try_from(fields: AuthenticateFields) -> Result<Self> {
        let signed_data =
            SignedData::try_from(fields.signed_data).map_err(|e| e.within("signedData"))?;
        let payload =
            HandshakePayload::try_from(fields.payload).map_err(|e| e.within("payload"))?;
        Ok(Authenticate::new(signed_data, payload))
    }
}
