/*
[INPUT]:  Token-gate configuration (`{enabled, roles:[{tokenId, role}]}`)
[OUTPUT]: Validated TokenGateRole rules and TokenGateOptions
[POS]:    Gate layer - startup configuration for role grants
[UPDATE]: When gate rule fields change
*/

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, require_non_empty};

/// Grants `role` to holders of `tokenId`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TokenGateRoleFields")]
pub struct TokenGateRole {
    #[serde(rename = "tokenId")]
    token_id: String,
    role: String,
}

#[derive(Deserialize)]
pub(crate) struct TokenGateRoleFields {
    #[serde(rename = "tokenId")]
    token_id: String,
    role: String,
}

impl TokenGateRole {
    pub fn new(token_id: impl Into<String>, role: impl Into<String>) -> Result<Self> {
        let token_id = token_id.into();
        let role = role.into();
        require_non_empty("tokenId", &token_id)?;
        require_non_empty("role", &role)?;
        Ok(Self { token_id, role })
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

impl TryFrom<TokenGateRoleFields> for TokenGateRole {
    type Error = AuthError;

    fn try_from(fields: TokenGateRoleFields) -> Result<Self> {
        TokenGateRole::new(fields.token_id, fields.role)
    }
}

/// Whether the gate is on and which token grants which role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenGateOptionsFields")]
pub struct TokenGateOptions {
    enabled: bool,
    roles: Vec<TokenGateRole>,
}

#[derive(Deserialize)]
pub(crate) struct TokenGateOptionsFields {
    enabled: bool,
    roles: Vec<TokenGateRoleFields>,
}

impl TokenGateOptions {
    pub fn new(enabled: bool, roles: Vec<TokenGateRole>) -> Result<Self> {
        if roles.is_empty() {
            return Err(AuthError::validation("roles", "must be a non-empty array"));
        }
        Ok(Self { enabled, roles })
    }

    /// Parse and validate, reporting rule failures with their index
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: TokenGateOptionsFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn roles(&self) -> &[TokenGateRole] {
        &self.roles
    }
}

impl TryFrom<TokenGateOptionsFields> for TokenGateOptions {
    type Error = AuthError;

    fn try_from(fields: TokenGateOptionsFields) -> Result<Self> {
        let roles = fields
            .roles
            .into_iter()
            .enumerate()
            .map(|(index, role)| {
                TokenGateRole::try_from(role).map_err(|e| e.within(&format!("roles[{index}]")))
            })
            .collect::<Result<Vec<_>>>()?;
        TokenGateOptions::new(fields.enabled, roles)
    }
}
