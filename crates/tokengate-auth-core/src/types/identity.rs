/*
[INPUT]:  Raw user and wallet identity fields
[OUTPUT]: Immutable validated UserIdentity, Tag and WalletIdentity values
[POS]:    Data layer - who is authenticating
[UPDATE]: When identity fields or their rules change
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, require_non_empty};
use crate::gate::TokenGateEntity;
use crate::gate::entity::TokenGateEntityFields;

use super::enums::UserType;
use super::validators::{require_email, require_positive};

/// Free-form `{key, value}` label attached to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TagFields")]
pub struct Tag {
    key: String,
    value: String,
}

#[derive(Deserialize)]
pub(crate) struct TagFields {
    key: String,
    value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let value = value.into();
        require_non_empty("key", &key)?;
        require_non_empty("value", &value)?;
        Ok(Self { key, value })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<TagFields> for Tag {
    type Error = AuthError;

    fn try_from(fields: TagFields) -> Result<Self> {
        Tag::new(fields.key, fields.value)
    }
}

/// Validate raw tags, reporting failures as `tags[i].<field>`
pub(crate) fn tags_from_fields(fields: Vec<TagFields>) -> Result<Vec<Tag>> {
    fields
        .into_iter()
        .enumerate()
        .map(|(index, tag)| Tag::try_from(tag).map_err(|e| e.within(&format!("tags[{index}]"))))
        .collect()
}

/// Authenticated user profile
///
/// Timestamps are millisecond epoch values; `updated_at` never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserIdentityFields")]
pub struct UserIdentity {
    username: String,
    email: String,
    created_at: u64,
    updated_at: u64,
    #[serde(rename = "type")]
    user_type: UserType,
    tags: Vec<Tag>,
}

#[derive(Deserialize)]
struct UserIdentityFields {
    username: String,
    email: String,
    created_at: i64,
    updated_at: i64,
    #[serde(rename = "type")]
    user_type: UserType,
    #[serde(default)]
    tags: Vec<TagFields>,
}

impl UserIdentity {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        created_at: i64,
        updated_at: i64,
        user_type: UserType,
        tags: Vec<Tag>,
    ) -> Result<Self> {
        let username = username.into();
        let email = email.into();
        require_non_empty("username", &username)?;
        require_email("email", &email)?;
        let created_at = require_positive("created_at", created_at)?;
        let updated_at = require_positive("updated_at", updated_at)?;
        if updated_at < created_at {
            return Err(AuthError::validation(
                "updated_at",
                "must not precede created_at",
            ));
        }

        Ok(Self {
            username,
            email,
            created_at,
            updated_at,
            user_type,
            tags,
        })
    }

    /// Parse and validate, reporting tag failures with their index
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: UserIdentityFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub fn updated_at(&self) -> u64 {
        self.updated_at
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Value of the first tag with `key`
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at as i64)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.updated_at as i64)
    }
}

impl TryFrom<UserIdentityFields> for UserIdentity {
    type Error = AuthError;

    fn try_from(fields: UserIdentityFields) -> Result<Self> {
        UserIdentity::new(
            fields.username,
            fields.email,
            fields.created_at,
            fields.updated_at,
            fields.user_type,
            tags_from_fields(fields.tags)?,
        )
    }
}

/// Authentication-relevant state of a connected wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WalletIdentityFields")]
pub struct WalletIdentity {
    #[serde(rename = "walletId")]
    wallet_id: String,
    #[serde(rename = "publicKey")]
    public_key: String,
    balance: Vec<TokenGateEntity>,
}

#[derive(Deserialize)]
struct WalletIdentityFields {
    #[serde(rename = "walletId")]
    wallet_id: String,
    #[serde(rename = "publicKey")]
    public_key: String,
    #[serde(default)]
    balance: Vec<TokenGateEntityFields>,
}

impl WalletIdentity {
    pub fn new(
        wallet_id: impl Into<String>,
        public_key: impl Into<String>,
        balance: Vec<TokenGateEntity>,
    ) -> Result<Self> {
        let wallet_id = wallet_id.into();
        let public_key = public_key.into();
        require_non_empty("walletId", &wallet_id)?;
        require_non_empty("publicKey", &public_key)?;
        Ok(Self {
            wallet_id,
            public_key,
            balance,
        })
    }

    /// Parse and validate, reporting token failures as `balance[i].<field>`
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: WalletIdentityFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn wallet_id(&self) -> &str {
        &self.wallet_id
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn balance(&self) -> &[TokenGateEntity] {
        &self.balance
    }
}

impl TryFrom<WalletIdentityFields> for WalletIdentity {
    type Error = AuthError;

    fn try_from(fields: WalletIdentityFields) -> Result<Self> {
        let balance = fields
            .balance
            .into_iter()
            .enumerate()
            .map(|(index, entity)| {
                TokenGateEntity::try_from(entity)
                    .map_err(|e| e.within(&format!("balance[{index}]")))
            })
            .collect::<Result<Vec<_>>>()?;
        WalletIdentity::new(fields.wallet_id, fields.public_key, balance)
    }
}
