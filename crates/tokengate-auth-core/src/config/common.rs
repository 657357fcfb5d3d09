/*
[INPUT]:  Session, token, cookie, operator and strategy settings
[OUTPUT]: Validated CommonOptions shared by both credential families
[POS]:    Configuration layer - settings common to traditional and wallet auth
[UPDATE]: When adding common settings or changing their limits
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, require_non_empty};
use crate::types::{AuthStrategy, Network};

fn require_positive_seconds(field: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(AuthError::validation(field, "must be a positive number of seconds"));
    }
    Ok(())
}

/// Server-side session settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionOptionsFields")]
pub struct SessionOptions {
    secret: String,
    #[serde(rename = "ttlSeconds")]
    ttl_seconds: u64,
}

#[derive(Deserialize)]
pub(crate) struct SessionOptionsFields {
    secret: String,
    #[serde(rename = "ttlSeconds")]
    ttl_seconds: u64,
}

impl SessionOptions {
    pub fn new(secret: impl Into<String>, ttl_seconds: u64) -> Result<Self> {
        let secret = secret.into();
        require_non_empty("secret", &secret)?;
        require_positive_seconds("ttlSeconds", ttl_seconds)?;
        Ok(Self {
            secret,
            ttl_seconds,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}

impl TryFrom<SessionOptionsFields> for SessionOptions {
    type Error = AuthError;

    fn try_from(fields: SessionOptionsFields) -> Result<Self> {
        SessionOptions::new(fields.secret, fields.ttl_seconds)
    }
}

impl fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionOptions")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Access/refresh token lifetimes and signing secret
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenOptionsFields")]
pub struct TokenOptions {
    secret: String,
    #[serde(rename = "expiresInSeconds")]
    expires_in_seconds: u64,
    #[serde(rename = "refreshExpiresInSeconds")]
    refresh_expires_in_seconds: u64,
}

#[derive(Deserialize)]
pub(crate) struct TokenOptionsFields {
    secret: String,
    #[serde(rename = "expiresInSeconds")]
    expires_in_seconds: u64,
    #[serde(rename = "refreshExpiresInSeconds")]
    refresh_expires_in_seconds: u64,
}

impl TokenOptions {
    pub fn new(
        secret: impl Into<String>,
        expires_in_seconds: u64,
        refresh_expires_in_seconds: u64,
    ) -> Result<Self> {
        let secret = secret.into();
        require_non_empty("secret", &secret)?;
        require_positive_seconds("expiresInSeconds", expires_in_seconds)?;
        if refresh_expires_in_seconds < expires_in_seconds {
            return Err(AuthError::validation(
                "refreshExpiresInSeconds",
                "must not be shorter than expiresInSeconds",
            ));
        }
        Ok(Self {
            secret,
            expires_in_seconds,
            refresh_expires_in_seconds,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_in_seconds(&self) -> u64 {
        self.expires_in_seconds
    }

    pub fn refresh_expires_in_seconds(&self) -> u64 {
        self.refresh_expires_in_seconds
    }
}

impl TryFrom<TokenOptionsFields> for TokenOptions {
    type Error = AuthError;

    fn try_from(fields: TokenOptionsFields) -> Result<Self> {
        TokenOptions::new(
            fields.secret,
            fields.expires_in_seconds,
            fields.refresh_expires_in_seconds,
        )
    }
}

impl fmt::Debug for TokenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenOptions")
            .field("secret", &"<redacted>")
            .field("expires_in_seconds", &self.expires_in_seconds)
            .field("refresh_expires_in_seconds", &self.refresh_expires_in_seconds)
            .finish()
    }
}

/// Session cookie settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CookieOptionsFields")]
pub struct CookieOptions {
    name: String,
    secure: bool,
    #[serde(rename = "maxAgeSeconds")]
    max_age_seconds: u64,
}

#[derive(Deserialize)]
pub(crate) struct CookieOptionsFields {
    name: String,
    #[serde(default = "default_secure")]
    secure: bool,
    #[serde(rename = "maxAgeSeconds")]
    max_age_seconds: u64,
}

fn default_secure() -> bool {
    true
}

impl CookieOptions {
    pub fn new(name: impl Into<String>, secure: bool, max_age_seconds: u64) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        require_positive_seconds("maxAgeSeconds", max_age_seconds)?;
        Ok(Self {
            name,
            secure,
            max_age_seconds,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn max_age_seconds(&self) -> u64 {
        self.max_age_seconds
    }
}

impl TryFrom<CookieOptionsFields> for CookieOptions {
    type Error = AuthError;

    fn try_from(fields: CookieOptionsFields) -> Result<Self> {
        CookieOptions::new(fields.name, fields.secure, fields.max_age_seconds)
    }
}

/// Operator account the service signs handshake payloads with
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OperatorOptionsFields")]
pub struct OperatorOptions {
    #[serde(rename = "accountId")]
    account_id: String,
    #[serde(rename = "privateKey")]
    private_key: String,
    network: Network,
}

#[derive(Deserialize)]
pub(crate) struct OperatorOptionsFields {
    #[serde(rename = "accountId")]
    account_id: String,
    #[serde(rename = "privateKey")]
    private_key: String,
    network: Network,
}

impl OperatorOptions {
    pub fn new(
        account_id: impl Into<String>,
        private_key: impl Into<String>,
        network: Network,
    ) -> Result<Self> {
        let account_id = account_id.into();
        let private_key = private_key.into();
        require_non_empty("accountId", &account_id)?;
        require_non_empty("privateKey", &private_key)?;
        Ok(Self {
            account_id,
            private_key,
            network,
        })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl TryFrom<OperatorOptionsFields> for OperatorOptions {
    type Error = AuthError;

    fn try_from(fields: OperatorOptionsFields) -> Result<Self> {
        OperatorOptions::new(fields.account_id, fields.private_key, fields.network)
    }
}

impl fmt::Debug for OperatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorOptions")
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .field("network", &self.network)
            .finish()
    }
}

/// Settings shared by both credential families
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CommonOptionsFields")]
pub struct CommonOptions {
    strategy: AuthStrategy,
    session: SessionOptions,
    token: TokenOptions,
    cookie: CookieOptions,
    operator: OperatorOptions,
}

#[derive(Deserialize)]
pub(crate) struct CommonOptionsFields {
    strategy: AuthStrategy,
    session: SessionOptionsFields,
    token: TokenOptionsFields,
    cookie: CookieOptionsFields,
    operator: OperatorOptionsFields,
}

impl CommonOptions {
    pub fn new(
        strategy: AuthStrategy,
        session: SessionOptions,
        token: TokenOptions,
        cookie: CookieOptions,
        operator: OperatorOptions,
    ) -> Self {
        Self {
            strategy,
            session,
            token,
            cookie,
            operator,
        }
    }

    pub fn strategy(&self) -> AuthStrategy {
        self.strategy
    }

    pub fn session(&self) -> &SessionOptions {
        &self.session
    }

    pub fn token(&self) -> &TokenOptions {
        &self.token
    }

    pub fn cookie(&self) -> &CookieOptions {
        &self.cookie
    }

    pub fn operator(&self) -> &OperatorOptions {
        &self.operator
    }
}

impl TryFrom<CommonOptionsFields> for CommonOptions {
    type Error = AuthError;

    fn try_from(fields: CommonOptionsFields) -> Result<Self> {
        Ok(CommonOptions::new(
            fields.strategy,
            SessionOptions::try_from(fields.session).map_err(|e| e.within("session"))?,
            TokenOptions::try_from(fields.token).map_err(|e| e.within("token"))?,
            CookieOptions::try_from(fields.cookie).map_err(|e| e.within("cookie"))?,
            OperatorOptions::try_from(fields.operator).map_err(|e| e.within("operator"))?,
        ))
    }
}
