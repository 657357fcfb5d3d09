/*
[INPUT]:  Traditional credential payloads, Twilio secrets, user-supplied codes
[OUTPUT]: Immutable validated credential values and logout responses
[POS]:    Data layer - primary and second-factor credential facts
[UPDATE]: When credential payload shapes or password policy change
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, require_non_empty};

use super::identity::{Tag, TagFields, tags_from_fields};
use super::validators::{require_email, require_password};

const REDACTED: &str = "<redacted>";

/// Traditional login payload: `{username, email, password}`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LoginFields")]
pub struct LoginCredentials {
    username: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginFields {
    username: String,
    email: String,
    password: String,
}

impl LoginCredentials {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let username = username.into();
        let email = email.into();
        let password = password.into();
        require_non_empty("username", &username)?;
        require_email("email", &email)?;
        require_password("password", &password)?;
        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fields: LoginFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl TryFrom<LoginFields> for LoginCredentials {
    type Error = AuthError;

    fn try_from(fields: LoginFields) -> Result<Self> {
        LoginCredentials::new(fields.username, fields.email, fields.password)
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Traditional signup payload: login fields plus tags
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignupFields")]
pub struct SignupCredentials {
    username: String,
    email: String,
    password: String,
    tags: Vec<Tag>,
}

#[derive(Deserialize)]
struct SignupFields {
    username: String,
    email: String,
    password: String,
    #[serde(default)]
    tags: Vec<TagFields>,
}

impl SignupCredentials {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Result<Self> {
        let login = LoginCredentials::new(username, email, password)?;
        Ok(Self {
            username: login.username,
            email: login.email,
            password: login.password,
            tags,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fields: SignupFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl TryFrom<SignupFields> for SignupCredentials {
    type Error = AuthError;

    fn try_from(fields: SignupFields) -> Result<Self> {
        let tags = tags_from_fields(fields.tags)?;
        SignupCredentials::new(fields.username, fields.email, fields.password, tags)
    }
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Response to a logout, shared by both credential families
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub logout: bool,
    pub message: String,
}

impl LogoutResponse {
    pub fn new(logout: bool, message: impl Into<String>) -> Self {
        Self {
            logout,
            message: message.into(),
        }
    }
}

/// Credentials for the Twilio Verify service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TwilioSecretsFields")]
pub struct TwilioSecrets {
    #[serde(rename = "accountSid")]
    account_sid: String,
    #[serde(rename = "authToken")]
    auth_token: String,
    #[serde(rename = "serviceSid")]
    service_sid: String,
}

#[derive(Deserialize)]
pub(crate) struct TwilioSecretsFields {
    #[serde(rename = "accountSid")]
    account_sid: String,
    #[serde(rename = "authToken")]
    auth_token: String,
    #[serde(rename = "serviceSid")]
    service_sid: String,
}

impl TwilioSecrets {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        service_sid: impl Into<String>,
    ) -> Result<Self> {
        let account_sid = account_sid.into();
        let auth_token = auth_token.into();
        let service_sid = service_sid.into();
        require_non_empty("accountSid", &account_sid)?;
        require_non_empty("authToken", &auth_token)?;
        require_non_empty("serviceSid", &service_sid)?;
        Ok(Self {
            account_sid,
            auth_token,
            service_sid,
        })
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn service_sid(&self) -> &str {
        &self.service_sid
    }
}

impl TryFrom<TwilioSecretsFields> for TwilioSecrets {
    type Error = AuthError;

    fn try_from(fields: TwilioSecretsFields) -> Result<Self> {
        TwilioSecrets::new(fields.account_sid, fields.auth_token, fields.service_sid)
    }
}

impl fmt::Debug for TwilioSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioSecrets")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &REDACTED)
            .field("service_sid", &self.service_sid)
            .finish()
    }
}

/// One-time code typed by the user during second-factor verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SecurityCodeFields")]
pub struct SecurityCode {
    code_2fa: u64,
}

#[derive(Deserialize)]
struct SecurityCodeFields {
    code_2fa: i64,
}

impl SecurityCode {
    pub fn new(code_2fa: i64) -> Result<Self> {
        if code_2fa < 0 {
            return Err(AuthError::validation(
                "code_2fa",
                "must be a non-negative integer",
            ));
        }
        Ok(Self {
            code_2fa: code_2fa as u64,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fields: SecurityCodeFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    pub fn value(&self) -> u64 {
        self.code_2fa
    }
}

impl TryFrom<SecurityCodeFields> for SecurityCode {
    type Error = AuthError;

    fn try_from(fields: SecurityCodeFields) -> Result<Self> {
        SecurityCode::new(fields.code_2fa)
    }
}
