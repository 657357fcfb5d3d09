/*
[INPUT]:  Identity, factor sid, user-supplied security code
[OUTPUT]: Provider responses for create, verify and delete
[POS]:    Second-factor layer - external verification provider abstraction
[UPDATE]: When adding provider operations or changing the mock's behaviour
*/

use async_trait::async_trait;

use crate::error::{AuthError, Result};
use crate::types::SecurityCode;

use super::responses::{CreateFactorResponse, DeleteFactorResponse, VerifyFactorResponse};

/// Trait for phone/app verification providers (Twilio Verify and similar)
///
/// The core never checks codes itself; the provider owns TOTP windows and secrets.
#[async_trait]
pub trait SecondFactorProvider: Send + Sync {
    /// Register a new TOTP factor for `identity`
    async fn create_factor(&self, identity: &str) -> Result<CreateFactorResponse>;

    /// Check `code` against the factor
    async fn verify_factor(
        &self,
        identity: &str,
        factor_sid: &str,
        code: SecurityCode,
    ) -> Result<VerifyFactorResponse>;

    /// Remove the factor
    async fn delete_factor(&self, identity: &str, factor_sid: &str)
    -> Result<DeleteFactorResponse>;
}

/// Mock provider for testing
#[derive(Debug, Clone)]
pub struct MockSecondFactorProvider {
    factor_sid: String,
    secret: String,
    accepted_code: u64,
    unavailable: bool,
}

impl MockSecondFactorProvider {
    /// Create a mock that enrolls `factor_sid` and accepts only `accepted_code`
    pub fn new(factor_sid: &str, secret: &str, accepted_code: u64) -> Self {
        Self {
            factor_sid: factor_sid.to_string(),
            secret: secret.to_string(),
            accepted_code,
            unavailable: false,
        }
    }

    /// Make every call fail with a provider error
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(AuthError::Provider("mock provider unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SecondFactorProvider for MockSecondFactorProvider {
    async fn create_factor(&self, identity: &str) -> Result<CreateFactorResponse> {
        self.ensure_available()?;
        let uri = format!(
            "otpauth://totp/TokenGate:{identity}?secret={}&issuer=TokenGate",
            self.secret
        );
        CreateFactorResponse::new(
            self.factor_sid.clone(),
            identity,
            uri,
            self.secret.clone(),
            "factor created",
        )
    }

    async fn verify_factor(
        &self,
        _identity: &str,
        factor_sid: &str,
        code: SecurityCode,
    ) -> Result<VerifyFactorResponse> {
        self.ensure_available()?;
        if factor_sid != self.factor_sid {
            return Ok(VerifyFactorResponse::new(false, "unknown factor"));
        }
        if code.value() == self.accepted_code {
            Ok(VerifyFactorResponse::new(true, "code accepted"))
        } else {
            Ok(VerifyFactorResponse::new(false, "code rejected"))
        }
    }

    async fn delete_factor(
        &self,
        _identity: &str,
        factor_sid: &str,
    ) -> Result<DeleteFactorResponse> {
        self.ensure_available()?;
        if factor_sid != self.factor_sid {
            return Ok(DeleteFactorResponse::new(false, "unknown factor"));
        }
        Ok(DeleteFactorResponse::new(true, "factor deleted"))
    }
}
