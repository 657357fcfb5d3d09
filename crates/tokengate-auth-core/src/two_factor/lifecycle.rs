/*
[INPUT]:  Second-factor provider, TwoFactorOptions, current factor state
[OUTPUT]: Provider response paired with the next factor state
[POS]:    Second-factor layer - orchestrates enrollment, verification and deletion
[UPDATE]: When lifecycle steps or their preconditions change
*/

use tracing::{debug, warn};

use crate::config::TwoFactorOptions;
use crate::error::{AuthError, Result};
use crate::types::SecurityCode;

use super::provider::SecondFactorProvider;
use super::responses::{CreateFactorResponse, DeleteFactorResponse, VerifyFactorResponse};
use super::state::SecondFactorState;

/// Drives factor transitions through a provider.
///
/// Holds no factor records; callers persist the returned state keyed by `factorSid`.
#[derive(Debug)]
pub struct SecondFactorLifecycle<P> {
    provider: P,
    options: TwoFactorOptions,
}

impl<P: SecondFactorProvider> SecondFactorLifecycle<P> {
    pub fn new(provider: P, options: TwoFactorOptions) -> Self {
        Self { provider, options }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn options(&self) -> &TwoFactorOptions {
        &self.options
    }

    /// Enroll a factor for `identity`; the new state is `UNVERIFIED`
    pub async fn enroll(&self, identity: &str) -> Result<(CreateFactorResponse, SecondFactorState)> {
        self.ensure_enabled()?;
        if identity.trim().is_empty() {
            return Err(AuthError::validation("identity", "must be a non-empty string"));
        }

        let created = self.provider.create_factor(identity).await?;
        let state = SecondFactorState::enroll(&created);
        debug!(
            factor_sid = state.factor_sid(),
            status = %state.status(),
            "second factor enrolled"
        );
        Ok((created, state))
    }

    /// Hand `code` to the provider and apply its verdict
    pub async fn verify(
        &self,
        state: &SecondFactorState,
        code: SecurityCode,
    ) -> Result<(VerifyFactorResponse, SecondFactorState)> {
        self.ensure_enabled()?;
        state.ensure_accepts("verification")?;

        let response = self
            .provider
            .verify_factor(state.identity(), state.factor_sid(), code)
            .await?;
        let next = state.apply_verification(&response)?;

        if response.success {
            debug!(
                factor_sid = next.factor_sid(),
                from = %state.status(),
                to = %next.status(),
                "second factor verified"
            );
        } else {
            warn!(
                factor_sid = next.factor_sid(),
                status = %next.status(),
                "second factor verification failed"
            );
        }
        Ok((response, next))
    }

    /// Remove the factor; on success the new state is `DISABLED`
    pub async fn delete(
        &self,
        state: &SecondFactorState,
    ) -> Result<(DeleteFactorResponse, SecondFactorState)> {
        self.ensure_enabled()?;
        state.ensure_accepts("deletion")?;

        let response = self
            .provider
            .delete_factor(state.identity(), state.factor_sid())
            .await?;
        let next = state.apply_deletion(&response)?;
        debug!(
            factor_sid = next.factor_sid(),
            success = response.success,
            status = %next.status(),
            "second factor deletion processed"
        );
        Ok((response, next))
    }

    fn ensure_enabled(&self) -> Result<()> {
        if !self.options.enabled() {
            return Err(AuthError::validation(
                "twoFactor.enabled",
                "must be true to manage second factors",
            ));
        }
        Ok(())
    }
}
