/*
[INPUT]:  Enrollment, verification and deletion outcomes
[OUTPUT]: Next SecondFactorState or an InvalidTransition error
[POS]:    Second-factor layer - explicit lifecycle state machine
[UPDATE]: When a status or transition is added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, require_non_empty};
use crate::types::SecondFactorStatus;

use super::responses::{CreateFactorResponse, DeleteFactorResponse, VerifyFactorResponse};

/// One enrolled factor, keyed externally by `factorSid`.
///
/// ```text
/// UNVERIFIED --verify ok--> VERIFIED
/// UNVERIFIED --delete ok--> DISABLED
/// VERIFIED   --delete ok--> DISABLED
/// ```
/// Failed verifications and deletions leave the status unchanged.
/// `DISABLED` is terminal.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SecondFactorStateFields")]
pub struct SecondFactorState {
    status: SecondFactorStatus,
    #[serde(rename = "factorSid")]
    factor_sid: String,
    identity: String,
    qr_code: String,
}

#[derive(Deserialize)]
struct SecondFactorStateFields {
    status: SecondFactorStatus,
    #[serde(rename = "factorSid")]
    factor_sid: String,
    identity: String,
    qr_code: String,
}

impl SecondFactorState {
    pub fn new(
        status: SecondFactorStatus,
        factor_sid: impl Into<String>,
        identity: impl Into<String>,
        qr_code: impl Into<String>,
    ) -> Result<Self> {
        let factor_sid = factor_sid.into();
        let identity = identity.into();
        let qr_code = qr_code.into();
        require_non_empty("factorSid", &factor_sid)?;
        require_non_empty("identity", &identity)?;
        require_non_empty("qr_code", &qr_code)?;
        Ok(Self {
            status,
            factor_sid,
            identity,
            qr_code,
        })
    }

    /// Initial `UNVERIFIED` state; the QR code encodes the provisioning URI.
    pub fn enroll(created: &CreateFactorResponse) -> Self {
        Self {
            status: SecondFactorStatus::Unverified,
            factor_sid: created.factor_sid().to_string(),
            identity: created.identity().to_string(),
            qr_code: created.uri().to_string(),
        }
    }

    pub fn status(&self) -> SecondFactorStatus {
        self.status
    }

    pub fn factor_sid(&self) -> &str {
        &self.factor_sid
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn qr_code(&self) -> &str {
        &self.qr_code
    }

    pub fn is_verified(&self) -> bool {
        self.status == SecondFactorStatus::Verified
    }

    pub fn apply_verification(&self, response: &VerifyFactorResponse) -> Result<Self> {
        let status = match (self.status, response.success) {
            (SecondFactorStatus::Disabled, _) => {
                return Err(self.rejected("verification"));
            }
            (SecondFactorStatus::Unverified, true) => SecondFactorStatus::Verified,
            (current, _) => current,
        };
        Ok(self.with_status(status))
    }

    pub fn apply_deletion(&self, response: &DeleteFactorResponse) -> Result<Self> {
        let status = match (self.status, response.success) {
            (SecondFactorStatus::Disabled, _) => {
                return Err(self.rejected("deletion"));
            }
            (_, true) => SecondFactorStatus::Disabled,
            (current, false) => current,
        };
        Ok(self.with_status(status))
    }

    /// Fail with `InvalidTransition` when no further events are accepted
    pub(crate) fn ensure_accepts(&self, event: &'static str) -> Result<()> {
        if self.status.is_terminal() {
            return Err(self.rejected(event));
        }
        Ok(())
    }

    fn with_status(&self, status: SecondFactorStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    fn rejected(&self, event: &'static str) -> AuthError {
        AuthError::InvalidTransition {
            from: self.status,
            event,
        }
    }
}

impl fmt::Debug for SecondFactorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecondFactorState")
            .field("status", &self.status)
            .field("factor_sid", &self.factor_sid)
            .field("identity", &self.identity)
            .field("qr_code", &"<redacted>")
            .finish()
    }
}

impl TryFrom<SecondFactorStateFields> for SecondFactorState {
    type Error = AuthError;

    fn try_from(fields: SecondFactorStateFields) -> Result<Self> {
        SecondFactorState::new(
            fields.status,
            fields.factor_sid,
            fields.identity,
            fields.qr_code,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrolled() -> SecondFactorState {
        let created =
            CreateFactorResponse::new("YF1", "id@x.com", "otpauth://totp/x", "SECRET", "ok")
                .unwrap();
        SecondFactorState::enroll(&created)
    }

    #[test]
    fn test_enroll_starts_unverified() {
        let state = enrolled();
        assert_eq!(state.status(), SecondFactorStatus::Unverified);
        assert_eq!(state.factor_sid(), "YF1");
        assert_eq!(state.qr_code(), "otpauth://totp/x");
    }

    #[test]
    fn test_successful_verification_moves_to_verified() {
        let state = enrolled()
            .apply_verification(&VerifyFactorResponse::new(true, "ok"))
            .unwrap();
        assert!(state.is_verified());
    }

    #[test]
    fn test_failed_verification_keeps_status() {
        let original = enrolled();
        let state = original
            .apply_verification(&VerifyFactorResponse::new(false, "bad code"))
            .unwrap();
        assert_eq!(state, original);

        let verified = original
            .apply_verification(&VerifyFactorResponse::new(true, "ok"))
            .unwrap();
        let still = verified
            .apply_verification(&VerifyFactorResponse::new(false, "bad code"))
            .unwrap();
        assert!(still.is_verified());
    }

    #[test]
    fn test_deletion_disables_from_any_live_status() {
        let deleted = enrolled()
            .apply_deletion(&DeleteFactorResponse::new(true, "removed"))
            .unwrap();
        assert_eq!(deleted.status(), SecondFactorStatus::Disabled);

        let kept = enrolled()
            .apply_deletion(&DeleteFactorResponse::new(false, "provider refused"))
            .unwrap();
        assert_eq!(kept.status(), SecondFactorStatus::Unverified);
    }

    #[test]
    fn test_disabled_is_terminal() {
        let disabled = enrolled()
            .apply_deletion(&DeleteFactorResponse::new(true, "removed"))
            .unwrap();

        let err = disabled
            .apply_verification(&VerifyFactorResponse::new(true, "ok"))
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidTransition {
                from: SecondFactorStatus::Disabled,
                event: "verification"
            }
        ));
        assert!(
            disabled
                .apply_deletion(&DeleteFactorResponse::new(true, "again"))
                .is_err()
        );
    }

    #[test]
    fn test_debug_hides_provisioning_uri() {
        let created = CreateFactorResponse::new(
            "YF1",
            "id@x.com",
            "otpauth://totp/x?secret=TOPSECRET",
            "TOPSECRET",
            "ok",
        )
        .unwrap();
        let output = format!("{:?}", SecondFactorState::enroll(&created));
        assert!(output.contains("YF1"));
        assert!(!output.contains("TOPSECRET"));
    }

    #[test]
    fn test_state_json_shape() {
        let value = serde_json::to_value(enrolled()).unwrap();
        assert_eq!(value["status"], "UNVERIFIED");
        assert_eq!(value["factorSid"], "YF1");
        assert_eq!(value["qr_code"], "otpauth://totp/x");

        let err = serde_json::from_value::<SecondFactorState>(serde_json::json!({
            "status": "VERIFIED", "factorSid": "", "identity": "i", "qr_code": "q"
        }));
        assert!(err.is_err());
    }
}
