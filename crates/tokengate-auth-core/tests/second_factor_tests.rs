/*
[INPUT]:  Mock second-factor provider and security codes
[OUTPUT]: Test results for the second-factor lifecycle
[POS]:    Integration tests - second-factor state machine
[UPDATE]: When lifecycle transitions or provider contract change
*/

use tokengate_auth_core::{
    AuthError, CreateFactorResponse, MockSecondFactorProvider, SecondFactorLifecycle,
    SecondFactorProvider, SecondFactorState, SecondFactorStatus, SecurityCode, TwilioSecrets,
    TwoFactorOptions,
};
use tokio_test::assert_ok;

fn lifecycle(provider: MockSecondFactorProvider) -> SecondFactorLifecycle<MockSecondFactorProvider> {
    let twilio = assert_ok!(TwilioSecrets::new("AC123", "twilio-token", "VA123"));
    SecondFactorLifecycle::new(provider, TwoFactorOptions::new(true, twilio))
}

#[test]
fn test_create_response_properties() {
    assert!(CreateFactorResponse::new("", "id", "uri", "secret", "msg").is_err());

    let created = assert_ok!(CreateFactorResponse::new(
        "YF1",
        "id@x.com",
        "otpauth://...",
        "SECRET",
        "ok"
    ));
    let state = SecondFactorState::enroll(&created);
    assert_eq!(state.status(), SecondFactorStatus::Unverified);
}

#[test]
fn test_twilio_secrets_properties() {
    let err = TwilioSecrets::new("", "token", "service").unwrap_err();
    assert_eq!(err.field(), Some("accountSid"));

    let secrets = assert_ok!(TwilioSecrets::new("AC1", "token", "service"));
    assert_eq!(secrets.account_sid(), "AC1");
    assert_eq!(secrets.auth_token(), "token");
    assert_eq!(secrets.service_sid(), "service");
}

#[tokio::test]
async fn test_mock_provider_through_trait_object() {
    let provider: Box<dyn SecondFactorProvider> =
        Box::new(MockSecondFactorProvider::new("YF9", "SECRET", 7));
    let created = assert_ok!(provider.create_factor("id@x.com").await);
    assert_eq!(created.identity(), "id@x.com");

    let deleted = assert_ok!(provider.delete_factor("id@x.com", "other").await);
    assert!(!deleted.success);
}

#[tokio::test]
async fn test_enroll_verify_delete() {
    let lifecycle = lifecycle(MockSecondFactorProvider::new("YF1", "SECRET", 123456));

    let (created, state) = assert_ok!(lifecycle.enroll("id@x.com").await);
    assert_eq!(state.factor_sid(), created.factor_sid());
    assert_eq!(state.qr_code(), created.uri());

    let wrong = assert_ok!(SecurityCode::from_json(r#"{"code_2fa": 111111}"#));
    let (response, state) = assert_ok!(lifecycle.verify(&state, wrong).await);
    assert!(!response.success);
    assert_eq!(state.status(), SecondFactorStatus::Unverified);

    let right = assert_ok!(SecurityCode::new(123456));
    let (response, state) = assert_ok!(lifecycle.verify(&state, right).await);
    assert!(response.success);
    assert_eq!(state.status(), SecondFactorStatus::Verified);

    let (response, state) = assert_ok!(lifecycle.delete(&state).await);
    assert!(response.success);
    assert_eq!(state.status(), SecondFactorStatus::Disabled);

    let err = lifecycle.delete(&state).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let lifecycle = lifecycle(MockSecondFactorProvider::new("YF1", "SECRET", 1).unavailable());
    let err = lifecycle.enroll("id@x.com").await.unwrap_err();
    assert!(matches!(err, AuthError::Provider(_)));
}

#[test]
fn test_negative_code_rejected() {
    let err = SecurityCode::from_json(r#"{"code_2fa": -4}"#).unwrap_err();
    assert_eq!(err.field(), Some("code_2fa"));
    assert!(err.to_string().contains("non-negative"));
}
