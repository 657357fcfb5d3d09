/*
[INPUT]:  Wallet balances and gate configuration JSON
[OUTPUT]: Test results for token-to-role resolution
[POS]:    Integration tests - token-gate role resolver
[UPDATE]: When grant semantics or gate shapes change
*/

mod common;

use common::token_entity_json;
use serde_json::json;
use tokengate_auth_core::{
    AnyPlan, PlanAllowList, SubscriptionPlan, TokenGateOptions, TokenGateResolver, TokenGateRole,
    WalletIdentity,
};
use tokio_test::assert_ok;

fn wallet(balance: Vec<serde_json::Value>) -> WalletIdentity {
    let body = json!({
        "walletId": "0.0.4242",
        "publicKey": "302a300506032b6570032100abcdef",
        "balance": balance
    });
    assert_ok!(WalletIdentity::from_json(&body.to_string()))
}

fn resolver() -> TokenGateResolver {
    let options = assert_ok!(TokenGateOptions::from_json(
        r#"{"enabled": true, "roles": [
            {"tokenId": "0.0.1001", "role": "member"},
            {"tokenId": "0.0.1002", "role": "admin"}
        ]}"#
    ));
    TokenGateResolver::new(options)
}

#[test]
fn test_gate_options_properties() {
    let err = TokenGateOptions::new(true, vec![]).unwrap_err();
    assert!(err.to_string().contains("non-empty array"));

    let role = assert_ok!(TokenGateRole::new("0x1", "member"));
    assert_ok!(TokenGateOptions::new(true, vec![role]));
}

#[test]
fn test_wallet_with_both_tokens_gets_union() {
    let wallet = wallet(vec![
        token_entity_json("0.0.1001", 1, "BASIC"),
        token_entity_json("0.0.1002", 5, "PREMIUM"),
        token_entity_json("0.0.9999", 2, "PREMIUM"),
    ]);

    let roles = resolver().resolve_wallet(&wallet, &AnyPlan);
    assert_eq!(roles.into_iter().collect::<Vec<_>>(), vec!["admin", "member"]);
}

#[test]
fn test_wallet_without_gate_tokens_gets_nothing() {
    let wallet = wallet(vec![token_entity_json("0.0.9999", 2, "PREMIUM")]);
    assert!(resolver().resolve_wallet(&wallet, &AnyPlan).is_empty());
}

#[test]
fn test_inactive_plan_is_skipped() {
    let wallet = wallet(vec![
        token_entity_json("0.0.1001", 1, "BASIC"),
        token_entity_json("0.0.1002", 5, "PREMIUM"),
    ]);
    let policy = PlanAllowList::new().allow_plan(SubscriptionPlan::Basic);

    let roles = resolver().resolve_wallet(&wallet, &policy);
    assert_eq!(roles.into_iter().collect::<Vec<_>>(), vec!["member"]);
}

#[test]
fn test_malformed_balance_entry_rejects_wallet() {
    let body = json!({
        "walletId": "0.0.4242",
        "publicKey": "pk",
        "balance": [token_entity_json("", 1, "BASIC")]
    });
    let err = WalletIdentity::from_json(&body.to_string()).unwrap_err();
    assert_eq!(err.field(), Some("balance[0].token_id"));
}

#[test]
fn test_wallet_reports_nested_balance_path() {
    let mut entity = token_entity_json("0.0.1001", 1, "BASIC");
    entity["metadata"]["image"] = json!("");
    let body = json!({
        "walletId": "0.0.4242",
        "publicKey": "pk",
        "balance": [token_entity_json("0.0.1002", 2, "PREMIUM"), entity]
    });
    let err = WalletIdentity::from_json(&body.to_string()).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.field(), Some("balance[1].metadata.image"));
}
