/*
[INPUT]:  Test scenarios needing canned payloads
[OUTPUT]: Shared fixtures for wallet, gate and configuration tests
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new fixtures
*/

//! Common test utilities for tokengate-auth-core tests

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Value, json};

/// JWT-shaped token whose payload carries `claims`
#[allow(dead_code)]
pub fn mock_jwt_token(claims: Value) -> String {
    let header = json!({"alg": "none", "typ": "JWT"});
    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
    let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
    format!("{header_b64}.{payload_b64}.signature")
}

/// Owned-token record as a wallet balance service would report it
#[allow(dead_code)]
pub fn token_entity_json(token_id: &str, serial_number: i64, plan: &str) -> Value {
    json!({
        "metadata": {
            "name": "Membership Pass",
            "description": "Grants access to the members area",
            "creator": "0.0.900",
            "image": "ipfs://bafy/pass.png",
            "properties": {"plan": plan, "periodicity": "MONTHLY"}
        },
        "serial_number": serial_number,
        "token_id": token_id
    })
}

/// Complete, valid root configuration
#[allow(dead_code)]
pub fn auth_configuration_json() -> Value {
    json!({
        "enabled": true,
        "commonOptions": {
            "strategy": "JWT",
            "session": {"secret": "session-secret", "ttlSeconds": 3600},
            "token": {"secret": "token-secret", "expiresInSeconds": 900, "refreshExpiresInSeconds": 604800},
            "cookie": {"name": "tg_session", "secure": true, "maxAgeSeconds": 3600},
            "operator": {"accountId": "0.0.2", "privateKey": "302e0201", "network": "testnet"}
        },
        "web2Options": {
            "enabled": true,
            "twoFactor": {
                "enabled": true,
                "twilio": {"accountSid": "AC123", "authToken": "twilio-token", "serviceSid": "VA123"}
            }
        },
        "web3Options": {
            "enabled": true,
            "tokenGate": {
                "enabled": true,
                "roles": [
                    {"tokenId": "0.0.1001", "role": "member"},
                    {"tokenId": "0.0.1002", "role": "admin"}
                ]
            }
        }
    })
}
