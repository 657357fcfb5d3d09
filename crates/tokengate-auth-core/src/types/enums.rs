/*
[INPUT]:  Enumerated wire values shared by credentials, factors and configuration
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - closed value sets
[UPDATE]: When a new credential family, plan or network is introduced
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credential family a user signed up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Traditional,
    Wallet,
}

/// Lifecycle status of an enrolled second factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecondFactorStatus {
    Unverified,
    Verified,
    Disabled,
}

impl SecondFactorStatus {
    /// `DISABLED` accepts no further events
    pub fn is_terminal(self) -> bool {
        matches!(self, SecondFactorStatus::Disabled)
    }
}

impl fmt::Display for SecondFactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SecondFactorStatus::Unverified => "UNVERIFIED",
            SecondFactorStatus::Verified => "VERIFIED",
            SecondFactorStatus::Disabled => "DISABLED",
        };
        f.write_str(value)
    }
}

/// Session backing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthStrategy {
    Redis,
    Jwt,
}

/// Ledger network the operator account lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Previewnet,
    Local,
}

/// Subscription tier carried in token metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
    Basic,
    Premium,
    Enterprise,
}

/// Renewal cadence of a subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Periodicity {
    Monthly,
    Quarterly,
    Yearly,
    Lifetime,
}
