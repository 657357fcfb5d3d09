/*
[INPUT]:  Validated configuration, wallet JSON files, raw tokens
[OUTPUT]: Configuration summaries, granted roles, decoded token claims
[POS]:    Command layer - operator checks run against the core
[UPDATE]: When adding CLI subcommands
*/

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tokengate_auth_core::{
    AuthConfiguration, AuthStrategy, AuthToken, Periodicity, PlanAllowList, SubscriptionPlan,
    WalletIdentity,
};
use tracing::{debug, info};

/// What the service will enforce with a given configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub enabled: bool,
    pub strategy: AuthStrategy,
    pub web2_enabled: bool,
    pub web3_enabled: bool,
    pub second_factor: bool,
    pub token_gate_rules: usize,
}

pub fn summarize(config: &AuthConfiguration) -> ConfigSummary {
    ConfigSummary {
        enabled: config.enabled(),
        strategy: config.common_options().strategy(),
        web2_enabled: config.web2_options().enabled(),
        web3_enabled: config.web3_options().enabled(),
        second_factor: config.second_factor().is_some(),
        token_gate_rules: config.token_gate().map_or(0, |gate| gate.roles().len()),
    }
}

/// Parse a plan name as written on the command line (case-insensitive)
pub fn parse_plan(value: &str) -> Result<SubscriptionPlan> {
    serde_json::from_value(serde_json::Value::String(value.to_ascii_uppercase()))
        .map_err(|_| anyhow!("unknown subscription plan: {value}"))
}

/// Parse a periodicity as written on the command line (case-insensitive)
pub fn parse_periodicity(value: &str) -> Result<Periodicity> {
    serde_json::from_value(serde_json::Value::String(value.to_ascii_uppercase()))
        .map_err(|_| anyhow!("unknown periodicity: {value}"))
}

/// Roles the configured gate grants to the wallet described in `wallet_path`
pub fn resolve_roles(
    config: &AuthConfiguration,
    wallet_path: &Path,
    plans: &[String],
    periodicities: &[String],
) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(wallet_path)
        .with_context(|| format!("read wallet file {}", wallet_path.display()))?;
    let wallet = WalletIdentity::from_json(&content).context("validate wallet identity")?;

    let mut policy = PlanAllowList::new();
    for plan in plans {
        policy = policy.allow_plan(parse_plan(plan)?);
    }
    for periodicity in periodicities {
        policy = policy.allow_periodicity(parse_periodicity(periodicity)?);
    }

    let Some(resolver) = config.resolver() else {
        info!(wallet_id = wallet.wallet_id(), "token gate inactive; no roles granted");
        return Ok(Vec::new());
    };

    let roles: Vec<String> = resolver.resolve_wallet(&wallet, &policy).into_iter().collect();
    info!(
        wallet_id = wallet.wallet_id(),
        owned_tokens = wallet.balance().len(),
        granted = roles.len(),
        "resolved token-gate roles"
    );
    Ok(roles)
}

/// Validate the token shape and decode its claims without verification
pub fn inspect_token(token: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    let token = AuthToken::new(token.trim()).context("validate token")?;
    let claims = token.claims().context("decode token claims")?;
    debug!(claim_count = claims.len(), "decoded token claims");
    Ok(claims)
}
