/*
[INPUT]:  Validated TokenGateOptions, a wallet's owned tokens, a plan policy
[OUTPUT]: Set of application roles granted by token ownership
[POS]:    Gate layer - token-to-role mapping
[UPDATE]: When grant semantics (union, priority) change
*/

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace};

use crate::types::{Periodicity, SubscriptionPlan, WalletIdentity};

use super::entity::{TokenGateEntity, TokenGateProperties};
use super::options::TokenGateOptions;

/// Decides whether a token's subscription is currently active
pub trait PlanPolicy {
    fn is_active(&self, properties: &TokenGateProperties) -> bool;
}

impl<F> PlanPolicy for F
where
    F: Fn(&TokenGateProperties) -> bool,
{
    fn is_active(&self, properties: &TokenGateProperties) -> bool {
        self(properties)
    }
}

/// Treats every plan as active
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyPlan;

impl PlanPolicy for AnyPlan {
    fn is_active(&self, _properties: &TokenGateProperties) -> bool {
        true
    }
}

/// Active when plan and periodicity are both allowed. An empty set allows anything.
#[derive(Debug, Clone, Default)]
pub struct PlanAllowList {
    plans: HashSet<SubscriptionPlan>,
    periodicities: HashSet<Periodicity>,
}

impl PlanAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_plan(mut self, plan: SubscriptionPlan) -> Self {
        self.plans.insert(plan);
        self
    }

    pub fn allow_periodicity(mut self, periodicity: Periodicity) -> Self {
        self.periodicities.insert(periodicity);
        self
    }
}

impl PlanPolicy for PlanAllowList {
    fn is_active(&self, properties: &TokenGateProperties) -> bool {
        let plan_ok = self.plans.is_empty() || self.plans.contains(&properties.plan);
        let periodicity_ok =
            self.periodicities.is_empty() || self.periodicities.contains(&properties.periodicity);
        plan_ok && periodicity_ok
    }
}

/// Maps owned tokens to roles using the configured rules
#[derive(Debug, Clone)]
pub struct TokenGateResolver {
    options: TokenGateOptions,
}

impl TokenGateResolver {
    pub fn new(options: TokenGateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TokenGateOptions {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled()
    }

    /// Roles configured for one token id
    pub fn roles_for_token<'a>(&'a self, token_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.options
            .roles()
            .iter()
            .filter(move |rule| rule.token_id() == token_id)
            .map(|rule| rule.role())
    }

    /// Union of roles granted by active owned tokens.
    ///
    /// A disabled gate or an unmatched balance yields an empty set.
    pub fn resolve<P>(&self, balance: &[TokenGateEntity], policy: &P) -> BTreeSet<String>
    where
        P: PlanPolicy + ?Sized,
    {
        let mut granted = BTreeSet::new();
        if !self.is_enabled() {
            trace!("token gate disabled; no roles granted");
            return granted;
        }

        for entity in balance {
            if !policy.is_active(entity.properties()) {
                trace!(
                    token_id = entity.token_id(),
                    serial_number = entity.serial_number(),
                    "skipping token with inactive plan"
                );
                continue;
            }

            for role in self.roles_for_token(entity.token_id()) {
                if granted.insert(role.to_string()) {
                    debug!(
                        token_id = entity.token_id(),
                        serial_number = entity.serial_number(),
                        role,
                        "granted token-gate role"
                    );
                }
            }
        }

        granted
    }

    pub fn resolve_wallet<P>(&self, wallet: &WalletIdentity, policy: &P) -> BTreeSet<String>
    where
        P: PlanPolicy + ?Sized,
    {
        self.resolve(wallet.balance(), policy)
    }
}
