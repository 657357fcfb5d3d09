/*
[INPUT]:  Common, traditional and wallet configuration sections
[OUTPUT]: One validated AuthConfiguration evaluated at process start
[POS]:    Configuration layer - root composer
[UPDATE]: When a top-level configuration section is added
*/

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuthError, Result};
use crate::gate::{TokenGateOptions, TokenGateResolver};

use super::common::{CommonOptions, CommonOptionsFields};
use super::web::{TwoFactorOptions, Web2Options, Web2OptionsFields, Web3Options, Web3OptionsFields};

/// Root authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthConfigurationFields")]
pub struct AuthConfiguration {
    enabled: bool,
    #[serde(rename = "commonOptions")]
    common_options: CommonOptions,
    #[serde(rename = "web2Options")]
    web2_options: Web2Options,
    #[serde(rename = "web3Options")]
    web3_options: Web3Options,
}

#[derive(Deserialize)]
pub(crate) struct AuthConfigurationFields {
    enabled: bool,
    #[serde(rename = "commonOptions")]
    common_options: CommonOptionsFields,
    #[serde(rename = "web2Options")]
    web2_options: Web2OptionsFields,
    #[serde(rename = "web3Options")]
    web3_options: Web3OptionsFields,
}

impl AuthConfiguration {
    pub fn new(
        enabled: bool,
        common_options: CommonOptions,
        web2_options: Web2Options,
        web3_options: Web3Options,
    ) -> Self {
        let config = Self {
            enabled,
            common_options,
            web2_options,
            web3_options,
        };
        debug!(
            enabled = config.enabled,
            strategy = ?config.common_options.strategy(),
            web2 = config.web2_options.enabled(),
            web3 = config.web3_options.enabled(),
            token_gate = config.token_gate().is_some(),
            second_factor = config.second_factor().is_some(),
            "authentication configuration composed"
        );
        config
    }

    /// Parse and validate, reporting nested failures with their full field path
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: AuthConfigurationFields = serde_json::from_str(json)?;
        Self::try_from(fields)
    }

    /// Same as [`AuthConfiguration::from_json`] for an already-parsed document
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let fields: AuthConfigurationFields = serde_json::from_value(value)?;
        Self::try_from(fields)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn common_options(&self) -> &CommonOptions {
        &self.common_options
    }

    pub fn web2_options(&self) -> &Web2Options {
        &self.web2_options
    }

    pub fn web3_options(&self) -> &Web3Options {
        &self.web3_options
    }

    /// Gate rules, only when wallet auth and the gate are both switched on
    pub fn token_gate(&self) -> Option<&TokenGateOptions> {
        if !self.enabled || !self.web3_options.enabled() {
            return None;
        }
        self.web3_options
            .token_gate()
            .filter(|gate| gate.enabled())
    }

    /// Second-factor settings, only when traditional auth and 2FA are both switched on
    pub fn second_factor(&self) -> Option<&TwoFactorOptions> {
        if !self.enabled || !self.web2_options.enabled() {
            return None;
        }
        self.web2_options
            .two_factor()
            .filter(|two_factor| two_factor.enabled())
    }

    pub fn resolver(&self) -> Option<TokenGateResolver> {
        self.token_gate().cloned().map(TokenGateResolver::new)
    }
}

impl TryFrom<AuthConfigurationFields> for AuthConfiguration {
    type Error = AuthError;

    fn try_from(fields: AuthConfigurationFields) -> Result<Self> {
        let common_options = CommonOptions::try_from(fields.common_options)
            .map_err(|e| e.within("commonOptions"))?;
        let web2_options =
            Web2Options::try_from(fields.web2_options).map_err(|e| e.within("web2Options"))?;
        let web3_options =
            Web3Options::try_from(fields.web3_options).map_err(|e| e.within("web3Options"))?;
        Ok(AuthConfiguration::new(
            fields.enabled,
            common_options,
            web2_options,
            web3_options,
        ))
    }
}
