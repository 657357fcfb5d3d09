/*
[INPUT]:  Traditional (web2) and wallet (web3) credential settings
[OUTPUT]: Validated Web2Options, TwoFactorOptions and Web3Options
[POS]:    Configuration layer - per-credential-family settings
[UPDATE]: When a credential family gains settings
*/

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};
use crate::gate::TokenGateOptions;
use crate::gate::options::TokenGateOptionsFields;
use crate::types::TwilioSecrets;
use crate::types::credentials::TwilioSecretsFields;

/// Phone/app second factor backed by Twilio Verify
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TwoFactorOptionsFields")]
pub struct TwoFactorOptions {
    enabled: bool,
    twilio: TwilioSecrets,
}

#[derive(Deserialize)]
pub(crate) struct TwoFactorOptionsFields {
    enabled: bool,
    twilio: TwilioSecretsFields,
}

impl TwoFactorOptions {
    pub fn new(enabled: bool, twilio: TwilioSecrets) -> Self {
        Self { enabled, twilio }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn twilio(&self) -> &TwilioSecrets {
        &self.twilio
    }
}

impl TryFrom<TwoFactorOptionsFields> for TwoFactorOptions {
    type Error = AuthError;

    fn try_from(fields: TwoFactorOptionsFields) -> Result<Self> {
        let twilio = TwilioSecrets::try_from(fields.twilio).map_err(|e| e.within("twilio"))?;
        Ok(TwoFactorOptions::new(fields.enabled, twilio))
    }
}

/// Traditional (password/email) credential settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Web2OptionsFields")]
pub struct Web2Options {
    enabled: bool,
    #[serde(rename = "twoFactor", skip_serializing_if = "Option::is_none")]
    two_factor: Option<TwoFactorOptions>,
}

#[derive(Deserialize)]
pub(crate) struct Web2OptionsFields {
    enabled: bool,
    #[serde(rename = "twoFactor")]
    two_factor: Option<TwoFactorOptionsFields>,
}

impl Web2Options {
    pub fn new(enabled: bool, two_factor: Option<TwoFactorOptions>) -> Self {
        Self {
            enabled,
            two_factor,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn two_factor(&self) -> Option<&TwoFactorOptions> {
        self.two_factor.as_ref()
    }
}

impl TryFrom<Web2OptionsFields> for Web2Options {
    type Error = AuthError;

    fn try_from(fields: Web2OptionsFields) -> Result<Self> {
        let two_factor = fields
            .two_factor
            .map(TwoFactorOptions::try_from)
            .transpose()
            .map_err(|e| e.within("twoFactor"))?;
        Ok(Web2Options::new(fields.enabled, two_factor))
    }
}

/// Wallet credential settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Web3OptionsFields")]
pub struct Web3Options {
    enabled: bool,
    #[serde(rename = "tokenGate", skip_serializing_if = "Option::is_none")]
    token_gate: Option<TokenGateOptions>,
}

#[derive(Deserialize)]
pub(crate) struct Web3OptionsFields {
    enabled: bool,
    #[serde(rename = "tokenGate")]
    token_gate: Option<TokenGateOptionsFields>,
}

impl Web3Options {
    pub fn new(enabled: bool, token_gate: Option<TokenGateOptions>) -> Self {
        Self {
            enabled,
            token_gate,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn token_gate(&self) -> Option<&TokenGateOptions> {
        self.token_gate.as_ref()
    }
}

impl TryFrom<Web3OptionsFields> for Web3Options {
    type Error = AuthError;

    fn try_from(fields: Web3OptionsFields) -> Result<Self> {
        let token_gate = fields
            .token_gate
            .map(TokenGateOptions::try_from)
            .transpose()
            .map_err(|e| e.within("tokenGate"))?;
        Ok(Web3Options::new(fields.enabled, token_gate))
    }
}
