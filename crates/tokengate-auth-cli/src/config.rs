/*
[INPUT]:  YAML configuration file
[OUTPUT]: Validated authentication configuration
[POS]:    Configuration layer - process-start loading
[UPDATE]: When adding top-level configuration sections
*/

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokengate_auth_core::AuthConfiguration;

/// Top-level configuration file for the authentication service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Validated authentication configuration
    pub auth: AuthConfiguration,
}

#[derive(Deserialize)]
struct ServiceConfigDocument {
    auth: serde_json::Value,
}

impl ServiceConfig {
    /// Parse YAML text; the `auth` section goes through full validation
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: ServiceConfigDocument =
            serde_yaml::from_str(content).context("parse configuration YAML")?;
        let auth = AuthConfiguration::from_value(document.auth)
            .context("validate auth configuration")?;
        Ok(Self { auth })
    }

    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
auth:
  enabled: true
  commonOptions:
    strategy: REDIS
    session: { secret: s, ttlSeconds: 3600 }
    token: { secret: t, expiresInSeconds: 900, refreshExpiresInSeconds: 3600 }
    cookie: { name: sid, maxAgeSeconds: 3600 }
    operator: { accountId: "0.0.2", privateKey: k, network: testnet }
  web2Options:
    enabled: true
  web3Options:
    enabled: true
    tokenGate:
      enabled: true
      roles:
        - { tokenId: "0.0.1001", role: member }
"#;

    #[test]
    fn test_yaml_config_loads() {
        let config = ServiceConfig::from_yaml_str(CONFIG).unwrap();
        assert!(config.auth.token_gate().is_some());
        assert!(config.auth.second_factor().is_none());
    }

    #[test]
    fn test_yaml_validation_error_names_field() {
        let broken = CONFIG.replace("role: member", "role: \"\"");
        let err = ServiceConfig::from_yaml_str(&broken).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("web3Options.tokenGate.roles[0].role"));
    }

    #[test]
    fn test_missing_auth_section() {
        assert!(ServiceConfig::from_yaml_str("other: 1").is_err());
    }
}
