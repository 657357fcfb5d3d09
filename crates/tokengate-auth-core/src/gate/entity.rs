/*
[INPUT]:  Owned-token records reported for a wallet
[OUTPUT]: Validated TokenGateEntity, TokenGateMetadata and TokenGateProperties
[POS]:    Gate layer - canonical owned-token record
[UPDATE]: When token metadata fields change
*/

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, require_non_empty};
use crate::types::{Periodicity, SubscriptionPlan};

/// Subscription attributes attached to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenGateProperties {
    pub plan: SubscriptionPlan,
    pub periodicity: Periodicity,
}

/// Descriptive token metadata plus its subscription properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenGateMetadataFields")]
pub struct TokenGateMetadata {
    name: String,
    description: String,
    creator: String,
    image: String,
    properties: TokenGateProperties,
}

#[derive(Deserialize)]
pub(crate) struct TokenGateMetadataFields {
    name: String,
    description: String,
    creator: String,
    image: String,
    properties: TokenGateProperties,
}

impl TokenGateMetadata {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        creator: impl Into<String>,
        image: impl Into<String>,
        properties: TokenGateProperties,
    ) -> Result<Self> {
        let name = name.into();
        let description = description.into();
        let creator = creator.into();
        let image = image.into();
        require_non_empty("name", &name)?;
        require_non_empty("description", &description)?;
        require_non_empty("creator", &creator)?;
        require_non_empty("image", &image)?;
        Ok(Self {
            name,
            description,
            creator,
            image,
            properties,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn properties(&self) -> &TokenGateProperties {
        &self.properties
    }
}

impl TryFrom<TokenGateMetadataFields> for TokenGateMetadata {
    type Error = AuthError;

    fn try_from(fields: TokenGateMetadataFields) -> Result<Self> {
        TokenGateMetadata::new(
            fields.name,
            fields.description,
            fields.creator,
            fields.image,
            fields.properties,
        )
    }
}

/// One token owned by a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenGateEntityFields")]
pub struct TokenGateEntity {
    metadata: TokenGateMetadata,
    serial_number: u64,
    token_id: String,
}

#[derive(Deserialize)]
pub(crate) struct TokenGateEntityFields {
    metadata: TokenGateMetadataFields,
    serial_number: i64,
    token_id: String,
}

impl TokenGateEntity {
    pub fn new(
        metadata: TokenGateMetadata,
        serial_number: i64,
        token_id: impl Into<String>,
    ) -> Result<Self> {
        if serial_number <= 0 {
            return Err(AuthError::validation(
                "serial_number",
                "must be a positive integer",
            ));
        }
        let token_id = token_id.into();
        require_non_empty("token_id", &token_id)?;
        Ok(Self {
            metadata,
            serial_number: serial_number as u64,
            token_id,
        })
    }

    pub fn metadata(&self) -> &TokenGateMetadata {
        &self.metadata
    }

    pub fn serial_number(&self) -> u64 {
        self.serial_number
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    pub fn properties(&self) -> &TokenGateProperties {
        self.metadata.properties()
    }
}

impl TryFrom<TokenGateEntityFields> for TokenGateEntity {
    type Error = AuthError;

    fn try_from(fields: TokenGateEntityFields) -> Result<Self> {
        let metadata =
            TokenGateMetadata::try_from(fields.metadata).map_err(|e| e.within("metadata"))?;
        TokenGateEntity::new(metadata, fields.serial_number, fields.token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn properties() -> TokenGateProperties {
        TokenGateProperties {
            plan: SubscriptionPlan::Premium,
            periodicity: Periodicity::Monthly,
        }
    }

    #[test]
    fn test_metadata_rejects_empty_image() {
        let err = TokenGateMetadata::new("Pass", "Access pass", "0.0.9", "", properties())
            .unwrap_err();
        assert_eq!(err.field(), Some("image"));
    }

    #[test]
    fn test_entity_rejects_zero_serial() {
        let metadata =
            TokenGateMetadata::new("Pass", "Access pass", "0.0.9", "ipfs://img", properties())
                .unwrap();
        let err = TokenGateEntity::new(metadata, 0, "0.0.1").unwrap_err();
        assert_eq!(err.field(), Some("serial_number"));
    }

    #[test]
    fn test_entity_json_shape() {
        let value = json!({
            "metadata": {
                "name": "Pass",
                "description": "Access pass",
                "creator": "0.0.9",
                "image": "ipfs://img",
                "properties": {"plan": "PREMIUM", "periodicity": "MONTHLY"}
            },
            "serial_number": 7,
            "token_id": "0.0.1"
        });
        let entity: TokenGateEntity = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(entity.serial_number(), 7);
        assert_eq!(entity.properties(), &properties());
        assert_eq!(serde_json::to_value(&entity).unwrap(), value);
    }

    #[test]
    fn test_entity_reports_nested_metadata_field() {
        let fields: TokenGateEntityFields = serde_json::from_value(json!({
            "metadata": {
                "name": "Pass",
                "description": "Access pass",
                "creator": "0.0.9",
                "image": "",
                "properties": {"plan": "PREMIUM", "periodicity": "MONTHLY"}
            },
            "serial_number": 7,
            "token_id": "0.0.1"
        }))
        .unwrap();
        let err = TokenGateEntity::try_from(fields).unwrap_err();
        assert_eq!(err.field(), Some("metadata.image"));
    }
}
