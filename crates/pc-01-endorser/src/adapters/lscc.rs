//! # Lifecycle State Adapter
//!
//! `DeployedChaincodeInfoProvider` backed by the lifecycle system chaincode's
//! namespace in ledger state:
//!
//! | Namespace | Key | Value |
//! |-----------|-----|-------|
//! | `lscc` | `<cc>` | `ChaincodeDefinition` |
//! | `lscc` | `<cc>~collection` | `CollectionConfigPackage` |
//!
//! Values are bincode-encoded.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{
    CodecError, CollectionConfigPackage, CollectionConfigRetriever, DeployedChaincodeInfo,
};
use tracing::debug;

use crate::errors::InfoProviderError;
use crate::ports::outbound::DeployedChaincodeInfoProvider;

/// Namespace holding chaincode definitions.
pub const LSCC_NAMESPACE: &str = "lscc";

/// Separator between chaincode name and the collection key suffix.
pub const COLLECTION_KEY_SUFFIX: &str = "~collection";

/// State key of the collection config package of `namespace`.
#[must_use]
pub fn collection_config_key(namespace: &str) -> String {
    format!("{namespace}{COLLECTION_KEY_SUFFIX}")
}

/// Chaincode definition as stored by the lifecycle chaincode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeDefinition {
    /// Chaincode name.
    pub name: String,
    /// Chaincode version.
    pub version: String,
    /// Code package hash.
    pub hash: Vec<u8>,
}

impl ChaincodeDefinition {
    /// Encode for storage under `lscc/<name>`.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(self).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        bincode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// Encode a package for storage under `lscc/<name>~collection`.
pub fn encode_collection_config_package(
    package: &CollectionConfigPackage,
) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(package).map_err(|e| CodecError::Encode(e.to_string()))
}

fn decode_collection_config_package(bytes: &[u8]) -> Result<CollectionConfigPackage, CodecError> {
    bincode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

/// Reads deployed chaincode metadata from `lscc` state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LsccInfoProvider;

impl LsccInfoProvider {
    /// Create the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeployedChaincodeInfoProvider for LsccInfoProvider {
    async fn chaincode_info(
        &self,
        namespace: &str,
        retriever: &dyn CollectionConfigRetriever,
    ) -> Result<DeployedChaincodeInfo, InfoProviderError> {
        let definition = retriever
            .get_state(LSCC_NAMESPACE, namespace)
            .await?
            .ok_or_else(|| InfoProviderError::NotDeployed {
                namespace: namespace.to_string(),
            })?;
        let definition = ChaincodeDefinition::decode(&definition)
            .map_err(|e| InfoProviderError::decode(namespace, &e))?;

        let collection_config_pkg = match retriever
            .get_state(LSCC_NAMESPACE, &collection_config_key(namespace))
            .await?
        {
            Some(bytes) => Some(
                decode_collection_config_package(&bytes)
                    .map_err(|e| InfoProviderError::decode(namespace, &e))?,
            ),
            None => None,
        };

        debug!(
            namespace = %namespace,
            version = %definition.version,
            collections = collection_config_pkg.as_ref().map_or(0, CollectionConfigPackage::len),
            "Resolved deployed chaincode"
        );

        Ok(DeployedChaincodeInfo {
            name: definition.name,
            version: definition.version,
            hash: definition.hash,
            collection_config_pkg,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
