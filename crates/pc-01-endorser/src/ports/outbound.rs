//! # Driven Ports (SPI - Outbound)
//!
//! Collaborators the endorser depends on while assembling private data.

use async_trait::async_trait;
use shared_types::{CollectionConfigRetriever, DeployedChaincodeInfo};

use crate::errors::InfoProviderError;

/// Resolves a namespace to the metadata of the chaincode deployed under it.
///
/// ## Implementation Notes
///
/// Implementations read state only through `retriever`, which is scoped to
/// the transaction being endorsed. They must not cache across retrievers.
#[async_trait]
pub trait DeployedChaincodeInfoProvider: Send + Sync {
    /// Get deployed metadata for `namespace`.
    ///
    /// # Returns
    ///
    /// * `Ok(info)` - `info.collection_config_pkg` is `None` when the chaincode
    ///   has no collections
    /// * `Err(_)` - the chaincode is not deployed, or state could not be read
    async fn chaincode_info(
        &self,
        namespace: &str,
        retriever: &dyn CollectionConfigRetriever,
    ) -> Result<DeployedChaincodeInfo, InfoProviderError>;
}
