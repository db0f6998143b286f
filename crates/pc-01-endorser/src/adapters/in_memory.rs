//! # In-Memory Info Provider
//!
//! Fixed-table `DeployedChaincodeInfoProvider` for tests and development
//! nodes. Records how often each namespace was resolved and can be told to
//! fail for chosen namespaces.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{
    CollectionConfigPackage, CollectionConfigRetriever, DeployedChaincodeInfo, LedgerError,
};

use crate::errors::InfoProviderError;
use crate::ports::outbound::DeployedChaincodeInfoProvider;

/// Deployed chaincode table held in memory.
#[derive(Debug, Default)]
pub struct InMemoryInfoProvider {
    deployed: RwLock<HashMap<String, DeployedChaincodeInfo>>,
    failing: RwLock<HashMap<String, LedgerError>>,
    lookups: RwLock<HashMap<String, usize>>,
}

impl InMemoryInfoProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy `namespace` with the given collections (`None` = no collections).
    pub fn deploy(&self, namespace: &str, collections: Option<CollectionConfigPackage>) {
        self.deployed.write().insert(
            namespace.to_string(),
            DeployedChaincodeInfo {
                name: namespace.to_string(),
                version: "1.0".to_string(),
                hash: Vec::new(),
                collection_config_pkg: collections,
            },
        );
    }

    /// Make lookups of `namespace` fail with `error`.
    pub fn fail_with(&self, namespace: &str, error: LedgerError) {
        self.failing.write().insert(namespace.to_string(), error);
    }

    /// Number of lookups issued for `namespace`.
    #[must_use]
    pub fn lookups(&self, namespace: &str) -> usize {
        self.lookups.read().get(namespace).copied().unwrap_or(0)
    }

    /// Total number of lookups issued.
    #[must_use]
    pub fn total_lookups(&self) -> usize {
        self.lookups.read().values().sum()
    }
}

#[async_trait]
impl DeployedChaincodeInfoProvider for InMemoryInfoProvider {
    async fn chaincode_info(
        &self,
        namespace: &str,
        _retriever: &dyn CollectionConfigRetriever,
    ) -> Result<DeployedChaincodeInfo, InfoProviderError> {
        *self
            .lookups
            .write()
            .entry(namespace.to_string())
            .or_insert(0) += 1;

        if let Some(error) = self.failing.read().get(namespace) {
            return Err(InfoProviderError::Ledger(error.clone()));
        }

        self.deployed
            .read()
            .get(namespace)
            .cloned()
            .ok_or_else(|| InfoProviderError::NotDeployed {
                namespace: namespace.to_string(),
            })
    }
}
