//! # Private Write Set Assembler
//!
//! Turns the private write set of a simulated transaction into the payload
//! handed to private data distribution: the write set itself, unchanged, plus
//! each written namespace's collection configuration trimmed to the written
//! collections.
//!
//! ## Flow
//!
//! 1. Resolve each distinct namespace once, in input order, through the
//!    `DeployedChaincodeInfoProvider`. The first failure aborts the call.
//! 2. Trim the resolved packages (`domain::trimming`).
//! 3. Optionally verify the result (`domain::invariants`) before release.
//!
//! The assembler holds no per-call state and may be shared across tasks.

use std::collections::BTreeMap;

use async_trait::async_trait;
use shared_types::{
    CollectionConfigPackage, CollectionConfigRetriever, Namespace, TxPvtReadWriteSet,
    TxPvtReadWriteSetWithConfigInfo,
};
use tracing::{debug, error, instrument, warn};

use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::domain::trimming::trim_collection_configs;
use crate::errors::AssemblyError;
use crate::ports::inbound::PvtRwSetAssembler;
use crate::ports::outbound::DeployedChaincodeInfoProvider;

/// Assembler configuration.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Verify privacy invariants on every result and withhold violators.
    pub verify_invariants: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

/// The private write set assembler.
#[derive(Debug, Clone, Default)]
pub struct RwSetAssembler {
    config: AssemblerConfig,
}

impl RwSetAssembler {
    /// Create an assembler.
    #[must_use]
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Resolve the deployed collection config package of every namespace in
    /// `pvt`. Each namespace is looked up at most once.
    async fn resolve_configs(
        pvt: &TxPvtReadWriteSet,
        retriever: &dyn CollectionConfigRetriever,
        provider: &dyn DeployedChaincodeInfoProvider,
    ) -> Result<BTreeMap<Namespace, CollectionConfigPackage>, AssemblyError> {
        let mut configs: BTreeMap<Namespace, CollectionConfigPackage> = BTreeMap::new();

        for namespace in pvt.namespaces() {
            if configs.contains_key(namespace) {
                continue;
            }

            debug!(namespace = %namespace, "Resolving collection config");
            let info = provider
                .chaincode_info(namespace, retriever)
                .await
                .map_err(|source| {
                    warn!(namespace = %namespace, error = %source, "Chaincode lookup failed");
                    AssemblyError::LookupFailure {
                        namespace: namespace.to_string(),
                        source,
                    }
                })?;

            let Some(package) = info.collection_config_pkg else {
                warn!(namespace = %namespace, "Private writes to chaincode without collections");
                return Err(AssemblyError::MissingConfig {
                    namespace: namespace.to_string(),
                });
            };

            configs.insert(namespace.to_string(), package);
        }

        Ok(configs)
    }
}

#[async_trait]
impl PvtRwSetAssembler for RwSetAssembler {
    #[instrument(skip_all, fields(namespaces = pvt.ns_pvt_rwset.len()))]
    async fn assemble_pvt_rwset(
        &self,
        pvt: TxPvtReadWriteSet,
        retriever: &dyn CollectionConfigRetriever,
        provider: &dyn DeployedChaincodeInfoProvider,
    ) -> Result<TxPvtReadWriteSetWithConfigInfo, AssemblyError> {
        let deployed = Self::resolve_configs(&pvt, retriever, provider).await?;

        let collection_configs = if self.config.verify_invariants {
            let trimmed = trim_collection_configs(&pvt, deployed.clone());
            if let InvariantCheckResult::Invalid(violations) =
                check_all_invariants(&pvt, &deployed, &trimmed)
            {
                error!(?violations, "Trimmed collection configs failed verification");
                return Err(AssemblyError::InvariantViolation(violations));
            }
            trimmed
        } else {
            trim_collection_configs(&pvt, deployed)
        };

        debug!(
            namespaces = collection_configs.len(),
            collections = collection_configs
                .values()
                .map(CollectionConfigPackage::len)
                .sum::<usize>(),
            "Assembled private write set"
        );

        Ok(TxPvtReadWriteSetWithConfigInfo {
            endorsed_at: 0,
            pvt_rwset: pvt,
            collection_configs,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryInfoProvider;
    use crate::errors::InfoProviderError;
    use shared_types::{
        CollectionConfig, CollectionPvtReadWriteSet, InMemoryLedger, LedgerError,
        NsPvtReadWriteSet, PeerLedger, QueryExecutor,
    };

    fn pvt(entries: &[(&str, &[&str])]) -> TxPvtReadWriteSet {
        TxPvtReadWriteSet::new(
            entries
                .iter()
                .map(|(ns, cols)| {
                    NsPvtReadWriteSet::new(
                        *ns,
                        cols.iter()
                            .map(|c| {
                                CollectionPvtReadWriteSet::new(*c, format!("{ns}/{c}").into_bytes())
                            })
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    fn package(names: &[&str]) -> Option<CollectionConfigPackage> {
        Some(
            names
                .iter()
                .map(|n| CollectionConfig::static_named(*n))
                .collect(),
        )
    }

    fn retriever() -> Box<dyn QueryExecutor> {
        InMemoryLedger::new().new_query_executor().unwrap()
    }

    fn assembler() -> RwSetAssembler {
        RwSetAssembler::new(AssemblerConfig {
            verify_invariants: true,
        })
    }

    #[tokio::test]
    async fn test_single_namespace_is_trimmed() {
        let provider = InMemoryInfoProvider::new();
        provider.deploy("cc1", package(&["colA", "colB"]));
        let input = pvt(&[("cc1", &["colA"])]);

        let out = assembler()
            .assemble_pvt_rwset(input.clone(), &retriever(), &provider)
            .await
            .unwrap();

        assert_eq!(out.pvt_rwset, input);
        assert_eq!(out.collection_configs.len(), 1);
        let names: Vec<_> = out.collection_configs["cc1"].static_names().collect();
        assert_eq!(names, vec!["colA"]);
    }

    #[tokio::test]
    async fn test_each_namespace_resolved_once() {
        let provider = InMemoryInfoProvider::new();
        provider.deploy("cc1", package(&["colA", "colB"]));
        provider.deploy("cc2", package(&["colX"]));
        let input = pvt(&[("cc1", &["colA"]), ("cc2", &["colX"]), ("cc1", &["colB"])]);

        let out = assembler()
            .assemble_pvt_rwset(input, &retriever(), &provider)
            .await
            .unwrap();

        assert_eq!(provider.lookups("cc1"), 1);
        assert_eq!(provider.lookups("cc2"), 1);
        let names: Vec<_> = out.collection_configs["cc1"].static_names().collect();
        assert_eq!(names, vec!["colA", "colB"]);
    }

    #[tokio::test]
    async fn test_namespace_with_nothing_surviving_is_kept() {
        let provider = InMemoryInfoProvider::new();
        provider.deploy("cc1", package(&["colA"]));
        let input = pvt(&[("cc1", &["colUnknown"])]);

        let out = assembler()
            .assemble_pvt_rwset(input, &retriever(), &provider)
            .await
            .unwrap();

        assert!(out.collection_configs.contains_key("cc1"));
        assert!(out.collection_configs["cc1"].is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_aborts_with_namespace() {
        let provider = InMemoryInfoProvider::new();
        provider.deploy("cc1", package(&["colA"]));
        provider.fail_with("cc2", LedgerError::Unavailable("down".to_string()));
        provider.deploy("cc3", package(&["colA"]));
        let input = pvt(&[("cc1", &["colA"]), ("cc2", &["colA"]), ("cc3", &["colA"])]);

        let err = assembler()
            .assemble_pvt_rwset(input, &retriever(), &provider)
            .await
            .unwrap_err();

        match err {
            AssemblyError::LookupFailure { namespace, source } => {
                assert_eq!(namespace, "cc2");
                assert_eq!(
                    source,
                    InfoProviderError::Ledger(LedgerError::Unavailable("down".to_string()))
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(provider.lookups("cc3"), 0);
    }

    #[tokio::test]
    async fn test_missing_config_aborts() {
        let provider = InMemoryInfoProvider::new();
        provider.deploy("cc1", None);
        let input = pvt(&[("cc1", &["colA"])]);

        let err = assembler()
            .assemble_pvt_rwset(input, &retriever(), &provider)
            .await
            .unwrap_err();

        assert!(matches!(err, AssemblyError::MissingConfig { ref namespace } if namespace == "cc1"));
    }

    #[tokio::test]
    async fn test_undeployed_namespace_is_lookup_failure() {
        let provider = InMemoryInfoProvider::new();
        let input = pvt(&[("ghost", &["colA"])]);

        let err = assembler()
            .assemble_pvt_rwset(input, &retriever(), &provider)
            .await
            .unwrap_err();

        assert_eq!(err.namespace(), Some("ghost"));
        assert!(matches!(
            err,
            AssemblyError::LookupFailure {
                source: InfoProviderError::NotDeployed { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_write_set() {
        let provider = InMemoryInfoProvider::new();

        let out = assembler()
            .assemble_pvt_rwset(TxPvtReadWriteSet::default(), &retriever(), &provider)
            .await
            .unwrap();

        assert!(out.collection_configs.is_empty());
        assert_eq!(provider.total_lookups(), 0);
    }

    #[tokio::test]
    async fn test_repeated_assembly_is_byte_identical() {
        let provider = InMemoryInfoProvider::new();
        provider.deploy("cc1", package(&["colA", "colB", "colC"]));
        provider.deploy("cc2", package(&["colX", "colY"]));
        let input = pvt(&[("cc2", &["colY"]), ("cc1", &["colC", "colA"])]);

        let first = assembler()
            .assemble_pvt_rwset(input.clone(), &retriever(), &provider)
            .await
            .unwrap();
        let second = assembler()
            .assemble_pvt_rwset(input, &retriever(), &provider)
            .await
            .unwrap();

        assert_eq!(first.encode().unwrap(), second.encode().unwrap());
    }

    #[test]
    fn test_default_config_matches_build_profile() {
        assert_eq!(
            AssemblerConfig::default().verify_invariants,
            cfg!(debug_assertions)
        );
    }
}
