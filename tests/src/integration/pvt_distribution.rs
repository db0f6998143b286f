//! # Private Data Distribution Flow
//!
//! Tests the endorser assembling private write sets against lifecycle state
//! reached through the system chaincode provider.
//!
//! ## Flow Tested:
//!
//! 1. **Provider → Ledger**: query executor for the transaction's channel
//! 2. **Assembler → Lifecycle state**: one collection config lookup per namespace
//! 3. **Assembler → Distribution**: write set unchanged, configs trimmed

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::time::timeout;

    use pc_01_endorser::prelude::*;
    use pc_02_system_chaincodes::prelude::*;
    use peer_node::NodeError;
    use shared_types::{
        CollectionConfig, CollectionConfigPackage, CollectionConfigRetriever, InMemoryLedger,
        LedgerError, TxPvtReadWriteSetWithConfigInfo,
    };

    use crate::fixtures::{cc1_ledger, deploy, node_with_channels, pvt_write_set, static_package};

    /// Retriever that never answers.
    struct StalledRetriever;

    #[async_trait]
    impl CollectionConfigRetriever for StalledRetriever {
        async fn get_state(
            &self,
            _namespace: &str,
            _key: &str,
        ) -> Result<Option<Vec<u8>>, LedgerError> {
            std::future::pending().await
        }
    }

    // =============================================================================
    // END TO END
    // =============================================================================

    #[tokio::test]
    async fn test_written_collection_only_is_distributed() {
        let node = node_with_channels(vec![("mychannel", cc1_ledger())]);
        let pvt = pvt_write_set(&[("cc1", &["colA"])]);

        let enriched = node
            .assemble_private_data("mychannel", pvt.clone(), 12)
            .await
            .unwrap();

        assert_eq!(enriched.pvt_rwset, pvt);
        assert_eq!(enriched.endorsed_at, 12);
        assert_eq!(enriched.collection_configs.len(), 1);
        assert_eq!(
            enriched.collection_configs["cc1"].static_names().collect::<Vec<_>>(),
            vec!["colA"]
        );
    }

    #[tokio::test]
    async fn test_wire_bytes_survive_distribution_encoding() {
        let node = node_with_channels(vec![("mychannel", cc1_ledger())]);
        let pvt = pvt_write_set(&[("cc1", &["colA", "colB"])]);

        let enriched = node
            .assemble_private_data("mychannel", pvt.clone(), 0)
            .await
            .unwrap();
        let decoded = TxPvtReadWriteSetWithConfigInfo::decode(&enriched.encode().unwrap()).unwrap();

        assert_eq!(decoded, enriched);
        assert_eq!(
            decoded.pvt_rwset.ns_pvt_rwset[0].collection_pvt_rwset[1].rwset,
            b"cc1/colB".to_vec()
        );
    }

    #[tokio::test]
    async fn test_multiple_namespaces_and_dropped_kinds() {
        let ledger = Arc::new(InMemoryLedger::new());
        let mut package = static_package(&["colA", "colB"]);
        package.config.push(CollectionConfig::Other {
            kind: "implicit".to_string(),
            payload: vec![1, 2, 3],
        });
        deploy(&ledger, "cc1", Some(&package));
        deploy(&ledger, "cc2", Some(&static_package(&["colX", "colY", "colZ"])));
        let node = node_with_channels(vec![("mychannel", ledger)]);

        let enriched = node
            .assemble_private_data(
                "mychannel",
                pvt_write_set(&[("cc2", &["colZ", "colX"]), ("cc1", &["colB"])]),
                0,
            )
            .await
            .unwrap();

        assert_eq!(
            enriched.collection_configs["cc1"].config,
            vec![CollectionConfig::static_named("colB")]
        );
        assert_eq!(
            enriched.collection_configs["cc2"].static_names().collect::<Vec<_>>(),
            vec!["colX", "colZ"]
        );
    }

    #[tokio::test]
    async fn test_chaincode_without_collections_is_rejected() {
        let ledger = Arc::new(InMemoryLedger::new());
        deploy(&ledger, "plain", None);
        let node = node_with_channels(vec![("mychannel", ledger)]);

        let err = node
            .assemble_private_data("mychannel", pvt_write_set(&[("plain", &["colA"])]), 0)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            NodeError::Assembly(AssemblyError::MissingConfig { ref namespace }) if namespace == "plain"
        ));
    }

    #[tokio::test]
    async fn test_channels_see_their_own_deployments() {
        let other = Arc::new(InMemoryLedger::new());
        deploy(&other, "cc1", Some(&static_package(&["colB"])));
        let node = node_with_channels(vec![("ch1", cc1_ledger()), ("ch2", other)]);
        let pvt = pvt_write_set(&[("cc1", &["colA", "colB"])]);

        let on_ch1 = node.assemble_private_data("ch1", pvt.clone(), 0).await.unwrap();
        let on_ch2 = node.assemble_private_data("ch2", pvt, 0).await.unwrap();

        assert_eq!(on_ch1.collection_configs["cc1"].len(), 2);
        assert_eq!(on_ch2.collection_configs["cc1"].len(), 1);
    }

    // =============================================================================
    // FAILURES
    // =============================================================================

    #[tokio::test]
    async fn test_first_failing_namespace_stops_assembly() {
        let provider = InMemoryInfoProvider::new();
        provider.deploy("cc1", Some(static_package(&["colA"])));
        provider.fail_with("cc2", LedgerError::Corrupted("bad page".to_string()));
        provider.deploy("cc3", Some(static_package(&["colA"])));
        let peer = Arc::new(InMemoryPeer::new());
        peer.join_channel("mychannel", Arc::new(InMemoryLedger::new()));
        let registry = Provider::new(peer, Whitelist::new());
        let executor = registry.get_query_executor_for_ledger("mychannel").unwrap();

        let err = RwSetAssembler::default()
            .assemble_pvt_rwset(
                pvt_write_set(&[("cc1", &["colA"]), ("cc2", &["colA"]), ("cc3", &["colA"])]),
                &executor,
                &provider,
            )
            .await
            .unwrap_err();

        assert_eq!(err.namespace(), Some("cc2"));
        assert_eq!(provider.lookups("cc1"), 1);
        assert_eq!(provider.lookups("cc2"), 1);
        assert_eq!(provider.lookups("cc3"), 0);
    }

    #[tokio::test]
    async fn test_dropping_the_future_cancels_pending_lookups() {
        let outcome = timeout(
            Duration::from_millis(50),
            RwSetAssembler::default().assemble_pvt_rwset(
                pvt_write_set(&[("cc1", &["colA"])]),
                &StalledRetriever,
                &LsccInfoProvider::new(),
            ),
        )
        .await;

        assert!(outcome.is_err());
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_assemblies_are_independent() {
        let node = Arc::new(node_with_channels(vec![("mychannel", cc1_ledger())]));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let node = Arc::clone(&node);
                let written: &[&str] = if i % 2 == 0 { &["colA"] } else { &["colB"] };
                let pvt = pvt_write_set(&[("cc1", written)]);
                tokio::spawn(async move {
                    node.assemble_private_data("mychannel", pvt, i).await
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let enriched = handle.await.unwrap().unwrap();
            let expected = if i % 2 == 0 { "colA" } else { "colB" };
            assert_eq!(enriched.endorsed_at, i as u64);
            assert_eq!(
                enriched.collection_configs["cc1"].static_names().collect::<Vec<_>>(),
                vec![expected]
            );
        }
    }

    #[test]
    fn test_package_helper_is_static_only() {
        let package: CollectionConfigPackage = static_package(&["a", "b"]);
        assert!(package.config.iter().all(|c| c.as_static().is_some()));
    }
}
