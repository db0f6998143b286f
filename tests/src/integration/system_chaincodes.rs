//! # System Chaincode Registration Flow
//!
//! Tests startup registration through the whitelist, the provider's
//! read-side API once frozen, and deploying the sample chaincode on several
//! channels.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pc_02_system_chaincodes::prelude::*;
    use peer_node::container::NodeConfig;
    use peer_node::PeerNode;
    use peer_telemetry::MetricsHandle;
    use shared_types::{ApplicationConfig, InMemoryLedger};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn args(values: &[&str]) -> Vec<Vec<u8>> {
        values.iter().map(|v| v.as_bytes().to_vec()).collect()
    }

    /// Deploy the sample chaincode on `channel_id`, then put and get a value.
    fn deploy_sample(record: &SystemChaincodeRecord, channel_id: &str) -> InMemoryStub {
        let mut stub = InMemoryStub::new(channel_id, record.init_args.clone());
        assert!(record.chaincode.init(&mut stub).is_success());

        stub.set_args(args(&["putval", "greeting", "hey there"]));
        assert!(record.chaincode.invoke(&mut stub).is_success());

        stub.set_args(args(&["getval", "greeting"]));
        let response = record.chaincode.invoke(&mut stub);
        assert!(response.is_success());
        assert_eq!(response.payload, b"hey there".to_vec());

        stub
    }

    // =============================================================================
    // REGISTRATION
    // =============================================================================

    #[test]
    fn test_whitelisted_sample_is_registered() {
        let mut provider = Provider::new(
            Arc::new(InMemoryPeer::new()),
            Whitelist::parse("sample_syscc=true"),
        );

        let registered = provider.register_sys_ccs([SampleSysCc::record()]).unwrap();

        assert_eq!(registered, vec![SAMPLE_SYSCC_NAME.to_string()]);
        assert!(provider.is_sys_cc(SAMPLE_SYSCC_NAME));
    }

    #[test]
    fn test_sample_must_be_enabled_to_register() {
        for whitelist in [Whitelist::new(), Whitelist::parse("sample_syscc=false")] {
            let mut provider = Provider::new(Arc::new(InMemoryPeer::new()), whitelist);
            let registered = provider.register_sys_ccs([SampleSysCc::record()]).unwrap();
            assert!(registered.is_empty());
            assert!(!provider.is_sys_cc(SAMPLE_SYSCC_NAME));
        }
    }

    #[test]
    fn test_second_sample_registration_fails() {
        let mut provider = Provider::new(Arc::new(InMemoryPeer::new()), Whitelist::new());
        provider.register_sys_cc(SampleSysCc::record()).unwrap();

        let err = provider.register_sys_cc(SampleSysCc::record()).unwrap_err();

        assert!(
            matches!(err, RegistryError::DuplicateRegistration { ref name } if name == SAMPLE_SYSCC_NAME)
        );
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_deprecated_names_without_registration() {
        let provider = Provider::new(Arc::new(InMemoryPeer::new()), Whitelist::new());
        assert!(provider.is_sys_cc("vscc"));
        assert!(provider.is_sys_cc("escc"));
        assert!(!provider.is_sys_cc(SAMPLE_SYSCC_NAME));
    }

    // =============================================================================
    // MULTICHANNEL
    // =============================================================================

    #[test]
    fn test_sample_deploys_on_each_channel() {
        let peer = Arc::new(InMemoryPeer::new());
        peer.join_channel("chain1", Arc::new(InMemoryLedger::new()));
        peer.join_channel("chain2", Arc::new(InMemoryLedger::new()));
        let node = PeerNode::bootstrap(
            &NodeConfig::default(),
            peer.clone(),
            MetricsHandle::new().unwrap(),
        )
        .unwrap();

        let record = node.provider().sys_cc(SAMPLE_SYSCC_NAME).unwrap();
        for channel_id in peer.channels() {
            assert!(node
                .provider()
                .get_query_executor_for_ledger(&channel_id)
                .is_ok());
            let stub = deploy_sample(record, &channel_id);
            assert_eq!(stub.channel_id(), channel_id);
        }
    }

    #[test]
    fn test_channel_state_is_isolated() {
        let record = SampleSysCc::record();
        let _chain1 = deploy_sample(&record, "chain1");

        let mut chain2 = InMemoryStub::new("chain2", args(&["getval", "greeting"]));
        let response = record.chaincode.invoke(&mut chain2);

        assert_eq!(response.status, Response::ERROR);
    }

    // =============================================================================
    // SERVING PHASE
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_frozen_provider_serves_readers() {
        let peer = Arc::new(InMemoryPeer::new());
        peer.join_channel("mychannel", Arc::new(InMemoryLedger::new()));
        peer.set_application_config("mychannel", ApplicationConfig::default());
        let mut provider = Provider::new(peer, Whitelist::parse("sample_syscc=enable"));
        provider.register_sys_ccs([SampleSysCc::record()]).unwrap();
        let provider = Arc::new(provider);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                tokio::spawn(async move {
                    provider.is_sys_cc(SAMPLE_SYSCC_NAME)
                        && provider.get_query_executor_for_ledger("mychannel").is_ok()
                        && provider.get_application_config("mychannel").is_some()
                        && provider.policy_manager("mychannel").is_none()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap());
        }
    }
}
