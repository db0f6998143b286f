//! # Test Fixtures
//!
//! Builders shared by the integration scenarios and benchmarks.

use std::sync::Arc;

use pc_01_endorser::adapters::{
    collection_config_key, encode_collection_config_package, ChaincodeDefinition, LSCC_NAMESPACE,
};
use pc_02_system_chaincodes::adapters::InMemoryPeer;
use peer_node::container::NodeConfig;
use peer_node::PeerNode;
use peer_telemetry::MetricsHandle;
use shared_types::{
    CollectionConfig, CollectionConfigPackage, CollectionPvtReadWriteSet, InMemoryLedger,
    NsPvtReadWriteSet, TxPvtReadWriteSet,
};

/// A package of default static collections.
pub fn static_package(names: &[&str]) -> CollectionConfigPackage {
    names
        .iter()
        .map(|name| CollectionConfig::static_named(*name))
        .collect()
}

/// A private write set from `(namespace, [collection])` pairs. Each
/// collection's payload is `"<namespace>/<collection>"`.
pub fn pvt_write_set(entries: &[(&str, &[&str])]) -> TxPvtReadWriteSet {
    TxPvtReadWriteSet::new(
        entries
            .iter()
            .map(|(namespace, collections)| {
                NsPvtReadWriteSet::new(
                    *namespace,
                    collections
                        .iter()
                        .map(|collection| {
                            CollectionPvtReadWriteSet::new(
                                *collection,
                                format!("{namespace}/{collection}").into_bytes(),
                            )
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Store a chaincode definition, and its collections if given, in `lscc`
/// state.
pub fn deploy(ledger: &InMemoryLedger, name: &str, package: Option<&CollectionConfigPackage>) {
    let definition = ChaincodeDefinition {
        name: name.to_string(),
        version: "1.0".to_string(),
        hash: name.as_bytes().to_vec(),
    };
    ledger.put_state(
        LSCC_NAMESPACE,
        name,
        definition.encode().expect("definition encodes"),
    );
    if let Some(package) = package {
        ledger.put_state(
            LSCC_NAMESPACE,
            &collection_config_key(name),
            encode_collection_config_package(package).expect("package encodes"),
        );
    }
}

/// A ledger with `cc1` deployed with collections `colA` and `colB`.
pub fn cc1_ledger() -> Arc<InMemoryLedger> {
    let ledger = Arc::new(InMemoryLedger::new());
    deploy(&ledger, "cc1", Some(&static_package(&["colA", "colB"])));
    ledger
}

/// A bootstrapped node whose peer has joined each `(channel, ledger)`.
pub fn node_with_channels(channels: Vec<(&str, Arc<InMemoryLedger>)>) -> PeerNode {
    let peer = Arc::new(InMemoryPeer::new());
    for (channel_id, ledger) in channels {
        peer.join_channel(channel_id, ledger);
    }
    PeerNode::bootstrap(
        &NodeConfig::default(),
        peer,
        MetricsHandle::new().expect("metrics register"),
    )
    .expect("node bootstraps")
}
