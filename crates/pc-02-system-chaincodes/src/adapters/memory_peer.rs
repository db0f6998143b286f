//! # In-Memory Peer
//!
//! `Peer` adapter holding channel resources in maps, for tests and the
//! development node. Also provides a path-keyed policy manager.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared_types::{ApplicationConfig, PeerLedger, Policy, PolicyError, PolicyManager, SignedData};
use tracing::debug;

use crate::ports::outbound::Peer;

#[derive(Default)]
struct ChannelResources {
    ledger: Option<Arc<dyn PeerLedger>>,
    application_config: Option<Arc<ApplicationConfig>>,
    policy_manager: Option<Arc<dyn PolicyManager>>,
}

/// Channel resources held in memory.
#[derive(Default)]
pub struct InMemoryPeer {
    channels: RwLock<HashMap<String, ChannelResources>>,
}

impl InMemoryPeer {
    /// Create a peer that has joined no channels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `ledger` to `channel_id`.
    pub fn join_channel(&self, channel_id: &str, ledger: Arc<dyn PeerLedger>) {
        debug!(channel_id = %channel_id, "Joined channel");
        self.channels
            .write()
            .entry(channel_id.to_string())
            .or_default()
            .ledger = Some(ledger);
    }

    /// Set the application configuration of `channel_id`.
    pub fn set_application_config(&self, channel_id: &str, config: ApplicationConfig) {
        self.channels
            .write()
            .entry(channel_id.to_string())
            .or_default()
            .application_config = Some(Arc::new(config));
    }

    /// Set the policy manager of `channel_id`.
    pub fn set_policy_manager(&self, channel_id: &str, manager: Arc<dyn PolicyManager>) {
        self.channels
            .write()
            .entry(channel_id.to_string())
            .or_default()
            .policy_manager = Some(manager);
    }

    /// Channels with a bound ledger, sorted.
    #[must_use]
    pub fn channels(&self) -> Vec<String> {
        let mut channels: Vec<String> = self
            .channels
            .read()
            .iter()
            .filter(|(_, resources)| resources.ledger.is_some())
            .map(|(id, _)| id.clone())
            .collect();
        channels.sort();
        channels
    }
}

impl Peer for InMemoryPeer {
    fn get_ledger(&self, channel_id: &str) -> Option<Arc<dyn PeerLedger>> {
        self.channels
            .read()
            .get(channel_id)
            .and_then(|r| r.ledger.clone())
    }

    fn get_application_config(&self, channel_id: &str) -> Option<Arc<ApplicationConfig>> {
        self.channels
            .read()
            .get(channel_id)
            .and_then(|r| r.application_config.clone())
    }

    fn get_policy_manager(&self, channel_id: &str) -> Option<Arc<dyn PolicyManager>> {
        self.channels
            .read()
            .get(channel_id)
            .and_then(|r| r.policy_manager.clone())
    }
}

// =============================================================================
// POLICIES
// =============================================================================

/// Policy satisfied by any non-empty signature set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySignaturePolicy;

impl Policy for AnySignaturePolicy {
    fn evaluate(&self, signed_data: &[SignedData]) -> Result<(), PolicyError> {
        if signed_data.is_empty() {
            return Err(PolicyError::Unsatisfied {
                policy: "ANY signature".to_string(),
            });
        }
        Ok(())
    }
}

/// Policy manager backed by a path to policy map.
#[derive(Default)]
pub struct InMemoryPolicyManager {
    policies: HashMap<String, Arc<dyn Policy>>,
}

impl InMemoryPolicyManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `policy` under `path`.
    #[must_use]
    pub fn with_policy(mut self, path: impl Into<String>, policy: Arc<dyn Policy>) -> Self {
        self.policies.insert(path.into(), policy);
        self
    }
}

impl PolicyManager for InMemoryPolicyManager {
    fn get_policy(&self, id: &str) -> Option<Arc<dyn Policy>> {
        self.policies.get(id).cloned()
    }
}
