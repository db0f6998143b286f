//! # Outbound Ports
//!
//! The peer's per-channel caches, as seen by the system chaincode provider.

use std::sync::Arc;

use shared_types::{ApplicationConfig, PeerLedger, PolicyManager};

/// Channel-scoped resources held by the peer.
///
/// Every lookup signals absence with `None`.
pub trait Peer: Send + Sync {
    /// Ledger bound to `channel_id`.
    fn get_ledger(&self, channel_id: &str) -> Option<Arc<dyn PeerLedger>>;

    /// Application configuration of `channel_id`.
    fn get_application_config(&self, channel_id: &str) -> Option<Arc<ApplicationConfig>>;

    /// Policy manager of `channel_id`.
    fn get_policy_manager(&self, channel_id: &str) -> Option<Arc<dyn PolicyManager>>;
}
