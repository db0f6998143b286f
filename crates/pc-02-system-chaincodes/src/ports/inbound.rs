//! # Inbound Ports
//!
//! What the rest of the peer may ask of the system chaincode provider once
//! registration has finished.

use std::sync::Arc;

use shared_types::{ApplicationConfig, PolicyManager, QueryExecutor};

use crate::errors::RegistryError;

/// Read-side API of the system chaincode provider.
pub trait SystemChaincodeProvider: Send + Sync {
    /// True if `name` is a registered or a deprecated system chaincode.
    fn is_sys_cc(&self, name: &str) -> bool;

    /// Open a query executor on the ledger of `channel_id`.
    ///
    /// # Errors
    ///
    /// `ChannelNotFound` if no ledger is bound; `Ledger` if the ledger
    /// cannot open an executor.
    fn get_query_executor_for_ledger(
        &self,
        channel_id: &str,
    ) -> Result<Box<dyn QueryExecutor>, RegistryError>;

    /// Application configuration of `channel_id`.
    fn get_application_config(&self, channel_id: &str) -> Option<Arc<ApplicationConfig>>;

    /// Policy manager of `channel_id`.
    fn policy_manager(&self, channel_id: &str) -> Option<Arc<dyn PolicyManager>>;
}
