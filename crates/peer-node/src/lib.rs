//! # Peer Node Runtime
//!
//! Wires the peer subsystems together.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (`NodeConfig::from_env`)
//! 2. Initialize telemetry
//! 3. Register whitelisted system chaincodes (single writer)
//! 4. Freeze the provider behind `Arc` and start serving
//!
//! ## Private Data Flow
//!
//! ```text
//! simulated TxPvtReadWriteSet
//!        │
//!        ▼
//! Provider::get_query_executor_for_ledger(channel)
//!        │
//!        ▼
//! RwSetAssembler::assemble_pvt_rwset(pvt, executor, LsccInfoProvider)
//!        │
//!        ▼
//! TxPvtReadWriteSetWithConfigInfo ──► private data distribution
//! ```

pub mod container;

use std::sync::Arc;
use std::time::Instant;

use pc_01_endorser::prelude::*;
use pc_02_system_chaincodes::prelude::*;
use peer_telemetry::{MetricsHandle, TelemetryError};
use shared_types::{TxPvtReadWriteSet, TxPvtReadWriteSetWithConfigInfo};
use thiserror::Error;
use tracing::{info, warn};

use crate::container::{builtin_sys_ccs, NodeConfig};

/// Node errors.
#[derive(Debug, Error)]
pub enum NodeError {
    /// System chaincode registration or channel lookup failed.
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),

    /// Private write set assembly failed.
    #[error("assembly: {0}")]
    Assembly(#[from] AssemblyError),

    /// Telemetry could not be initialized.
    #[error("telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
}

/// A bootstrapped peer.
pub struct PeerNode {
    provider: Arc<Provider>,
    assembler: RwSetAssembler,
    info_provider: LsccInfoProvider,
    metrics: MetricsHandle,
}

impl PeerNode {
    /// Register the built-in system chaincodes allowed by `config` and build
    /// the serving node.
    pub fn bootstrap(
        config: &NodeConfig,
        peer: Arc<dyn Peer>,
        metrics: MetricsHandle,
    ) -> Result<Self, NodeError> {
        Self::bootstrap_with(config, peer, metrics, builtin_sys_ccs())
    }

    /// Like [`PeerNode::bootstrap`] with an explicit system chaincode list.
    pub fn bootstrap_with(
        config: &NodeConfig,
        peer: Arc<dyn Peer>,
        metrics: MetricsHandle,
        sys_ccs: impl IntoIterator<Item = SystemChaincodeRecord>,
    ) -> Result<Self, NodeError> {
        let mut provider = Provider::new(peer, config.whitelist.clone());
        let registered = provider.register_sys_ccs(sys_ccs)?;

        metrics
            .sys_ccs_registered
            .set(i64::try_from(provider.len()).unwrap_or(i64::MAX));
        info!(
            peer = %config.peer_name,
            registered = ?registered,
            "System chaincodes registered"
        );

        Ok(Self {
            provider: Arc::new(provider),
            assembler: RwSetAssembler::new(config.assembler.clone()),
            info_provider: LsccInfoProvider::new(),
            metrics,
        })
    }

    /// The system chaincode provider.
    #[must_use]
    pub fn provider(&self) -> &Arc<Provider> {
        &self.provider
    }

    /// The metrics handle.
    #[must_use]
    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    /// Attach trimmed collection configs to the private writes of a
    /// transaction simulated on `channel_id` at block height `endorsed_at`.
    pub async fn assemble_private_data(
        &self,
        channel_id: &str,
        pvt: TxPvtReadWriteSet,
        endorsed_at: u64,
    ) -> Result<TxPvtReadWriteSetWithConfigInfo, NodeError> {
        let started = Instant::now();
        let result = self.assemble_on_channel(channel_id, pvt).await;

        self.metrics
            .record_assembly(result.is_ok(), started.elapsed().as_secs_f64());

        match result {
            Ok(enriched) => Ok(enriched.with_endorsed_at(endorsed_at)),
            Err(err) => {
                warn!(channel_id = %channel_id, error = %err, "Private data assembly failed");
                Err(err)
            }
        }
    }

    async fn assemble_on_channel(
        &self,
        channel_id: &str,
        pvt: TxPvtReadWriteSet,
    ) -> Result<TxPvtReadWriteSetWithConfigInfo, NodeError> {
        let executor = self.provider.get_query_executor_for_ledger(channel_id)?;
        let result = self
            .assembler
            .assemble_pvt_rwset(pvt, &executor, &self.info_provider)
            .await;
        executor.done();
        result.map_err(NodeError::from)
    }

    /// Reject a call to a system chaincode that does not accept this kind of
    /// caller. `from_chaincode` is true for chaincode-to-chaincode calls.
    pub fn check_invocation(
        &self,
        chaincode: &str,
        from_chaincode: bool,
    ) -> Result<(), NodeError> {
        self.provider
            .check_invokable(chaincode, from_chaincode)
            .map_err(|err| {
                warn!(chaincode = %chaincode, error = %err, "Rejected invocation");
                err.into()
            })
    }
}
