//! # Driving Ports (API - Inbound)
//!
//! The interface the endorsement pipeline calls once simulation has produced
//! a private write set.

use async_trait::async_trait;
use shared_types::{CollectionConfigRetriever, TxPvtReadWriteSet, TxPvtReadWriteSetWithConfigInfo};

use crate::errors::AssemblyError;
use crate::ports::outbound::DeployedChaincodeInfoProvider;

/// Prepares a private write set for distribution to other peers.
#[async_trait]
pub trait PvtRwSetAssembler: Send + Sync {
    /// Augment `pvt` with the collection configuration of every namespace it
    /// writes, trimmed to the collections actually written.
    ///
    /// `retriever` must be scoped to this transaction's simulation and not be
    /// shared with concurrent assembly calls.
    ///
    /// # Errors
    ///
    /// * `LookupFailure` - `provider` failed for a namespace
    /// * `MissingConfig` - a namespace with private writes has no collections
    async fn assemble_pvt_rwset(
        &self,
        pvt: TxPvtReadWriteSet,
        retriever: &dyn CollectionConfigRetriever,
        provider: &dyn DeployedChaincodeInfoProvider,
    ) -> Result<TxPvtReadWriteSetWithConfigInfo, AssemblyError>;
}
