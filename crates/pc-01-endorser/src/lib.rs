//! # PC-01 Endorser - Private Data Assembly
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Prepares the private (collection-scoped) writes of an endorsed transaction
//! for distribution to other peers. The write set is passed through unchanged;
//! each written namespace gets its deployed collection configuration, trimmed
//! to the collections the transaction actually wrote.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Namespace Completeness | `domain/invariants.rs` - `check_namespace_completeness()` |
//! | INVARIANT-2 | No Over-Sharing | `domain/invariants.rs` - `check_no_over_sharing()` |
//! | INVARIANT-3 | No Under-Sharing | `domain/invariants.rs` - `check_no_under_sharing()` |
//! | INVARIANT-4 | Order Preservation | `domain/invariants.rs` - `check_order_preservation()` |
//!
//! ## Security
//!
//! - Collection configuration names member organizations and distribution
//!   policy; only entries for written collections ever leave this peer.
//! - Collection kinds other than static are never forwarded.
//! - Deployed metadata is read through a `CollectionConfigRetriever`, never
//!   a full simulator.
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Ledger | `CollectionConfigRetriever` | Single-key state reads |
//! | Lifecycle | `DeployedChaincodeInfoProvider` | Deployed collection configs |
//!
//! ## Usage Example
//!
//! ```ignore
//! use pc_01_endorser::prelude::*;
//!
//! let assembler = RwSetAssembler::default();
//! let enriched = assembler
//!     .assemble_pvt_rwset(pvt, &query_executor, &LsccInfoProvider::new())
//!     .await?;
//! transient_store.persist(tx_id, enriched.encode()?);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::invariants::{
        check_all_invariants, InvariantCheckResult, InvariantViolation,
    };
    pub use crate::domain::trimming::{trim_collection_configs, trim_package};

    // Ports
    pub use crate::ports::inbound::PvtRwSetAssembler;
    pub use crate::ports::outbound::DeployedChaincodeInfoProvider;

    // Adapters
    pub use crate::adapters::{
        collection_config_key, ChaincodeDefinition, InMemoryInfoProvider, LsccInfoProvider,
    };

    // Errors
    pub use crate::errors::{AssemblyError, InfoProviderError};

    // Service
    pub use crate::service::{AssemblerConfig, RwSetAssembler};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Endorser";
