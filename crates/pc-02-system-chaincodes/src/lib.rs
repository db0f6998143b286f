//! # PC-02 System Chaincodes
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Holds the privileged chaincodes linked into the peer and gives them, and
//! the rest of the peer, access to per-channel ledgers, application
//! configuration and policy managers.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Registered names are unique | `provider.rs` - `register_sys_cc()` |
//! | INVARIANT-2 | Registration order is preserved | `provider.rs` - `register_sys_cc()` |
//! | INVARIANT-3 | Only whitelisted, enabled records register at startup | `provider.rs` - `register_sys_ccs()` |
//! | INVARIANT-4 | No registration after serving starts | `&mut self` on registration |
//!
//! ## Deprecated Names
//!
//! `vscc` and `escc` are reported as system chaincodes even though nothing
//! registers them.
//!
//! ## Usage Example
//!
//! ```ignore
//! use pc_02_system_chaincodes::prelude::*;
//!
//! let mut provider = Provider::new(peer, Whitelist::from_env());
//! provider.register_sys_ccs([SampleSysCc::record()])?;
//! let provider = Arc::new(provider);
//!
//! let qe = provider.get_query_executor_for_ledger("mychannel")?;
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
pub mod provider;
pub mod sample;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::{Response, SystemChaincodeRecord, Whitelist};

    // Ports
    pub use crate::ports::{ChaincodeStub, Peer, SystemChaincode, SystemChaincodeProvider};

    // Adapters
    pub use crate::adapters::{AnySignaturePolicy, InMemoryPeer, InMemoryPolicyManager, InMemoryStub};

    // Errors
    pub use crate::errors::{ChaincodeError, RegistryError};

    // Provider
    pub use crate::provider::{is_deprecated_sys_cc, Provider, DEPRECATED_SYS_CCS};

    // Sample
    pub use crate::sample::{SampleSysCc, SAMPLE_SYSCC_NAME};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "System Chaincodes";
