//! # Shared Types Crate
//!
//! Types and collaborator ports shared by the peer subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: private write sets, collection configuration
//!   and deployed chaincode metadata are defined once, here.
//! - **Narrow Ports**: ledger access is split so that configuration lookups
//!   only ever see single-key reads (`CollectionConfigRetriever`).
//! - **Pass-through Payloads**: collection write bytes are opaque and never
//!   re-encoded by anything in this workspace.

pub mod channel;
pub mod entities;
pub mod errors;
pub mod ledger;

pub use channel::*;
pub use entities::*;
pub use errors::*;
pub use ledger::*;
