//! # Adapters Layer
//!
//! In-memory implementations of the outbound and chaincode ports.

pub mod memory_peer;
pub mod memory_stub;

pub use memory_peer::{AnySignaturePolicy, InMemoryPeer, InMemoryPolicyManager};
pub use memory_stub::InMemoryStub;
