//! # Adapters Layer (Outer Hexagon)
//!
//! Implementations of the endorser's outbound ports.
//!
//! - `lscc`: resolves deployed chaincodes from lifecycle state
//! - `in_memory`: fixed table, for tests and development nodes

pub mod in_memory;
pub mod lscc;

pub use in_memory::*;
pub use lscc::*;
