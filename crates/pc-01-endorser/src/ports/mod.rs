//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for private write set assembly.
//!
//! - **Driving Ports (Inbound)**: `PvtRwSetAssembler`
//! - **Driven Ports (Outbound)**: `DeployedChaincodeInfoProvider`
//! - Ledger access comes in through `shared_types::CollectionConfigRetriever`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
