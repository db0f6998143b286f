//! # Integration Scenarios
//!
//! - `pvt_distribution`: private write set assembly through the node, the
//!   provider's ledger access and lifecycle state
//! - `system_chaincodes`: registration, whitelist and per-channel deployment

pub mod pvt_distribution;
pub mod system_chaincodes;
