//! # Node Container
//!
//! Configuration and the set of system chaincodes linked into the peer.

pub mod config;

pub use config::{default_whitelist, parse_channels, NodeConfig};

use pc_02_system_chaincodes::domain::SystemChaincodeRecord;
use pc_02_system_chaincodes::sample::SampleSysCc;

/// System chaincodes compiled into this peer, in registration order.
///
/// Whether each one is registered is decided by the whitelist at boot.
#[must_use]
pub fn builtin_sys_ccs() -> Vec<SystemChaincodeRecord> {
    vec![SampleSysCc::record()]
}
