//! # Ports Layer
//!
//! - `chaincode`: the system chaincode capability and its stub
//! - `inbound`: provider API used by the endorser and other peer services
//! - `outbound`: the peer's channel caches

pub mod chaincode;
pub mod inbound;
pub mod outbound;

pub use chaincode::{ChaincodeStub, SystemChaincode};
pub use inbound::SystemChaincodeProvider;
pub use outbound::Peer;
