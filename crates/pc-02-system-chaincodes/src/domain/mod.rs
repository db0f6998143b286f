//! # Domain Layer
//!
//! Registration records, responses and the whitelist. No I/O.

pub mod entities;
pub mod whitelist;

pub use entities::{Response, SystemChaincodeRecord};
pub use whitelist::{Whitelist, WHITELIST_ENV_VAR};
