//! # Domain Layer (Inner Hexagon)
//!
//! Pure logic for preparing private write sets for distribution.
//! NO I/O, NO async, NO collaborator calls.
//!
//! - `trimming`: narrows collection config packages to written collections
//! - `invariants`: checks an assembled result before it leaves the endorser

pub mod invariants;
pub mod trimming;

pub use invariants::*;
pub use trimming::*;
