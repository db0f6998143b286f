//! # Error Types
//!
//! Defines error types shared by the peer subsystems.

use thiserror::Error;

/// Errors raised by ledger state access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger cannot serve reads right now.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// Stored data failed an integrity check.
    #[error("Ledger data corrupted: {0}")]
    Corrupted(String),

    /// The query executor was already released with `done()`.
    #[error("Query executor already closed")]
    ExecutorClosed,

    /// Any other storage failure.
    #[error("Ledger error: {0}")]
    Other(String),
}

/// Errors from encoding or decoding distribution payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Serialization failed.
    #[error("Encode failed: {0}")]
    Encode(String),

    /// Bytes did not decode into the expected structure.
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Errors from evaluating a channel policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The signature set does not satisfy the policy.
    #[error("Signature set did not satisfy policy {policy}")]
    Unsatisfied { policy: String },

    /// The signed data could not be deserialized or verified.
    #[error("Invalid signed data: {0}")]
    InvalidSignedData(String),
}
