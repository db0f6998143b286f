//! # Error Types
//!
//! Errors of private write set assembly and of deployed chaincode lookups.

use shared_types::{CodecError, LedgerError};
use thiserror::Error;

use crate::domain::invariants::InvariantViolation;

// =============================================================================
// ASSEMBLY ERRORS
// =============================================================================

/// Errors returned by private write set assembly.
///
/// Assembly is all-or-nothing: any of these means no output was produced.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Looking up the deployed chaincode for a namespace failed.
    #[error("error while retrieving collection config for chaincode {namespace:?}: {source}")]
    LookupFailure {
        /// Namespace being resolved.
        namespace: String,
        /// Underlying collaborator error.
        #[source]
        source: InfoProviderError,
    },

    /// The chaincode is deployed without a collection config package but
    /// the transaction wrote private data under it.
    #[error("no collection config for chaincode {namespace:?}")]
    MissingConfig {
        /// Namespace with private writes but no collections.
        namespace: String,
    },

    /// The trimmed output failed verification and was withheld.
    #[error("trimmed collection configs failed verification: {0:?}")]
    InvariantViolation(Vec<InvariantViolation>),
}

impl AssemblyError {
    /// Namespace the failure is attributed to, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::LookupFailure { namespace, .. } | Self::MissingConfig { namespace } => {
                Some(namespace)
            }
            Self::InvariantViolation(_) => None,
        }
    }
}

// =============================================================================
// INFO PROVIDER ERRORS
// =============================================================================

/// Errors from resolving deployed chaincode metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoProviderError {
    /// No chaincode is deployed under the namespace.
    #[error("chaincode {namespace:?} is not deployed")]
    NotDeployed {
        /// Namespace that was looked up.
        namespace: String,
    },

    /// Reading ledger state failed.
    #[error("ledger read failed: {0}")]
    Ledger(#[from] LedgerError),

    /// Stored metadata could not be decoded.
    #[error("undecodable metadata for {namespace:?}: {reason}")]
    Decode {
        /// Namespace whose metadata was read.
        namespace: String,
        /// Decoder failure message.
        reason: String,
    },
}

impl InfoProviderError {
    pub(crate) fn decode(namespace: &str, err: &CodecError) -> Self {
        Self::Decode {
            namespace: namespace.to_string(),
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
