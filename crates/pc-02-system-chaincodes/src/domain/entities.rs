//! # Domain Entities
//!
//! Registration records and chaincode responses.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::errors::ChaincodeError;
use crate::ports::chaincode::SystemChaincode;

// =============================================================================
// RESPONSE
// =============================================================================

/// Result of a chaincode `init` or `invoke`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Status code, `OK` or `ERROR`.
    pub status: i32,
    /// Error message, empty on success.
    pub message: String,
    /// Returned bytes.
    #[serde_as(as = "Bytes")]
    pub payload: Vec<u8>,
}

impl Response {
    /// Success.
    pub const OK: i32 = 200;
    /// Failure.
    pub const ERROR: i32 = 500;

    /// Successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// Failed response with `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// True if the status is `OK`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Self::OK
    }
}

impl From<ChaincodeError> for Response {
    fn from(err: ChaincodeError) -> Self {
        Self::error(err.to_string())
    }
}

// =============================================================================
// SYSTEM CHAINCODE RECORD
// =============================================================================

/// A system chaincode as presented for registration.
#[derive(Clone)]
pub struct SystemChaincodeRecord {
    /// Unique name, e.g. `lscc`.
    pub name: String,
    /// Import path of the implementation.
    pub path: String,
    /// Disabled records are never registered.
    pub enabled: bool,
    /// Arguments passed to `init` when deployed on a channel.
    pub init_args: Vec<Vec<u8>>,
    /// The implementation.
    pub chaincode: Arc<dyn SystemChaincode>,
    /// May be invoked by a client proposal.
    pub invokable_external: bool,
    /// May be invoked from another chaincode.
    pub invokable_cc2cc: bool,
}

impl SystemChaincodeRecord {
    /// An enabled, fully invokable record with no init arguments.
    pub fn new(name: impl Into<String>, chaincode: Arc<dyn SystemChaincode>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            enabled: true,
            init_args: Vec::new(),
            chaincode,
            invokable_external: true,
            invokable_cc2cc: true,
        }
    }

    /// Set the import path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the init arguments.
    #[must_use]
    pub fn with_init_args(mut self, init_args: Vec<Vec<u8>>) -> Self {
        self.init_args = init_args;
        self
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set where the chaincode may be invoked from.
    #[must_use]
    pub fn with_invokable(mut self, external: bool, cc2cc: bool) -> Self {
        self.invokable_external = external;
        self.invokable_cc2cc = cc2cc;
        self
    }
}

impl fmt::Debug for SystemChaincodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemChaincodeRecord")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("enabled", &self.enabled)
            .field("init_args", &self.init_args.len())
            .field("invokable_external", &self.invokable_external)
            .field("invokable_cc2cc", &self.invokable_cc2cc)
            .finish_non_exhaustive()
    }
}
