//! # Error Types
//!
//! Registry and system chaincode errors.

use shared_types::LedgerError;
use thiserror::Error;

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors raised by the system chaincode provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A system chaincode with the same name is already registered.
    #[error("chaincode with name '{name}' already registered")]
    DuplicateRegistration {
        /// The rejected name.
        name: String,
    },

    /// No ledger is bound to the channel.
    #[error("could not retrieve ledger for channel {channel_id}")]
    ChannelNotFound {
        /// The requested channel.
        channel_id: String,
    },

    /// The system chaincode does not accept proposals from clients.
    #[error("chaincode {name} cannot be invoked through a proposal")]
    NotInvokableExternal {
        /// The targeted system chaincode.
        name: String,
    },

    /// The system chaincode does not accept chaincode-to-chaincode calls.
    #[error("chaincode {name} cannot be invoked from another chaincode")]
    NotInvokableCc2cc {
        /// The targeted system chaincode.
        name: String,
    },

    /// The channel ledger failed to open a query executor.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

// =============================================================================
// CHAINCODE ERRORS
// =============================================================================

/// Errors raised while a system chaincode handles a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChaincodeError {
    /// The invocation carried no function name.
    #[error("no function specified")]
    MissingFunction,

    /// The function is not implemented by the chaincode.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of parameters for the function.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    IncorrectArgs {
        /// Function name.
        function: String,
        /// Required parameter count.
        expected: usize,
        /// Supplied parameter count.
        actual: usize,
    },

    /// An argument that must be text is not valid UTF-8.
    #[error("argument {index} is not valid UTF-8")]
    InvalidArgument {
        /// Position in the full argument list.
        index: usize,
    },

    /// Read of a key that holds no value.
    #[error("no value stored for key {0:?}")]
    KeyNotFound(String),

    /// The stub failed to access state.
    #[error("state access failed: {0}")]
    State(String),
}
