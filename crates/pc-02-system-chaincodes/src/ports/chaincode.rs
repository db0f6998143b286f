//! # Chaincode Ports
//!
//! The `{Init, Invoke}` capability of a system chaincode and the stub through
//! which it sees its invocation and state.

use crate::domain::entities::Response;
use crate::errors::ChaincodeError;

/// View of one invocation: arguments, channel and the chaincode's state.
pub trait ChaincodeStub: Send {
    /// Channel the invocation runs on.
    fn channel_id(&self) -> &str;

    /// All arguments, function name first.
    fn args(&self) -> &[Vec<u8>];

    /// Split `args` into the function name and its parameters.
    fn function_and_parameters(&self) -> Option<(&[u8], &[Vec<u8>])> {
        self.args()
            .split_first()
            .map(|(function, params)| (function.as_slice(), params))
    }

    /// Read the value of `key`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ChaincodeError>;

    /// Write `value` under `key`.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ChaincodeError>;
}

/// A privileged chaincode linked into the peer.
pub trait SystemChaincode: Send + Sync {
    /// Called once when the chaincode is deployed on a channel.
    fn init(&self, stub: &mut dyn ChaincodeStub) -> Response;

    /// Called for each invocation.
    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response;
}
