//! # In-Memory Stub
//!
//! `ChaincodeStub` over a plain map. Writes are visible to later reads on the
//! same stub.

use std::collections::HashMap;

use crate::errors::ChaincodeError;
use crate::ports::chaincode::ChaincodeStub;

/// Stub for one chaincode on one channel.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStub {
    channel_id: String,
    args: Vec<Vec<u8>>,
    state: HashMap<String, Vec<u8>>,
}

impl InMemoryStub {
    /// Create a stub with empty state.
    pub fn new(channel_id: impl Into<String>, args: Vec<Vec<u8>>) -> Self {
        Self {
            channel_id: channel_id.into(),
            args,
            state: HashMap::new(),
        }
    }

    /// Build a stub from string arguments.
    pub fn with_str_args(channel_id: impl Into<String>, args: &[&str]) -> Self {
        Self::new(
            channel_id,
            args.iter().map(|a| a.as_bytes().to_vec()).collect(),
        )
    }

    /// Replace the arguments, keeping state. Used to run several
    /// invocations against the same state.
    pub fn set_args(&mut self, args: Vec<Vec<u8>>) {
        self.args = args;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &HashMap<String, Vec<u8>> {
        &self.state
    }
}

impl ChaincodeStub for InMemoryStub {
    fn channel_id(&self) -> &str {
        &self.channel_id
    }

    fn args(&self) -> &[Vec<u8>] {
        &self.args
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ChaincodeError> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ChaincodeError> {
        self.state.insert(key.to_string(), value);
        Ok(())
    }
}
