//! # Sample System Chaincode
//!
//! Minimal key/value system chaincode used to exercise registration and
//! per-channel deployment.
//!
//! | Function | Parameters | Result |
//! |----------|------------|--------|
//! | `putval` | `key`, `value` | stores `value`, empty payload |
//! | `getval` | `key` | stored value as payload |

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Response, SystemChaincodeRecord};
use crate::errors::ChaincodeError;
use crate::ports::chaincode::{ChaincodeStub, SystemChaincode};

/// Registered name of the sample chaincode.
pub const SAMPLE_SYSCC_NAME: &str = "sample_syscc";

/// Import path of the sample chaincode.
pub const SAMPLE_SYSCC_PATH: &str = "github.com/hyperledger/fabric/core/system_chaincode/samplesyscc";

/// Key/value system chaincode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSysCc;

impl SampleSysCc {
    /// Registration record for the sample chaincode.
    #[must_use]
    pub fn record() -> SystemChaincodeRecord {
        SystemChaincodeRecord::new(SAMPLE_SYSCC_NAME, Arc::new(Self)).with_path(SAMPLE_SYSCC_PATH)
    }

    fn dispatch(stub: &mut dyn ChaincodeStub) -> Result<Vec<u8>, ChaincodeError> {
        let (function, params) = stub
            .function_and_parameters()
            .ok_or(ChaincodeError::MissingFunction)?;
        let function = std::str::from_utf8(function)
            .map_err(|_| ChaincodeError::InvalidArgument { index: 0 })?
            .to_string();

        match function.as_str() {
            "putval" => {
                expect_params(&function, params, 2)?;
                let key = utf8_param(params, 0)?;
                let value = params[1].clone();
                stub.put_state(&key, value)?;
                Ok(Vec::new())
            }
            "getval" => {
                expect_params(&function, params, 1)?;
                let key = utf8_param(params, 0)?;
                stub.get_state(&key)?.ok_or(ChaincodeError::KeyNotFound(key))
            }
            _ => Err(ChaincodeError::UnknownFunction(function)),
        }
    }
}

fn expect_params(function: &str, params: &[Vec<u8>], expected: usize) -> Result<(), ChaincodeError> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(ChaincodeError::IncorrectArgs {
            function: function.to_string(),
            expected,
            actual: params.len(),
        })
    }
}

fn utf8_param(params: &[Vec<u8>], index: usize) -> Result<String, ChaincodeError> {
    // +1: the function name is argument 0.
    String::from_utf8(params[index].clone())
        .map_err(|_| ChaincodeError::InvalidArgument { index: index + 1 })
}

impl SystemChaincode for SampleSysCc {
    fn init(&self, stub: &mut dyn ChaincodeStub) -> Response {
        debug!(channel_id = %stub.channel_id(), "Initialized {}", SAMPLE_SYSCC_NAME);
        Response::success(Vec::new())
    }

    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response {
        match Self::dispatch(stub) {
            Ok(payload) => Response::success(payload),
            Err(err) => {
                debug!(channel_id = %stub.channel_id(), error = %err, "Invocation rejected");
                Response::from(err)
            }
        }
    }
}
