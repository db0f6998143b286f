//! # System Chaincode Provider
//!
//! Registry of the peer's system chaincodes and gateway to per-channel peer
//! resources.
//!
//! ## Lifecycle
//!
//! ```text
//! Provider::new ──► register_sys_ccs / register_sys_cc (&mut, startup)
//!                          │
//!                          ▼
//!                  Arc<Provider> (&self, many readers)
//! ```
//!
//! Registration needs `&mut Provider`, so it cannot overlap with readers.
//! There is no removal; the record list only grows during startup.
//!
//! ## Whitelist
//!
//! `register_sys_cc` only enforces name uniqueness. The startup entry point
//! `register_sys_ccs` additionally skips records that are disabled or not
//! whitelisted.

use std::fmt;
use std::sync::Arc;

use shared_types::{ApplicationConfig, PolicyManager, QueryExecutor};
use tracing::{debug, info, warn};

use crate::domain::entities::SystemChaincodeRecord;
use crate::domain::whitelist::Whitelist;
use crate::errors::RegistryError;
use crate::ports::inbound::SystemChaincodeProvider;
use crate::ports::outbound::Peer;

/// Names still recognized as system chaincodes although nothing registers
/// them any more: validation and endorsement.
pub const DEPRECATED_SYS_CCS: [&str; 2] = ["vscc", "escc"];

/// Returns true for the deprecated system chaincode names.
#[must_use]
pub fn is_deprecated_sys_cc(name: &str) -> bool {
    DEPRECATED_SYS_CCS.contains(&name)
}

/// The system chaincode provider.
pub struct Provider {
    peer: Arc<dyn Peer>,
    sys_ccs: Vec<SystemChaincodeRecord>,
    whitelist: Whitelist,
}

impl Provider {
    /// Create a provider with no registered chaincodes.
    pub fn new(peer: Arc<dyn Peer>, whitelist: Whitelist) -> Self {
        Self {
            peer,
            sys_ccs: Vec::new(),
            whitelist,
        }
    }

    /// Register one system chaincode.
    ///
    /// # Errors
    ///
    /// `DuplicateRegistration` if the name is taken. The registry is left
    /// unchanged.
    pub fn register_sys_cc(&mut self, record: SystemChaincodeRecord) -> Result<(), RegistryError> {
        if self.sys_ccs.iter().any(|registered| registered.name == record.name) {
            warn!(name = %record.name, "System chaincode already registered");
            return Err(RegistryError::DuplicateRegistration { name: record.name });
        }

        info!(name = %record.name, path = %record.path, "Registered system chaincode");
        self.sys_ccs.push(record);
        Ok(())
    }

    /// Register the enabled, whitelisted records of `records` in order.
    ///
    /// Returns the names registered by this call.
    ///
    /// # Errors
    ///
    /// Stops at the first `DuplicateRegistration`. Records before it stay
    /// registered.
    pub fn register_sys_ccs(
        &mut self,
        records: impl IntoIterator<Item = SystemChaincodeRecord>,
    ) -> Result<Vec<String>, RegistryError> {
        let mut registered = Vec::new();

        for record in records {
            if !record.enabled {
                info!(name = %record.name, "Skipping disabled system chaincode");
                continue;
            }
            if !self.is_whitelisted(&record) {
                info!(name = %record.name, "Skipping system chaincode not in whitelist");
                continue;
            }

            let name = record.name.clone();
            self.register_sys_cc(record)?;
            registered.push(name);
        }

        Ok(registered)
    }

    /// True only if the whitelist maps the record's name to enabled.
    #[must_use]
    pub fn is_whitelisted(&self, record: &SystemChaincodeRecord) -> bool {
        self.whitelist.is_enabled(&record.name)
    }

    /// True if `name` is a registered system chaincode that rejects client
    /// proposals. Unregistered names are never rejected here.
    #[must_use]
    pub fn is_sys_cc_and_not_invokable_external(&self, name: &str) -> bool {
        self.sys_cc(name).is_some_and(|record| !record.invokable_external)
    }

    /// True if `name` is a registered system chaincode that rejects
    /// chaincode-to-chaincode calls.
    #[must_use]
    pub fn is_sys_cc_and_not_invokable_cc2cc(&self, name: &str) -> bool {
        self.sys_cc(name).is_some_and(|record| !record.invokable_cc2cc)
    }

    /// Fail if `name` may not be invoked by the given caller kind.
    pub fn check_invokable(&self, name: &str, from_chaincode: bool) -> Result<(), RegistryError> {
        if from_chaincode {
            if self.is_sys_cc_and_not_invokable_cc2cc(name) {
                return Err(RegistryError::NotInvokableCc2cc {
                    name: name.to_string(),
                });
            }
        } else if self.is_sys_cc_and_not_invokable_external(name) {
            return Err(RegistryError::NotInvokableExternal {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// The registered record called `name`.
    #[must_use]
    pub fn sys_cc(&self, name: &str) -> Option<&SystemChaincodeRecord> {
        self.sys_ccs.iter().find(|record| record.name == name)
    }

    /// Registered names in registration order.
    pub fn sys_cc_names(&self) -> impl Iterator<Item = &str> {
        self.sys_ccs.iter().map(|record| record.name.as_str())
    }

    /// Number of registered chaincodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sys_ccs.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sys_ccs.is_empty()
    }

    /// The whitelist consulted at startup.
    #[must_use]
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }
}

impl SystemChaincodeProvider for Provider {
    fn is_sys_cc(&self, name: &str) -> bool {
        self.sys_cc(name).is_some() || is_deprecated_sys_cc(name)
    }

    fn get_query_executor_for_ledger(
        &self,
        channel_id: &str,
    ) -> Result<Box<dyn QueryExecutor>, RegistryError> {
        let ledger = self.peer.get_ledger(channel_id).ok_or_else(|| {
            debug!(channel_id = %channel_id, "No ledger bound to channel");
            RegistryError::ChannelNotFound {
                channel_id: channel_id.to_string(),
            }
        })?;

        Ok(ledger.new_query_executor()?)
    }

    fn get_application_config(&self, channel_id: &str) -> Option<Arc<ApplicationConfig>> {
        self.peer.get_application_config(channel_id)
    }

    fn policy_manager(&self, channel_id: &str) -> Option<Arc<dyn PolicyManager>> {
        self.peer.get_policy_manager(channel_id)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("sys_ccs", &self.sys_ccs)
            .field("whitelist", &self.whitelist)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
