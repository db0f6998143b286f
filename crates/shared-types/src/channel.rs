//! # Channel Configuration
//!
//! Per-channel application configuration and policy lookup, as exposed by the
//! peer's channel caches.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::errors::PolicyError;

/// An application organization of a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationOrg {
    /// Organization name in the channel config.
    pub name: String,
    /// MSP identifier of the organization.
    pub msp_id: String,
    /// Anchor peer endpoints (`host:port`).
    pub anchor_peers: Vec<String>,
}

/// Application section of a channel configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Organizations keyed by name.
    pub organizations: BTreeMap<String, ApplicationOrg>,
    /// Enabled application capabilities (e.g. `V1_2`).
    pub capabilities: BTreeSet<String>,
    /// Resource name to policy reference.
    pub acls: BTreeMap<String, String>,
}

impl ApplicationConfig {
    /// Returns true if `capability` is enabled on the channel.
    #[must_use]
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// MSP identifiers of all application organizations.
    pub fn msp_ids(&self) -> impl Iterator<Item = &str> {
        self.organizations.values().map(|org| org.msp_id.as_str())
    }

    /// Policy reference governing `resource`, if one is configured.
    #[must_use]
    pub fn acl(&self, resource: &str) -> Option<&str> {
        self.acls.get(resource).map(String::as_str)
    }
}

/// A signature over some data together with the signer identity.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedData {
    /// The signed payload.
    #[serde_as(as = "Bytes")]
    pub data: Vec<u8>,
    /// Serialized signer identity.
    #[serde_as(as = "Bytes")]
    pub identity: Vec<u8>,
    /// Signature over `data`.
    #[serde_as(as = "Bytes")]
    pub signature: Vec<u8>,
}

/// A channel policy.
pub trait Policy: Send + Sync {
    /// Check whether `signed_data` satisfies the policy.
    fn evaluate(&self, signed_data: &[SignedData]) -> Result<(), PolicyError>;
}

/// Resolves channel policies by path, e.g. `/Channel/Application/Writers`.
pub trait PolicyManager: Send + Sync {
    /// Look up a policy. `None` if the path is unknown.
    fn get_policy(&self, id: &str) -> Option<Arc<dyn Policy>>;
}
