//! # Core Domain Entities
//!
//! Private read/write sets, collection configuration and deployed chaincode
//! metadata shared by the endorser and the system chaincode subsystem.
//!
//! ## Clusters
//!
//! - **Private data**: `TxPvtReadWriteSet`, `NsPvtReadWriteSet`, `CollectionPvtReadWriteSet`
//! - **Collections**: `CollectionConfig`, `StaticCollectionConfig`, `CollectionConfigPackage`
//! - **Distribution**: `TxPvtReadWriteSetWithConfigInfo`
//! - **Deployment**: `DeployedChaincodeInfo`

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::errors::CodecError;

/// Identifies a chaincode's state scope (usually the chaincode name).
pub type Namespace = String;

/// Identifies a private data collection within a namespace.
pub type CollectionName = String;

// =============================================================================
// CLUSTER A: PRIVATE READ/WRITE SETS
// =============================================================================

/// Data model of the serialized read/write sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataModel {
    /// Key/value read/write sets.
    #[default]
    KeyValue,
}

/// Private writes for one collection. The `rwset` bytes are opaque here.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPvtReadWriteSet {
    /// Collection the writes belong to.
    pub collection_name: CollectionName,
    /// Serialized key/value writes, passed through untouched.
    #[serde_as(as = "Bytes")]
    pub rwset: Vec<u8>,
}

impl CollectionPvtReadWriteSet {
    /// Create a collection entry.
    pub fn new(collection_name: impl Into<CollectionName>, rwset: impl Into<Vec<u8>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            rwset: rwset.into(),
        }
    }
}

/// Private writes of one namespace, grouped per collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsPvtReadWriteSet {
    /// Namespace (chaincode) that produced the writes.
    pub namespace: Namespace,
    /// Per-collection writes in simulation order.
    pub collection_pvt_rwset: Vec<CollectionPvtReadWriteSet>,
}

impl NsPvtReadWriteSet {
    /// Create a namespace entry.
    pub fn new(
        namespace: impl Into<Namespace>,
        collection_pvt_rwset: Vec<CollectionPvtReadWriteSet>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            collection_pvt_rwset,
        }
    }

    /// Names of the collections written by this entry.
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collection_pvt_rwset
            .iter()
            .map(|c| c.collection_name.as_str())
    }
}

/// The private write set produced by simulating one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPvtReadWriteSet {
    /// Data model of the nested read/write sets.
    pub data_model: DataModel,
    /// Per-namespace entries in simulation order. A namespace may repeat.
    pub ns_pvt_rwset: Vec<NsPvtReadWriteSet>,
}

impl TxPvtReadWriteSet {
    /// Create a key/value private write set.
    #[must_use]
    pub fn new(ns_pvt_rwset: Vec<NsPvtReadWriteSet>) -> Self {
        Self {
            data_model: DataModel::KeyValue,
            ns_pvt_rwset,
        }
    }

    /// Returns true if no namespace carries private writes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ns_pvt_rwset.is_empty()
    }

    /// Namespaces in input order, repeats included.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.ns_pvt_rwset.iter().map(|ns| ns.namespace.as_str())
    }

    /// Written collection names per namespace, merged across repeated
    /// namespace entries.
    #[must_use]
    pub fn collections_by_namespace(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut written: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for ns in &self.ns_pvt_rwset {
            written
                .entry(ns.namespace.as_str())
                .or_default()
                .extend(ns.collection_names());
        }
        written
    }
}

// =============================================================================
// CLUSTER B: COLLECTION CONFIGURATION
// =============================================================================

/// Configuration of a statically defined collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCollectionConfig {
    /// Collection name, unique within its namespace.
    pub name: CollectionName,
    /// Signature policy expression naming the member organizations.
    pub member_orgs_policy: Option<String>,
    /// Minimum number of peers the private data must reach at endorsement.
    pub required_peer_count: u32,
    /// Maximum number of peers the private data is pushed to.
    pub maximum_peer_count: u32,
    /// Blocks after which the private data is purged (0 = never).
    pub block_to_live: u64,
    /// Only member organizations may read.
    pub member_only_read: bool,
    /// Only member organizations may write.
    pub member_only_write: bool,
}

impl StaticCollectionConfig {
    /// Create a config with the given name and default distribution settings.
    pub fn new(name: impl Into<CollectionName>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One entry of a collection config package.
///
/// Only `Static` is interpreted. Other kinds travel as opaque payloads and
/// are dropped when the package is trimmed for distribution.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionConfig {
    /// A statically defined collection.
    Static(StaticCollectionConfig),
    /// A collection kind this peer does not interpret.
    Other {
        /// Kind tag as deployed.
        kind: String,
        /// Raw configuration bytes.
        #[serde_as(as = "Bytes")]
        payload: Vec<u8>,
    },
}

impl CollectionConfig {
    /// Shorthand for a default static collection named `name`.
    pub fn static_named(name: impl Into<CollectionName>) -> Self {
        Self::Static(StaticCollectionConfig::new(name))
    }

    /// The static configuration, if this is a static entry.
    #[must_use]
    pub fn as_static(&self) -> Option<&StaticCollectionConfig> {
        match self {
            Self::Static(config) => Some(config),
            Self::Other { .. } => None,
        }
    }
}

/// Ordered collection configuration of one namespace, as deployed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfigPackage {
    /// Entries in deployment order.
    pub config: Vec<CollectionConfig>,
}

impl CollectionConfigPackage {
    /// Create a package from entries.
    #[must_use]
    pub fn new(config: Vec<CollectionConfig>) -> Self {
        Self { config }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Returns true if the package has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    /// Names of the static entries in package order.
    pub fn static_names(&self) -> impl Iterator<Item = &str> {
        self.config
            .iter()
            .filter_map(CollectionConfig::as_static)
            .map(|c| c.name.as_str())
    }
}

impl FromIterator<CollectionConfig> for CollectionConfigPackage {
    fn from_iter<I: IntoIterator<Item = CollectionConfig>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// =============================================================================
// CLUSTER C: DISTRIBUTION
// =============================================================================

/// A private write set enriched with the collection configuration the
/// receiving peers need to handle it.
///
/// `pvt_rwset` is the simulator output, unchanged. `collection_configs` holds
/// exactly one (trimmed) package per namespace present in `pvt_rwset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPvtReadWriteSetWithConfigInfo {
    /// Ledger height at which the transaction was endorsed.
    pub endorsed_at: u64,
    /// The private write set as simulated.
    pub pvt_rwset: TxPvtReadWriteSet,
    /// Trimmed collection configuration per namespace.
    pub collection_configs: BTreeMap<Namespace, CollectionConfigPackage>,
}

impl TxPvtReadWriteSetWithConfigInfo {
    /// Set the endorsement height.
    #[must_use]
    pub fn with_endorsed_at(mut self, height: u64) -> Self {
        self.endorsed_at = height;
        self
    }

    /// Serialize for the transient store / distribution path.
    ///
    /// The encoding is deterministic: map keys are ordered and `pvt_rwset`
    /// bytes are written verbatim.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(self).map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Inverse of [`Self::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        bincode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

// =============================================================================
// CLUSTER D: DEPLOYMENT
// =============================================================================

/// Metadata of a deployed chaincode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedChaincodeInfo {
    /// Chaincode name (equals its namespace).
    pub name: String,
    /// Deployed version.
    pub version: String,
    /// Code hash of the deployed package.
    pub hash: Vec<u8>,
    /// Collection configuration. `None` means no collections were deployed.
    pub collection_config_pkg: Option<CollectionConfigPackage>,
}
