//! # Collection Config Trimming
//!
//! Narrows each namespace's deployed collection config package down to the
//! collections the transaction actually wrote. A receiving peer learns the
//! distribution policy only for data it receives; configuration of untouched
//! collections (and the organizations it names) is never shipped.
//!
//! Pure functions only. Trimming cannot fail.

use std::collections::{BTreeMap, BTreeSet};

use shared_types::{CollectionConfig, CollectionConfigPackage, Namespace, TxPvtReadWriteSet};

/// Trim every package in `configs` against the collections written in `pvt`.
///
/// Every key of `configs` is kept, even when its trimmed package is empty.
#[must_use]
pub fn trim_collection_configs(
    pvt: &TxPvtReadWriteSet,
    configs: BTreeMap<Namespace, CollectionConfigPackage>,
) -> BTreeMap<Namespace, CollectionConfigPackage> {
    let written = pvt.collections_by_namespace();
    let none = BTreeSet::new();

    configs
        .into_iter()
        .map(|(namespace, package)| {
            let names = written.get(namespace.as_str()).unwrap_or(&none);
            let trimmed = trim_package(package, names);
            (namespace, trimmed)
        })
        .collect()
}

/// Keep only static entries whose name is in `written`, in package order.
///
/// Non-static kinds are dropped unconditionally. Any new collection kind
/// must be handled here explicitly before it can reach other peers.
#[must_use]
pub fn trim_package(
    package: CollectionConfigPackage,
    written: &BTreeSet<&str>,
) -> CollectionConfigPackage {
    package
        .config
        .into_iter()
        .filter(|entry| match entry {
            CollectionConfig::Static(config) => written.contains(config.name.as_str()),
            CollectionConfig::Other { .. } => false,
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
