//! # Domain Invariants
//!
//! Properties every assembled private write set must satisfy before it is
//! handed to distribution.
//!
//! - INVARIANT-1: Namespace Completeness
//! - INVARIANT-2: No Over-Sharing
//! - INVARIANT-3: No Under-Sharing
//! - INVARIANT-4: Order Preservation

use std::collections::{BTreeMap, BTreeSet};

use shared_types::{CollectionConfig, CollectionConfigPackage, Namespace, TxPvtReadWriteSet};

type Configs = BTreeMap<Namespace, CollectionConfigPackage>;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Namespace Completeness
///
/// `trimmed` has exactly one key per distinct namespace of `pvt`.
#[must_use]
pub fn check_namespace_completeness(pvt: &TxPvtReadWriteSet, trimmed: &Configs) -> bool {
    let expected: BTreeSet<&str> = pvt.namespaces().collect();
    let actual: BTreeSet<&str> = trimmed.keys().map(String::as_str).collect();
    expected == actual
}

/// INVARIANT-2: No Over-Sharing
///
/// Every surviving entry is static and names a collection written in its
/// namespace.
#[must_use]
pub fn check_no_over_sharing(pvt: &TxPvtReadWriteSet, trimmed: &Configs) -> bool {
    let written = pvt.collections_by_namespace();
    trimmed.iter().all(|(namespace, package)| {
        package.config.iter().all(|entry| match entry {
            CollectionConfig::Static(config) => written
                .get(namespace.as_str())
                .is_some_and(|names| names.contains(config.name.as_str())),
            CollectionConfig::Other { .. } => false,
        })
    })
}

/// INVARIANT-3: No Under-Sharing
///
/// Every written collection with a deployed static entry survives as many
/// times as it was deployed (once, for a well-formed package).
#[must_use]
pub fn check_no_under_sharing(
    pvt: &TxPvtReadWriteSet,
    deployed: &Configs,
    trimmed: &Configs,
) -> bool {
    let count = |package: Option<&CollectionConfigPackage>, name: &str| {
        package.map_or(0, |p| p.static_names().filter(|n| *n == name).count())
    };

    pvt.collections_by_namespace()
        .into_iter()
        .all(|(namespace, names)| {
            names.into_iter().all(|name| {
                count(deployed.get(namespace), name) == count(trimmed.get(namespace), name)
            })
        })
}

/// INVARIANT-4: Order Preservation
///
/// Each trimmed package is a subsequence of its deployed package.
#[must_use]
pub fn check_order_preservation(deployed: &Configs, trimmed: &Configs) -> bool {
    trimmed.iter().all(|(namespace, package)| {
        let Some(original) = deployed.get(namespace) else {
            return package.is_empty();
        };
        let mut remaining = original.config.iter();
        package
            .config
            .iter()
            .all(|entry| remaining.any(|candidate| candidate == entry))
    })
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(
    pvt: &TxPvtReadWriteSet,
    deployed: &Configs,
    trimmed: &Configs,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_namespace_completeness(pvt, trimmed) {
        violations.push(InvariantViolation::IncompleteNamespaces {
            expected: pvt.namespaces().collect::<BTreeSet<_>>().len(),
            actual: trimmed.len(),
        });
    }

    if !check_no_over_sharing(pvt, trimmed) {
        violations.push(InvariantViolation::OverShared);
    }

    if !check_no_under_sharing(pvt, deployed, trimmed) {
        violations.push(InvariantViolation::UnderShared);
    }

    if !check_order_preservation(deployed, trimmed) {
        violations.push(InvariantViolation::OrderChanged);
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Output namespaces differ from input namespaces.
    IncompleteNamespaces { expected: usize, actual: usize },
    /// Configuration of an unwritten or non-static collection survived.
    OverShared,
    /// A written, deployed collection lost its configuration.
    UnderShared,
    /// Surviving entries were reordered.
    OrderChanged,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteNamespaces { expected, actual } => {
                write!(f, "namespace mismatch: expected {expected}, got {actual}")
            }
            Self::OverShared => write!(f, "collection config over-shared"),
            Self::UnderShared => write!(f, "collection config under-shared"),
            Self::OrderChanged => write!(f, "collection config order changed"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
