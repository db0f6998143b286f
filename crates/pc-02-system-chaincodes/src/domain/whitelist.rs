//! # System Chaincode Whitelist
//!
//! Name to enabled map taken from process configuration. Only names mapped
//! explicitly to an enabled value pass; absent and disabled names are treated
//! the same.
//!
//! ## Configuration
//!
//! ```text
//! PC_CHAINCODE_SYSTEM="lscc=enable,qscc=true,sample_syscc=false"
//! ```

use std::collections::BTreeMap;
use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable holding the whitelist.
pub const WHITELIST_ENV_VAR: &str = "PC_CHAINCODE_SYSTEM";

/// Static name to enabled mapping for system chaincodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Whitelist {
    entries: BTreeMap<String, bool>,
}

impl Whitelist {
    /// Create an empty whitelist. Nothing is enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `PC_CHAINCODE_SYSTEM`. Unset yields an empty whitelist.
    #[must_use]
    pub fn from_env() -> Self {
        env::var(WHITELIST_ENV_VAR)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// Parse `name=value` pairs separated by commas.
    ///
    /// `true`, `1`, `enable` and `enabled` (any case) enable a name; any other
    /// value disables it. Entries without `=` or with an empty name are
    /// ignored. Later entries override earlier ones.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .filter_map(|entry| entry.split_once('='))
            .map(|(name, value)| (name.trim(), parse_enabled(value)))
            .filter(|(name, _)| !name.is_empty())
            .collect()
    }

    /// Enable `name`.
    pub fn enable(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), true);
    }

    /// Disable `name`.
    pub fn disable(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), false);
    }

    /// True only if `name` is explicitly enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.get(name).copied().unwrap_or(false)
    }

    /// The configured value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.get(name).copied()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, enabled)| (name.as_str(), *enabled))
    }

    /// Number of configured names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no names are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Whitelist {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, enabled)| (name.into(), enabled))
                .collect(),
        }
    }
}

fn parse_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "enable" | "enabled"
    )
}
