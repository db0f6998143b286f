//! # Ledger Access Ports
//!
//! Narrow read interfaces onto a channel ledger, plus the in-memory ledger
//! used by tests and the development node.
//!
//! - `CollectionConfigRetriever`: single-key reads only. Handed to code that
//!   resolves deployed configuration so it never gets simulator rights.
//! - `QueryExecutor`: read-only view of a ledger, released with `done()`.
//! - `PeerLedger`: a channel ledger that hands out query executors.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::errors::LedgerError;

/// Single-key state lookup within a namespace.
///
/// Absent keys yield `Ok(None)`. Errors are surfaced unchanged; no caching,
/// no retries.
#[async_trait]
pub trait CollectionConfigRetriever: Send + Sync {
    /// Get the value stored under `key` in `namespace`.
    async fn get_state(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;
}

/// Read-only access to committed ledger state.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Get the value stored under `key` in `namespace`.
    async fn get_state(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Release the executor. Later reads fail with `ExecutorClosed`.
    fn done(&self);
}

#[async_trait]
impl CollectionConfigRetriever for Box<dyn QueryExecutor> {
    async fn get_state(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).get_state(namespace, key).await
    }
}

/// A channel ledger.
pub trait PeerLedger: Send + Sync {
    /// Open a query executor over the current committed state.
    fn new_query_executor(&self) -> Result<Box<dyn QueryExecutor>, LedgerError>;
}

// =============================================================================
// IN-MEMORY ADAPTERS
// =============================================================================

type StateMap = HashMap<(String, String), Vec<u8>>;

/// In-memory ledger for testing and development nodes.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: Arc<RwLock<StateMap>>,
    unavailable: AtomicBool,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a value directly into committed state.
    pub fn put_state(&self, namespace: &str, key: &str, value: impl Into<Vec<u8>>) {
        self.state
            .write()
            .insert((namespace.to_string(), key.to_string()), value.into());
    }

    /// Make `new_query_executor` fail, simulating a ledger that is offline.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl PeerLedger for InMemoryLedger {
    fn new_query_executor(&self) -> Result<Box<dyn QueryExecutor>, LedgerError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LedgerError::Unavailable("ledger is offline".to_string()));
        }
        // Executors read a snapshot so concurrent commits are not observed.
        let snapshot = self.state.read().clone();
        Ok(Box::new(InMemoryQueryExecutor::new(snapshot)))
    }
}

/// Query executor over a snapshot of [`InMemoryLedger`] state.
#[derive(Debug)]
pub struct InMemoryQueryExecutor {
    snapshot: StateMap,
    closed: AtomicBool,
}

impl InMemoryQueryExecutor {
    fn new(snapshot: StateMap) -> Self {
        Self {
            snapshot,
            closed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl QueryExecutor for InMemoryQueryExecutor {
    async fn get_state(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(LedgerError::ExecutorClosed);
        }
        Ok(self
            .snapshot
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    fn done(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
