//! Persistence of ranked match sets.
//!
//! One current result set exists per key: saving publishes a complete
//! replacement, never an incremental merge. Replacement is
//! publish-then-supersede (the new set is durably written before the old one
//! stops being served; there is no window where a reader sees zero or mixed
//! results). Writers to the same key serialize on a per-key async lock, and a
//! monotonic generation stamp records the recomputation lineage.

/// Store error types.
pub mod error;
/// Filesystem backend, one JSON document per key.
pub mod fs;
/// Process-local backend.
pub mod memory;


pub use error::StoreError;
pub use fs::FsStore;
pub use memory::MemoryStore;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;
use uuid::Uuid;

use crate::ranking::MatchResult;

/// Identity of one stored match set: the entity the ranking was run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum MatchKey {
    Candidate(Uuid),
    Job(Uuid),
}

impl MatchKey {
    pub fn kind(&self) -> &'static str {
        match self {
            MatchKey::Candidate(_) => "candidate",
            MatchKey::Job(_) => "job",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            MatchKey::Candidate(id) | MatchKey::Job(id) => *id,
        }
    }
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind(), self.id())
    }
}

/// The persisted unit per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMatchSet {
    /// Monotonic per-key recomputation counter, starting at 1.
    pub generation: u64,
    pub saved_at: DateTime<Utc>,
    pub results: Vec<MatchResult>,
}

impl StoredMatchSet {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Minimal async interface a match-set backend must provide.
///
/// `write` must replace any existing set for the key in one step; partially
/// visible writes break the replace invariant the store promises.
pub trait StoreBackend: Send + Sync {
    /// Prepares the backend for use (creates directories and the like).
    fn prepare(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Writes the complete set for `key`, replacing any previous one.
    fn write(
        &self,
        key: MatchKey,
        set: &StoredMatchSet,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Reads the current set for `key`, if any.
    fn read(
        &self,
        key: MatchKey,
    ) -> impl std::future::Future<Output = Result<Option<StoredMatchSet>, StoreError>> + Send;

    /// Removes the set for `key`. Returns `true` if one existed.
    fn remove(
        &self,
        key: MatchKey,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;
}

/// Match-set store enforcing replace semantics over a backend.
#[derive(Debug)]
pub struct MatchStore<B> {
    backend: B,
    locks: Mutex<HashMap<MatchKey, Arc<AsyncMutex<()>>>>,
}

impl<B: StoreBackend> MatchStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Prepares the backend for use.
    pub async fn prepare(&self) -> Result<(), StoreError> {
        self.backend.prepare().await
    }

    /// Publishes `results` as the current set for `key`, superseding any
    /// previous set. Returns the generation stamped on the new set.
    ///
    /// Concurrent saves to the same key serialize; each published set carries
    /// a generation one above its predecessor's, surviving process restarts
    /// when the backend is durable.
    pub async fn save_matches(
        &self,
        key: MatchKey,
        results: Vec<MatchResult>,
    ) -> Result<u64, StoreError> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;

        let generation = match self.backend.read(key).await? {
            Some(previous) => previous.generation + 1,
            None => 1,
        };

        let set = StoredMatchSet {
            generation,
            saved_at: Utc::now(),
            results,
        };
        self.backend.write(key, &set).await?;

        debug!(key = %key, generation, results = set.results.len(), "Published match set");
        Ok(generation)
    }

    /// Current results for `key`; an absent key reads as an empty list.
    pub async fn load_matches(&self, key: MatchKey) -> Result<Vec<MatchResult>, StoreError> {
        let set = self.backend.read(key).await?;
        Ok(set.map(|set| set.results).unwrap_or_default())
    }

    /// Current stored set for `key` with its generation stamp.
    pub async fn load_set(&self, key: MatchKey) -> Result<Option<StoredMatchSet>, StoreError> {
        self.backend.read(key).await
    }

    /// Removes the set for `key`. Returns `true` if one existed.
    pub async fn delete_matches(&self, key: MatchKey) -> Result<bool, StoreError> {
        let lock = self.key_lock(key);
        let removed = {
            let _guard = lock.lock().await;
            self.backend.remove(key).await?
        };
        drop(lock);
        self.evict_idle_lock(key);

        Ok(removed)
    }

    /// Number of per-key write locks currently retained.
    pub fn lock_count(&self) -> usize {
        self.locks.lock().len()
    }

    fn key_lock(&self, key: MatchKey) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock();
        locks.entry(key).or_default().clone()
    }

    /// Drops the lock entry for a deleted key unless another writer holds a
    /// handle to it. Handing out handles and evicting both happen under the
    /// map lock, so an in-flight writer keeps its entry alive.
    fn evict_idle_lock(&self, key: MatchKey) {
        let mut locks = self.locks.lock();
        if let Some(entry) = locks.get(&key)
            && Arc::strong_count(entry) == 1
        {
            locks.remove(&key);
        }
    }
}
