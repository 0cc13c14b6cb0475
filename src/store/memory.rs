use std::collections::HashMap;

use parking_lot::RwLock;

use super::error::StoreError;
use super::{MatchKey, StoreBackend, StoredMatchSet};

/// Backend over a process-local map. Backs tests and embedded deployments
/// that do not need match sets to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: RwLock<HashMap<MatchKey, StoredMatchSet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&self) -> usize {
        self.sets.read().len()
    }
}

impl StoreBackend for MemoryStore {
    async fn prepare(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn write(&self, key: MatchKey, set: &StoredMatchSet) -> Result<(), StoreError> {
        self.sets.write().insert(key, set.clone());
        Ok(())
    }

    async fn read(&self, key: MatchKey) -> Result<Option<StoredMatchSet>, StoreError> {
        Ok(self.sets.read().get(&key).cloned())
    }

    async fn remove(&self, key: MatchKey) -> Result<bool, StoreError> {
        Ok(self.sets.write().remove(&key).is_some())
    }
}
