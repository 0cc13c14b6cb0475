//! Memoization cache for computed embeddings.

use std::sync::Arc;

use moka::sync::Cache;

/// Caches embeddings keyed by the BLAKE3 hash of the exact input text.
///
/// Keys are fixed-size digests, so cache cost does not grow with document length.
/// Values are shared behind `Arc` because the same embedding is frequently handed
/// to several scoring calls at once.
#[derive(Clone)]
pub struct EmbeddingCache {
    cache: Cache<[u8; 32], Arc<Vec<f32>>>,
}

impl std::fmt::Debug for EmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingCache")
            .field("entries", &self.cache.entry_count())
            .field("capacity", &self.cache.policy().max_capacity())
            .finish()
    }
}

impl EmbeddingCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Cache key for a text: the 32-byte BLAKE3 digest of its UTF-8 bytes.
    pub fn key(text: &str) -> [u8; 32] {
        *blake3::hash(text.as_bytes()).as_bytes()
    }

    pub fn get(&self, key: &[u8; 32]) -> Option<Arc<Vec<f32>>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: [u8; 32], embedding: Arc<Vec<f32>>) {
        self.cache.insert(key, embedding);
    }

    /// Current entry count after flushing pending maintenance work.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
