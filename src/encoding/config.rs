use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBED_CACHE_CAPACITY, DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};

use super::error::EncodingError;

/// File the model architecture is read from, relative to the model directory.
pub const MODEL_CONFIG_FILE: &str = "config.json";

/// File the model weights are read from, relative to the model directory.
pub const MODEL_WEIGHTS_FILE: &str = "model.safetensors";

/// File the tokenizer is read from, relative to the model directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Configuration for [`TextEncoder`](super::TextEncoder).
///
/// With no `model_dir` the encoder runs in stub mode: deterministic hash-seeded
/// embeddings of the same width, suitable for tests and model-less deployments.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    pub model_dir: Option<PathBuf>,

    pub max_seq_len: usize,

    pub embedding_dim: usize,

    pub cache_capacity: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            cache_capacity: DEFAULT_EMBED_CACHE_CAPACITY,
        }
    }
}

impl EncoderConfig {
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
            ..Default::default()
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn with_cache_capacity(mut self, cache_capacity: u64) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn validate(&self) -> Result<(), EncodingError> {
        if self.max_seq_len == 0 {
            return Err(EncodingError::InvalidConfig {
                reason: "max_seq_len must be positive".to_string(),
            });
        }
        if self.embedding_dim == 0 {
            return Err(EncodingError::InvalidConfig {
                reason: "embedding_dim must be positive".to_string(),
            });
        }
        if let Some(ref dir) = self.model_dir
            && dir.as_os_str().is_empty()
        {
            return Err(EncodingError::InvalidConfig {
                reason: "model_dir cannot be empty when provided".to_string(),
            });
        }
        Ok(())
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.model_dir.as_ref().map(|dir| dir.join(MODEL_CONFIG_FILE))
    }

    pub fn weights_path(&self) -> Option<PathBuf> {
        self.model_dir.as_ref().map(|dir| dir.join(MODEL_WEIGHTS_FILE))
    }

    pub fn tokenizer_path(&self) -> Option<PathBuf> {
        self.model_dir.as_ref().map(|dir| dir.join(TOKENIZER_FILE))
    }

    /// Whether every file the model backend needs is present on disk.
    pub fn model_available(&self) -> bool {
        match (
            self.config_path(),
            self.weights_path(),
            self.tokenizer_path(),
        ) {
            (Some(config), Some(weights), Some(tokenizer)) => {
                config.is_file() && weights.is_file() && tokenizer.is_file()
            }
            _ => false,
        }
    }
}
