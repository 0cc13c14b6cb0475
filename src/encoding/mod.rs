//! Text encoding into fixed-width sentence embeddings.
//!
//! Two backends sit behind [`TextEncoder`]: a candle BERT-family model loaded from
//! safetensors (mask-weighted mean pooling, L2-normalized output) and a deterministic
//! hash-seeded stub for environments without model weights. Both produce unit-norm
//! vectors of the same width, so downstream cosine math never cares which is active.
//!
//! Embeddings from different encoder versions are not comparable. Callers that
//! persist vectors must key them by [`TextEncoder::version`].

/// Embedding memo cache keyed by content hash.
pub mod cache;
/// Encoder configuration.
pub mod config;
/// Compute device selection.
pub mod device;
/// Encoder error types.
pub mod error;

mod bert;


pub use cache::EmbeddingCache;
pub use config::{EncoderConfig, MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE, TOKENIZER_FILE};
pub use device::select_device;
pub use error::EncodingError;

use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;
use std::sync::Arc;

use candle_core::{Device, Tensor};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info};

use bert::SentenceBert;

/// Version label reported by the stub backend.
const STUB_VERSION: &str = "stub";

enum EncoderBackend {
    Model {
        model: SentenceBert,
        tokenizer: Tokenizer,
    },
    Stub,
}

/// Sentence encoder with memoization.
///
/// Cheap to share behind an `Arc`; encoding takes `&self` and the model backend is
/// internally immutable.
pub struct TextEncoder {
    device: Device,
    config: EncoderConfig,
    backend: EncoderBackend,
    cache: EmbeddingCache,
    dim: usize,
    version: String,
}

impl std::fmt::Debug for TextEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEncoder")
            .field("device", &format!("{:?}", self.device))
            .field("dim", &self.dim)
            .field("version", &self.version)
            .field("model_loaded", &self.is_model_loaded())
            .finish_non_exhaustive()
    }
}

impl TextEncoder {
    /// Loads the encoder described by `config`.
    ///
    /// With a model directory configured, every required file must load cleanly or
    /// this fails; a missing model is a startup error, not a silent downgrade.
    pub fn load(config: EncoderConfig) -> Result<Self, EncodingError> {
        config.validate()?;

        let device = select_device();
        debug!(?device, "Selected compute device for text encoder");

        let Some(model_dir) = config.model_dir.clone() else {
            info!("No encoder model directory configured, operating in stub mode");
            return Ok(Self {
                device,
                dim: config.embedding_dim,
                version: STUB_VERSION.to_string(),
                cache: EmbeddingCache::new(config.cache_capacity),
                backend: EncoderBackend::Stub,
                config,
            });
        };

        if !model_dir.exists() {
            return Err(EncodingError::ModelNotFound { path: model_dir });
        }
        for file in [MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE, TOKENIZER_FILE] {
            if !model_dir.join(file).is_file() {
                return Err(EncodingError::ModelLoadFailed {
                    reason: format!("Missing {} in {}", file, model_dir.display()),
                });
            }
        }

        info!(model_dir = %model_dir.display(), "Loading sentence encoder model");

        let model = SentenceBert::load(&model_dir, &device).map_err(|e| {
            EncodingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;
        let tokenizer = load_tokenizer(&model_dir.join(TOKENIZER_FILE), config.max_seq_len)?;

        let dim = model.hidden_size();
        let version = model_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        info!(dim, version = %version, "Sentence encoder loaded");

        Ok(Self {
            device,
            dim,
            version,
            cache: EmbeddingCache::new(config.cache_capacity),
            backend: EncoderBackend::Model { model, tokenizer },
            config,
        })
    }

    /// Stub encoder with default settings. Deterministic and model-free.
    pub fn stub() -> Result<Self, EncodingError> {
        Self::load(EncoderConfig::stub())
    }

    /// Encodes one text into a unit-norm embedding.
    ///
    /// Results are memoized by content hash, so repeated inputs cost one lookup.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        let key = EmbeddingCache::key(text);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.as_ref().clone());
        }

        let embedding = match &self.backend {
            EncoderBackend::Model { model, tokenizer } => {
                self.encode_with_model(model, tokenizer, text)?
            }
            EncoderBackend::Stub => self.encode_stub(text),
        };

        self.cache.insert(key, Arc::new(embedding.clone()));
        Ok(embedding)
    }

    /// Encodes several texts, preserving input order.
    pub fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncodingError> {
        texts.iter().map(|text| self.encode(text)).collect()
    }

    fn encode_with_model(
        &self,
        model: &SentenceBert,
        tokenizer: &Tokenizer,
        text: &str,
    ) -> Result<Vec<f32>, EncodingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EncodingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let token_ids = encoding.get_ids();
        if token_ids.is_empty() {
            return Ok(vec![0.0; self.dim]);
        }

        let input_ids = Tensor::new(token_ids, &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let pooled = model.forward_mean_pooled(&input_ids, &token_type_ids, &attention_mask)?;
        let mut embedding = pooled.squeeze(0)?.to_vec1::<f32>()?;
        normalize(&mut embedding);
        Ok(embedding)
    }

    fn encode_stub(&self, text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut state = seed;
        let mut embedding: Vec<f32> = (0..self.dim)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1);
                ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect();
        normalize(&mut embedding);
        embedding
    }

    /// Width of produced embeddings. With a model loaded this is the model's
    /// hidden size, which may differ from the configured default.
    pub fn embedding_dim(&self) -> usize {
        self.dim
    }

    /// Version label for the active backend. Embeddings are only comparable
    /// within a single version.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_model_loaded(&self) -> bool {
        matches!(self.backend, EncoderBackend::Model { .. })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Entries currently memoized.
    pub fn cached_embeddings(&self) -> u64 {
        self.cache.entry_count()
    }
}

fn load_tokenizer(path: &Path, max_seq_len: usize) -> Result<Tokenizer, EncodingError> {
    let mut tokenizer =
        Tokenizer::from_file(path).map_err(|e| EncodingError::ModelLoadFailed {
            reason: format!("Failed to load tokenizer: {}", e),
        })?;
    let truncation = TruncationParams {
        max_length: max_seq_len,
        ..Default::default()
    };
    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| EncodingError::ModelLoadFailed {
            reason: format!("Failed to configure tokenizer truncation: {}", e),
        })?;
    Ok(tokenizer)
}

fn normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in embedding.iter_mut() {
            *value /= norm;
        }
    }
}

/// Cosine similarity between two vectors.
///
/// Returns `0.0` when the lengths differ, either vector is empty, or either norm
/// is zero. The result is not clamped; callers decide how to map it to a score.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
