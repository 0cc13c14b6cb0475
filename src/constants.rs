//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values (score weights, limits) from these primaries to avoid
//! drift between the scorer, the ranker, and the configuration layer.

/// Weight applied to the semantic similarity component of the hybrid score.
pub const SEMANTIC_WEIGHT: f32 = 0.5;

/// Weight applied to the skill overlap component of the hybrid score.
pub const SKILL_WEIGHT: f32 = 0.5;

/// A pair counts as a match only when its hybrid score strictly exceeds this threshold.
pub const MATCH_THRESHOLD: f32 = 0.5;

/// Sentence embedding width produced by MiniLM-class encoder models.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token budget per encoded document. Longer inputs are truncated, never rejected.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Ranked results returned when the caller does not specify a limit.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Entry capacity of the embedding memo cache.
pub const DEFAULT_EMBED_CACHE_CAPACITY: u64 = 10_000;
