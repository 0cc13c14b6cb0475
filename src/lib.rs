//! Skillmatch library crate (used by the preflight binary and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Engine configuration
//! - [`MatchEngine`] - End-to-end matching operations
//! - [`MatchResult`], [`ScoreBundle`], [`Prediction`] - Scoring output
//!
//! ## Extraction & Encoding
//! - [`SkillVocabulary`], [`SkillExtractor`], [`ExtractedSkillSet`] - Skill extraction
//! - [`TextEncoder`], [`EncoderConfig`] - Sentence embeddings
//! - [`HybridScorer`], [`HybridScore`] - Fused semantic/skill scoring
//!
//! ## Records & Ranking
//! - [`CandidateRecord`], [`JobRecord`], [`DocumentPolicy`] - Input records and
//!   document assembly
//! - [`Directory`], [`InMemoryDirectory`] - Record sources
//! - [`MatchRanker`], [`RankOptions`] - Batch ranking
//!
//! ## Persistence
//! - [`MatchStore`], [`FsStore`], [`MemoryStore`] - Match sets with replace semantics
//! - [`MatchKey`], [`StoredMatchSet`] - Stored layout
//!
//! ## Constants
//! Scoring weights and defaults are exported from [`constants`] for
//! consistency across modules.

pub mod config;
pub mod constants;
pub mod encoding;
pub mod engine;
pub mod extraction;
pub mod ranking;
pub mod records;
pub mod scoring;
pub mod store;
pub mod vocabulary;

pub use config::{Config, ConfigError, DEFAULT_STORE_PATH};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_RESULT_LIMIT, MATCH_THRESHOLD, SEMANTIC_WEIGHT, SKILL_WEIGHT,
};
pub use encoding::{
    EmbeddingCache, EncoderConfig, EncodingError, MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE,
    TOKENIZER_FILE, TextEncoder, cosine_similarity, select_device,
};
pub use engine::{
    EngineError, MAX_RECOMMENDED_SKILLS, MatchEngine, SelfCheckReport, SkillGapReport,
    SkillRecommendations,
};
pub use extraction::{ExtractedSkillSet, ExtractionError, SkillExtractor};
pub use ranking::{MatchRanker, MatchResult, RankOptions, RankingError};
pub use records::{
    CandidateField, CandidateRecord, Directory, DirectoryError, DocumentPolicy, EducationEntry,
    ExperienceEntry, InMemoryDirectory, JobField, JobRecord,
};
pub use scoring::{HybridScore, HybridScorer, Prediction, ScoreBundle, ScoringError};
pub use store::{
    FsStore, MatchKey, MatchStore, MemoryStore, StoreBackend, StoreError, StoredMatchSet,
};
pub use vocabulary::{SkillCategory, SkillEntry, SkillVocabulary, VocabularyError};
