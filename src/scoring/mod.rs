//! Hybrid relevance scoring.
//!
//! Combines two independent signals into one score: cosine similarity between
//! document embeddings (semantic) and skill-set overlap (lexical). The fused
//! score drives the match/no-match prediction.
//!
//! # Direction
//!
//! Skill overlap is asymmetric: the reference side's skill set is the
//! denominator, and matched skills are reported in the reference side's order.
//! Callers score `(candidate document, job document)` in that order regardless
//! of which side a ranking was requested from, so a given candidate/job pair
//! always produces the same bundle.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::HybridScorer;
pub use types::{HybridScore, Prediction, ScoreBundle};
