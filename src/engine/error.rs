use thiserror::Error;

use crate::encoding::EncodingError;
use crate::extraction::ExtractionError;
use crate::ranking::RankingError;
use crate::records::DirectoryError;
use crate::scoring::ScoringError;
use crate::store::StoreError;
use crate::vocabulary::VocabularyError;

/// Errors surfaced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("self-check failed: {reason}")]
    SelfCheckFailed { reason: String },
}
