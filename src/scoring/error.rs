use thiserror::Error;

use crate::encoding::EncodingError;
use crate::extraction::ExtractionError;
use crate::vocabulary::VocabularyError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
}
