use thiserror::Error;
use uuid::Uuid;

use crate::encoding::EncodingError;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("invalid result limit {limit}: must be at least 1")]
    InvalidLimit { limit: usize },

    #[error("cannot rank {entity} {id}: its assembled document is empty")]
    EmptySubjectText { entity: &'static str, id: Uuid },

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}
