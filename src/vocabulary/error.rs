use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary JSON: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("vocabulary contains no entries")]
    Empty,

    #[error("duplicate skill id '{id}'")]
    DuplicateId { id: String },

    #[error("surface form '{surface}' appears more than once (second occurrence in entry '{id}')")]
    DuplicateSurface { surface: String, id: String },

    #[error("skill entry '{id}' has a blank surface form")]
    BlankSurface { id: String },
}
