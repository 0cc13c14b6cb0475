use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory lookup failed: {reason}")]
    LookupFailed { reason: String },
}
