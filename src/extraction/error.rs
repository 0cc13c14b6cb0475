use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to build skill automaton: {reason}")]
    AutomatonBuild { reason: String },
}
