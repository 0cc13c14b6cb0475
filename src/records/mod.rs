//! Candidate and job records, document assembly, and the directory seam.
//!
//! Profile CRUD, uploads and CV-to-text conversion live outside this crate.
//! Ranking only needs the stored rows, fetched through the async [`Directory`]
//! trait, and a [`DocumentPolicy`] that turns a row into one scoring document.
//! [`InMemoryDirectory`] backs tests and embedded deployments.

pub mod directory;
pub mod error;
pub mod policy;
pub mod types;

#[cfg(test)]
mod tests;

pub use directory::{Directory, InMemoryDirectory};
pub use error::DirectoryError;
pub use policy::{CandidateField, DocumentPolicy, JobField};
pub use types::{CandidateRecord, EducationEntry, ExperienceEntry, JobRecord};
