use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use super::error::DirectoryError;
use super::types::{CandidateRecord, JobRecord};

/// Async record source backed by whatever system stores profiles and postings.
///
/// Absent entities come back as `None` or are omitted from list results;
/// [`DirectoryError`] is reserved for transport-level failures.
pub trait Directory: Send + Sync {
    /// Fetches one candidate by id.
    fn candidate(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<CandidateRecord>, DirectoryError>> + Send;

    /// Fetches one job by id.
    fn job(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<JobRecord>, DirectoryError>> + Send;

    /// Fetches candidates, optionally restricted to `ids`. Unknown ids are
    /// omitted, and restricted results follow the order of `ids`.
    fn candidates(
        &self,
        ids: Option<&[Uuid]>,
    ) -> impl std::future::Future<Output = Result<Vec<CandidateRecord>, DirectoryError>> + Send;

    /// Fetches jobs, optionally restricted to `ids`. Unknown ids are omitted,
    /// and restricted results follow the order of `ids`.
    fn jobs(
        &self,
        ids: Option<&[Uuid]>,
    ) -> impl std::future::Future<Output = Result<Vec<JobRecord>, DirectoryError>> + Send;
}

/// Directory over process-local maps.
#[derive(Default)]
pub struct InMemoryDirectory {
    candidates: RwLock<HashMap<Uuid, CandidateRecord>>,
    jobs: RwLock<HashMap<Uuid, JobRecord>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a candidate row.
    pub fn insert_candidate(&self, candidate: CandidateRecord) {
        self.candidates.write().insert(candidate.id, candidate);
    }

    /// Inserts or replaces a job row.
    pub fn insert_job(&self, job: JobRecord) {
        self.jobs.write().insert(job.id, job);
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.read().len()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.read().len()
    }
}

impl Directory for InMemoryDirectory {
    async fn candidate(&self, id: Uuid) -> Result<Option<CandidateRecord>, DirectoryError> {
        Ok(self.candidates.read().get(&id).cloned())
    }

    async fn job(&self, id: Uuid) -> Result<Option<JobRecord>, DirectoryError> {
        Ok(self.jobs.read().get(&id).cloned())
    }

    async fn candidates(
        &self,
        ids: Option<&[Uuid]>,
    ) -> Result<Vec<CandidateRecord>, DirectoryError> {
        let map = self.candidates.read();
        let records = match ids {
            Some(ids) => ids.iter().filter_map(|id| map.get(id).cloned()).collect(),
            None => map.values().cloned().collect(),
        };
        Ok(records)
    }

    async fn jobs(&self, ids: Option<&[Uuid]>) -> Result<Vec<JobRecord>, DirectoryError> {
        let map = self.jobs.read();
        let records = match ids {
            Some(ids) => ids.iter().filter_map(|id| map.get(id).cloned()).collect(),
            None => map.values().cloned().collect(),
        };
        Ok(records)
    }
}
