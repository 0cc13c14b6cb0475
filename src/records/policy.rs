use serde::{Deserialize, Serialize};

use super::types::{CandidateRecord, JobRecord};

/// Candidate fields a document assembly can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateField {
    CvText,
    Skills,
    Experience,
    Education,
}

/// Job fields a document assembly can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    Title,
    Description,
    Location,
    Requirements,
}

/// Ordered field selection for turning records into scoring documents.
///
/// Assembly is explicit policy rather than inline string building, so it can
/// be tested in isolation and deployments can reorder or drop fields without
/// touching the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPolicy {
    pub candidate_fields: Vec<CandidateField>,
    pub job_fields: Vec<JobField>,
}

impl Default for DocumentPolicy {
    fn default() -> Self {
        Self {
            candidate_fields: vec![
                CandidateField::CvText,
                CandidateField::Skills,
                CandidateField::Experience,
                CandidateField::Education,
            ],
            job_fields: vec![
                JobField::Title,
                JobField::Description,
                JobField::Location,
                JobField::Requirements,
            ],
        }
    }
}

impl DocumentPolicy {
    /// Assembles the candidate's scoring document.
    ///
    /// Parts are emitted in policy order and blank parts are dropped, so a
    /// sparse profile never injects runs of whitespace.
    pub fn candidate_document(&self, candidate: &CandidateRecord) -> String {
        let mut parts: Vec<String> = Vec::new();
        for field in &self.candidate_fields {
            match field {
                CandidateField::CvText => parts.push(candidate.cv_text.clone()),
                CandidateField::Skills => parts.push(candidate.skills.join(" ")),
                CandidateField::Experience => {
                    for entry in &candidate.experience {
                        parts.push(entry.title.clone());
                        parts.push(entry.company.clone());
                        parts.push(entry.description.clone());
                    }
                }
                CandidateField::Education => {
                    for entry in &candidate.education {
                        parts.push(entry.degree.clone());
                        parts.push(entry.institution.clone());
                        parts.push(entry.description.clone());
                    }
                }
            }
        }
        join_nonblank(parts)
    }

    /// Assembles the job's scoring document.
    pub fn job_document(&self, job: &JobRecord) -> String {
        let mut parts: Vec<String> = Vec::new();
        for field in &self.job_fields {
            match field {
                JobField::Title => parts.push(job.title.clone()),
                JobField::Description => parts.push(job.description.clone()),
                JobField::Location => parts.push(job.location.clone()),
                JobField::Requirements => parts.push(job.requirements.join(" ")),
            }
        }
        join_nonblank(parts)
    }
}

fn join_nonblank(parts: Vec<String>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
