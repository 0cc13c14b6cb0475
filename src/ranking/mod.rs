//! Ranked matching of one subject against many targets.
//!
//! The subject's embedding and skill set are computed once and reused across
//! every pair. Targets that fail to encode are dropped from the run with a
//! warning instead of aborting the batch. The output order is total: hybrid
//! score descending, then target id ascending, so repeated runs over the same
//! input return the same list.

pub mod error;


pub use error::RankingError;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::constants::DEFAULT_RESULT_LIMIT;
use crate::records::{CandidateRecord, DocumentPolicy, JobRecord};
use crate::scoring::{HybridScorer, Prediction, ScoreBundle};

/// One scored candidate/job pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub score: ScoreBundle,
    pub computed_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn hybrid_score(&self) -> f32 {
        self.score.hybrid_score
    }

    pub fn prediction(&self) -> Prediction {
        self.score.prediction
    }
}

/// Paging and filtering for one ranking run.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOptions {
    /// Maximum results returned. Zero is rejected, never clamped.
    pub limit: usize,
    /// Keep only results with this prediction. Applied after sorting.
    pub prediction_filter: Option<Prediction>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RESULT_LIMIT,
            prediction_filter: None,
        }
    }
}

impl RankOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn with_prediction(mut self, prediction: Prediction) -> Self {
        self.prediction_filter = Some(prediction);
        self
    }
}

/// Scores a subject against a target list and orders the results.
#[derive(Debug)]
pub struct MatchRanker {
    scorer: HybridScorer,
    policy: DocumentPolicy,
}

impl MatchRanker {
    pub fn new(scorer: HybridScorer, policy: DocumentPolicy) -> Self {
        Self { scorer, policy }
    }

    pub fn policy(&self) -> &DocumentPolicy {
        &self.policy
    }

    pub fn scorer(&self) -> &HybridScorer {
        &self.scorer
    }

    /// Ranks one candidate against a list of jobs.
    ///
    /// The scorer sees `(candidate document, job document)`, keeping the job's
    /// requirements as the skill-overlap denominator.
    #[instrument(skip(self, candidate, jobs), fields(candidate_id = %candidate.id, targets = jobs.len()))]
    pub fn rank_candidate_against_jobs(
        &self,
        candidate: &CandidateRecord,
        jobs: &[JobRecord],
        options: &RankOptions,
    ) -> Result<Vec<MatchResult>, RankingError> {
        if options.limit == 0 {
            return Err(RankingError::InvalidLimit {
                limit: options.limit,
            });
        }

        let subject_text = self.policy.candidate_document(candidate);
        if subject_text.is_empty() {
            return Err(RankingError::EmptySubjectText {
                entity: "candidate",
                id: candidate.id,
            });
        }

        let subject_vector = self.scorer.encoder().encode(&subject_text)?;
        let subject_skills = self.scorer.extractor().extract(&subject_text);

        let mut results: Vec<MatchResult> = jobs
            .iter()
            .filter_map(|job| {
                let reference_text = self.policy.job_document(job);
                let reference_vector = match self.scorer.encoder().encode(&reference_text) {
                    Ok(vector) => vector,
                    Err(e) => {
                        warn!(
                            job_id = %job.id,
                            error = %e,
                            "Dropping job from ranking: encode failed"
                        );
                        return None;
                    }
                };
                let reference_skills = self.scorer.extractor().extract(&reference_text);

                let score = self.scorer.score_prepared(
                    &subject_vector,
                    &subject_skills,
                    &reference_vector,
                    &reference_skills,
                );

                Some(MatchResult {
                    candidate_id: candidate.id,
                    job_id: job.id,
                    score,
                    computed_at: Utc::now(),
                })
            })
            .collect();

        sort_results(&mut results, |result| result.job_id);
        apply_options(&mut results, options);

        debug!(results = results.len(), "Ranked candidate against jobs");
        Ok(results)
    }

    /// Ranks one job against a list of candidates.
    ///
    /// The call direction flips but the scorer still sees
    /// `(candidate document, job document)`, so a given pair scores the same
    /// whichever side initiated the ranking.
    #[instrument(skip(self, job, candidates), fields(job_id = %job.id, targets = candidates.len()))]
    pub fn rank_job_against_candidates(
        &self,
        job: &JobRecord,
        candidates: &[CandidateRecord],
        options: &RankOptions,
    ) -> Result<Vec<MatchResult>, RankingError> {
        if options.limit == 0 {
            return Err(RankingError::InvalidLimit {
                limit: options.limit,
            });
        }

        let reference_text = self.policy.job_document(job);
        if reference_text.is_empty() {
            return Err(RankingError::EmptySubjectText {
                entity: "job",
                id: job.id,
            });
        }

        let reference_vector = self.scorer.encoder().encode(&reference_text)?;
        let reference_skills = self.scorer.extractor().extract(&reference_text);

        let mut results: Vec<MatchResult> = candidates
            .iter()
            .filter_map(|candidate| {
                let subject_text = self.policy.candidate_document(candidate);
                let subject_vector = match self.scorer.encoder().encode(&subject_text) {
                    Ok(vector) => vector,
                    Err(e) => {
                        warn!(
                            candidate_id = %candidate.id,
                            error = %e,
                            "Dropping candidate from ranking: encode failed"
                        );
                        return None;
                    }
                };
                let subject_skills = self.scorer.extractor().extract(&subject_text);

                let score = self.scorer.score_prepared(
                    &subject_vector,
                    &subject_skills,
                    &reference_vector,
                    &reference_skills,
                );

                Some(MatchResult {
                    candidate_id: candidate.id,
                    job_id: job.id,
                    score,
                    computed_at: Utc::now(),
                })
            })
            .collect();

        sort_results(&mut results, |result| result.candidate_id);
        apply_options(&mut results, options);

        debug!(results = results.len(), "Ranked job against candidates");
        Ok(results)
    }
}

fn sort_results(results: &mut [MatchResult], target_id: impl Fn(&MatchResult) -> Uuid) {
    results.sort_by(|a, b| {
        b.score
            .hybrid_score
            .partial_cmp(&a.score.hybrid_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| target_id(a).cmp(&target_id(b)))
    });
}

fn apply_options(results: &mut Vec<MatchResult>, options: &RankOptions) {
    if let Some(prediction) = options.prediction_filter {
        results.retain(|result| result.score.prediction == prediction);
    }
    results.truncate(options.limit);
}
