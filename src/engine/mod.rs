//! End-to-end matching over a directory of candidates and jobs.
//!
//! The engine owns the vocabulary, encoder, extractor, ranker, and store and
//! exposes the operations callers drive: pairwise scoring, ranking in both
//! directions, skill gap reports, and retrieval of persisted results.
//! Ranking output is persisted best-effort: a store failure is logged and the
//! computed results are returned unchanged.

pub mod error;
pub mod types;


pub use error::EngineError;
pub use types::{MAX_RECOMMENDED_SKILLS, SelfCheckReport, SkillGapReport, SkillRecommendations};

use std::sync::Arc;

use futures_util::future;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::constants::{SEMANTIC_WEIGHT, SKILL_WEIGHT};
use crate::encoding::TextEncoder;
use crate::extraction::{ExtractedSkillSet, SkillExtractor};
use crate::ranking::{MatchRanker, MatchResult, RankOptions};
use crate::records::{Directory, DocumentPolicy};
use crate::scoring::{HybridScore, HybridScorer};
use crate::store::{MatchKey, MatchStore, StoreBackend, StoredMatchSet};
use crate::vocabulary::SkillVocabulary;

const SELF_CHECK_CANDIDATE: &str =
    "Backend engineer with Python, SQL, and Docker experience building data services";
const SELF_CHECK_JOB: &str = "Hiring a Python developer to own SQL pipelines and Docker deployments";

/// Matching engine wiring scoring, ranking, and persistence together.
pub struct MatchEngine<D, B> {
    vocabulary: Arc<SkillVocabulary>,
    encoder: Arc<TextEncoder>,
    extractor: Arc<SkillExtractor>,
    ranker: MatchRanker,
    directory: D,
    store: MatchStore<B>,
}

impl<D, B> std::fmt::Debug for MatchEngine<D, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("encoder", &self.encoder)
            .field("ranker", &self.ranker)
            .finish_non_exhaustive()
    }
}

impl<D: Directory, B: StoreBackend> MatchEngine<D, B> {
    /// Creates an engine with the default document policy.
    pub fn new(
        vocabulary: Arc<SkillVocabulary>,
        encoder: Arc<TextEncoder>,
        directory: D,
        store: MatchStore<B>,
    ) -> Result<Self, EngineError> {
        Self::with_policy(
            vocabulary,
            encoder,
            directory,
            store,
            DocumentPolicy::default(),
        )
    }

    /// Creates an engine with an explicit document policy.
    pub fn with_policy(
        vocabulary: Arc<SkillVocabulary>,
        encoder: Arc<TextEncoder>,
        directory: D,
        store: MatchStore<B>,
        policy: DocumentPolicy,
    ) -> Result<Self, EngineError> {
        let extractor = Arc::new(SkillExtractor::new(Arc::clone(&vocabulary))?);
        let scorer = HybridScorer::new(Arc::clone(&encoder), Arc::clone(&extractor));
        let ranker = MatchRanker::new(scorer, policy);
        Ok(Self {
            vocabulary,
            encoder,
            extractor,
            ranker,
            directory,
            store,
        })
    }

    /// Creates an engine over the stub encoder and the builtin vocabulary.
    pub fn stub(directory: D, store: MatchStore<B>) -> Result<Self, EngineError> {
        let vocabulary = SkillVocabulary::builtin()?.into_shared();
        let encoder = Arc::new(TextEncoder::stub()?);
        Self::new(vocabulary, encoder, directory, store)
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn encoder(&self) -> &TextEncoder {
        &self.encoder
    }

    pub fn ranker(&self) -> &MatchRanker {
        &self.ranker
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn store(&self) -> &MatchStore<B> {
        &self.store
    }

    /// Extracts vocabulary skills from free text.
    pub fn extract_skills(&self, text: &str) -> ExtractedSkillSet {
        self.extractor.extract(text)
    }

    /// Scores one candidate/job text pair without touching the directory.
    pub fn calculate_hybrid_score(
        &self,
        candidate_text: &str,
        job_text: &str,
    ) -> Result<HybridScore, EngineError> {
        Ok(self.ranker.scorer().score_texts(candidate_text, job_text)?)
    }

    /// Ranks a candidate against jobs, optionally restricted to `job_ids`.
    ///
    /// An unknown candidate yields an empty list. The returned results are
    /// persisted under [`MatchKey::Candidate`], superseding any previous set.
    #[instrument(skip(self, job_ids), fields(candidate_id = %candidate_id))]
    pub async fn match_candidate_to_jobs(
        &self,
        candidate_id: Uuid,
        job_ids: Option<&[Uuid]>,
        options: &RankOptions,
    ) -> Result<Vec<MatchResult>, EngineError> {
        let (candidate, jobs) = future::join(
            self.directory.candidate(candidate_id),
            self.directory.jobs(job_ids),
        )
        .await;

        let Some(candidate) = candidate? else {
            info!("Candidate not found, returning no matches");
            return Ok(Vec::new());
        };
        let jobs = jobs?;

        let results = self
            .ranker
            .rank_candidate_against_jobs(&candidate, &jobs, options)?;
        self.persist(MatchKey::Candidate(candidate_id), &results)
            .await;

        Ok(results)
    }

    /// Ranks a job against candidates, optionally restricted to
    /// `candidate_ids`.
    ///
    /// An unknown job yields an empty list. The returned results are
    /// persisted under [`MatchKey::Job`], superseding any previous set.
    #[instrument(skip(self, candidate_ids), fields(job_id = %job_id))]
    pub async fn match_job_to_candidates(
        &self,
        job_id: Uuid,
        candidate_ids: Option<&[Uuid]>,
        options: &RankOptions,
    ) -> Result<Vec<MatchResult>, EngineError> {
        let (job, candidates) = future::join(
            self.directory.job(job_id),
            self.directory.candidates(candidate_ids),
        )
        .await;

        let Some(job) = job? else {
            info!("Job not found, returning no matches");
            return Ok(Vec::new());
        };
        let candidates = candidates?;

        let results = self
            .ranker
            .rank_job_against_candidates(&job, &candidates, options)?;
        self.persist(MatchKey::Job(job_id), &results).await;

        Ok(results)
    }

    /// Builds a skill gap report for a candidate against a target job.
    ///
    /// Returns `None` when either entity is absent from the directory.
    #[instrument(skip(self), fields(candidate_id = %candidate_id, job_id = %job_id))]
    pub async fn skill_recommendations(
        &self,
        candidate_id: Uuid,
        job_id: Uuid,
    ) -> Result<Option<SkillGapReport>, EngineError> {
        let (candidate, job) = future::join(
            self.directory.candidate(candidate_id),
            self.directory.job(job_id),
        )
        .await;

        let (Some(candidate), Some(job)) = (candidate?, job?) else {
            info!("Candidate or job not found, no recommendations");
            return Ok(None);
        };

        let policy = self.ranker.policy();
        let candidate_skills = self.extractor.extract(&policy.candidate_document(&candidate));
        let required_skills = self.extractor.extract(&policy.job_document(&job));

        Ok(Some(SkillGapReport::build(
            &candidate_skills,
            &required_skills,
        )))
    }

    /// Most recently persisted results for `key`; empty when none exist.
    pub async fn load_matches(&self, key: MatchKey) -> Result<Vec<MatchResult>, EngineError> {
        Ok(self.store.load_matches(key).await?)
    }

    /// Most recently persisted set for `key` with its generation stamp.
    pub async fn load_match_set(
        &self,
        key: MatchKey,
    ) -> Result<Option<StoredMatchSet>, EngineError> {
        Ok(self.store.load_set(key).await?)
    }

    /// Drops the persisted set for `key`. Returns `true` if one existed.
    pub async fn delete_matches(&self, key: MatchKey) -> Result<bool, EngineError> {
        Ok(self.store.delete_matches(key).await?)
    }

    /// Scores a fixed probe pair and verifies the bundle invariants hold.
    ///
    /// Run at startup so a broken encoder or vocabulary stops the process
    /// instead of serving degraded scores.
    pub fn self_check(&self) -> Result<SelfCheckReport, EngineError> {
        let probe = self
            .ranker
            .scorer()
            .score_texts(SELF_CHECK_CANDIDATE, SELF_CHECK_JOB)?;
        let score = &probe.score;

        for (name, value) in [
            ("semantic", score.semantic_score),
            ("skill", score.skill_score),
            ("hybrid", score.hybrid_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::SelfCheckFailed {
                    reason: format!("{name} score {value} outside [0, 1]"),
                });
            }
        }

        let fused = SEMANTIC_WEIGHT * score.semantic_score + SKILL_WEIGHT * score.skill_score;
        if (score.hybrid_score - fused).abs() > 1e-5 {
            return Err(EngineError::SelfCheckFailed {
                reason: format!(
                    "hybrid score {} diverges from weighted sum {}",
                    score.hybrid_score, fused
                ),
            });
        }

        if probe.subject_skills.is_empty() || probe.reference_skills.is_empty() {
            return Err(EngineError::SelfCheckFailed {
                reason: "probe texts yielded no extracted skills".to_string(),
            });
        }

        Ok(SelfCheckReport {
            encoder_stub: !self.encoder.is_model_loaded(),
            embedding_dim: self.encoder.embedding_dim(),
            vocabulary_size: self.vocabulary.len(),
            probe,
        })
    }

    /// Best-effort persistence of a ranking run.
    async fn persist(&self, key: MatchKey, results: &[MatchResult]) {
        if let Err(error) = self.store.save_matches(key, results.to_vec()).await {
            warn!(key = %key, error = %error, "Failed to persist match results");
        }
    }
}
