use std::sync::Arc;

use tracing::debug;

use crate::constants::{SEMANTIC_WEIGHT, SKILL_WEIGHT};
use crate::encoding::{TextEncoder, cosine_similarity};
use crate::extraction::{ExtractedSkillSet, SkillExtractor};
use crate::vocabulary::SkillVocabulary;

use super::error::ScoringError;
use super::types::{HybridScore, Prediction, ScoreBundle};

/// Fuses semantic similarity and skill overlap into one score.
pub struct HybridScorer {
    encoder: Arc<TextEncoder>,
    extractor: Arc<SkillExtractor>,
}

impl std::fmt::Debug for HybridScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HybridScorer")
            .field("encoder", &self.encoder)
            .field("extractor", &self.extractor)
            .finish()
    }
}

impl HybridScorer {
    pub fn new(encoder: Arc<TextEncoder>, extractor: Arc<SkillExtractor>) -> Self {
        Self { encoder, extractor }
    }

    /// Scorer backed by the stub encoder and the builtin vocabulary.
    pub fn stub() -> Result<Self, ScoringError> {
        let encoder = Arc::new(TextEncoder::stub()?);
        let vocabulary = SkillVocabulary::builtin()?.into_shared();
        let extractor = Arc::new(SkillExtractor::new(vocabulary)?);
        Ok(Self { encoder, extractor })
    }

    pub fn encoder(&self) -> &TextEncoder {
        &self.encoder
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    /// Scores a subject document against a reference document.
    ///
    /// Encodes and extracts both sides, then fuses. The reference side is the
    /// skill-overlap denominator; see the module docs for direction rules.
    pub fn score_texts(
        &self,
        subject_text: &str,
        reference_text: &str,
    ) -> Result<HybridScore, ScoringError> {
        let subject_vector = self.encoder.encode(subject_text)?;
        let reference_vector = self.encoder.encode(reference_text)?;
        let subject_skills = self.extractor.extract(subject_text);
        let reference_skills = self.extractor.extract(reference_text);

        let score = self.score_prepared(
            &subject_vector,
            &subject_skills,
            &reference_vector,
            &reference_skills,
        );

        debug!(
            semantic = score.semantic_score,
            skill = score.skill_score,
            hybrid = score.hybrid_score,
            prediction = %score.prediction,
            "Scored document pair"
        );

        Ok(HybridScore {
            score,
            subject_skills: subject_skills.into_names(),
            reference_skills: reference_skills.into_names(),
        })
    }

    /// Fuses already-computed vectors and skill sets into a bundle.
    ///
    /// Pure computation with no side effects; rankers call this to reuse one
    /// subject encoding across many reference pairs.
    pub fn score_prepared(
        &self,
        subject_vector: &[f32],
        subject_skills: &ExtractedSkillSet,
        reference_vector: &[f32],
        reference_skills: &ExtractedSkillSet,
    ) -> ScoreBundle {
        let semantic_score = cosine_similarity(subject_vector, reference_vector).clamp(0.0, 1.0);
        let (skill_score, matched_skills) = skill_overlap(subject_skills, reference_skills);
        let hybrid_score = SEMANTIC_WEIGHT * semantic_score + SKILL_WEIGHT * skill_score;
        let prediction = Prediction::from_hybrid_score(hybrid_score);

        ScoreBundle {
            semantic_score,
            skill_score,
            hybrid_score,
            matched_skills,
            prediction,
        }
    }
}

/// Overlap fraction over the reference side, with the matched names.
///
/// An empty reference set scores zero rather than dividing by zero.
fn skill_overlap(
    subject: &ExtractedSkillSet,
    reference: &ExtractedSkillSet,
) -> (f32, Vec<String>) {
    if reference.is_empty() {
        return (0.0, Vec::new());
    }

    let matched = subject.intersect(reference);
    let score = matched.len() as f32 / reference.len() as f32;
    (score, matched)
}
