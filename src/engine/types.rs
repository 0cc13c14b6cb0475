use serde::Serialize;

use crate::extraction::ExtractedSkillSet;
use crate::scoring::HybridScore;
use crate::scoring::types::round2;

/// Cap on the skills surfaced in each advice list of a [`SkillGapReport`].
pub const MAX_RECOMMENDED_SKILLS: usize = 5;

/// Advice block nested in a [`SkillGapReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRecommendations {
    /// Missing skills to pick up first, capped at [`MAX_RECOMMENDED_SKILLS`].
    pub priority_skills: Vec<String>,
    /// Total number of required skills the candidate lacks.
    pub skill_gap_count: usize,
    /// Required skills the candidate already has, capped at
    /// [`MAX_RECOMMENDED_SKILLS`].
    pub strengths: Vec<String>,
}

/// Gap analysis between a candidate's skills and a job's requirements.
///
/// Both sides come from vocabulary extraction over the assembled documents,
/// so declared candidate skills participate under their canonical names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGapReport {
    pub candidate_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Share of required skills the candidate covers, in percent rounded to
    /// two decimals. Zero when the job requires nothing.
    pub skill_match_percentage: f32,
    pub recommendations: SkillRecommendations,
}

impl SkillGapReport {
    /// Builds the report from the two extracted skill sets.
    pub fn build(candidate: &ExtractedSkillSet, required: &ExtractedSkillSet) -> Self {
        let matching_skills = candidate.intersect(required);
        let missing_skills = candidate.missing_from(required);

        let skill_match_percentage = if required.is_empty() {
            0.0
        } else {
            round2(matching_skills.len() as f32 / required.len() as f32 * 100.0)
        };

        let recommendations = SkillRecommendations {
            priority_skills: missing_skills
                .iter()
                .take(MAX_RECOMMENDED_SKILLS)
                .cloned()
                .collect(),
            skill_gap_count: missing_skills.len(),
            strengths: matching_skills
                .iter()
                .take(MAX_RECOMMENDED_SKILLS)
                .cloned()
                .collect(),
        };

        Self {
            candidate_skills: candidate.names().to_vec(),
            required_skills: required.names().to_vec(),
            matching_skills,
            missing_skills,
            skill_match_percentage,
            recommendations,
        }
    }
}

/// Startup probe summary produced by the engine's self-check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfCheckReport {
    /// True when the encoder is running without model weights.
    pub encoder_stub: bool,
    pub embedding_dim: usize,
    pub vocabulary_size: usize,
    /// Score of the fixed probe pair the check ran.
    pub probe: HybridScore,
}
