use serde::{Deserialize, Serialize};

use crate::constants::MATCH_THRESHOLD;

/// Binary match call derived from the fused score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    Match,
    NoMatch,
}

impl Prediction {
    /// Applies the decision rule: only scores strictly above the threshold
    /// count as a match, so a score of exactly 0.5 is `NoMatch`.
    pub fn from_hybrid_score(hybrid_score: f32) -> Self {
        if hybrid_score > MATCH_THRESHOLD {
            Prediction::Match
        } else {
            Prediction::NoMatch
        }
    }

    /// Returns `true` for [`Prediction::Match`].
    pub fn is_match(&self) -> bool {
        matches!(self, Prediction::Match)
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prediction::Match => write!(f, "match"),
            Prediction::NoMatch => write!(f, "no_match"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Component and fused scores for one subject/reference pair.
pub struct ScoreBundle {
    /// Cosine similarity of the two document embeddings, clamped to `[0, 1]`.
    pub semantic_score: f32,
    /// Fraction of the reference side's skills the subject also has.
    pub skill_score: f32,
    /// Weighted fusion of the component scores.
    pub hybrid_score: f32,
    /// Skills present on both sides, in the reference side's order.
    pub matched_skills: Vec<String>,
    /// Match call for this pair.
    pub prediction: Prediction,
}

impl ScoreBundle {
    /// Hybrid score as a percentage, rounded to two decimals.
    pub fn match_percentage(&self) -> f32 {
        round2(self.hybrid_score * 100.0)
    }

    /// Returns `true` if the pair was predicted a match.
    pub fn is_match(&self) -> bool {
        self.prediction.is_match()
    }
}

impl std::fmt::Display for ScoreBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (hybrid: {:.4}, semantic: {:.4}, skill: {:.4})",
            self.prediction, self.hybrid_score, self.semantic_score, self.skill_score
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Full scorer output: the bundle plus the extracted skill sets behind it.
pub struct HybridScore {
    /// Scores and prediction for the pair.
    pub score: ScoreBundle,
    /// Skills extracted from the subject document.
    pub subject_skills: Vec<String>,
    /// Skills extracted from the reference document.
    pub reference_skills: Vec<String>,
}

impl HybridScore {
    /// Match call for this pair.
    pub fn prediction(&self) -> Prediction {
        self.score.prediction
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
