use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// Number of decimal places every score is rounded to.
const SCORE_DECIMALS: f64 = 10_000.0;

/// Match scores between a resume and a job description.
///
/// Every score field is constrained to [0, 1] and rounded to 4 decimal
/// places via [`MatchScore::normalized`], regardless of which scorer backend
/// produced the raw values. `keywords` is ordered by descending relevance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub overall_score: f64,
    pub skill_match_score: f64,
    pub experience_match_score: f64,
    pub education_match_score: f64,
    pub keywords: Vec<String>,
}

impl MatchScore {
    /// Clamps every score to [0, 1], then rounds to 4 decimal places.
    ///
    /// The order is fixed: clamp first, round second, so rounding can never
    /// push a value back outside the bound. Applied once by the pipeline
    /// after the scorer returns — scorer backends hand over raw values.
    pub fn normalized(self) -> Self {
        MatchScore {
            overall_score: clamp_round(self.overall_score),
            skill_match_score: clamp_round(self.skill_match_score),
            experience_match_score: clamp_round(self.experience_match_score),
            education_match_score: clamp_round(self.education_match_score),
            keywords: self.keywords,
        }
    }
}

fn clamp_round(score: f64) -> f64 {
    (score.clamp(0.0, 1.0) * SCORE_DECIMALS).round() / SCORE_DECIMALS
}

/// Full match result returned to callers and stored in the match cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub resume: ResumeRecord,
    pub job_description: String,
    pub match_score: MatchScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(overall: f64, skill: f64, exp: f64, edu: f64) -> MatchScore {
        MatchScore {
            overall_score: overall,
            skill_match_score: skill,
            experience_match_score: exp,
            education_match_score: edu,
            keywords: vec![],
        }
    }

    #[test]
    fn test_normalized_clamps_overshoot_to_one() {
        let s = score(5.0, 1.2, 0.5, 0.5).normalized();
        assert_eq!(s.overall_score, 1.0);
        assert_eq!(s.skill_match_score, 1.0);
    }

    #[test]
    fn test_normalized_clamps_negative_to_zero() {
        let s = score(-0.3, 0.5, -1.0, 0.5).normalized();
        assert_eq!(s.overall_score, 0.0);
        assert_eq!(s.experience_match_score, 0.0);
    }

    #[test]
    fn test_normalized_rounds_to_four_decimals() {
        let s = score(2.0 / 3.0, 0.123456, 0.7, 0.8).normalized();
        assert_eq!(s.overall_score, 0.6667);
        assert_eq!(s.skill_match_score, 0.1235);
        assert_eq!(s.experience_match_score, 0.7);
        assert_eq!(s.education_match_score, 0.8);
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let once = score(0.33335, 0.9, 0.7, 0.8).normalized();
        let twice = once.clone().normalized();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalized_preserves_keyword_order() {
        let s = MatchScore {
            keywords: vec!["rust".to_string(), "tokio".to_string()],
            ..score(0.5, 0.5, 0.7, 0.8)
        }
        .normalized();
        assert_eq!(s.keywords, vec!["rust", "tokio"]);
    }
}
