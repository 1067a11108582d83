//! Match scoring — pluggable, trait-based scorer measuring a resume against
//! a job description.
//!
//! Default: `KeywordScorer` (pure-Rust, fast, deterministic). Assisted:
//! `LlmScorer`, which degrades to keyword output when the LLM call fails and
//! to per-field defaults when its output is malformed. Neither backend ever
//! returns an error; the pipeline normalizes (clamps + rounds) whatever they
//! produce.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::llm_client::{coerce_f64, parse_loose, LlmClient};
use crate::matching::keywords::{rank_keywords, KEYWORD_POOL, TOP_KEYWORDS};
use crate::matching::prompts::{MATCH_SCORE_PROMPT_TEMPLATE, MATCH_SCORE_SYSTEM};
use crate::models::matching::MatchScore;

/// Fixed defaults used when no richer signal is available.
const DEFAULT_EXPERIENCE_SCORE: f64 = 0.7;
const DEFAULT_EDUCATION_SCORE: f64 = 0.8;

const SKILL_WEIGHT: f64 = 0.5;
const EXPERIENCE_WEIGHT: f64 = 0.3;
const EDUCATION_WEIGHT: f64 = 0.2;

/// The match scorer trait. Implement this to swap backends without touching
/// the pipeline or handler code. Carried in `AppState` as `Arc<dyn MatchScorer>`.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, resume_text: &str, job_text: &str) -> MatchScore;
}

/// Pure keyword-overlap scorer. No external dependency.
pub struct KeywordScorer;

#[async_trait]
impl MatchScorer for KeywordScorer {
    async fn score(&self, resume_text: &str, job_text: &str) -> MatchScore {
        keyword_match_score(resume_text, job_text)
    }
}

/// Assisted scorer via the LLM, with keyword-overlap degradation.
pub struct LlmScorer {
    llm: LlmClient,
}

impl LlmScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl MatchScorer for LlmScorer {
    async fn score(&self, resume_text: &str, job_text: &str) -> MatchScore {
        let prompt = MATCH_SCORE_PROMPT_TEMPLATE
            .replace("{jd_text}", job_text)
            .replace("{resume_text}", resume_text);

        match self.llm.call_text(&prompt, MATCH_SCORE_SYSTEM).await {
            Ok(text) => llm_match_score(&text, job_text),
            Err(e) => {
                warn!("Match scoring degraded to keyword mode: {e}");
                keyword_match_score(resume_text, job_text)
            }
        }
    }
}

/// Scores by overlap between the two sides' top-30 keyword sets.
pub fn keyword_match_score(resume_text: &str, job_text: &str) -> MatchScore {
    let resume_keywords: HashSet<String> =
        rank_keywords(resume_text, KEYWORD_POOL).into_iter().collect();
    let job_keywords = rank_keywords(job_text, KEYWORD_POOL);

    let skill = if job_keywords.is_empty() {
        0.0
    } else {
        let overlap = job_keywords
            .iter()
            .filter(|kw| resume_keywords.contains(*kw))
            .count();
        overlap as f64 / job_keywords.len() as f64
    };

    MatchScore {
        overall_score: SKILL_WEIGHT * skill
            + EXPERIENCE_WEIGHT * DEFAULT_EXPERIENCE_SCORE
            + EDUCATION_WEIGHT * DEFAULT_EDUCATION_SCORE,
        skill_match_score: skill,
        experience_match_score: DEFAULT_EXPERIENCE_SCORE,
        education_match_score: DEFAULT_EDUCATION_SCORE,
        keywords: rank_keywords(job_text, TOP_KEYWORDS),
    }
}

/// Builds a score from loosely structured LLM output. Unparseable fields
/// default to 0.0; absent or empty keywords fall back to the job text's
/// own top tokens.
fn llm_match_score(response_text: &str, job_text: &str) -> MatchScore {
    let data = parse_loose(response_text);

    let field = |key: &str| data.get(key).and_then(coerce_f64).unwrap_or(0.0);

    let mut keywords: Vec<String> = match data.get("keywords") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };
    if keywords.is_empty() {
        keywords = rank_keywords(job_text, TOP_KEYWORDS);
    }
    keywords.truncate(TOP_KEYWORDS);

    MatchScore {
        overall_score: field("overall_score"),
        skill_match_score: field("skill_match_score"),
        experience_match_score: field("experience_match_score"),
        education_match_score: field("education_match_score"),
        keywords,
    }
}
