// LLM prompt constants for match scoring.

/// System prompt for match scoring — enforces JSON-only output.
pub const MATCH_SCORE_SYSTEM: &str = "You are a recruiting match assessor. \
    Given a candidate resume and a job description, score how well they match. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Match scoring prompt template. Replace `{jd_text}` and `{resume_text}`
/// before sending.
pub const MATCH_SCORE_PROMPT_TEMPLATE: &str = r#"Assess how well the candidate below matches the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_score": 0.78,
  "skill_match_score": 0.8,
  "experience_match_score": 0.7,
  "education_match_score": 0.9,
  "keywords": ["key ability 1", "key ability 2"]
}

Rules:
- Every score is a decimal between 0 and 1.
- `keywords` lists the key abilities the job demands, most important first.
- Score strictly from the evidence in the resume; do not give credit for
  skills that are not mentioned.

JOB DESCRIPTION:
{jd_text}

CANDIDATE RESUME:
{resume_text}"#;
