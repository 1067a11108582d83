// LLM prompt constants for key-info extraction.

/// System prompt for resume parsing — enforces JSON-only output.
pub const KEY_INFO_SYSTEM: &str = "You are a resume parsing assistant. \
    Extract key candidate information from Chinese or English resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Key-info extraction prompt template. Replace `{resume_text}` before sending.
pub const KEY_INFO_PROMPT_TEMPLATE: &str = r#"Extract key information from the resume below.

Return a JSON object with this EXACT schema (every field optional, use null when unknown):
{
  "name": "Jane Doe",
  "phone": "13800000000",
  "email": "jane@example.com",
  "address": "Shanghai, China",
  "job_intention": "Senior Backend Engineer",
  "years_of_experience": 5,
  "education_background": "BSc Computer Science, Fudan University",
  "extra": {"anything else useful": "..."}
}

Rules:
- `years_of_experience` must be a number when you can determine it.
- Put any other useful details (links, certifications, languages) in `extra`.
- Do NOT invent values that are not supported by the resume text.

RESUME:
{resume_text}"#;
