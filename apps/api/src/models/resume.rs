use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw and cleaned text of an uploaded resume. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeParsed {
    pub raw_text: String,
    /// Derived from `raw_text`: per-line whitespace stripped, empty lines
    /// dropped, line order preserved.
    pub cleaned_text: String,
}

/// Structured candidate fields extracted from a resume.
///
/// Every field is independently optional — absence is an expected state, not
/// an error. `extra` is an open mapping for anything the assisted extractor
/// considers useful beyond the named fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeKeyInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub job_intention: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<f64>,
    #[serde(default)]
    pub education_background: Option<String>,
    #[serde(default)]
    pub extra: Map<String, Value>,
}

/// The full stored record for an ingested resume: content-addressed id,
/// parsed text, and extracted key info. This is what the resume cache holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub resume_id: String,
    pub parsed: ResumeParsed,
    pub key_info: ResumeKeyInfo,
}
