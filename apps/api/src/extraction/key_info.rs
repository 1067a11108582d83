//! Key-info extraction — turns cleaned resume text into a `ResumeKeyInfo`.
//!
//! Two backends behind one trait: `RuleBasedExtractor` (regex + heuristics,
//! always available) and `LlmExtractor` (assisted, with rule-based backfill).
//! Both are infallible by contract — an LLM failure degrades to the
//! rule-based result, never to an error.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::extraction::prompts::{KEY_INFO_PROMPT_TEMPLATE, KEY_INFO_SYSTEM};
use crate::llm_client::{coerce_f64, parse_loose, LlmClient};
use crate::models::resume::ResumeKeyInfo;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

/// Either an 11-digit mobile number with a recognized leading digit, or a
/// generic run of 9+ digits with optional spaces/dashes and a `+` prefix.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(1[3-9]\d{9})|(\+?\d[\d -]{8,}\d)").expect("valid phone regex"));

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 15;

#[async_trait]
pub trait KeyInfoExtractor: Send + Sync {
    async fn extract(&self, cleaned_text: &str) -> ResumeKeyInfo;
}

/// Regex-and-heuristics extractor. Zero external dependency.
pub struct RuleBasedExtractor;

#[async_trait]
impl KeyInfoExtractor for RuleBasedExtractor {
    async fn extract(&self, cleaned_text: &str) -> ResumeKeyInfo {
        rule_based_key_info(cleaned_text)
    }
}

/// Assisted extractor: asks the LLM for the structured fields, then backfills
/// email/phone with the same regexes the rule-based extractor uses.
pub struct LlmExtractor {
    llm: LlmClient,
}

impl LlmExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl KeyInfoExtractor for LlmExtractor {
    async fn extract(&self, cleaned_text: &str) -> ResumeKeyInfo {
        let prompt = KEY_INFO_PROMPT_TEMPLATE.replace("{resume_text}", cleaned_text);

        let data = match self.llm.call_text(&prompt, KEY_INFO_SYSTEM).await {
            Ok(text) => parse_loose(&text),
            Err(e) => {
                warn!("Key-info extraction degraded to rule-based mode: {e}");
                return rule_based_key_info(cleaned_text);
            }
        };

        key_info_from_loose(&data, cleaned_text)
    }
}

/// Builds a `ResumeKeyInfo` from a loosely parsed LLM response, backfilling
/// email and phone from the cleaned text when the response lacks them.
fn key_info_from_loose(data: &Map<String, Value>, cleaned_text: &str) -> ResumeKeyInfo {
    ResumeKeyInfo {
        name: get_str(data, "name"),
        phone: get_str(data, "phone").or_else(|| find_phone(cleaned_text)),
        email: get_str(data, "email").or_else(|| find_email(cleaned_text)),
        address: get_str(data, "address"),
        job_intention: get_str(data, "job_intention"),
        years_of_experience: data
            .get("years_of_experience")
            .and_then(coerce_f64)
            .filter(|y| *y >= 0.0),
        education_background: get_str(data, "education_background"),
        extra: match data.get("extra") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        },
    }
}

fn rule_based_key_info(cleaned_text: &str) -> ResumeKeyInfo {
    ResumeKeyInfo {
        name: guess_name(cleaned_text),
        phone: find_phone(cleaned_text),
        email: find_email(cleaned_text),
        ..Default::default()
    }
}

fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

fn find_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Takes the first non-empty line as the candidate name, when its length is
/// plausible for one.
fn guess_name(cleaned_text: &str) -> Option<String> {
    let first = cleaned_text.lines().find(|l| !l.trim().is_empty())?.trim();
    let len = first.chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        Some(first.to_string())
    } else {
        None
    }
}

fn get_str(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIXTURE: &str = "Zhang San\nzhang@example.com\n13800000000\nBackend engineer, 5 years";

    #[tokio::test]
    async fn test_rule_based_extracts_fixture_fields() {
        let info = RuleBasedExtractor.extract(FIXTURE).await;
        assert_eq!(info.email.as_deref(), Some("zhang@example.com"));
        assert_eq!(info.phone.as_deref(), Some("13800000000"));
        assert_eq!(info.name.as_deref(), Some("Zhang San"));
        assert!(info.address.is_none());
        assert!(info.years_of_experience.is_none());
        assert!(info.extra.is_empty());
    }

    #[test]
    fn test_phone_regex_matches_international_format() {
        assert_eq!(
            find_phone("call me at +44 20 7946 0958 anytime").as_deref(),
            Some("+44 20 7946 0958")
        );
    }

    #[test]
    fn test_phone_regex_ignores_short_digit_runs() {
        assert!(find_phone("room 1203, floor 7").is_none());
    }

    #[test]
    fn test_name_rejected_when_too_long() {
        let text = "An Extremely Long Header Line That Is Not A Name\njane@example.com";
        assert!(guess_name(text).is_none());
    }

    #[test]
    fn test_name_rejected_when_single_char() {
        assert!(guess_name("X\nmore text").is_none());
    }

    #[test]
    fn test_name_accepts_cjk() {
        assert_eq!(guess_name("张三\n其他内容").as_deref(), Some("张三"));
    }

    #[test]
    fn test_loose_response_fields_read_by_name() {
        let data = parse_loose(
            r#"{"name": "Jane Doe", "job_intention": "Backend", "years_of_experience": 5,
                "education_background": "BSc CS", "extra": {"github": "janedoe"}}"#,
        );
        let info = key_info_from_loose(&data, FIXTURE);
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.job_intention.as_deref(), Some("Backend"));
        assert_eq!(info.years_of_experience, Some(5.0));
        assert_eq!(info.education_background.as_deref(), Some("BSc CS"));
        assert_eq!(info.extra.get("github"), Some(&json!("janedoe")));
    }

    #[test]
    fn test_loose_response_backfills_email_and_phone() {
        let data = parse_loose(r#"{"name": "Zhang San"}"#);
        let info = key_info_from_loose(&data, FIXTURE);
        assert_eq!(info.email.as_deref(), Some("zhang@example.com"));
        assert_eq!(info.phone.as_deref(), Some("13800000000"));
    }

    #[test]
    fn test_loose_response_keeps_supplied_email_over_backfill() {
        let data = parse_loose(r#"{"email": "preferred@example.com"}"#);
        let info = key_info_from_loose(&data, FIXTURE);
        assert_eq!(info.email.as_deref(), Some("preferred@example.com"));
    }

    #[test]
    fn test_years_coerced_from_free_form_string() {
        let data = parse_loose(r#"{"years_of_experience": "about 3.5 years"}"#);
        let info = key_info_from_loose(&data, "");
        assert_eq!(info.years_of_experience, Some(3.5));
    }

    #[test]
    fn test_years_absent_when_unparseable() {
        let data = parse_loose(r#"{"years_of_experience": "senior"}"#);
        let info = key_info_from_loose(&data, "");
        assert!(info.years_of_experience.is_none());
    }

    #[test]
    fn test_negative_years_discarded() {
        let data = parse_loose(r#"{"years_of_experience": -2}"#);
        let info = key_info_from_loose(&data, "");
        assert!(info.years_of_experience.is_none());
    }

    #[test]
    fn test_null_extra_defaults_to_empty_map() {
        let data = parse_loose(r#"{"extra": null}"#);
        let info = key_info_from_loose(&data, "");
        assert!(info.extra.is_empty());
    }

    #[test]
    fn test_empty_loose_response_equals_regex_backfill_only() {
        let info = key_info_from_loose(&Map::new(), FIXTURE);
        assert_eq!(info.email.as_deref(), Some("zhang@example.com"));
        assert_eq!(info.phone.as_deref(), Some("13800000000"));
        // Name heuristic is rule-based-mode-only; assisted mode leaves it absent.
        assert!(info.name.is_none());
    }
}
