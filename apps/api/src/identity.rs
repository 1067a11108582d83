//! Content addressing — resume ids and cache keys derived from text content.
//!
//! Identical text always maps to the same key; the id is a truncated SHA-256
//! digest, so it cannot be reversed to recover the text.

use sha2::{Digest, Sha256};

/// Hex length of the truncated digest used for ids and job digests.
const SHORT_DIGEST_LEN: usize = 16;

/// Derives a stable resume id from cleaned resume text.
/// Pure and total; the empty string yields a valid id.
pub fn resume_id(cleaned_text: &str) -> String {
    short_digest(cleaned_text)
}

/// Digest of a job description, used as the match-key component.
/// A full cryptographic digest rather than a non-crypto hash so two
/// different JDs for the same resume cannot share a match key in practice.
pub fn job_digest(job_text: &str) -> String {
    short_digest(job_text)
}

pub fn resume_cache_key(resume_id: &str) -> String {
    format!("resume:{resume_id}")
}

/// Composite match key binding a resume identity to a specific JD's content.
pub fn match_cache_key(resume_id: &str, job_text: &str) -> String {
    format!("match:{resume_id}:{}", job_digest(job_text))
}

fn short_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..SHORT_DIGEST_LEN].to_string()
}
