//! Orchestrator — composes identity derivation, extraction, scoring, and the
//! cache behind two operations: ingest a resume, score it against a JD.
//!
//! Concurrency: each operation runs to completion independently. Identical
//! (resume, job) pairs racing on a cache miss may both invoke the scorer —
//! there is deliberately no single-flight deduplication; the second write
//! simply overwrites the first with an equivalent result.

use tracing::{debug, info};

use crate::cache::CacheHandle;
use crate::errors::AppError;
use crate::extraction::key_info::KeyInfoExtractor;
use crate::identity;
use crate::matching::scorer::MatchScorer;
use crate::models::matching::MatchResult;
use crate::models::resume::{ResumeParsed, ResumeRecord};

/// Ingests extracted resume text: derives the content-addressed id, returns
/// the cached record on a hit (skipping extraction entirely), and otherwise
/// extracts key info and stores the assembled record.
pub async fn ingest_text(
    cache: &CacheHandle,
    extractor: &dyn KeyInfoExtractor,
    raw_text: String,
    cleaned_text: String,
) -> Result<ResumeRecord, AppError> {
    if cleaned_text.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    let resume_id = identity::resume_id(&cleaned_text);

    if let Some(record) = cache.get_resume(&resume_id).await? {
        debug!(%resume_id, "Resume cache hit");
        return Ok(record);
    }

    let key_info = extractor.extract(&cleaned_text).await;

    let record = ResumeRecord {
        resume_id: resume_id.clone(),
        parsed: ResumeParsed {
            raw_text,
            cleaned_text,
        },
        key_info,
    };

    cache.put_resume(&record).await?;
    info!(%resume_id, "Resume ingested");

    Ok(record)
}

/// Scores a previously ingested resume against a job description. The match
/// cache is keyed by (resume id, JD content digest); a hit returns the
/// stored result unchanged.
pub async fn match_job(
    cache: &CacheHandle,
    scorer: &dyn MatchScorer,
    resume_id: &str,
    job_description: &str,
) -> Result<MatchResult, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::BlankJobDescription);
    }

    let resume = cache
        .get_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::ResumeNotFound(resume_id.to_string()))?;

    if let Some(cached) = cache.get_match(resume_id, job_description).await? {
        debug!(%resume_id, "Match cache hit");
        return Ok(cached);
    }

    // Score bounds are enforced here, once, for every backend: clamp to
    // [0, 1] first, round to 4 decimals second.
    let match_score = scorer
        .score(&resume.parsed.cleaned_text, job_description)
        .await
        .normalized();

    let result = MatchResult {
        resume,
        job_description: job_description.to_string(),
        match_score,
    };

    cache.put_match(resume_id, job_description, &result).await?;
    info!(%resume_id, "Match scored");

    Ok(result)
}
