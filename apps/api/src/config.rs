use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Only `PORT` and the cache TTLs have defaults; the LLM key and Redis URL
/// are optional and select assisted extraction / the external cache backend
/// when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, key-info extraction and match scoring go through the LLM.
    pub anthropic_api_key: Option<String>,
    /// When set, cached records live in Redis instead of process memory.
    pub redis_url: Option<String>,
    /// TTL for cached resume records (seconds). Default: 24 hours.
    pub resume_ttl_secs: u64,
    /// TTL for cached match results (seconds). Default: 1 hour.
    pub match_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            redis_url: optional_env("REDIS_URL"),
            resume_ttl_secs: ttl_env("RESUME_CACHE_TTL_SECS", 24 * 3600)?,
            match_ttl_secs: ttl_env("MATCH_CACHE_TTL_SECS", 3600)?,
        })
    }
}

/// Reads an env var, treating "unset" and "set to empty" the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn ttl_env(key: &str, default_secs: u64) -> Result<u64> {
    match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a number of seconds")),
        None => Ok(default_secs),
    }
}
