//! Keyword extraction — frequency-ranked tokens shared by the keyword scorer
//! and the assisted scorer's fallback.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens are maximal runs of CJK ideographs, ASCII letters/digits, and
/// underscore. Lower-cased; single-character tokens are discarded.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Han}A-Za-z0-9_]+").expect("valid token regex"));

/// Pool size used when comparing the two sides' keyword sets.
pub const KEYWORD_POOL: usize = 30;
/// Number of keywords surfaced to callers.
pub const TOP_KEYWORDS: usize = 10;

/// Ranks tokens by descending frequency, ties broken by first occurrence,
/// and returns the top `top_k`.
pub fn rank_keywords(text: &str, top_k: usize) -> Vec<String> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for m in TOKEN_RE.find_iter(text) {
        let token = m.as_str().to_lowercase();
        if token.chars().count() <= 1 {
            continue;
        }
        let count = freq.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // `order` holds first-occurrence order; a stable sort on frequency alone
    // keeps it as the tie-break.
    order.sort_by(|a, b| freq[b].cmp(&freq[a]));
    order.truncate(top_k);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_by_descending_frequency() {
        let kws = rank_keywords("rust rust rust tokio tokio axum", 10);
        assert_eq!(kws, vec!["rust", "tokio", "axum"]);
    }

    #[test]
    fn test_ties_broken_by_first_occurrence() {
        let kws = rank_keywords("zulu alpha zulu alpha beta beta", 10);
        assert_eq!(kws, vec!["zulu", "alpha", "beta"]);
    }

    #[test]
    fn test_single_char_tokens_dropped() {
        let kws = rank_keywords("a b c rust x", 10);
        assert_eq!(kws, vec!["rust"]);
    }

    #[test]
    fn test_tokens_lowercased() {
        let kws = rank_keywords("Rust RUST rust", 10);
        assert_eq!(kws, vec!["rust"]);
    }

    #[test]
    fn test_cjk_tokens_extracted() {
        let kws = rank_keywords("后端开发 后端开发 python", 10);
        assert_eq!(kws, vec!["后端开发", "python"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let kws = rank_keywords("python,sql;python/sql python", 10);
        assert_eq!(kws, vec!["python", "sql"]);
    }

    #[test]
    fn test_top_k_truncation() {
        let kws = rank_keywords("aa bb cc dd", 2);
        assert_eq!(kws.len(), 2);
    }

    #[test]
    fn test_empty_text_yields_no_keywords() {
        assert!(rank_keywords("", 10).is_empty());
        assert!(rank_keywords("! @ # $", 10).is_empty());
    }

    #[test]
    fn test_underscore_kept_inside_tokens() {
        let kws = rank_keywords("serde_json serde_json tokio", 10);
        assert_eq!(kws, vec!["serde_json", "tokio"]);
    }
}
