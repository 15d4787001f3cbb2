//! Validation helpers and subreddit normalization
//!
//! Stored subreddit values never carry the `r/` prefix; the display layer
//! re-adds it.

use regex::Regex;

lazy_static::lazy_static! {
    /// Subreddit name validation regex
    /// Reddit community names are 2-21 word characters
    pub static ref SUBREDDIT_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9_]{2,21}$").unwrap();
}

/// Strip a single leading `r/` or `/r/` prefix and surrounding whitespace.
///
/// Idempotent: normalizing an already-normalized name is a no-op.
pub fn normalize_subreddit(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed
        .strip_prefix("/r/")
        .or_else(|| trimmed.strip_prefix("r/"))
        .unwrap_or(trimmed);
    stripped.to_string()
}

/// Normalize a list of subreddit names, dropping entries that are empty
/// after normalization.
pub fn normalize_subreddits(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| normalize_subreddit(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Validate a subreddit name according to Reddit's community name rules
pub fn validate_subreddit(name: &str) -> bool {
    SUBREDDIT_REGEX.is_match(&normalize_subreddit(name))
}

/// Re-add the `r/` prefix for display
pub fn display_subreddit(name: &str) -> String {
    format!("r/{}", normalize_subreddit(name))
}
