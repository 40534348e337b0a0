//! Utility functions for identifier derivation and logging.
//!
//! This module provides helper functions used throughout the application:
//! - Deterministic comment-editor identifiers derived from article URLs
//! - String truncation for log output

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new("[^A-Za-z0-9]").unwrap());

/// Derive the deterministic comment-editor identifier for an article.
///
/// The identifier is the percent-encoded article URL stripped of every
/// non-alphanumeric character, prefixed with `comment-`. Two articles with
/// different URLs get distinct, independently addressable editors, and the
/// same URL always maps to the same identifier across renders.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     comment_editor_id("https://a.io/x"),
///     "comment-https3A2F2Fa.io2Fx".replace('.', "")
/// );
/// ```
pub fn comment_editor_id(article_url: &str) -> String {
    let encoded = urlencoding::encode(article_url);
    format!("comment-{}", NON_ALNUM.replace_all(&encoded, ""))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last char boundary at or below `max` bytes,
/// with an ellipsis and byte count indicator appended. Server-supplied text
/// lands here, so the cut must never split a multi-byte character.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
