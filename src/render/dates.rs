//! Relative date labels for article cards.
//!
//! Timestamps arrive either as RFC 3339 or as the backend's naive
//! `YYYY-MM-DDTHH:MM:SS` shape (no offset, treated as UTC). The label buckets
//! match what readers expect from a news page: "Just now", minutes, hours,
//! days, then a calendar date once the article is a week old.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Label used when `publishedAt` is missing or unparseable.
pub const DATE_NOT_AVAILABLE: &str = "Date not available";

/// Format an article timestamp relative to `now`.
///
/// Buckets:
/// - under 1 minute: `"Just now"` (future timestamps clamp here too)
/// - under 60 minutes: `"N minute(s) ago"`
/// - under 24 hours: `"N hour(s) ago"`
/// - under 7 days: `"N day(s) ago"`
/// - otherwise: `"Mon D, YYYY"`
///
/// Missing or unparseable input degrades to [`DATE_NOT_AVAILABLE`]; parse
/// failures are never surfaced as errors.
pub fn format_published(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = raw else {
        return DATE_NOT_AVAILABLE.to_string();
    };
    let Some(published) = parse_timestamp(raw) else {
        return DATE_NOT_AVAILABLE.to_string();
    };

    let elapsed = now.signed_duration_since(published);
    let mins = elapsed.num_minutes().max(0);
    let hours = elapsed.num_hours().max(0);
    let days = elapsed.num_days().max(0);

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{} minute{} ago", mins, plural(mins))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        published.format("%b %-d, %Y").to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}

/// Parse a timestamp string, trying RFC 3339 first and the backend's naive
/// `LocalDateTime` shape second.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
