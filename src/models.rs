//! Data models for the news client.
//!
//! This module defines the core data structures shared across the application:
//! - [`Article`]: One news article as delivered by the backend feed endpoints
//! - [`NewsFeed`]: The two feeds the backend serves (AI and stock market)
//! - [`AppState`]: The view state owned by the controller for one page session
//! - [`CommentRequest`]: JSON body for persisting a per-article comment
//!
//! The backend serializes its fields in camelCase, hence the
//! `#[serde(rename_all = "camelCase")]` attributes on the wire types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category tab that disables filtering.
pub const ALL_CATEGORY: &str = "All";

/// Fallback category for articles the backend ships without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A news article as returned by the feed endpoints.
///
/// Every field is optional on the wire except `title` and `url`; in practice
/// the backend omits or nulls fields freely, so the renderer treats absence,
/// the literal string `"null"`, and blank strings as equivalent where it
/// matters (images, links).
///
/// Articles are transient: each fetch replaces the previous collection
/// wholesale and nothing is retained across sessions.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// Canonical article URL; also the key under which comments are stored.
    pub url: String,
    /// Publishing outlet name.
    pub source: Option<String>,
    /// Backend-assigned classification label, e.g. "Research" or "Markets".
    pub category: Option<String>,
    /// Short summary produced by the backend.
    pub summary: Option<String>,
    /// Longer description; used when `summary` is absent.
    pub description: Option<String>,
    /// Byline. The backend uses the literal "Unknown" when it has none.
    pub author: Option<String>,
    /// Lead image URL, if any.
    pub url_to_image: Option<String>,
    /// Publication timestamp, RFC 3339 or the backend's naive
    /// `YYYY-MM-DDTHH:MM:SS` shape.
    pub published_at: Option<String>,
    /// The reader's saved comment for this article, if any.
    pub comments: Option<String>,
}

impl Article {
    /// The category used for filtering and display.
    ///
    /// Missing or empty categories collapse to [`DEFAULT_CATEGORY`].
    pub fn effective_category(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Summary text for the card body: `summary`, else `description`,
    /// else a fixed placeholder.
    pub fn effective_summary(&self) -> &str {
        match self.summary.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => match self.description.as_deref() {
                Some(d) if !d.is_empty() => d,
                _ => "No summary available",
            },
        }
    }

    /// Outlet name for the card meta line.
    pub fn display_source(&self) -> &str {
        match self.source.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "Unknown Source",
        }
    }
}

/// The two article feeds the backend serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsFeed {
    /// AI development and industry news. The initial feed.
    #[default]
    Ai,
    /// Indian stock market news.
    StockMarket,
}

impl NewsFeed {
    /// Endpoint path for this feed, relative to the API base URL.
    ///
    /// `force_refresh` selects the `/refresh` variant that makes the backend
    /// bypass its own cache.
    pub fn endpoint_path(self, force_refresh: bool) -> &'static str {
        match (self, force_refresh) {
            (NewsFeed::Ai, false) => "/api/news",
            (NewsFeed::Ai, true) => "/api/news/refresh",
            (NewsFeed::StockMarket, false) => "/api/news/stock-market",
            (NewsFeed::StockMarket, true) => "/api/news/stock-market/refresh",
        }
    }

    /// Page header title for this feed.
    pub fn title(self) -> &'static str {
        match self {
            NewsFeed::Ai => "\u{1F916} AI News",
            NewsFeed::StockMarket => "\u{1F4C8} Indian Stock Market",
        }
    }

    /// Page header subtitle for this feed.
    pub fn subtitle(self) -> &'static str {
        match self {
            NewsFeed::Ai => "Latest AI Development & Industry News",
            NewsFeed::StockMarket => "Latest Stock Market News & Updates",
        }
    }

    /// Text shown by the loading indicator while this feed is in flight.
    pub fn loading_message(self) -> &'static str {
        match self {
            NewsFeed::Ai => "Loading latest AI news...",
            NewsFeed::StockMarket => "Loading latest stock market news...",
        }
    }

    /// Stable identifier used in markup (`data-news-type`) and CLI commands.
    pub fn slug(self) -> &'static str {
        match self {
            NewsFeed::Ai => "ai",
            NewsFeed::StockMarket => "stock-market",
        }
    }
}

impl fmt::Display for NewsFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for NewsFeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(NewsFeed::Ai),
            "stock-market" | "stock" => Ok(NewsFeed::StockMarket),
            other => Err(format!(
                "unknown feed '{other}' (expected 'ai' or 'stock-market')"
            )),
        }
    }
}

/// View state for one page session.
///
/// The article collection is replaced wholesale on every fetch; the selected
/// category resets to [`ALL_CATEGORY`] on every fetch and feed switch.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Articles from the most recently applied fetch, in backend order.
    pub current_articles: Vec<Article>,
    /// Active category filter.
    pub selected_category: String,
    /// The feed the next fetch will target.
    pub current_feed: NewsFeed,
}

impl AppState {
    pub fn new(feed: NewsFeed) -> Self {
        Self {
            current_articles: Vec::new(),
            selected_category: ALL_CATEGORY.to_string(),
            current_feed: feed,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NewsFeed::default())
    }
}

/// JSON body for `POST /api/news/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    /// URL of the article the comment belongs to.
    pub article_url: String,
    /// The comment text, already trimmed by the caller.
    pub comment: String,
}
