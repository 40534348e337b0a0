//! HTTP client for the news backend.
//!
//! The backend exposes a small REST surface:
//!
//! - `GET /api/news` and `GET /api/news/refresh` — AI feed
//! - `GET /api/news/stock-market` and `.../refresh` — stock market feed
//! - `POST /api/news/comments` — save a comment, JSON `{articleUrl, comment}`
//! - `GET /api/news/comments?url=…` — read a saved comment (plain text)
//! - `DELETE /api/news/comments?url=…` — delete a comment
//!
//! # Architecture
//!
//! The module uses a trait-based design so the controller never depends on a
//! live server:
//! - [`NewsSource`]: fetching article collections
//! - [`CommentTransport`]: comment persistence calls
//! - [`NewsApi`]: the `reqwest`-backed implementation of both
//!
//! There is deliberately no retry layer. Every failed call is terminal for
//! that user action; the reader re-triggers manually.

use std::error::Error;
use std::time::Instant;

use reqwest::Client;
use tracing::{info, instrument, warn};
use url::Url;

use crate::models::{Article, CommentRequest, NewsFeed};
use crate::utils::truncate_for_log;

/// Trait for fetching a feed's article collection.
pub trait NewsSource {
    /// Fetch the current articles for `feed`, optionally forcing the backend
    /// to refresh its own cache.
    async fn fetch_news(
        &self,
        feed: NewsFeed,
        force_refresh: bool,
    ) -> Result<Vec<Article>, Box<dyn Error>>;
}

/// Trait for the comment persistence calls.
pub trait CommentTransport {
    /// Persist `comment` for the article at `article_url`. Exactly one POST.
    async fn save_comment(&self, article_url: &str, comment: &str) -> Result<(), Box<dyn Error>>;

    /// Delete the stored comment for `article_url`.
    async fn delete_comment(&self, article_url: &str) -> Result<(), Box<dyn Error>>;

    /// Read the stored comment for `article_url` (empty string when none).
    async fn get_comment(&self, article_url: &str) -> Result<String, Box<dyn Error>>;
}

/// `reqwest`-backed client for the news backend.
#[derive(Debug, Clone)]
pub struct NewsApi {
    base: Url,
    http: Client,
}

impl NewsApi {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self, Box<dyn Error>> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Box<dyn Error>> {
        Ok(self.base.join(path)?)
    }

    fn comments_endpoint(&self, article_url: &str) -> Result<Url, Box<dyn Error>> {
        let mut url = self.endpoint("/api/news/comments")?;
        url.query_pairs_mut().append_pair("url", article_url);
        Ok(url)
    }
}

impl NewsSource for NewsApi {
    #[instrument(level = "info", skip(self))]
    async fn fetch_news(
        &self,
        feed: NewsFeed,
        force_refresh: bool,
    ) -> Result<Vec<Article>, Box<dyn Error>> {
        let url = self.endpoint(feed.endpoint_path(force_refresh))?;
        let t0 = Instant::now();

        let response = self.http.get(url.clone()).send().await?.error_for_status()?;
        let articles: Vec<Article> = response.json().await?;

        info!(
            %url,
            count = articles.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Fetched news feed"
        );
        Ok(articles)
    }
}

impl CommentTransport for NewsApi {
    #[instrument(level = "info", skip(self, comment))]
    async fn save_comment(&self, article_url: &str, comment: &str) -> Result<(), Box<dyn Error>> {
        let url = self.endpoint("/api/news/comments")?;
        let body = CommentRequest {
            article_url: article_url.to_string(),
            comment: comment.to_string(),
        };

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let ack = response.text().await.unwrap_or_default();
        info!(article_url, ack = %truncate_for_log(&ack, 120), "Saved comment");
        Ok(())
    }

    #[instrument(level = "info", skip(self))]
    async fn delete_comment(&self, article_url: &str) -> Result<(), Box<dyn Error>> {
        let url = self.comments_endpoint(article_url)?;
        self.http.delete(url).send().await?.error_for_status()?;
        info!(article_url, "Deleted comment");
        Ok(())
    }

    #[instrument(level = "info", skip(self))]
    async fn get_comment(&self, article_url: &str) -> Result<String, Box<dyn Error>> {
        let url = self.comments_endpoint(article_url)?;
        let response = self.http.get(url).send().await?;
        if let Err(e) = response.error_for_status_ref() {
            warn!(article_url, error = %e, "Comment read failed");
            return Err(e.into());
        }
        Ok(response.text().await?)
    }
}
