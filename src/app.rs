//! The view-state controller.
//!
//! [`App`] owns everything the page knows: the article collection, the active
//! feed and category filter, the per-article comment editors, transient
//! feedback notes, and the loading/error flags. Interactions arrive as
//! [`UiEvent`] values and flow through one pipeline:
//!
//! ```text
//! event -> fetch/filter/comment mutation -> page_view() -> render_page()
//! ```
//!
//! # Overlapping fetches
//!
//! Fetches are split into [`App::begin_fetch`] and [`App::apply_fetch`] with a
//! generation counter. A response whose generation is older than the latest
//! issued request is discarded wholesale, so a slow response can never
//! overwrite articles that came from a newer request. The loading flag clears
//! exactly when the newest outstanding request is applied, success or failure.

use std::collections::HashMap;
use std::error::Error;

use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;
use tracing::{error, info, warn};

use crate::api::{CommentTransport, NewsSource};
use crate::models::{ALL_CATEGORY, AppState, Article, NewsFeed};
use crate::render::cards::{CardView, FeedbackView};
use crate::render::page::{BodyView, PageView, TabView};
use crate::utils::comment_editor_id;

/// Error panel copy for a failed feed fetch.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load news. Please try again later.";

/// How long a transient feedback note stays visible.
pub const FEEDBACK_TTL_SECS: i64 = 3;

/// Confirmation hook for destructive actions (clearing a comment).
///
/// The binary wires this to a terminal prompt; tests use canned answers.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// A user interaction, as delivered by the host event loop.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Top-level tab click: switch feeds and reload.
    SwitchFeed(NewsFeed),
    /// Refresh click; `force` selects the backend's `/refresh` variant.
    Refresh { force: bool },
    /// Category tab click.
    SelectCategory(String),
    /// The reader typed into a comment editor.
    EditComment { comment_id: String, text: String },
    /// Save button on one card.
    SaveComment {
        article_url: String,
        comment_id: String,
    },
    /// Clear button on one card.
    ClearComment {
        article_url: String,
        comment_id: String,
    },
    /// Re-read one comment from the backend into its editor.
    ReloadComment {
        article_url: String,
        comment_id: String,
    },
}

/// One in-flight fetch, returned by [`App::begin_fetch`].
#[derive(Debug)]
pub struct FetchRequest {
    generation: u64,
    pub feed: NewsFeed,
    pub force_refresh: bool,
}

/// Live buffer backing one card's comment textarea.
#[derive(Debug, Clone)]
pub struct CommentEditor {
    pub article_url: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedbackKind {
    Saved,
    Failed,
}

impl FeedbackKind {
    fn class(self) -> &'static str {
        match self {
            FeedbackKind::Saved => "saved",
            FeedbackKind::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone)]
struct Feedback {
    comment_id: String,
    kind: FeedbackKind,
    message: String,
    expires_at: DateTime<Utc>,
}

/// The page controller. One instance per session.
pub struct App {
    pub state: AppState,
    editors: HashMap<String, CommentEditor>,
    feedback: Vec<Feedback>,
    generation: u64,
    loading: bool,
    error: Option<String>,
}

impl App {
    pub fn new(feed: NewsFeed) -> Self {
        Self {
            state: AppState::new(feed),
            editors: HashMap::new(),
            feedback: Vec::new(),
            generation: 0,
            loading: false,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ---- News fetch controller ----

    /// Start a fetch for the current feed.
    ///
    /// Bumps the request generation, raises the loading flag, and resets the
    /// category filter to "All" (every load starts unfiltered).
    pub fn begin_fetch(&mut self, force_refresh: bool) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.state.selected_category = ALL_CATEGORY.to_string();
        info!(
            generation = self.generation,
            feed = %self.state.current_feed,
            force_refresh,
            "Fetch started"
        );
        FetchRequest {
            generation: self.generation,
            feed: self.state.current_feed,
            force_refresh,
        }
    }

    /// Apply the outcome of a fetch started with [`App::begin_fetch`].
    ///
    /// Stale responses (a newer request has been issued since) are discarded.
    /// Returns whether the response was applied.
    pub fn apply_fetch(
        &mut self,
        request: FetchRequest,
        result: Result<Vec<Article>, Box<dyn Error>>,
    ) -> bool {
        if request.generation != self.generation {
            warn!(
                generation = request.generation,
                latest = self.generation,
                feed = %request.feed,
                "Discarding stale fetch response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(articles) => {
                info!(count = articles.len(), feed = %request.feed, "Fetch applied");
                self.seed_editors(&articles);
                self.state.current_articles = articles;
                self.error = None;
            }
            Err(e) => {
                // Prior articles stay in state; the error panel only replaces
                // the rendered list.
                error!(feed = %request.feed, error = %e, "Fetch failed");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Begin, perform, and apply a fetch in one step.
    pub async fn fetch_now<S: NewsSource>(&mut self, api: &S, force_refresh: bool) {
        let request = self.begin_fetch(force_refresh);
        let result = api.fetch_news(request.feed, request.force_refresh).await;
        self.apply_fetch(request, result);
    }

    fn seed_editors(&mut self, articles: &[Article]) {
        self.editors.clear();
        for article in articles {
            if article.url.is_empty() {
                continue;
            }
            self.editors.insert(
                comment_editor_id(&article.url),
                CommentEditor {
                    article_url: article.url.clone(),
                    text: article.comments.clone().unwrap_or_default(),
                },
            );
        }
    }

    // ---- Category tab controller ----

    /// The category tab row: "All" first, then distinct effective categories
    /// in first-seen order, the selected one flagged active.
    pub fn category_tabs(&self) -> Vec<TabView> {
        std::iter::once(ALL_CATEGORY)
            .chain(
                self.state
                    .current_articles
                    .iter()
                    .map(|a| a.effective_category())
                    .unique(),
            )
            .map(|label| TabView {
                label: label.to_string(),
                active: label == self.state.selected_category,
            })
            .collect()
    }

    pub fn select_category(&mut self, category: &str) {
        self.state.selected_category = category.to_string();
    }

    /// Articles passing the active category filter, in feed order.
    pub fn filtered_articles(&self) -> Vec<&Article> {
        if self.state.selected_category == ALL_CATEGORY {
            self.state.current_articles.iter().collect()
        } else {
            self.state
                .current_articles
                .iter()
                .filter(|a| a.effective_category() == self.state.selected_category)
                .collect()
        }
    }

    // ---- Comment controller ----

    pub fn editor_text(&self, comment_id: &str) -> Option<&str> {
        self.editors.get(comment_id).map(|e| e.text.as_str())
    }

    pub fn set_editor_text(&mut self, comment_id: &str, text: String) {
        if let Some(editor) = self.editors.get_mut(comment_id) {
            editor.text = text;
        } else {
            warn!(comment_id, "Edit for unknown comment editor ignored");
        }
    }

    /// Save one article's comment: exactly one POST of the editor's trimmed
    /// current value. Failures surface as transient feedback, never as errors.
    pub async fn save_comment<T: CommentTransport>(
        &mut self,
        api: &T,
        article_url: &str,
        comment_id: &str,
    ) {
        let Some(editor) = self.editors.get(comment_id) else {
            warn!(comment_id, "Save for unknown comment editor ignored");
            return;
        };
        let comment = editor.text.trim().to_string();

        match api.save_comment(article_url, &comment).await {
            Ok(()) => {
                info!(article_url, comment_id, "Comment saved");
                self.push_feedback(comment_id, FeedbackKind::Saved, "Comment saved");
            }
            Err(e) => {
                error!(article_url, comment_id, error = %e, "Comment save failed");
                self.push_feedback(comment_id, FeedbackKind::Failed, "Failed to save comment");
            }
        }
    }

    /// Clear one article's comment.
    ///
    /// No-op when the editor is already empty (zero network calls, no
    /// prompt). Otherwise asks for confirmation, deletes on the backend, and
    /// clears the editor only after the delete succeeds, so a failed delete
    /// leaves the text in place for a manual retry.
    pub async fn clear_comment<T: CommentTransport, P: ConfirmPrompt>(
        &mut self,
        api: &T,
        prompt: &P,
        article_url: &str,
        comment_id: &str,
    ) {
        let Some(editor) = self.editors.get(comment_id) else {
            warn!(comment_id, "Clear for unknown comment editor ignored");
            return;
        };
        if editor.text.trim().is_empty() {
            return;
        }
        if !prompt.confirm("Clear this comment?") {
            info!(article_url, comment_id, "Comment clear cancelled");
            return;
        }

        match api.delete_comment(article_url).await {
            Ok(()) => {
                if let Some(editor) = self.editors.get_mut(comment_id) {
                    editor.text.clear();
                }
                info!(article_url, comment_id, "Comment cleared");
                self.push_feedback(comment_id, FeedbackKind::Saved, "Comment cleared");
            }
            Err(e) => {
                error!(article_url, comment_id, error = %e, "Comment delete failed");
                self.push_feedback(comment_id, FeedbackKind::Failed, "Failed to clear comment");
            }
        }
    }

    /// Re-read one comment from the backend into its editor.
    pub async fn reload_comment<T: CommentTransport>(
        &mut self,
        api: &T,
        article_url: &str,
        comment_id: &str,
    ) {
        match api.get_comment(article_url).await {
            Ok(comment) => {
                self.set_editor_text(comment_id, comment);
                info!(article_url, comment_id, "Comment reloaded");
            }
            Err(e) => {
                error!(article_url, comment_id, error = %e, "Comment reload failed");
                self.push_feedback(comment_id, FeedbackKind::Failed, "Failed to load comment");
            }
        }
    }

    fn push_feedback(&mut self, comment_id: &str, kind: FeedbackKind, message: &str) {
        self.feedback.push(Feedback {
            comment_id: comment_id.to_string(),
            kind,
            message: message.to_string(),
            expires_at: Utc::now() + Duration::seconds(FEEDBACK_TTL_SECS),
        });
    }

    /// Drop feedback notes past their display window.
    pub fn prune_feedback(&mut self, now: DateTime<Utc>) {
        self.feedback.retain(|f| f.expires_at > now);
    }

    // ---- Event dispatch & rendering ----

    /// Dispatch one interaction through the pipeline.
    pub async fn handle<A, P>(&mut self, api: &A, prompt: &P, event: UiEvent)
    where
        A: NewsSource + CommentTransport,
        P: ConfirmPrompt,
    {
        match event {
            UiEvent::SwitchFeed(feed) => {
                self.state.current_feed = feed;
                self.fetch_now(api, false).await;
            }
            UiEvent::Refresh { force } => self.fetch_now(api, force).await,
            UiEvent::SelectCategory(category) => self.select_category(&category),
            UiEvent::EditComment { comment_id, text } => self.set_editor_text(&comment_id, text),
            UiEvent::SaveComment {
                article_url,
                comment_id,
            } => self.save_comment(api, &article_url, &comment_id).await,
            UiEvent::ClearComment {
                article_url,
                comment_id,
            } => {
                self.clear_comment(api, prompt, &article_url, &comment_id)
                    .await
            }
            UiEvent::ReloadComment {
                article_url,
                comment_id,
            } => self.reload_comment(api, &article_url, &comment_id).await,
        }
    }

    /// Build the page view-model for the current state.
    ///
    /// Pure apart from pruning expired feedback against `now`.
    pub fn page_view(&mut self, now: DateTime<Utc>) -> PageView {
        self.prune_feedback(now);

        let body = if let Some(message) = &self.error {
            BodyView::Error(message.clone())
        } else {
            let cards: Vec<CardView> = self
                .filtered_articles()
                .into_iter()
                .map(|article| {
                    let id = comment_editor_id(&article.url);
                    CardView::from_article(article, self.editor_text(&id), now)
                        .with_feedback(self.feedback_view(&id))
                })
                .collect();
            if cards.is_empty() {
                BodyView::Empty
            } else {
                BodyView::Cards(cards)
            }
        };

        PageView {
            feed: self.state.current_feed,
            loading: self.loading,
            category_tabs: self.category_tabs(),
            body,
        }
    }

    fn feedback_view(&self, comment_id: &str) -> Option<FeedbackView> {
        self.feedback
            .iter()
            .rev()
            .find(|f| f.comment_id == comment_id)
            .map(|f| FeedbackView {
                kind_class: f.kind.class(),
                message: f.message.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn article(url: &str, category: Option<&str>) -> Article {
        Article {
            title: format!("Story at {url}"),
            url: url.to_string(),
            category: category.map(str::to_string),
            ..Article::default()
        }
    }

    fn seeded_app(articles: Vec<Article>) -> App {
        let mut app = App::new(NewsFeed::Ai);
        let req = app.begin_fetch(false);
        app.apply_fetch(req, Ok(articles));
        app
    }

    /// Recording fake for both API traits.
    #[derive(Default)]
    struct FakeApi {
        articles: Vec<Article>,
        fail_fetch: bool,
        fail_comments: bool,
        saves: RefCell<Vec<(String, String)>>,
        deletes: RefCell<Vec<String>>,
        stored_comment: String,
    }

    impl NewsSource for FakeApi {
        async fn fetch_news(
            &self,
            _feed: NewsFeed,
            _force_refresh: bool,
        ) -> Result<Vec<Article>, Box<dyn Error>> {
            if self.fail_fetch {
                Err("boom".into())
            } else {
                Ok(self.articles.clone())
            }
        }
    }

    impl CommentTransport for FakeApi {
        async fn save_comment(
            &self,
            article_url: &str,
            comment: &str,
        ) -> Result<(), Box<dyn Error>> {
            self.saves
                .borrow_mut()
                .push((article_url.to_string(), comment.to_string()));
            if self.fail_comments {
                Err("boom".into())
            } else {
                Ok(())
            }
        }

        async fn delete_comment(&self, article_url: &str) -> Result<(), Box<dyn Error>> {
            self.deletes.borrow_mut().push(article_url.to_string());
            if self.fail_comments {
                Err("boom".into())
            } else {
                Ok(())
            }
        }

        async fn get_comment(&self, _article_url: &str) -> Result<String, Box<dyn Error>> {
            if self.fail_comments {
                Err("boom".into())
            } else {
                Ok(self.stored_comment.clone())
            }
        }
    }

    struct CannedPrompt {
        answer: bool,
        asked: RefCell<usize>,
    }

    impl CannedPrompt {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(0),
            }
        }
    }

    impl ConfirmPrompt for CannedPrompt {
        fn confirm(&self, _message: &str) -> bool {
            *self.asked.borrow_mut() += 1;
            self.answer
        }
    }

    #[test]
    fn test_category_tabs_first_seen_order_with_duplicates() {
        let app = seeded_app(vec![
            article("https://e.com/1", Some("Research")),
            article("https://e.com/2", None),
            article("https://e.com/3", Some("Markets")),
            article("https://e.com/4", Some("Research")),
            article("https://e.com/5", None),
        ]);
        let tabs = app.category_tabs();
        let labels: Vec<&str> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Research", "General", "Markets"]);
        assert!(tabs[0].active);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let app = seeded_app(vec![
            article("https://e.com/1", Some("Research")),
            article("https://e.com/2", Some("Markets")),
        ]);
        assert_eq!(app.filtered_articles().len(), 2);
    }

    #[test]
    fn test_filter_by_category_is_exact() {
        let mut app = seeded_app(vec![
            article("https://e.com/1", Some("Research")),
            article("https://e.com/2", None),
            article("https://e.com/3", Some("Markets")),
        ]);
        app.select_category("General");
        let filtered = app.filtered_articles();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].url, "https://e.com/2");

        app.select_category("Nonexistent");
        assert!(app.filtered_articles().is_empty());
    }

    #[test]
    fn test_fetch_resets_category_and_seeds_editors() {
        let mut app = seeded_app(vec![article("https://e.com/1", Some("Research"))]);
        app.select_category("Research");

        let req = app.begin_fetch(false);
        assert!(app.is_loading());
        assert_eq!(app.state.selected_category, ALL_CATEGORY);

        let mut fresh = article("https://e.com/2", None);
        fresh.comments = Some("note".to_string());
        assert!(app.apply_fetch(req, Ok(vec![fresh])));

        assert!(!app.is_loading());
        let id = comment_editor_id("https://e.com/2");
        assert_eq!(app.editor_text(&id), Some("note"));
        assert!(app.editor_text(&comment_editor_id("https://e.com/1")).is_none());
    }

    #[test]
    fn test_fetch_failure_shows_error_panel() {
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let req = app.begin_fetch(false);
        assert!(app.apply_fetch(req, Err("connection refused".into())));

        assert!(!app.is_loading());
        assert_eq!(app.error(), Some(FETCH_ERROR_MESSAGE));
        let page = app.page_view(Utc::now());
        assert!(matches!(page.body, BodyView::Error(_)));
    }

    #[test]
    fn test_fetch_failure_retains_prior_articles_and_tabs() {
        let mut app = seeded_app(vec![
            article("https://e.com/1", Some("Research")),
            article("https://e.com/2", Some("Markets")),
        ]);
        let req = app.begin_fetch(false);
        assert!(app.apply_fetch(req, Err("connection refused".into())));

        // The error panel replaces the rendered list only; state keeps the
        // previous collection, so the tab row doesn't collapse to "All".
        assert_eq!(app.state.current_articles.len(), 2);
        let tabs = app.category_tabs();
        let labels: Vec<&str> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Research", "Markets"]);

        // A subsequent successful fetch recovers the list view.
        let req = app.begin_fetch(false);
        assert!(app.apply_fetch(req, Ok(vec![article("https://e.com/3", None)])));
        assert!(app.error().is_none());
        let page = app.page_view(Utc::now());
        assert!(matches!(page.body, BodyView::Cards(_)));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut app = App::new(NewsFeed::Ai);
        let older = app.begin_fetch(false);
        let newer = app.begin_fetch(false);

        assert!(app.apply_fetch(newer, Ok(vec![article("https://e.com/new", None)])));
        assert!(!app.is_loading());

        // The older response resolves last; it must not overwrite anything.
        assert!(!app.apply_fetch(older, Ok(vec![article("https://e.com/old", None)])));
        assert_eq!(app.state.current_articles.len(), 1);
        assert_eq!(app.state.current_articles[0].url, "https://e.com/new");
        assert!(!app.is_loading());
    }

    #[test]
    fn test_stale_response_does_not_clear_loading_of_newer_request() {
        let mut app = App::new(NewsFeed::Ai);
        let older = app.begin_fetch(false);
        let _newer = app.begin_fetch(false);

        assert!(!app.apply_fetch(older, Ok(vec![])));
        assert!(app.is_loading());
    }

    #[tokio::test]
    async fn test_save_comment_posts_trimmed_value_once() {
        let api = FakeApi::default();
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");
        app.set_editor_text(&id, "  a thought  ".to_string());

        app.save_comment(&api, "https://e.com/1", &id).await;

        let saves = api.saves.borrow();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0], ("https://e.com/1".to_string(), "a thought".to_string()));

        let page = app.page_view(Utc::now());
        let BodyView::Cards(cards) = page.body else {
            panic!("expected cards");
        };
        let fb = cards[0].feedback.as_ref().unwrap();
        assert_eq!(fb.kind_class, "saved");
    }

    #[tokio::test]
    async fn test_save_comment_failure_is_terminal_feedback() {
        let api = FakeApi {
            fail_comments: true,
            ..FakeApi::default()
        };
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");
        app.set_editor_text(&id, "text".to_string());

        app.save_comment(&api, "https://e.com/1", &id).await;

        // The editor keeps its value; only a transient note appears.
        assert_eq!(app.editor_text(&id), Some("text"));
        let page = app.page_view(Utc::now());
        let BodyView::Cards(cards) = page.body else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].feedback.as_ref().unwrap().kind_class, "failed");
    }

    #[tokio::test]
    async fn test_clear_comment_noop_when_empty() {
        let api = FakeApi::default();
        let prompt = CannedPrompt::new(true);
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");

        app.clear_comment(&api, &prompt, "https://e.com/1", &id).await;

        assert!(api.deletes.borrow().is_empty());
        assert_eq!(*prompt.asked.borrow(), 0);
    }

    #[tokio::test]
    async fn test_clear_comment_declined() {
        let api = FakeApi::default();
        let prompt = CannedPrompt::new(false);
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");
        app.set_editor_text(&id, "keep me".to_string());

        app.clear_comment(&api, &prompt, "https://e.com/1", &id).await;

        assert_eq!(*prompt.asked.borrow(), 1);
        assert!(api.deletes.borrow().is_empty());
        assert_eq!(app.editor_text(&id), Some("keep me"));
    }

    #[tokio::test]
    async fn test_clear_comment_clears_after_confirmed_success() {
        let api = FakeApi::default();
        let prompt = CannedPrompt::new(true);
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");
        app.set_editor_text(&id, "obsolete".to_string());

        app.clear_comment(&api, &prompt, "https://e.com/1", &id).await;

        assert_eq!(api.deletes.borrow().as_slice(), ["https://e.com/1"]);
        assert_eq!(app.editor_text(&id), Some(""));
    }

    #[tokio::test]
    async fn test_clear_comment_failure_retains_text() {
        let api = FakeApi {
            fail_comments: true,
            ..FakeApi::default()
        };
        let prompt = CannedPrompt::new(true);
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");
        app.set_editor_text(&id, "still here".to_string());

        app.clear_comment(&api, &prompt, "https://e.com/1", &id).await;

        assert_eq!(app.editor_text(&id), Some("still here"));
    }

    #[tokio::test]
    async fn test_reload_comment_refills_editor() {
        let api = FakeApi {
            stored_comment: "from server".to_string(),
            ..FakeApi::default()
        };
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");
        app.set_editor_text(&id, "local draft".to_string());

        app.reload_comment(&api, "https://e.com/1", &id).await;
        assert_eq!(app.editor_text(&id), Some("from server"));
    }

    #[tokio::test]
    async fn test_switch_feed_resets_category_and_refetches() {
        let api = FakeApi {
            articles: vec![article("https://e.com/s", Some("Markets"))],
            ..FakeApi::default()
        };
        let prompt = CannedPrompt::new(true);
        let mut app = seeded_app(vec![article("https://e.com/1", Some("Research"))]);
        app.select_category("Research");

        app.handle(&api, &prompt, UiEvent::SwitchFeed(NewsFeed::StockMarket))
            .await;

        assert_eq!(app.state.current_feed, NewsFeed::StockMarket);
        assert_eq!(app.state.selected_category, ALL_CATEGORY);
        assert_eq!(app.state.current_articles[0].url, "https://e.com/s");
    }

    #[test]
    fn test_feedback_pruning() {
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let id = comment_editor_id("https://e.com/1");
        app.push_feedback(&id, FeedbackKind::Saved, "Comment saved");

        assert!(app.feedback_view(&id).is_some());
        app.prune_feedback(Utc::now() + Duration::seconds(FEEDBACK_TTL_SECS + 1));
        assert!(app.feedback_view(&id).is_none());
    }

    #[test]
    fn test_page_view_empty_state_for_empty_filter() {
        let mut app = seeded_app(vec![article("https://e.com/1", Some("Research"))]);
        app.select_category("Markets");
        let page = app.page_view(Utc::now());
        assert!(matches!(page.body, BodyView::Empty));
    }

    #[test]
    fn test_page_view_while_loading() {
        let mut app = seeded_app(vec![article("https://e.com/1", None)]);
        let _req = app.begin_fetch(false);
        let page = app.page_view(Utc::now());
        assert!(page.loading);
    }
}
