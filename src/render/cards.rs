//! Per-article card view-model and markup.
//!
//! [`CardView::from_article`] applies every display rule (date label, author
//! omission, image and link validation, category defaulting) to produce a
//! plain data structure; [`render_card`] then serializes it. Tests exercise
//! the rules on the view-model without ever touching markup.

use chrono::{DateTime, Utc};

use crate::models::Article;
use crate::render::dates::format_published;
use crate::render::escape::escape_html;
use crate::utils::comment_editor_id;

/// The link slot at the bottom of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkView {
    /// A syntactically validated `http(s)` URL, rendered as a live anchor.
    /// The href is inserted unescaped; validation already constrains it.
    Live(String),
    /// Anything else: blank, the literal `"null"`, or a non-http scheme.
    /// Rendered as a disabled placeholder carrying the raw value as text.
    Unavailable { raw: String },
}

/// Classify an article URL for the card's link slot.
///
/// A link is live iff the URL is non-blank, not the literal string `"null"`,
/// and starts with `http://` or `https://`.
pub fn link_view(url: &str) -> LinkView {
    let trimmed = url.trim();
    if !trimmed.is_empty()
        && trimmed != "null"
        && (trimmed.starts_with("http://") || trimmed.starts_with("https://"))
    {
        LinkView::Live(trimmed.to_string())
    } else {
        LinkView::Unavailable {
            raw: url.to_string(),
        }
    }
}

/// The image URL to render, if any.
///
/// `None` when `urlToImage` is absent, the literal `"null"`, or blank after
/// trimming.
pub fn image_source(article: &Article) -> Option<&str> {
    article
        .url_to_image
        .as_deref()
        .filter(|src| *src != "null" && !src.trim().is_empty())
}

/// Transient status note rendered next to a comment editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    /// CSS class token, `"saved"` or `"failed"`.
    pub kind_class: &'static str,
    pub message: String,
}

/// The per-article comment editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEditorView {
    /// Deterministic element identifier derived from the article URL.
    pub id: String,
    pub article_url: String,
    /// Current editor contents (saved comment until the reader edits it).
    pub text: String,
}

/// Everything needed to render one article card.
#[derive(Debug, Clone)]
pub struct CardView {
    pub title: String,
    pub source: String,
    pub summary: String,
    pub date_label: String,
    /// `None` when the byline is absent or the literal "Unknown".
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    /// Lowercase CSS class token for the category badge.
    pub category_class: String,
    pub link: LinkView,
    pub comment: CommentEditorView,
    pub feedback: Option<FeedbackView>,
}

impl CardView {
    /// Build the view-model for one article.
    ///
    /// `editor_text` is the live editor buffer when the controller has one;
    /// otherwise the editor is seeded from the article's saved comment.
    pub fn from_article(article: &Article, editor_text: Option<&str>, now: DateTime<Utc>) -> Self {
        let category = article.effective_category().to_string();
        let text = editor_text
            .map(str::to_string)
            .or_else(|| article.comments.clone())
            .unwrap_or_default();

        Self {
            title: article.title.clone(),
            source: article.display_source().to_string(),
            summary: article.effective_summary().to_string(),
            date_label: format_published(article.published_at.as_deref(), now),
            author: article
                .author
                .as_deref()
                .filter(|a| !a.is_empty() && *a != "Unknown")
                .map(str::to_string),
            image_url: image_source(article).map(str::to_string),
            category_class: category.to_lowercase(),
            category,
            link: link_view(&article.url),
            comment: CommentEditorView {
                id: comment_editor_id(&article.url),
                article_url: article.url.clone(),
                text,
            },
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: Option<FeedbackView>) -> Self {
        self.feedback = feedback;
        self
    }
}

/// Serialize one card to markup.
///
/// All free text goes through [`escape_html`]; the single exception is a
/// [`LinkView::Live`] href, which is already validated.
pub fn render_card(card: &CardView) -> String {
    let image = match &card.image_url {
        Some(src) => format!(
            "<img src=\"{}\" alt=\"{}\" class=\"news-image\">\n",
            escape_html(src),
            escape_html(&card.title)
        ),
        None => String::new(),
    };

    let author = match &card.author {
        Some(author) => format!(
            "<div class=\"news-author\">By {}</div>\n",
            escape_html(author)
        ),
        None => String::new(),
    };

    let link = match &card.link {
        LinkView::Live(href) => format!(
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" \
             class=\"news-link\">Read Full Article \u{2192}</a>"
        ),
        LinkView::Unavailable { raw } => format!(
            "<span class=\"news-link news-link-disabled\" title=\"{}\">Link not available</span>",
            escape_html(raw)
        ),
    };

    let feedback = match &card.feedback {
        Some(fb) => format!(
            "<div class=\"comment-feedback {}\">{}</div>\n",
            fb.kind_class,
            escape_html(&fb.message)
        ),
        None => String::new(),
    };

    format!(
        "<div class=\"news-card\">\n\
         {image}\
         <span class=\"news-category {category_class}\">{category}</span>\n\
         <div class=\"news-header\">\n\
         <h2 class=\"news-title\">{title}</h2>\n\
         <div class=\"news-meta\">\n\
         <span class=\"news-source\">{source}</span>\n\
         <span class=\"news-date\">{date}</span>\n\
         </div>\n\
         </div>\n\
         <div class=\"news-summary\">{summary}</div>\n\
         {author}\
         {link}\n\
         <div class=\"comment-section\">\n\
         <textarea id=\"{cid}\" class=\"comment-input\" \
         placeholder=\"Add your notes about this article...\">{ctext}</textarea>\n\
         <div class=\"comment-actions\">\n\
         <button class=\"comment-save\" data-article-url=\"{curl}\" data-comment-id=\"{cid}\">Save</button>\n\
         <button class=\"comment-clear\" data-article-url=\"{curl}\" data-comment-id=\"{cid}\">Clear</button>\n\
         </div>\n\
         {feedback}\
         </div>\n\
         </div>\n",
        image = image,
        category_class = escape_html(&card.category_class),
        category = escape_html(&card.category),
        title = escape_html(&card.title),
        source = escape_html(&card.source),
        date = escape_html(&card.date_label),
        summary = escape_html(&card.summary),
        author = author,
        link = link,
        cid = card.comment.id,
        ctext = escape_html(&card.comment.text),
        curl = escape_html(&card.comment.article_url),
        feedback = feedback,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    fn article() -> Article {
        Article {
            title: "Model beats benchmark".to_string(),
            url: "https://example.com/story".to_string(),
            source: Some("Example Wire".to_string()),
            category: Some("Research".to_string()),
            summary: Some("Short summary.".to_string()),
            author: Some("Jane Writer".to_string()),
            url_to_image: Some("https://example.com/img.png".to_string()),
            published_at: Some("2026-08-25T10:00:00".to_string()),
            comments: Some("saved note".to_string()),
            ..Article::default()
        }
    }

    #[test]
    fn test_image_omitted_for_null_and_blank() {
        let mut a = article();
        assert_eq!(image_source(&a), Some("https://example.com/img.png"));

        a.url_to_image = Some("null".to_string());
        assert_eq!(image_source(&a), None);

        a.url_to_image = Some("   ".to_string());
        assert_eq!(image_source(&a), None);

        a.url_to_image = None;
        assert_eq!(image_source(&a), None);
    }

    #[test]
    fn test_link_live_only_for_http_schemes() {
        assert_eq!(
            link_view("https://example.com/a"),
            LinkView::Live("https://example.com/a".to_string())
        );
        assert_eq!(
            link_view("http://example.com/a"),
            LinkView::Live("http://example.com/a".to_string())
        );
        assert!(matches!(link_view(""), LinkView::Unavailable { .. }));
        assert!(matches!(link_view("   "), LinkView::Unavailable { .. }));
        assert!(matches!(link_view("null"), LinkView::Unavailable { .. }));
        assert!(matches!(
            link_view("javascript:alert(1)"),
            LinkView::Unavailable { .. }
        ));
        assert!(matches!(
            link_view("ftp://example.com"),
            LinkView::Unavailable { .. }
        ));
    }

    #[test]
    fn test_card_view_defaults_category() {
        let mut a = article();
        a.category = None;
        let card = CardView::from_article(&a, None, now());
        assert_eq!(card.category, "General");
        assert_eq!(card.category_class, "general");
    }

    #[test]
    fn test_card_view_omits_unknown_author() {
        let mut a = article();
        a.author = Some("Unknown".to_string());
        assert!(CardView::from_article(&a, None, now()).author.is_none());

        a.author = None;
        assert!(CardView::from_article(&a, None, now()).author.is_none());

        a.author = Some("Jane Writer".to_string());
        assert_eq!(
            CardView::from_article(&a, None, now()).author.as_deref(),
            Some("Jane Writer")
        );
    }

    #[test]
    fn test_card_view_date_label() {
        let card = CardView::from_article(&article(), None, now());
        assert_eq!(card.date_label, "2 hours ago");

        let mut a = article();
        a.published_at = None;
        let card = CardView::from_article(&a, None, now());
        assert_eq!(card.date_label, "Date not available");
    }

    #[test]
    fn test_editor_prefill_prefers_live_buffer() {
        let a = article();
        let card = CardView::from_article(&a, None, now());
        assert_eq!(card.comment.text, "saved note");

        let card = CardView::from_article(&a, Some("edited"), now());
        assert_eq!(card.comment.text, "edited");
    }

    #[test]
    fn test_render_card_escapes_free_text() {
        let mut a = article();
        a.title = "<b>Bold & brash</b>".to_string();
        let html = render_card(&CardView::from_article(&a, None, now()));
        assert!(html.contains("&lt;b&gt;Bold &amp; brash&lt;/b&gt;"));
        assert!(!html.contains("<b>Bold"));
    }

    #[test]
    fn test_render_card_live_href_unescaped() {
        let mut a = article();
        a.url = "https://example.com/a?x=1&y=2".to_string();
        let html = render_card(&CardView::from_article(&a, None, now()));
        assert!(html.contains("href=\"https://example.com/a?x=1&y=2\""));
    }

    #[test]
    fn test_render_card_placeholder_for_bad_link() {
        let mut a = article();
        a.url = "null".to_string();
        let html = render_card(&CardView::from_article(&a, None, now()));
        assert!(html.contains("Link not available"));
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn test_render_card_editor_wiring() {
        let a = article();
        let id = comment_editor_id(&a.url);
        let html = render_card(&CardView::from_article(&a, None, now()));
        assert!(html.contains(&format!("id=\"{id}\"")));
        assert!(html.contains(&format!("data-comment-id=\"{id}\"")));
        assert!(html.contains("data-article-url=\"https://example.com/story\""));
        // No inline handler names in generated markup.
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_render_card_feedback_block() {
        let card = CardView::from_article(&article(), None, now()).with_feedback(Some(
            FeedbackView {
                kind_class: "saved",
                message: "Comment saved".to_string(),
            },
        ));
        let html = render_card(&card);
        assert!(html.contains("comment-feedback saved"));
        assert!(html.contains("Comment saved"));
    }
}
