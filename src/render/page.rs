//! Page-level markup: header, feed tabs, category tabs, article list.

use crate::models::NewsFeed;
use crate::render::cards::{CardView, render_card};
use crate::render::escape::escape_html;

/// One category tab button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub label: String,
    pub active: bool,
}

/// What fills the article container.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Fetch failed; the panel replaces the article list.
    Error(String),
    /// No articles match the current filter.
    Empty,
    Cards(Vec<CardView>),
}

/// The whole page, ready to serialize.
#[derive(Debug, Clone)]
pub struct PageView {
    pub feed: NewsFeed,
    pub loading: bool,
    pub category_tabs: Vec<TabView>,
    pub body: BodyView,
}

pub fn render_header(feed: NewsFeed) -> String {
    format!(
        "<header class=\"page-header\">\n\
         <h1 id=\"mainTitle\">{}</h1>\n\
         <p id=\"mainSubtitle\">{}</p>\n\
         </header>\n",
        escape_html(feed.title()),
        escape_html(feed.subtitle())
    )
}

pub fn render_top_tabs(active: NewsFeed) -> String {
    let tab = |feed: NewsFeed, label: &str| {
        format!(
            "<button class=\"top-tab{}\" data-news-type=\"{}\">{}</button>\n",
            if feed == active { " active" } else { "" },
            feed.slug(),
            escape_html(label)
        )
    };
    format!(
        "<nav class=\"top-tabs\">\n{}{}</nav>\n",
        tab(NewsFeed::Ai, "AI News"),
        tab(NewsFeed::StockMarket, "Stock Market")
    )
}

pub fn render_category_tabs(tabs: &[TabView]) -> String {
    let buttons: String = tabs
        .iter()
        .map(|tab| {
            format!(
                "<button class=\"category-tab{}\" data-category=\"{}\">{}</button>\n",
                if tab.active { " active" } else { "" },
                escape_html(&tab.label),
                escape_html(&tab.label)
            )
        })
        .collect();
    format!("<nav id=\"categoryTabs\" class=\"category-tabs\">\n{buttons}</nav>\n")
}

/// Render the article container: error panel, empty state, or the cards.
///
/// While a fetch is in flight the container is cleared, matching the page's
/// behavior of blanking the list as soon as a load starts.
pub fn render_article_list(body: &BodyView) -> String {
    let inner = match body {
        BodyView::Error(message) => format!(
            "<div class=\"error-message\">\n<p>{}</p>\n</div>\n",
            escape_html(message)
        ),
        BodyView::Empty => "<div class=\"empty-state\">\n\
             <p>No news articles found in this category. Try selecting a different category.</p>\n\
             </div>\n"
            .to_string(),
        BodyView::Cards(cards) => cards.iter().map(render_card).collect(),
    };
    format!("<div id=\"newsContainer\" class=\"news-container\">\n{inner}</div>\n")
}

fn render_loading(page: &PageView) -> String {
    if page.loading {
        format!(
            "<div id=\"loading\" class=\"loading\">{}</div>\n",
            escape_html(page.feed.loading_message())
        )
    } else {
        String::new()
    }
}

/// Assemble the full page document.
pub fn render_page(page: &PageView) -> String {
    let body = if page.loading {
        // Container is blanked for the duration of a fetch.
        render_article_list(&BodyView::Cards(Vec::new()))
    } else {
        render_article_list(&page.body)
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n\
         {}{}{}{}{}\
         </body>\n</html>\n",
        escape_html(page.feed.title()),
        render_header(page.feed),
        render_top_tabs(page.feed),
        render_category_tabs(&page.category_tabs),
        render_loading(page),
        body,
    )
}
