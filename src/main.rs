//! # AI News Reader
//!
//! Terminal client for a news backend serving two feeds (AI and stock
//! market). The client fetches article collections, filters them by category,
//! renders the page to an HTML file after every interaction, and persists
//! per-article comments through the backend's comment endpoints.
//!
//! ## Usage
//!
//! ```sh
//! ainews_reader --api-base-url http://localhost:8080 -o ./ainews.html
//! ```
//!
//! Then drive it with line commands (`help` lists them): switch feeds, filter
//! by category, edit/save/clear comments. Open the output file in a browser
//! to see the rendered page.
//!
//! ## Architecture
//!
//! One controller ([`app::App`]) owns all view state. Every interaction runs
//! the same pipeline: event -> state mutation (fetch/filter/comment) ->
//! view-model -> markup -> file. Network calls go through trait seams
//! ([`api::NewsSource`], [`api::CommentTransport`]) so the pipeline is
//! testable without a server.

use std::error::Error;
use std::io::{self, BufRead, Write};

use chrono::Utc;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod app;
mod cli;
mod models;
mod render;
mod utils;

use api::NewsApi;
use app::{App, ConfirmPrompt, UiEvent};
use cli::{Cli, Command, HELP_TEXT, parse_command};
use models::NewsFeed;
use render::page::render_page;

/// Confirmation prompt backed by the terminal.
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

/// Resolve the filtered article list into `(url, editor id)` rows for
/// index-based commands.
fn comment_targets(app: &App) -> Vec<(String, String)> {
    app.filtered_articles()
        .iter()
        .map(|a| (a.url.clone(), utils::comment_editor_id(&a.url)))
        .collect()
}

fn show_articles(app: &App) {
    let articles = app.filtered_articles();
    if articles.is_empty() {
        println!("(no articles in this category)");
        return;
    }
    for (i, article) in articles.iter().enumerate() {
        let id = utils::comment_editor_id(&article.url);
        let has_comment = app
            .editor_text(&id)
            .is_some_and(|t| !t.trim().is_empty());
        println!(
            "{:>3}. [{}] {}{}",
            i + 1,
            article.effective_category(),
            article.title,
            if has_comment { "  (*)" } else { "" }
        );
    }
}

/// Map an index-based command onto a `UiEvent`, or report why it can't be.
fn resolve_event(app: &App, command: Command) -> Option<UiEvent> {
    let indexed = |index: usize| -> Option<(String, String)> {
        let targets = comment_targets(app);
        match targets.into_iter().nth(index - 1) {
            Some(target) => Some(target),
            None => {
                println!("no article #{index} in the current list (see 'show')");
                None
            }
        }
    };

    match command {
        Command::Feed(feed) => Some(UiEvent::SwitchFeed(feed)),
        Command::Refresh { force } => Some(UiEvent::Refresh { force }),
        Command::Category(name) => Some(UiEvent::SelectCategory(name)),
        Command::Edit { index, text } => {
            let (_, comment_id) = indexed(index)?;
            Some(UiEvent::EditComment { comment_id, text })
        }
        Command::Save { index } => {
            let (article_url, comment_id) = indexed(index)?;
            Some(UiEvent::SaveComment {
                article_url,
                comment_id,
            })
        }
        Command::Clear { index } => {
            let (article_url, comment_id) = indexed(index)?;
            Some(UiEvent::ClearComment {
                article_url,
                comment_id,
            })
        }
        Command::Reload { index } => {
            let (article_url, comment_id) = indexed(index)?;
            Some(UiEvent::ReloadComment {
                article_url,
                comment_id,
            })
        }
        Command::Show | Command::Help | Command::Quit => None,
    }
}

async fn write_page(app: &mut App, path: &str) -> Result<(), Box<dyn Error>> {
    let html = render_page(&app.page_view(Utc::now()));
    tokio::fs::write(path, html).await?;
    debug!(path, "Wrote page");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args.api_base_url, ?args.output, ?args.feed, "Parsed CLI arguments");

    let feed: NewsFeed = args.feed.parse().map_err(|e: String| -> Box<dyn Error> {
        error!(feed = %args.feed, error = %e, "Invalid --feed value");
        e.into()
    })?;

    let api = NewsApi::new(&args.api_base_url)?;
    let mut app = App::new(feed);
    let prompt = StdinConfirm;

    info!(api_base_url = %args.api_base_url, %feed, "ainews_reader starting up");

    // Initial load, mirrored straight to the output file.
    app.fetch_now(&api, false).await;
    write_page(&mut app, &args.output).await?;
    if let Some(message) = app.error() {
        warn!(message, "Initial fetch failed");
    }
    println!("Loaded {} feed; page written to {}", feed, args.output);
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                print!("{HELP_TEXT}");
                continue;
            }
            Command::Show => {
                show_articles(&app);
                continue;
            }
            other => {
                if let Some(event) = resolve_event(&app, other) {
                    app.handle(&api, &prompt, event).await;
                    write_page(&mut app, &args.output).await?;
                    if let Some(message) = app.error() {
                        println!("{message}");
                    }
                }
            }
        }
    }

    info!("ainews_reader exiting");
    Ok(())
}
