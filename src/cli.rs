//! Command-line interface: startup flags and the interactive command grammar.
//!
//! Startup options use the `clap` crate and can also come from environment
//! variables. Once running, the binary reads one command per line from stdin
//! and turns it into a [`Command`], which `main` resolves into a `UiEvent`.

use clap::Parser;

use crate::models::NewsFeed;

/// Command-line arguments for the news reader.
///
/// # Examples
///
/// ```sh
/// # Talk to a local backend, write the page next to the binary
/// ainews_reader
///
/// # Explicit backend and output path, start on the stock market feed
/// ainews_reader --api-base-url http://news.example:8080 -o /tmp/news.html --feed stock-market
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news backend
    #[arg(long, env = "AINEWS_API_URL", default_value = "http://localhost:8080")]
    pub api_base_url: String,

    /// Path the rendered HTML page is written to after every interaction
    #[arg(short, long, default_value = "./ainews.html")]
    pub output: String,

    /// Feed to load on startup: "ai" or "stock-market"
    #[arg(long, default_value = "ai")]
    pub feed: String,
}

/// One interactive command. Article indices are 1-based positions in the
/// currently filtered list (as printed by `show`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `feed ai` / `feed stock-market`
    Feed(NewsFeed),
    /// `refresh` (or `refresh force` for the backend's forced variant)
    Refresh { force: bool },
    /// `category <name>` — filter by category
    Category(String),
    /// `edit <n> <text>` — replace the comment editor buffer for article n
    Edit { index: usize, text: String },
    /// `save <n>` — persist article n's comment
    Save { index: usize },
    /// `clear <n>` — clear article n's comment (asks for confirmation)
    Clear { index: usize },
    /// `comment <n>` — re-read article n's comment from the backend
    Reload { index: usize },
    /// `show` — list the filtered articles with their indices
    Show,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Parse one line of interactive input.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match head {
        "feed" => rest
            .parse::<NewsFeed>()
            .map(Command::Feed)
            .map_err(|e| format!("feed: {e}")),
        "refresh" => match rest {
            "" => Ok(Command::Refresh { force: false }),
            "force" => Ok(Command::Refresh { force: true }),
            other => Err(format!("refresh: unexpected argument '{other}'")),
        },
        "category" | "cat" => {
            if rest.is_empty() {
                Err("category: missing category name".to_string())
            } else {
                Ok(Command::Category(rest.to_string()))
            }
        }
        "edit" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let index = parse_index("edit", args.next().unwrap_or(""))?;
            let text = args.next().unwrap_or("").trim().to_string();
            Ok(Command::Edit { index, text })
        }
        "save" => Ok(Command::Save {
            index: parse_index("save", rest)?,
        }),
        "clear" => Ok(Command::Clear {
            index: parse_index("clear", rest)?,
        }),
        "comment" => Ok(Command::Reload {
            index: parse_index("comment", rest)?,
        }),
        "show" | "ls" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err("empty command (try 'help')".to_string()),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn parse_index(command: &str, raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("{command}: expected an article number >= 1")),
    }
}

/// Usage text for the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  feed ai | feed stock-market   switch feeds
  refresh [force]               reload the current feed
  category <name>               filter by category ('All' disables)
  show                          list filtered articles with indices
  edit <n> <text>               set article n's comment editor text
  save <n>                      save article n's comment
  clear <n>                     clear article n's comment (confirms first)
  comment <n>                   re-read article n's comment from the backend
  quit                          exit
";
