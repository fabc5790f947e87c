//! Shared plumbing for the menudb binaries: logging setup, session
//! construction from config, and plain-text rendering.

use std::path::PathBuf;

use menudb_core::config::{Config, SearchSettings};
use menudb_core::CategoryFilter;
use menudb_session::{MenuSession, SearchOutcome};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only carries results.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Builds the session from `catalog` if given, otherwise from `data.catalog_csv`.
pub fn open_session(config: &Config, catalog: Option<PathBuf>) -> anyhow::Result<(MenuSession, SearchSettings)> {
    let settings = config.search_settings()?;
    let path = match catalog {
        Some(p) => p,
        None => config.catalog_path()?,
    };
    let session = MenuSession::from_csv_path(&path, &settings)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))?;
    Ok((session, settings))
}

/// Argument text of a REPL command when `line` starts with exactly `command`
/// as its first word. `:catalog` is not `:cat`.
pub fn command_arg<'a>(line: &'a str, command: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(command)?;
    match rest.chars().next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

pub fn render_outcome(query: &str, filter: CategoryFilter, outcome: &SearchOutcome<'_>) {
    match outcome {
        SearchOutcome::Matches { results } => {
            println!("\nResults for: '{}' (Category: {})", query, filter);
            for result in results {
                println!("\n  - {} ({})", result.item.name, result.item.category);
                println!("    {}", result.item.description);
                println!("    score: {:.2}", result.score);
            }
        }
        SearchOutcome::NoMatches { suggestions } => {
            println!("\n❌ No matching results.");
            if suggestions.is_empty() {
                println!("No similar words found.");
            } else {
                println!("🔁 Did you mean:");
                for s in suggestions { println!("  - {}", s); }
            }
        }
    }
}

pub fn render_popular(popular: &[(String, usize)]) {
    if popular.is_empty() {
        println!("No search history yet.");
        return;
    }
    println!("\n📈 Most popular searches:");
    for (query, count) in popular { println!("  🔍 {} - {} times", query, count); }
}
