//! Bookdeck TUI - terminal viewer for the Gutendex book catalog

mod app;
mod event;
mod ui;

use anyhow::{Context, Result};
use bookdeck_core::{BookRepository, Favorites};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate the page size argument (must be at least 1)
fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookdeck")]
#[command(author, version, about = "Browse the Gutendex book catalog from the terminal", long_about = None)]
struct Cli {
    /// Listing endpoint the catalog is fetched from
    #[arg(long, env = "BOOKDECK_ENDPOINT", default_value = bookdeck_core::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Directory holding persisted favorites and the log file
    #[arg(long, env = "BOOKDECK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Books per page (must be at least 1)
    #[arg(long, default_value = "10", value_parser = parse_page_size)]
    page_size: usize,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Platform data directory, with a local fallback
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "bookdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".bookdeck"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    // Logs go to a file so they never tear the drawn surface
    let log_file = std::fs::File::create(data_dir.join("bookdeck.log"))
        .with_context(|| format!("Failed to create log file in {}", data_dir.display()))?;

    let filter = if cli.verbose {
        "bookdeck_tui=debug,bookdeck_core=debug"
    } else {
        "bookdeck_tui=info,bookdeck_core=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    let favorites = Favorites::load(data_dir.join("favorites.json"));
    let repository = BookRepository::new(cli.endpoint);

    let terminal = ratatui::init();
    let result = event::run(terminal, repository, favorites, cli.page_size).await;
    ratatui::restore();
    result
}
