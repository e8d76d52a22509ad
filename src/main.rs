use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use coinlist::client::HttpCoinFetcher;
use coinlist::coin::FilterCriterion;
use coinlist::config::Config;
use coinlist::listing::{ListingHandle, ListingStore, StatePublisher, ViewState};
use coinlist::logging::init_tracing;
use coinlist::ui::render::{render_alert, render_state};
use coinlist::ui::{spawn_stdin_reader, Alert, InteractiveApp};

#[derive(Debug, Parser)]
#[command(name = "coinlist", version, about = "Browse and filter a cryptocurrency feed")]
struct Cli {
    /// Config file path (default: ~/.config/coinlist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the feed URL from config
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Initial search text, matched case-sensitively against name and symbol
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Initial filter: active, new, coin, inactive or token (repeatable)
    #[arg(long = "filter", value_name = "FILTER")]
    filters: Vec<FilterCriterion>,

    /// Load once, print the listing and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = &cli.url {
        config.feed.url = url.clone();
        config.validate()?;
    }

    tracing::info!(url = %config.feed.url, once = cli.once, "Starting coinlist");

    let fetcher = HttpCoinFetcher::from_config(&config.feed)?;
    let publisher = StatePublisher::new(config.listing.channel_capacity);
    let handle = ListingStore::spawn(Arc::new(fetcher), publisher);

    if let Some(text) = &cli.search {
        handle.set_search_text(text.clone())?;
    }
    if !cli.filters.is_empty() {
        handle.set_filters(cli.filters.iter().copied().collect())?;
    }

    if cli.once {
        return run_once(&handle).await;
    }

    let app = InteractiveApp::new(handle.clone());
    handle.load()?;
    let mut stdout = tokio::io::stdout();
    app.run(spawn_stdin_reader(), &mut stdout).await
}

async fn run_once(handle: &ListingHandle) -> anyhow::Result<()> {
    match handle.load_and_wait().await? {
        ViewState::Failed(error) => Err(error.into()),
        state => {
            println!("{}", render_state(&state));
            let snapshot = handle.snapshot().await?;
            if let Some(alert) = Alert::for_state(&state, &snapshot) {
                eprintln!("{}", render_alert(&alert));
            }
            Ok(())
        }
    }
}
