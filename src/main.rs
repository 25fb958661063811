//! Interactive demo over stdin.
//!
//! Each line read from stdin is turned into a controller input:
//!
//! - plain text → search text event (repeats are suppressed by the controller)
//! - `+` or `:more` → load-more trigger
//! - `:recent` → print the recent search terms
//! - `:quit` or end of input → shut down
//!
//! Committed states and the rendered result list are printed to stdout as they
//! arrive. Logs go to stderr.

use clap::Parser;
use photosearch::controller::{Input, Output, SearchController};
use photosearch::domain::Photo;
use photosearch::observability::init_tracing;
use photosearch::ports::{CatalogSearch, RecentTermPort};
use photosearch::storage::MemoryRecentTerms;
use photosearch::ui::ResultsScreen;
use photosearch::worker::RequestExecutor;
use photosearch::{initialize, Config, PaginationState, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

#[derive(Parser, Debug)]
#[command(name = "photosearch")]
#[command(version)]
#[command(about = "Paginated photo search over an in-memory catalog")]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Photos requested per page (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: Option<u32>,

    /// Tracing filter directive (overrides the config file, not RUST_LOG)
    #[arg(long)]
    pub trace_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("photosearch: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(per_page) = args.per_page {
        config.per_page = per_page;
    }
    if let Some(level) = &args.trace_level {
        config.trace_level = Some(level.clone());
    }

    Ok(config)
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    init_tracing(&config);

    let catalog = match &config.catalog_path {
        Some(path) => CatalogSearch::from_json_file(path)?,
        None => CatalogSearch::sample(),
    };
    tracing::info!(photos = catalog.len(), per_page = config.per_page, "catalog ready");

    let recent = Arc::new(MemoryRecentTerms::new(config.recent_capacity));
    let executor = RequestExecutor::new(Arc::new(catalog), recent.clone());

    let (sender, input) = Input::channel();
    let Output {
        pagination_state,
        results,
        task,
        ..
    } = SearchController::new(executor, initialize(&config)).transform(input);

    let printer = spawn_printer(pagination_state, results);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" => break,
            "+" | ":more" => sender.load_more()?,
            ":recent" => print_recent(recent.as_ref()).await,
            _ => sender.search_text(line.as_str())?,
        }
    }

    drop(sender);
    match task.await {
        Ok(state) => tracing::debug!(state = %state, "controller finished"),
        Err(e) => tracing::error!(error = %e, "controller task failed"),
    }
    if let Err(e) = printer.await {
        tracing::error!(error = %e, "printer task failed");
    }

    Ok(())
}

fn spawn_printer(
    mut states: tokio::sync::mpsc::UnboundedReceiver<PaginationState>,
    mut results: tokio::sync::mpsc::UnboundedReceiver<Vec<Photo>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut screen = ResultsScreen::new();

        loop {
            tokio::select! {
                biased;
                Some(next) = states.recv() => {
                    println!("state: {next}");
                    screen.apply_state(next);
                }
                Some(photos) = results.recv() => print!("{}", screen.apply_results(photos)),
                else => break,
            }
        }
    })
}

async fn print_recent(recent: &dyn RecentTermPort) {
    match recent.recent_items().await {
        Ok(items) if items.is_empty() => println!("no recent searches"),
        Ok(items) => {
            for item in items {
                println!("  {}", item.name);
            }
        }
        Err(e) => tracing::warn!(error = %e, "could not list recent searches"),
    }
}
