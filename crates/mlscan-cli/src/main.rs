mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mlscan")]
#[command(about = "Scrape product listings from marketplace search results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search and print the listings that survive the keyword filter
    Search {
        /// Free search text, e.g. "iphone 16 pro"
        term: String,

        /// Drop listings whose title contains this text (repeatable)
        #[arg(long = "exclude", short = 'x')]
        exclude: Vec<String>,

        /// Maximum number of result pages to fetch (defaults to MLSCAN_SCRAPER_MAX_PAGES)
        #[arg(long)]
        pages: Option<usize>,

        /// Print records as JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Run every saved search from a YAML file, one after another
    Batch {
        /// Saved searches file (defaults to MLSCAN_SEARCHES_PATH)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print records as JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = mlscan_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            term,
            exclude,
            pages,
            json,
        } => search::run_search(&config, &term, &exclude, pages, json).await,
        Commands::Batch { file, json } => {
            let path = file.unwrap_or_else(|| config.searches_path.clone());
            search::run_batch(&config, &path, json).await
        }
    }
}

#[cfg(test)]
mod tests;
