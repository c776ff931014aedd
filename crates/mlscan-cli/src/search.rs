//! `search` and `batch` command handlers.
//!
//! Each search gets its own `ListingClient` and `ListingScraper`. In a batch,
//! a failed search is reported and skipped so the remaining searches still run;
//! the command fails at the end if any search did.

use std::io::Write;
use std::path::Path;

use mlscan_core::{AppConfig, ProductRecord, SearchQuery};
use mlscan_scraper::{ListingClient, ListingScraper};

pub(crate) fn build_listing_client(config: &AppConfig) -> anyhow::Result<ListingClient> {
    ListingClient::new(
        config.scraper_request_timeout_secs,
        config.scraper_connect_timeout_secs,
        &config.scraper_user_agent,
        config.scraper_page_delay_ms,
    )
    .map_err(|e| anyhow::anyhow!("failed to build listing client: {e}"))
}

/// Runs one search to completion and returns the kept records.
async fn scrape(
    config: &AppConfig,
    query: SearchQuery,
    max_pages: Option<usize>,
) -> anyhow::Result<Vec<ProductRecord>> {
    let client = build_listing_client(config)?;
    let mut scraper = ListingScraper::new(client, &config.base_url, query)?;
    let outcome = scraper
        .run(max_pages.unwrap_or(config.scraper_max_pages))
        .await?;
    Ok(outcome.records)
}

/// Handles `mlscan search`.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the run fails with
/// anything other than end-of-results, or stdout cannot be written.
pub(crate) async fn run_search(
    config: &AppConfig,
    term: &str,
    exclude: &[String],
    pages: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let query = SearchQuery::new(term, exclude);
    let records = scrape(config, query, pages).await?;

    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
    } else {
        write_records(&mut out, &records)?;
    }
    Ok(())
}

/// Handles `mlscan batch`.
///
/// # Errors
///
/// Returns an error if the searches file is invalid, stdout cannot be
/// written, or at least one search failed.
pub(crate) async fn run_batch(config: &AppConfig, path: &Path, json: bool) -> anyhow::Result<()> {
    let searches = mlscan_core::load_searches(path)?.searches;
    tracing::info!(path = %path.display(), count = searches.len(), "loaded saved searches");

    let mut failed = 0usize;

    for search in &searches {
        let records = match scrape(config, search.to_query(), search.max_pages).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(term = %search.term, error = %e, "search failed");
                eprintln!("error: search '{}' failed: {e:#}", search.term);
                failed += 1;
                continue;
            }
        };

        write_batch_entry(&mut std::io::stdout().lock(), &search.term, &records, json)?;
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} searches failed", searches.len());
    }
    Ok(())
}

/// Writes one saved search's results: a JSON object line, or a `# term`
/// header followed by the record lines.
fn write_batch_entry<W: Write>(
    out: &mut W,
    term: &str,
    records: &[ProductRecord],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let entry = serde_json::json!({ "term": term, "records": records });
        serde_json::to_writer(&mut *out, &entry)?;
        writeln!(out)?;
    } else {
        writeln!(out, "# {term} ({} listings)", records.len())?;
        write_records(out, records)?;
    }
    Ok(())
}

fn write_records<W: Write>(out: &mut W, records: &[ProductRecord]) -> std::io::Result<()> {
    for record in records {
        writeln!(out, "Title: {}, Price: {}", record.title, record.price)?;
    }
    Ok(())
}
