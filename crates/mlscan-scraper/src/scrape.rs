//! Fetch/extract loop over consecutive result pages for one search.

use mlscan_core::{ProductRecord, SearchQuery};

use crate::client::ListingClient;
use crate::error::ScraperError;
use crate::pagination::{PageTarget, SearchUrls};
use crate::parse::extract_listings;

/// Where a run is, or where it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Ready,
    Fetching,
    Parsing,
    Advancing,
    /// The site answered 404: the offset ran past the last result.
    Stopped,
    /// The page limit was reached without an end-of-results signal.
    Completed,
    Failed,
}

/// What a successful [`ListingScraper::run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Records kept during this run, in page order then card order.
    pub records: Vec<ProductRecord>,
    /// Pages fetched with a 2xx response.
    pub pages_fetched: usize,
    /// Cumulative candidate cards across those pages.
    pub candidates_seen: usize,
    /// Either [`RunState::Stopped`] or [`RunState::Completed`].
    pub state: RunState,
}

/// Scrapes the result pages of one search through an owned [`ListingClient`].
///
/// Records from every successful run are appended to an accumulator that
/// lives as long as the scraper and is exposed through [`Self::records`].
pub struct ListingScraper {
    client: ListingClient,
    urls: SearchUrls,
    query: SearchQuery,
    records: Vec<ProductRecord>,
}

impl ListingScraper {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute `http`/`https` URL.
    pub fn new(
        client: ListingClient,
        base_url: &str,
        query: SearchQuery,
    ) -> Result<Self, ScraperError> {
        let urls = SearchUrls::new(base_url, &query)?;
        Ok(Self {
            client,
            urls,
            query,
            records: Vec::new(),
        })
    }

    /// Every record kept by successful runs so far.
    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Fetches up to `max_pages` result pages (at least one), starting from
    /// the first page, and stops early when the site answers 404.
    ///
    /// **All-or-nothing semantics**: if any fetch fails with anything other
    /// than 404, the records gathered so far in this run are dropped, nothing
    /// is added to [`Self::records`], and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any [`ScraperError`] from [`ListingClient::fetch_page`]
    /// except [`ScraperError::NotFound`].
    pub async fn run(&mut self, max_pages: usize) -> Result<RunOutcome, ScraperError> {
        let max_pages = max_pages.max(1);
        let mut run_records: Vec<ProductRecord> = Vec::new();
        let mut offset = 0usize;
        let mut pages_fetched = 0usize;
        let mut target: PageTarget = self.urls.first();
        let mut state = RunState::Ready;

        tracing::info!(term = self.query.term(), max_pages, "starting listing run");

        for page in 1..=max_pages {
            state = transition(state, RunState::Fetching, page);
            let html = match self.client.fetch_page(&target).await {
                Ok(html) => html,
                Err(e) if e.is_end_of_results() => {
                    state = transition(state, RunState::Stopped, page);
                    tracing::info!(
                        term = self.query.term(),
                        page,
                        offset,
                        "no more result pages"
                    );
                    break;
                }
                Err(e) => {
                    transition(state, RunState::Failed, page);
                    tracing::warn!(
                        term = self.query.term(),
                        page,
                        url = target.url(),
                        error = %e,
                        "listing run failed"
                    );
                    return Err(e);
                }
            };
            pages_fetched += 1;

            state = transition(state, RunState::Parsing, page);
            let extract = extract_listings(&html, &self.query);
            tracing::debug!(
                page,
                candidates = extract.candidates_seen,
                kept = extract.records.len(),
                "page parsed"
            );
            run_records.extend(extract.records);
            offset += extract.candidates_seen;

            state = transition(state, RunState::Advancing, page);
            target = self.urls.after(offset);
        }

        if state == RunState::Advancing {
            state = transition(state, RunState::Completed, max_pages);
        }

        tracing::info!(
            term = self.query.term(),
            pages_fetched,
            candidates = offset,
            kept = run_records.len(),
            "listing run finished"
        );

        self.records.extend(run_records.iter().cloned());
        Ok(RunOutcome {
            records: run_records,
            pages_fetched,
            candidates_seen: offset,
            state,
        })
    }
}

fn transition(from: RunState, to: RunState, page: usize) -> RunState {
    tracing::trace!(?from, ?to, page, "run state change");
    to
}
