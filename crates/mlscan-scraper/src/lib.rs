pub mod client;
pub mod error;
pub mod pagination;
pub mod parse;
pub mod scrape;

pub use client::ListingClient;
pub use error::ScraperError;
pub use pagination::{PageTarget, SearchUrls};
pub use parse::{extract_listings, PageExtract};
pub use scrape::{ListingScraper, RunOutcome, RunState};
