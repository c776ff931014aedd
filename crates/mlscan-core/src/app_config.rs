use std::path::PathBuf;

/// Listing host queried when `MLSCAN_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://lista.mercadolivre.com.br";

/// Page limit used when neither the caller nor the environment sets one.
pub const DEFAULT_MAX_PAGES: usize = 3;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Scheme + host of the listing site, without a trailing slash.
    pub base_url: String,
    pub searches_path: PathBuf,
    pub scraper_request_timeout_secs: u64,
    pub scraper_connect_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Fixed pause before every page request. `0` disables pacing.
    pub scraper_page_delay_ms: u64,
    /// Always at least 1.
    pub scraper_max_pages: usize,
}
