use crate::app_config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("MLSCAN_LOG_LEVEL", "info");
    let base_url = or_default("MLSCAN_BASE_URL", DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    if base_url.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "MLSCAN_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    let searches_path = PathBuf::from(or_default(
        "MLSCAN_SEARCHES_PATH",
        "./config/searches.yaml",
    ));

    let scraper_request_timeout_secs = parse_u64("MLSCAN_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_connect_timeout_secs = parse_u64("MLSCAN_SCRAPER_CONNECT_TIMEOUT_SECS", "10")?;
    let scraper_user_agent = or_default(
        "MLSCAN_SCRAPER_USER_AGENT",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
    );
    let scraper_page_delay_ms = parse_u64("MLSCAN_SCRAPER_PAGE_DELAY_MS", "1000")?;
    let scraper_max_pages = parse_usize(
        "MLSCAN_SCRAPER_MAX_PAGES",
        &DEFAULT_MAX_PAGES.to_string(),
    )?
    .max(1);

    Ok(AppConfig {
        log_level,
        base_url,
        searches_path,
        scraper_request_timeout_secs,
        scraper_connect_timeout_secs,
        scraper_user_agent,
        scraper_page_delay_ms,
        scraper_max_pages,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
