pub mod app_config;
pub mod config;
pub mod query;
pub mod searches;

pub use app_config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
pub use config::{load_app_config, load_app_config_from_env};
pub use query::{normalize_search_term, ProductRecord, SearchQuery};
pub use searches::{load_searches, SavedSearch, SearchesFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read searches file {path}: {source}")]
    SearchesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse searches file: {0}")]
    SearchesFileParse(#[source] serde_yaml::Error),

    #[error("searches validation failed: {0}")]
    Validation(String),
}
