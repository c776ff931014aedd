use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::query::{normalize_search_term, SearchQuery};
use crate::ConfigError;

/// One entry of the saved-searches file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub term: String,
    #[serde(default)]
    pub negative_keywords: Vec<String>,
    /// Overrides the configured page limit for this search.
    pub max_pages: Option<usize>,
}

impl SavedSearch {
    #[must_use]
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(&self.term, &self.negative_keywords)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchesFile {
    pub searches: Vec<SavedSearch>,
}

/// Load and validate saved searches from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_searches(path: &Path) -> Result<SearchesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SearchesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_searches(&content)
}

fn parse_searches(content: &str) -> Result<SearchesFile, ConfigError> {
    let searches_file: SearchesFile =
        serde_yaml::from_str(content).map_err(ConfigError::SearchesFileParse)?;

    validate_searches(&searches_file)?;

    Ok(searches_file)
}

fn validate_searches(searches_file: &SearchesFile) -> Result<(), ConfigError> {
    let mut seen_terms = HashSet::new();

    for search in &searches_file.searches {
        if search.term.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search term must be non-empty".to_string(),
            ));
        }

        if search.max_pages == Some(0) {
            return Err(ConfigError::Validation(format!(
                "search '{}' has max_pages 0; must be at least 1",
                search.term
            )));
        }

        let term = normalize_search_term(&search.term);
        if !seen_terms.insert(term.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate search term: '{}' (normalized to '{term}')",
                search.term
            )));
        }
    }

    Ok(())
}
