use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ScraperError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ScraperError::NotFound { .. } => Some(404),
            ScraperError::UnexpectedStatus { status, .. } => Some(*status),
            ScraperError::Http(e) => e.status().map(|s| s.as_u16()),
            ScraperError::InvalidBaseUrl { .. } => None,
        }
    }

    /// `true` when the listing site answered 404, which it does once a page
    /// offset runs past the last result.
    #[must_use]
    pub fn is_end_of_results(&self) -> bool {
        matches!(self, ScraperError::NotFound { .. })
    }
}
