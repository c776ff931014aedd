//! Offset-based pagination for the listing site's search results.
//!
//! The site addresses result pages by the 1-based index of the first listing
//! on the page, embedded in the path rather than the query string.
//!
//! ## Path format
//!
//! First page:
//! ```text
//! https://lista.mercadolivre.com.br/iphone-16-pro_NoIndex_True
//! ```
//!
//! Any later page, after 48 listings have been seen:
//! ```text
//! https://lista.mercadolivre.com.br/iphone-16-pro_Desde_49_NoIndex_True
//! ```
//!
//! The term is a single path segment. Characters that would end or split it
//! (`#`, `?`, `/`) and anything outside ASCII are percent-encoded; `_` is
//! encoded too so the term cannot collide with the `_Desde_` suffix.

use mlscan_core::SearchQuery;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ScraperError;

/// Bytes escaped in the term segment: everything but alphanumerics, the `-`
/// word separator and `.`.
const TERM_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.');

/// Address of one results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    url: String,
    offset: Option<usize>,
}

impl PageTarget {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The 1-based listing index the page starts at, as encoded in the URL.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.offset.map_or(1, |offset| offset + 1)
    }
}

/// Builds [`PageTarget`]s for one search against one listing host.
#[derive(Debug, Clone)]
pub struct SearchUrls {
    base_url: String,
    term: String,
}

impl SearchUrls {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute `http`/`https` URL.
    pub fn new(base_url: &str, query: &SearchQuery) -> Result<Self, ScraperError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ScraperError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: trimmed.to_owned(),
            term: utf8_percent_encode(query.term(), TERM_SEGMENT).to_string(),
        })
    }

    /// Target for the first results page.
    #[must_use]
    pub fn first(&self) -> PageTarget {
        PageTarget {
            url: format!("{}/{}_NoIndex_True", self.base_url, self.term),
            offset: None,
        }
    }

    /// Target for the page that follows `offset` already-seen listings.
    #[must_use]
    pub fn after(&self, offset: usize) -> PageTarget {
        PageTarget {
            url: format!(
                "{}/{}_Desde_{}_NoIndex_True",
                self.base_url,
                self.term,
                offset + 1
            ),
            offset: Some(offset),
        }
    }
}
