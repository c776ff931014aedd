use serde::{Deserialize, Serialize};

/// Separator the listing site uses between words of a search slug.
const TERM_SEPARATOR: &str = "-";

/// Normalizes free search text into the listing site's URL slug form:
/// surrounding whitespace trimmed, lowercased, every space replaced by `-`.
///
/// `"iPhone 16 Pro"` becomes `"iphone-16-pro"`.
#[must_use]
pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', TERM_SEPARATOR)
}

/// An immutable search: the normalized term plus the negative keywords whose
/// presence in a title disqualifies a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    negative_keywords: Vec<String>,
}

impl SearchQuery {
    /// Builds a query from raw search text and raw negative keywords.
    ///
    /// Keywords are trimmed and lowercased; blank keywords are dropped, since an
    /// empty substring would match every title.
    #[must_use]
    pub fn new<I, S>(raw_term: &str, negative_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let negative_keywords = negative_keywords
            .into_iter()
            .map(|kw| kw.as_ref().trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
            .collect();

        Self {
            term: normalize_search_term(raw_term),
            negative_keywords,
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn negative_keywords(&self) -> &[String] {
        &self.negative_keywords
    }

    /// Returns `true` if `title` contains any negative keyword, ignoring case.
    #[must_use]
    pub fn excludes(&self, title: &str) -> bool {
        if self.negative_keywords.is_empty() {
            return false;
        }
        let title = title.to_lowercase();
        self.negative_keywords
            .iter()
            .any(|kw| title.contains(kw.as_str()))
    }
}

/// One product listing as shown on a results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Visible card title, trimmed and lowercased.
    pub title: String,
    /// Price text exactly as displayed, trimmed, e.g. `"7.999"`. No currency
    /// or thousands-separator handling.
    pub price: String,
}
