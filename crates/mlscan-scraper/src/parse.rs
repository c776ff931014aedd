//! Product-card extraction from a search results page.
//!
//! The results page renders each listing as a `div.poly-card`. Inside it the
//! title sits in a heading tagged `poly-component__title-wrapper` and the
//! integer part of the price in a `span.andes-money-amount__fraction`. The
//! price span normally lives under a `.poly-price__current` wrapper, but older
//! layouts put it directly on the card, so both are accepted.

use std::sync::LazyLock;

use mlscan_core::{ProductRecord, SearchQuery};
use scraper::{ElementRef, Html, Selector};

static CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.poly-card").expect("valid card selector"));
static TITLE_WRAPPER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h2.poly-component__title-wrapper, h3.poly-component__title-wrapper")
        .expect("valid title selector")
});
static TITLE_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".poly-component__title").expect("valid title selector"));
static CURRENT_PRICE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".poly-price__current span.andes-money-amount__fraction")
        .expect("valid price selector")
});

const PRICE_FRACTION_CLASS: &str = "andes-money-amount__fraction";

/// Result of extracting one results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtract {
    /// Records that passed the negative-keyword filter, in document order.
    pub records: Vec<ProductRecord>,
    /// Cards with both a title and a price, filtered or not. This is the
    /// count the site paginates by.
    pub candidates_seen: usize,
}

/// Extracts product records from one results page.
///
/// Cards missing a title or a price are skipped and not counted. Cards whose
/// title matches a negative keyword are counted but not returned.
#[must_use]
pub fn extract_listings(html: &str, query: &SearchQuery) -> PageExtract {
    let document = Html::parse_document(html);
    let mut extract = PageExtract::default();

    for (index, card) in document.select(&CARD_SELECTOR).enumerate() {
        let Some(title_el) = find_title(card) else {
            tracing::debug!(card = index, "skipping card without title");
            continue;
        };
        let Some(price_el) = find_price(card) else {
            tracing::debug!(card = index, "skipping card without price");
            continue;
        };

        let title = visible_text(title_el).to_lowercase();
        let price = price_text(price_el);
        extract.candidates_seen += 1;

        if query.excludes(&title) {
            tracing::debug!(card = index, title = %title, "card excluded by negative keyword");
            continue;
        }

        extract.records.push(ProductRecord { title, price });
    }

    extract
}

fn find_title(card: ElementRef<'_>) -> Option<ElementRef<'_>> {
    card.select(&TITLE_WRAPPER_SELECTOR)
        .next()
        .or_else(|| card.select(&TITLE_LINK_SELECTOR).next())
}

/// Current-price span first, then a fraction span that is a direct child of
/// the card.
fn find_price(card: ElementRef<'_>) -> Option<ElementRef<'_>> {
    card.select(&CURRENT_PRICE_SELECTOR).next().or_else(|| {
        card.children().filter_map(ElementRef::wrap).find(|el| {
            el.value().name() == "span"
                && el.value().classes().any(|class| class == PRICE_FRACTION_CLASS)
        })
    })
}

/// Text content with runs of whitespace collapsed to one space and the ends
/// trimmed.
///
/// Adjacent text nodes are always separated by a space, so markup such as
/// `iPhone<b>16</b>Pro` reads `iPhone 16 Pro` rather than `iPhone16Pro`.
fn visible_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Price fragments are concatenated without separators so `"1"`, `"."`,
/// `"234"` in separate nodes still read `"1.234"`.
fn price_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
