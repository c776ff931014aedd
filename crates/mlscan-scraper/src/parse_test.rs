use super::*;

/// A card in the current layout: price under `.poly-price__current`.
fn card(title: &str, price: &str) -> String {
    format!(
        r#"<div class="poly-card poly-card--list">
  <div class="poly-card__content">
    <h3 class="poly-component__title-wrapper"><a class="poly-component__title" href="/p/1">{title}</a></h3>
    <div class="poly-component__price">
      <s class="andes-money-amount andes-money-amount--previous"><span class="andes-money-amount__fraction">99.999</span></s>
      <div class="poly-price__current">
        <span class="andes-money-amount"><span class="andes-money-amount__currency-symbol">R$</span><span class="andes-money-amount__fraction"> {price} </span></span>
      </div>
    </div>
  </div>
</div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!(
        "<html><body><ol class=\"ui-search-layout\">{}</ol></body></html>",
        cards.concat()
    )
}

fn query(negatives: &[&str]) -> SearchQuery {
    SearchQuery::new("iphone 16 pro", negatives)
}

#[test]
fn filters_negative_keyword_but_counts_the_card() {
    let html = page(&[
        card("iPhone 16 Pro", "7.999"),
        card("iPhone 16 Pro Max", "9.999"),
    ]);
    let extract = extract_listings(&html, &query(&["max"]));

    assert_eq!(
        extract.records,
        vec![ProductRecord {
            title: "iphone 16 pro".to_string(),
            price: "7.999".to_string(),
        }]
    );
    assert_eq!(extract.candidates_seen, 2);
}

#[test]
fn keyword_match_ignores_case() {
    let html = page(&[card("Capa para iPhone", "49")]);
    let extract = extract_listings(&html, &query(&["CAPA"]));
    assert!(extract.records.is_empty());
    assert_eq!(extract.candidates_seen, 1);
}

#[test]
fn page_without_cards_yields_nothing() {
    let html = "<html><body><p>Não há anúncios que correspondam à sua busca.</p></body></html>";
    let extract = extract_listings(html, &query(&[]));
    assert_eq!(extract, PageExtract::default());
}

#[test]
fn empty_document_yields_nothing() {
    let extract = extract_listings("", &query(&["max"]));
    assert!(extract.records.is_empty());
    assert_eq!(extract.candidates_seen, 0);
}

#[test]
fn card_without_title_is_not_counted() {
    let html = page(&[
        r#"<div class="poly-card"><div class="poly-price__current"><span class="andes-money-amount__fraction">10</span></div></div>"#.to_string(),
        card("iphone 16 pro", "7.999"),
    ]);
    let extract = extract_listings(&html, &query(&[]));
    assert_eq!(extract.records.len(), 1);
    assert_eq!(extract.candidates_seen, 1);
}

#[test]
fn card_without_price_is_not_counted() {
    let html = page(&[
        r#"<div class="poly-card"><h3 class="poly-component__title-wrapper">iphone 16 pro</h3></div>"#.to_string(),
    ]);
    let extract = extract_listings(&html, &query(&[]));
    assert!(extract.records.is_empty());
    assert_eq!(extract.candidates_seen, 0);
}

#[test]
fn price_as_direct_child_of_card_is_accepted() {
    let html = page(&[r#"<div class="poly-card">
  <h3 class="poly-component__title-wrapper">iPhone 16 Pro 128GB</h3>
  <span class="andes-money-amount__fraction">6.499</span>
</div>"#
        .to_string()]);
    let extract = extract_listings(&html, &query(&[]));
    assert_eq!(
        extract.records,
        vec![ProductRecord {
            title: "iphone 16 pro 128gb".to_string(),
            price: "6.499".to_string(),
        }]
    );
}

#[test]
fn nested_price_outside_current_wrapper_is_ignored() {
    // Only the struck-through previous price is present.
    let html = page(&[r#"<div class="poly-card">
  <h3 class="poly-component__title-wrapper">iphone 16 pro</h3>
  <s class="andes-money-amount--previous"><span class="andes-money-amount__fraction">9.999</span></s>
</div>"#
        .to_string()]);
    let extract = extract_listings(&html, &query(&[]));
    assert!(extract.records.is_empty());
    assert_eq!(extract.candidates_seen, 0);
}

#[test]
fn current_price_wins_over_previous_price() {
    let html = page(&[card("iphone 16 pro", "7.999")]);
    let extract = extract_listings(&html, &query(&[]));
    assert_eq!(extract.records[0].price, "7.999");
}

#[test]
fn title_link_without_wrapper_is_accepted() {
    let html = page(&[r#"<div class="poly-card">
  <a class="poly-component__title" href="/p/2">  Apple iPhone 16 Pro  </a>
  <div class="poly-price__current"><span class="andes-money-amount__fraction">7.499</span></div>
</div>"#
        .to_string()]);
    let extract = extract_listings(&html, &query(&[]));
    assert_eq!(extract.records[0].title, "apple iphone 16 pro");
}

#[test]
fn title_whitespace_is_collapsed() {
    let html = page(&[card("\n  Apple   iPhone\t16 Pro \n", "7.999")]);
    let extract = extract_listings(&html, &query(&[]));
    assert_eq!(extract.records[0].title, "apple iphone 16 pro");
}

#[test]
fn title_split_across_inline_elements_keeps_word_breaks() {
    let html = page(&[card("Apple iPhone<b>16</b>Pro<span> 256GB</span>", "7.999")]);
    let extract = extract_listings(&html, &query(&[]));
    assert_eq!(extract.records[0].title, "apple iphone 16 pro 256gb");
}

#[test]
fn records_keep_document_order() {
    let html = page(&[
        card("primeiro", "1"),
        card("segundo", "2"),
        card("terceiro", "3"),
    ]);
    let extract = extract_listings(&html, &query(&[]));
    let titles: Vec<&str> = extract.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["primeiro", "segundo", "terceiro"]);
}

#[test]
fn counts_every_card_on_a_full_page() {
    let cards: Vec<String> = (0..48)
        .map(|i| {
            let title = if i % 3 == 0 {
                format!("iphone 16 pro max {i}")
            } else {
                format!("iphone 16 pro {i}")
            };
            card(&title, "7.999")
        })
        .collect();
    let extract = extract_listings(&page(&cards), &query(&["max"]));
    assert_eq!(extract.candidates_seen, 48);
    assert_eq!(extract.records.len(), 32);
    assert!(extract.records.iter().all(|r| !r.title.contains("max")));
}

#[test]
fn extraction_is_repeatable() {
    let html = page(&[
        card("iphone 16 pro", "7.999"),
        card("iphone 16 pro max", "9.999"),
    ]);
    let q = query(&["max"]);
    assert_eq!(extract_listings(&html, &q), extract_listings(&html, &q));
}
