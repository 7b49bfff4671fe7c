use scraper::{ElementRef, Html, Selector};

use crate::extractor::element_text;
use crate::models::{ListingRecord, Platform, RentValue};

/// Homegate keeps the rent breakdown in a definition list and the address
/// in a dedicated paragraph. Rent values stay exactly as printed on the
/// page, including currency marker and separators.
pub fn extract(document: &Html, url: &str) -> ListingRecord {
    let mut record = ListingRecord::new(Platform::Homegate, url);

    let title_selector = Selector::parse("h1").unwrap();
    if let Some(element) = document.select(&title_selector).next() {
        record.title = Some(element_text(&element));
    }

    let address_selector = Selector::parse("p.Address").unwrap();
    if let Some(element) = document.select(&address_selector).next() {
        record.address = Some(element_text(&element));
    }

    let term_selector = Selector::parse("dt").unwrap();
    for term in document.select(&term_selector) {
        let label = element_text(&term);
        // value lives in the next <dd> sibling; a dangling <dt> counts as
        // an empty value, not a miss
        let value = term
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| sibling.value().name() == "dd")
            .map(|description| element_text(&description))
            .unwrap_or_default();

        if label.contains("Nettomiete") {
            record.netto_miete = Some(RentValue::Text(value));
        } else if label.contains("Nebenkosten") {
            record.nebenkosten = Some(RentValue::Text(value));
        } else if label.contains("Bruttomiete") {
            record.brutto_miete = Some(RentValue::Text(value));
        }
    }

    record
}
