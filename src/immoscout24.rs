use scraper::{Html, Selector};

use crate::extractor::element_text;
use crate::models::{ListingRecord, Platform, RentValue};

/// Immoscout24 renders the rent breakdown as list rows with a label span
/// and a value span each. Values stay raw, same as Homegate.
pub fn extract(document: &Html, url: &str) -> ListingRecord {
    let mut record = ListingRecord::new(Platform::Immoscout24, url);

    let title_selector = Selector::parse("h1").unwrap();
    if let Some(element) = document.select(&title_selector).next() {
        record.title = Some(element_text(&element));
    }

    let address_selector = Selector::parse("span.AddressDisplay").unwrap();
    if let Some(element) = document.select(&address_selector).next() {
        record.address = Some(element_text(&element));
    }

    let row_selector = Selector::parse("li.BoxRow").unwrap();
    let label_selector = Selector::parse("span.BoxLabel").unwrap();
    let value_selector = Selector::parse("span.BoxValue").unwrap();

    for row in document.select(&row_selector) {
        let (label, value) = match (
            row.select(&label_selector).next(),
            row.select(&value_selector).next(),
        ) {
            (Some(label), Some(value)) => (element_text(&label), element_text(&value)),
            _ => continue,
        };

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
