use scraper::{Html, Selector};

use crate::extractor::element_text;
use crate::models::{ListingRecord, Platform, RentValue};
use crate::parser;

/// Flatfox pages open with a summary heading ("<address> - CHF <rent>")
/// and continue with titled sections ("Miete", "Details") whose tables
/// hold the rent breakdown and the flat details. Rent amounts are cleaned
/// to whole CHF on this platform.
pub fn extract(document: &Html, url: &str) -> ListingRecord {
    let mut record = ListingRecord::new(Platform::Flatfox, url);

    extract_header(document, &mut record);
    extract_sections(document, &mut record);
    extract_maps_link(document, &mut record);

    record
}

/// Title plus the first secondary heading after it. The summary rent is
/// provisional: the Miete table further down overwrites it when present.
fn extract_header(document: &Html, record: &mut ListingRecord) {
    let heading_selector = Selector::parse("h1, h2").unwrap();
    let mut headings = document.select(&heading_selector);

    let title = match headings.find(|element| element.value().name() == "h1") {
        Some(element) => element,
        None => return,
    };
    record.title = Some(element_text(&title));

    let summary = match headings.find(|element| element.value().name() == "h2") {
        Some(element) => element_text(&element),
        None => return,
    };

    if let Some((address, rent_info)) = summary.split_once(" - ") {
        record.address = Some(address.trim().to_string());
        record.brutto_miete = parser::extract_chf_amount(rent_info).map(RentValue::Amount);
    }
}

/// Walk every section heading and route its following table by section
/// name. Document order makes the Miete table win over the header rent.
fn extract_sections(document: &Html, record: &mut ListingRecord) {
    let outline_selector = Selector::parse("h2, table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let outline: Vec<_> = document.select(&outline_selector).collect();

    for (position, element) in outline.iter().enumerate() {
        if element.value().name() != "h2" {
            continue;
        }
        let section = element_text(element).to_lowercase();
        if section != "miete" && section != "details" {
            continue;
        }

        // the next table in document order belongs to this heading
        let table = match outline[position + 1..]
            .iter()
            .find(|candidate| candidate.value().name() == "table")
        {
            Some(table) => table,
            None => continue,
        };

        for row in table.select(&row_selector) {
            let cells: Vec<_> = row.select(&cell_selector).collect();
            if cells.len() != 2 {
                continue;
            }
            let label = element_text(&cells[0]).to_lowercase();
            let value = element_text(&cells[1]);

            match section.as_str() {
                "miete" => {
                    let amount = parser::clean_chf_amount(Some(&value)).map(RentValue::Amount);
                    if label.contains("bruttomiete") {
                        record.brutto_miete = amount;
                    } else if label.contains("nettomiete") {
                        record.netto_miete = amount;
                    } else if label.contains("nebenkosten") {
                        record.nebenkosten = amount;
                    }
                }
                "details" => {
                    if label.contains("etage") {
                        record.etage = Some(value);
                    } else if label.contains("wohnfläche") {
                        record.wohnflaeche = Some(value);
                    } else if label.contains("bezugstermin") {
                        record.bezugstermin = Some(parser::parse_move_in_date(&value));
                    }
                }
                _ => {}
            }
        }
    }
}

/// The map widget sits in an iframe. html5ever keeps iframe bodies as raw
/// text, so each one is re-parsed as a fragment before looking for the
/// Google Maps anchor. First hit wins, in document order.
fn extract_maps_link(document: &Html, record: &mut ListingRecord) {
    let frame_selector = Selector::parse("iframe").unwrap();
    let anchor_selector = Selector::parse("a[href][aria-label]").unwrap();

    for frame in document.select(&frame_selector) {
        let inner = frame.text().collect::<String>();
        if inner.trim().is_empty() {
            continue;
        }

        let fragment = Html::parse_fragment(&inner);
        for anchor in fragment.select(&anchor_selector) {
            if let Some(href) = anchor.value().attr("href") {
                if href.contains("maps.google.com") {
                    record.google_maps_link = Some(href.to_string());
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_URL: &str =
        "https://flatfox.ch/de/wohnung/pfeffingerstrasse-78-4053-basel/1822657/";

    const LISTING: &str = r#"
        <html><body>
          <h1>Charmante 3-Zimmerwohnung</h1>
          <h2>Pfeffingerstrasse 78, 4053 Basel - CHF 1'920</h2>
          <h2>Miete</h2>
          <table>
            <tr><td>Nettomiete</td><td>CHF 1'600</td></tr>
            <tr><td>Nebenkosten</td><td>CHF 250</td></tr>
            <tr><td>Bruttomiete</td><td>CHF 1'850</td></tr>
          </table>
          <h2>Details</h2>
          <table>
            <tr><td>Etage</td><td>3. Etage</td></tr>
            <tr><td>Wohnfläche</td><td>72 m²</td></tr>
            <tr><td>Bezugstermin</td><td>01.08.2025</td></tr>
          </table>
          <h2>Beschreibung</h2>
          <table>
            <tr><td>Nettomiete</td><td>CHF 9'999</td></tr>
          </table>
          <iframe>
            <a href="https://maps.google.com/maps?q=Pfeffingerstrasse+78+Basel"
               aria-label="Karte anzeigen">Karte</a>
          </iframe>
        </body></html>"#;

    #[test]
    fn extracts_the_full_record() {
        let document = Html::parse_document(LISTING);
        let record = extract(&document, LISTING_URL);

        assert_eq!(record.platform, Platform::Flatfox);
        assert_eq!(record.listing_link, LISTING_URL);
        assert_eq!(record.title.as_deref(), Some("Charmante 3-Zimmerwohnung"));
        assert_eq!(
            record.address.as_deref(),
            Some("Pfeffingerstrasse 78, 4053 Basel")
        );
        assert_eq!(record.netto_miete, Some(RentValue::Amount(1600)));
        assert_eq!(record.nebenkosten, Some(RentValue::Amount(250)));
        assert_eq!(record.etage.as_deref(), Some("3. Etage"));
        assert_eq!(record.wohnflaeche.as_deref(), Some("72 m²"));
        assert_eq!(record.bezugstermin.as_deref(), Some("2025-08-01"));
        assert_eq!(
            record.google_maps_link.as_deref(),
            Some("https://maps.google.com/maps?q=Pfeffingerstrasse+78+Basel")
        );
    }

    #[test]
    fn miete_table_overwrites_the_header_rent() {
        let document = Html::parse_document(LISTING);
        let record = extract(&document, LISTING_URL);

        // header said 1'920, the Miete table says 1'850 and runs later
        assert_eq!(record.brutto_miete, Some(RentValue::Amount(1850)));
    }

    #[test]
    fn header_rent_survives_without_a_miete_table() {
        let document = Html::parse_document(
            r#"<html><body>
              <h1>Studio im Zentrum</h1>
              <h2>Clarastrasse 4, 4058 Basel - CHF 1'150</h2>
            </body></html>"#,
        );
        let record = extract(&document, LISTING_URL);

        assert_eq!(record.address.as_deref(), Some("Clarastrasse 4, 4058 Basel"));
        assert_eq!(record.brutto_miete, Some(RentValue::Amount(1150)));
    }

    #[test]
    fn summary_without_separator_sets_no_address() {
        let document = Html::parse_document(
            "<html><body><h1>Studio</h1><h2>Preis auf Anfrage</h2></body></html>",
        );
        let record = extract(&document, LISTING_URL);

        assert_eq!(record.address, None);
        assert_eq!(record.brutto_miete, None);
    }

    #[test]
    fn unparsable_move_in_date_is_kept_verbatim() {
        let document = Html::parse_document(
            r#"<html><body>
              <h1>Wohnung</h1>
              <h2>Details</h2>
              <table>
                <tr><td>Bezugstermin</td><td>Nach Vereinbarung</td></tr>
              </table>
            </body></html>"#,
        );
        let record = extract(&document, LISTING_URL);

        assert_eq!(record.bezugstermin.as_deref(), Some("Nach Vereinbarung"));
    }

    #[test]
    fn rows_with_other_shapes_are_ignored() {
        let document = Html::parse_document(
            r#"<html><body>
              <h1>Wohnung</h1>
              <h2>Miete</h2>
              <table>
                <tr><td colspan="2">Alle Preise inkl. Nebenkosten</td></tr>
                <tr><td>Nettomiete</td><td>CHF 1'600</td><td>pro Monat</td></tr>
              </table>
            </body></html>"#,
        );
        let record = extract(&document, LISTING_URL);

        assert_eq!(record.netto_miete, None);
        assert_eq!(record.nebenkosten, None);
    }

    #[test]
    fn frames_without_maps_anchor_are_skipped() {
        let document = Html::parse_document(
            r#"<html><body>
              <h1>Wohnung</h1>
              <iframe><a href="https://player.example.com/tour" aria-label="Rundgang">Tour</a></iframe>
              <iframe><a href="https://maps.google.com/maps?q=Basel" aria-label="Karte">Karte</a></iframe>
            </body></html>"#,
        );
        let record = extract(&document, LISTING_URL);

        assert_eq!(
            record.google_maps_link.as_deref(),
            Some("https://maps.google.com/maps?q=Basel")
        );
    }

    #[test]
    fn anchors_without_aria_label_are_not_map_links() {
        let document = Html::parse_document(
            r#"<html><body>
              <h1>Wohnung</h1>
              <iframe><a href="https://maps.google.com/maps?q=Basel">Karte</a></iframe>
            </body></html>"#,
        );
        let record = extract(&document, LISTING_URL);

        assert_eq!(record.google_maps_link, None);
    }
}
