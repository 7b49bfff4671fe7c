use scraper::{ElementRef, Html};

use crate::extractors::{FlatfoxExtractor, HomegateExtractor, Immoscout24Extractor};
use crate::models::{ListingRecord, Platform};

/// One extraction routine per supported platform. The router walks these
/// in priority order and hands the parsed document to the first whose
/// domain occurs in the URL.
pub trait PlatformExtractor {
    fn platform(&self) -> Platform;

    /// Domain substring used to recognise listing URLs. Matching is plain
    /// substring containment on the raw URL, not a parsed hostname.
    fn domain(&self) -> &'static str;

    fn matches(&self, url: &str) -> bool {
        url.contains(self.domain())
    }

    fn extract(&self, document: &Html, url: &str) -> ListingRecord;
}

/// Supported platforms, in match priority order.
pub fn all_extractors() -> Vec<Box<dyn PlatformExtractor>> {
    vec![
        Box::new(HomegateExtractor),
        Box::new(Immoscout24Extractor),
        Box::new(FlatfoxExtractor),
    ]
}

/// Parse the page once and dispatch to the matching platform extractor.
/// URLs matching no platform yield an Unknown record that carries nothing
/// but the listing link. Missing elements never abort extraction, so this
/// cannot fail even on garbage input.
pub fn detect_platform_and_extract(html: &str, url: &str) -> ListingRecord {
    let document = Html::parse_document(html);

    for extractor in all_extractors() {
        if extractor.matches(url) {
            return extractor.extract(&document, url);
        }
    }

    ListingRecord::new(Platform::Unknown, url)
}

/// Text content of an element, descendant pieces joined and trimmed.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
