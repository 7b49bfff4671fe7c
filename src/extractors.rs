use scraper::Html;

use crate::extractor::PlatformExtractor;
use crate::models::{ListingRecord, Platform};
use crate::{flatfox, homegate, immoscout24};

pub struct HomegateExtractor;

impl PlatformExtractor for HomegateExtractor {
    fn platform(&self) -> Platform {
        Platform::Homegate
    }

    fn domain(&self) -> &'static str {
        "homegate.ch"
    }

    fn extract(&self, document: &Html, url: &str) -> ListingRecord {
        homegate::extract(document, url)
    }
}

pub struct Immoscout24Extractor;

impl PlatformExtractor for Immoscout24Extractor {
    fn platform(&self) -> Platform {
        Platform::Immoscout24
    }

    fn domain(&self) -> &'static str {
        "immoscout24.ch"
    }

    fn extract(&self, document: &Html, url: &str) -> ListingRecord {
        immoscout24::extract(document, url)
    }
}

pub struct FlatfoxExtractor;

impl PlatformExtractor for FlatfoxExtractor {
    fn platform(&self) -> Platform {
        Platform::Flatfox
    }

    fn domain(&self) -> &'static str {
        "flatfox.ch"
    }

    fn extract(&self, document: &Html, url: &str) -> ListingRecord {
        flatfox::extract(document, url)
    }
}
