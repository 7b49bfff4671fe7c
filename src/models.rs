use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source website a listing was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Homegate,
    Immoscout24,
    Flatfox,
    Unknown,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Homegate => "Homegate",
            Platform::Immoscout24 => "Immoscout24",
            Platform::Flatfox => "Flatfox",
            Platform::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Rent fields keep the shape their platform delivers: Homegate and
/// Immoscout24 expose the raw label text, Flatfox amounts are cleaned to
/// whole CHF. Untagged so the JSON log holds plain strings and numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RentValue {
    Amount(u32),
    Text(String),
}

/// Structured result of extracting one listing page. Every field is
/// present on every platform; the Etage/Wohnfläche/Bezugstermin/maps
/// fields are only ever filled by the Flatfox extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "Platform")]
    pub platform: Platform,

    #[serde(rename = "Listing Title", default)]
    pub title: Option<String>,

    #[serde(rename = "Address", default)]
    pub address: Option<String>,

    #[serde(rename = "Netto Miete (CHF)", default)]
    pub netto_miete: Option<RentValue>,

    #[serde(rename = "Nebenkosten (CHF)", default)]
    pub nebenkosten: Option<RentValue>,

    #[serde(rename = "Brutto Miete (CHF)", default)]
    pub brutto_miete: Option<RentValue>,

    #[serde(rename = "Etage", default)]
    pub etage: Option<String>,

    #[serde(rename = "Wohnfläche (m²)", default)]
    pub wohnflaeche: Option<String>,

    /// ISO-8601 move-in date, or the page's own wording ("Nach
    /// Vereinbarung") when it is not a plain date.
    #[serde(rename = "Bezugstermin", default)]
    pub bezugstermin: Option<String>,

    #[serde(rename = "Google Maps Link", default)]
    pub google_maps_link: Option<String>,

    #[serde(rename = "Listing Link")]
    pub listing_link: String,
}

impl ListingRecord {
    /// Fresh record with every field absent except the platform tag and
    /// the listing link, which carries the input URL verbatim.
    pub fn new(platform: Platform, url: &str) -> Self {
        Self {
            platform,
            title: None,
            address: None,
            netto_miete: None,
            nebenkosten: None,
            brutto_miete: None,
            etage: None,
            wohnflaeche: None,
            bezugstermin: None,
            google_maps_link: None,
            listing_link: url.to_string(),
        }
    }
}

/// One element of the on-disk JSON log: a scraped record plus the
/// timestamp stamped at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(flatten)]
    pub record: ListingRecord,

    #[serde(rename = "Scrape Time")]
    pub scrape_time: NaiveDateTime,
}
