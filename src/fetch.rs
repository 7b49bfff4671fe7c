use anyhow::{Context, Result};

const USER_AGENT: &str = "Mozilla/5.0";

/// Fetch a listing page body. Non-2xx responses are reported as errors so
/// the caller can skip the URL and move on to the next one.
pub fn fetch_listing_page(url: &str) -> Result<String> {
    let response = reqwest::blocking::Client::new()
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .with_context(|| format!("Failed to fetch {}", url))?;

    let response = response
        .error_for_status()
        .with_context(|| format!("Request to {} was rejected", url))?;

    response
        .text()
        .with_context(|| format!("Failed to read response body from {}", url))
}
