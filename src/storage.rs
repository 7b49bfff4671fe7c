use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::models::{ListingRecord, LogEntry};

/// Default location of the scrape log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "data/apartment_log.json";

/// Whether log_scrape actually appended the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added,
    Duplicate,
}

/// Load the full scrape log into memory. An absent file is an empty log;
/// an unreadable or corrupt one is a startup error.
pub fn load_log(path: &Path) -> Result<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse log file: {}", path.display()))
}

/// Rewrite the whole log file, creating the data directory on first use.
/// serde_json leaves non-ASCII (Wohnfläche, m²) unescaped.
pub fn save_log(log: &[LogEntry], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }
    }

    let json = serde_json::to_string_pretty(log).context("Failed to serialize log")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write log file: {}", path.display()))
}

/// Append a scraped record unless the log already holds an entry with the
/// same listing link or the same address. The file is rewritten right
/// after a successful append, not batched at process exit.
pub fn log_scrape(
    record: ListingRecord,
    log: &mut Vec<LogEntry>,
    path: &Path,
) -> Result<AppendOutcome> {
    if let Some(existing) = log.iter().find(|entry| {
        entry.record.listing_link == record.listing_link || entry.record.address == record.address
    }) {
        println!(
            "⚠️ Already scraped: {} ({}) on {} from {}.",
            display_field(&existing.record.title),
            display_field(&existing.record.address),
            existing.scrape_time.format("%Y-%m-%dT%H:%M:%S%.6f"),
            existing.record.platform,
        );
        return Ok(AppendOutcome::Duplicate);
    }

    let entry = LogEntry {
        record,
        scrape_time: Local::now().naive_local(),
    };
    log.push(entry);
    save_log(log, path)?;

    if let Some(added) = log.last() {
        println!(
            "✅ Added new apartment: {} ({})",
            display_field(&added.record.title),
            display_field(&added.record.address),
        );
    }

    Ok(AppendOutcome::Added)
}

fn display_field(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("-")
}
