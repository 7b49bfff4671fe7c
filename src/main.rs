use std::path::Path;

use anyhow::Result;
use clap::Parser;
use mietlogger::extractor::detect_platform_and_extract;
use mietlogger::{debug, fetch, storage, verbose_println};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Mietlogger - apartment listing logger for Swiss platforms")]
struct Args {
    /// Listing URLs to scrape
    #[clap(value_name = "URL", required = true)]
    urls: Vec<String>,

    /// Path to the JSON scrape log
    #[clap(short, long, default_value = storage::DEFAULT_LOG_PATH)]
    log_file: String,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    debug::set_verbose(args.verbose);

    let log_path = Path::new(&args.log_file);
    let mut log = storage::load_log(log_path)?;

    for url in &args.urls {
        verbose_println!("📡 Fetching: {}", url);

        let body = match fetch::fetch_listing_page(url) {
            Ok(body) => body,
            Err(e) => {
                // a failed URL never aborts the batch
                println!("❌ Failed to process {}: {:#}", url, e);
                continue;
            }
        };

        verbose_println!("✅ Page fetched, parsing...");
        let record = detect_platform_and_extract(&body, url);

        if debug::is_verbose() {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        storage::log_scrape(record, &mut log, log_path)?;
    }

    Ok(())
}
