//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - Frontier management (pending queue plus dedup sets)
//! - HTTP fetching
//! - Script risk classification
//! - Link and content extraction
//! - Overall crawl coordination

mod coordinator;
mod extract;
mod fetcher;
mod frontier;
mod script;

pub use coordinator::{run_crawl, Coordinator};
pub use extract::{collapse_whitespace, extract_links, extract_text};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::Frontier;
pub use script::has_significant_script;

use crate::config::Config;
use crate::DriftError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Open the page store
/// 2. Seed the frontier from the configured seed list
/// 3. Fetch, classify, and extract pages breadth-first
/// 4. Upsert one document per visited page
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(())` - Crawl ran to frontier exhaustion
/// * `Err(DriftError)` - Initialization failed before the loop started
pub async fn crawl(config: Config) -> Result<(), DriftError> {
    run_crawl(config).await
}
