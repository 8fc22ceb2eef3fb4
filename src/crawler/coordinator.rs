//! Crawl coordinator - the sequential crawl loop
//!
//! One address is fetched, classified, parsed, and persisted at a time;
//! the only suspension points are the fetch, the store calls, and the
//! politeness delay after each processed address. The coordinator owns the
//! frontier exclusively and holds the single store handle for the whole
//! run, releasing it on every exit path when it is dropped.

use crate::config::Config;
use crate::crawler::extract::{extract_links, extract_text};
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::frontier::Frontier;
use crate::crawler::script::has_significant_script;
use crate::storage::{open_store, PageRecord, PageStore, SqliteStore};
use crate::url::media_file_name;
use crate::DriftError;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Crawl coordinator
pub struct Coordinator {
    frontier: Frontier,
    store: SqliteStore,
    client: Client,
    politeness_delay: Duration,
}

impl Coordinator {
    /// Creates a coordinator from a validated configuration
    ///
    /// Opens the page store (fatal if unusable — the loop must not start
    /// without a store handle), builds the HTTP client, and seeds the
    /// frontier in configuration order with nothing pre-marked.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(DriftError)` - Store or client initialization failed
    pub fn new(config: Config) -> Result<Self, DriftError> {
        let store = open_store(
            Path::new(&config.store.database_path),
            &config.store.collection,
        )?;

        let client = build_http_client()?;

        let mut frontier = Frontier::new();
        for seed in &config.seeds {
            frontier.enqueue(seed.clone());
        }

        Ok(Self {
            frontier,
            store,
            client,
            politeness_delay: Duration::from_millis(config.crawler.politeness_delay),
        })
    }

    /// Runs the crawl loop to frontier exhaustion
    ///
    /// Per-address failures never escape an iteration; they convert into a
    /// failed mark or a logged-and-skipped store error. The loop has no
    /// other exit than an empty pending sequence.
    pub async fn run(&mut self) {
        tracing::info!(
            "Starting crawl with {} pending addresses",
            self.frontier.pending_len()
        );
        let start_time = std::time::Instant::now();
        let mut processed = 0u64;

        while let Some(url) = self.frontier.dequeue() {
            // Settled in an earlier iteration; discard silently
            if self.frontier.is_seen(&url) {
                continue;
            }

            self.process_address(&url).await;
            processed += 1;

            if processed % 10 == 0 {
                tracing::info!(
                    "Progress: {} processed, {} pending, {} visited, {} failed",
                    processed,
                    self.frontier.pending_len(),
                    self.frontier.visited_len(),
                    self.frontier.failed_len()
                );
            }
        }

        tracing::info!(
            "Crawl complete: {} visited, {} failed in {:?}",
            self.frontier.visited_len(),
            self.frontier.failed_len(),
            start_time.elapsed()
        );
    }

    /// Processes one dequeued address
    async fn process_address(&mut self, url: &str) {
        tracing::debug!("Visiting {}", url);

        let fetched = fetch_url(&self.client, url).await;

        let body = match fetched.body {
            Some(body) => body,
            None => {
                self.frontier.mark_failed(url.to_string());
                self.pause().await;
                return;
            }
        };

        if has_significant_script(&body) {
            // Not marked visited or failed: a different page linking here
            // later in the run triggers a fresh fetch attempt. Links are
            // not harvested either, so subtrees reachable only through
            // this page stay undiscovered.
            tracing::debug!("Skipping {}: significant script content", url);
            return;
        }

        self.frontier.mark_visited(url.to_string());

        let base = match Url::parse(url) {
            Ok(base) => Some(base),
            Err(e) => {
                tracing::warn!("Unresolvable base address {}: {}", url, e);
                None
            }
        };

        let links = base
            .as_ref()
            .map(|b| extract_links(&body, b))
            .unwrap_or_default();

        let content = select_content(&body, fetched.content_type.as_deref(), base.as_ref());

        self.persist(url, &links, content);

        for link in &links {
            if !self.frontier.is_seen(link) {
                self.frontier.enqueue(link.clone());
            }
        }

        self.pause().await;
    }

    /// Upserts the page document: exactly one of insert or update
    ///
    /// Write failures are logged and skipped; the address stays visited
    /// and the loop moves on.
    fn persist(&mut self, url: &str, links: &[String], content: String) {
        let result = match self.store.find_page(url) {
            Ok(Some(_)) => self.store.update_page(url, links, &content),
            Ok(None) => self.store.insert_page(&PageRecord {
                url: url.to_string(),
                links: links.to_vec(),
                content,
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            tracing::error!("Store write failed for {}: {}", url, e);
        }
    }

    /// Suspends the crawl task for the fixed politeness delay
    async fn pause(&self) {
        tokio::time::sleep(self.politeness_delay).await;
    }
}

/// Runs a complete crawl from a validated configuration
pub async fn run_crawl(config: Config) -> Result<(), DriftError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await;
    Ok(())
}

/// Chooses the stored content for a visited address
///
/// Media-classified addresses (image/* or text/* by path-derived MIME
/// type) store the base file name of the path, and only when the fetch
/// returned a content-type hint; everything else stores the collapsed body
/// text.
fn select_content(body: &str, content_type: Option<&str>, base: Option<&Url>) -> String {
    if content_type.is_some() {
        if let Some(name) = base.and_then(media_file_name) {
            return name;
        }
    }

    extract_text(body)
}
