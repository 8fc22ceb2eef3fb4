use serde::Deserialize;

/// Main configuration structure for driftnet
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub seeds: Vec<String>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Fixed delay between processed addresses (milliseconds)
    #[serde(rename = "politeness-delay")]
    pub politeness_delay: u64,
}

/// Page store configuration
///
/// The crawl loop treats these values as opaque; they only ever reach the
/// store backend.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Name of the collection (table) page documents are written to
    pub collection: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[crawler]
politeness-delay = 1000

[store]
database-path = "./pages.db"
collection = "web_data"

seeds = ["https://example.com/", "https://other.example/"]
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.crawler.politeness_delay, 1000);
        assert_eq!(config.store.database_path, "./pages.db");
        assert_eq!(config.store.collection, "web_data");
        assert_eq!(config.seeds.len(), 2);
    }

    #[test]
    fn test_seeds_default_to_empty() {
        let toml_str = r#"
[crawler]
politeness-delay = 500

[store]
database-path = "./pages.db"
collection = "pages"
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.seeds.is_empty());
    }
}
