use crate::config::types::{Config, StoreConfig};
use crate::url::parse_absolute;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_store_config(&config.store)?;
    validate_seeds(&config.seeds)?;
    Ok(())
}

/// Validates store configuration
fn validate_store_config(config: &StoreConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    // The collection name is templated into the SQL schema, so it must be
    // a bare identifier.
    if config.collection.is_empty() {
        return Err(ConfigError::Validation(
            "collection cannot be empty".to_string(),
        ));
    }

    let mut chars = config.collection.chars();
    let leading_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);

    if !leading_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::Validation(format!(
            "collection must be an identifier (letters, digits, underscores), got '{}'",
            config.collection
        )));
    }

    Ok(())
}

/// Validates the seed list
fn validate_seeds(seeds: &[String]) -> Result<(), ConfigError> {
    if seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    for seed in seeds {
        parse_absolute(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::CrawlerConfig;

    fn valid_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                politeness_delay: 1000,
            },
            store: StoreConfig {
                database_path: "./pages.db".to_string(),
                collection: "web_data".to_string(),
            },
            seeds: vec!["https://example.com/".to_string()],
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let mut config = valid_config();
        config.store.database_path = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_collection_with_invalid_chars_rejected() {
        let mut config = valid_config();
        config.store.collection = "web-data; DROP TABLE".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_collection_with_leading_digit_rejected() {
        let mut config = valid_config();
        config.store.collection = "1pages".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_collection_with_underscore_accepted() {
        let mut config = valid_config();
        config.store.collection = "_pages_v2".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_seed_list_rejected() {
        let mut config = valid_config();
        config.seeds.clear();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_relative_seed_rejected() {
        let mut config = valid_config();
        config.seeds.push("not-a-url".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }
}
