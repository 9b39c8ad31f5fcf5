//! Configuration management.
//!
//! The search client is driven by a single immutable [`SearchConfig`]. It is
//! loaded once at startup (defaults, then an optional TOML file, then
//! `DATASET_SEARCH_*` environment variables), validated, and then shared
//! read-only with the orchestrator.
//!
//! # Configuration File Format
//!
//! ```toml
//! server = "https://arcticdata.io/metacat/d1/mn/v2/query/solr?"
//! filter = "knb-lter-bnz"
//! limit = 10
//! show_pages = 5
//!
//! [elements]
//! results = "searchResults"
//! url = "searchUrl"
//! count = "resultCount"
//! pages = "pagination"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in default locations.
pub const CONFIG_FILE_NAME: &str = "dataset-search.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DATASET_SEARCH";

/// Search client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Solr query endpoint; query parameters are appended to it
    #[serde(default = "default_server")]
    pub server: String,

    /// Filter tag prefixed to every free-text query
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Maximum number of results per page
    #[serde(default = "default_limit")]
    pub limit: u64,

    /// Number of numbered page links to show (must be odd)
    #[serde(default = "default_show_pages")]
    pub show_pages: u64,

    /// Identifiers of the regions the renderer writes to
    #[serde(default)]
    pub elements: ElementIds,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            filter: default_filter(),
            limit: default_limit(),
            show_pages: default_show_pages(),
            elements: ElementIds::default(),
        }
    }
}

/// Identifiers of the output regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    /// Region holding the rendered result list
    #[serde(default = "default_results_id")]
    pub results: String,

    /// Region displaying the composed query URL
    #[serde(default = "default_url_id")]
    pub url: String,

    /// Region holding the result count summary
    #[serde(default = "default_count_id")]
    pub count: String,

    /// Region holding the page links
    #[serde(default = "default_pages_id")]
    pub pages: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            results: default_results_id(),
            url: default_url_id(),
            count: default_count_id(),
            pages: default_pages_id(),
        }
    }
}

fn default_server() -> String {
    "https://arcticdata.io/metacat/d1/mn/v2/query/solr?".to_string()
}

fn default_filter() -> String {
    "knb-lter-bnz".to_string()
}

fn default_limit() -> u64 {
    10
}

fn default_show_pages() -> u64 {
    5
}

fn default_results_id() -> String {
    "searchResults".to_string()
}

fn default_url_id() -> String {
    "searchUrl".to_string()
}

fn default_count_id() -> String {
    "resultCount".to_string()
}

fn default_pages_id() -> String {
    "pagination".to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl SearchConfig {
    /// Check the invariants the page-link arithmetic relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.server)
            .map_err(|e| ConfigError::Invalid(format!("server URL '{}': {}", self.server, e)))?;

        if self.limit == 0 {
            return Err(ConfigError::Invalid("limit must be positive".to_string()));
        }

        if self.show_pages == 0 || self.show_pages % 2 == 0 {
            return Err(ConfigError::Invalid(format!(
                "show_pages must be an odd number >= 1, got {}",
                self.show_pages
            )));
        }

        Ok(())
    }

    /// Serialize to TOML, as shown by the `config` subcommand.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Load configuration from an optional file plus environment overrides.
///
/// Missing keys fall back to the defaults. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let config: SearchConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

/// Look for a configuration file in the working directory, then the user
/// config directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("dataset-search").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.limit, 10);
        assert_eq!(config.show_pages, 5);
        assert_eq!(config.filter, "knb-lter-bnz");
        assert_eq!(config.elements.results, "searchResults");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_even_show_pages() {
        let config = SearchConfig {
            show_pages: 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = SearchConfig {
            limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_server() {
        let config = SearchConfig {
            server: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset-search.toml");

        let toml_content = r#"
server = "http://localhost:8983/solr/select?"
filter = "my-org"
limit = 25
show_pages = 7

[elements]
results = "hits"
"#;

        let mut file = File::create(&path).unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.server, "http://localhost:8983/solr/select?");
        assert_eq!(config.filter, "my-org");
        assert_eq!(config.limit, 25);
        assert_eq!(config.show_pages, 7);
        assert_eq!(config.elements.results, "hits");
        assert_eq!(config.elements.pages, "pagination");
    }

    #[test]
    fn test_config_file_invalid_show_pages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset-search.toml");
        std::fs::write(&path, "show_pages = 6\n").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_to_toml_round_trips_through_loader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset-search.toml");
        let config = SearchConfig {
            filter: "saved".to_string(),
            ..Default::default()
        };
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }
}
