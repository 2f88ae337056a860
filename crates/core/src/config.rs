//! `storefront.toml` — categories offered by the filter and the start URL.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::navigation::Location;
use crate::types::Category;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "storefront.toml";

const DEFAULT_START_URL: &str = "/products";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Location the app opens at, e.g. `/products?sort=asc+price`.
    pub start_url: String,
    pub categories: Vec<Category>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self { start_url: DEFAULT_START_URL.to_string(), categories: Vec::new() }
    }
}

impl StorefrontConfig {
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        let config = Self::parse(&content)?;
        info!(path = %path.display(), categories = config.categories.len(), "Loaded storefront config");
        Ok(config)
    }

    /// Load `storefront.toml` from `dir`, falling back to defaults when the
    /// file is missing or broken.
    pub fn from_dir(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "No storefront config, using defaults");
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "Could not load storefront config");
            Self::default()
        })
    }

    /// Parsed `start_url`; an unparseable value falls back to `/products`.
    pub fn start_location(&self) -> Location {
        Location::parse(&self.start_url).unwrap_or_else(|e| {
            warn!(start_url = %self.start_url, error = %e, "Invalid start_url");
            Location::new(DEFAULT_START_URL, Default::default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_and_start_url() {
        let config = StorefrontConfig::parse(
            r#"
start_url = "/shop?sort=asc+price"

[[categories]]
id = "c1"
name = "Shoes"

[[categories]]
id = "c2"
name = "Hats"
"#,
        )
        .unwrap();
        assert_eq!(config.categories, vec![Category::new("c1", "Shoes"), Category::new("c2", "Hats")]);
        let start = config.start_location();
        assert_eq!(start.pathname, "/shop");
        assert_eq!(start.search.get("sort"), Some("asc price"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = StorefrontConfig::parse("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.start_location().href(), "/products?");
    }

    #[test]
    fn category_without_name_is_rejected() {
        assert!(StorefrontConfig::parse("[[categories]]\nid = \"1\"\n").is_err());
    }

    #[test]
    fn from_dir_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[[categories]]\nid = \"1\"\nname = \"Bags\"\n",
        )
        .unwrap();
        let config = StorefrontConfig::from_dir(dir.path());
        assert_eq!(config.categories, vec![Category::new("1", "Bags")]);
    }

    #[test]
    fn from_dir_falls_back_on_missing_or_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(StorefrontConfig::from_dir(dir.path()), StorefrontConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "categories = 3").unwrap();
        assert_eq!(StorefrontConfig::from_dir(dir.path()), StorefrontConfig::default());
    }

    #[test]
    fn invalid_start_url_falls_back() {
        let config = StorefrontConfig { start_url: "https://bad host/".into(), categories: vec![] };
        assert_eq!(config.start_location().pathname, "/products");
    }
}
