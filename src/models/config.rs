//! Configuration model loaded from external sources.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::domain::category::{Category, CategoryCatalog};

/// Minimum length of the cookie signing secret.
pub const MIN_SECRET_LEN: usize = 64;

/// A configured product category. Deserialized straight into the domain type.
pub type CategoryConfig = Category;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("secret must be at least {MIN_SECRET_LEN} bytes")]
    SecretTooShort,

    #[error("at least one category must be configured")]
    NoCategories,

    #[error("category `{0}` is configured more than once")]
    DuplicateCategory(String),

    #[error("page_size must be greater than zero")]
    InvalidPageSize,
}

fn default_api_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Clone, Debug, Deserialize)]
/// Site configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    /// Catalog API root, e.g. `https://host/api/v1`.
    pub api_base_url: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort);
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.key) {
                return Err(ConfigError::DuplicateCategory(category.key.to_string()));
            }
        }
        Ok(())
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    pub fn category_catalog(&self) -> CategoryCatalog {
        CategoryCatalog::new(self.categories.clone())
    }
}
