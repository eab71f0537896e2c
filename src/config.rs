use std::env;

use anyhow::bail;

pub const DEFAULT_CATEGORY_URL_PREFIX: &str = "/category";
pub const DEFAULT_ADDRESS_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Path prefix of category listing pages, without a trailing slash.
    pub category_url_prefix: String,
    pub address_separator: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            category_url_prefix: DEFAULT_CATEGORY_URL_PREFIX.to_string(),
            address_separator: DEFAULT_ADDRESS_SEPARATOR.to_string(),
        }
    }
}

impl MapperConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            env::var("MAPPER_CATEGORY_URL_PREFIX").ok(),
            env::var("MAPPER_ADDRESS_SEPARATOR").ok(),
        )
    }

    fn from_vars(
        category_url_prefix: Option<String>,
        address_separator: Option<String>,
    ) -> anyhow::Result<Self> {
        let category_url_prefix = match category_url_prefix {
            Some(prefix) => normalize_prefix(&prefix)?,
            None => DEFAULT_CATEGORY_URL_PREFIX.to_string(),
        };
        let address_separator =
            address_separator.unwrap_or_else(|| DEFAULT_ADDRESS_SEPARATOR.to_string());
        Ok(Self {
            category_url_prefix,
            address_separator,
        })
    }
}

fn normalize_prefix(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        bail!("MAPPER_CATEGORY_URL_PREFIX must start with '/', got {trimmed:?}");
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
