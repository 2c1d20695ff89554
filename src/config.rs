//! Runtime settings for the listing search.

use anyhow::{Context, Result};
use config::Config;
use serde::Deserialize;

/// Settings shared by the listing sources and the viewing allowance.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the listings API; `None` uses the bundled sample listings
    pub api_base_url: Option<String>,
    /// Listings per page
    pub page_size: usize,
    /// HTTP timeout in seconds
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// How many listings a guest may see
    pub guest_view_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            page_size: 12,
            request_timeout_secs: 30,
            user_agent: concat!("listing-search/", env!("CARGO_PKG_VERSION")).to_string(),
            guest_view_limit: 20,
        }
    }
}

impl SearchConfig {
    /// Loads `config/default.yaml` (optional) then `LISTING_SEARCH_*` variables.
    pub fn load() -> Result<Self> {
        Self::load_from("config/default")
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("LISTING_SEARCH"))
            .build()
            .context("Failed to read configuration")?;

        let config: SearchConfig = settings
            .try_deserialize()
            .context("Failed to parse configuration")?;

        if config.page_size == 0 {
            anyhow::bail!("page_size must be greater than zero");
        }
        Ok(config)
    }
}
