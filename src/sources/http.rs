use crate::config::SearchConfig;
use crate::filters::QuerySpec;
use crate::models::{ListingPage, Property};
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listing source backed by the listings REST API
pub struct HttpListingSource {
    client: Client,
    base_url: String,
    page_size: usize,
}

impl HttpListingSource {
    /// Create a new API source from the runtime settings
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let base_url = config
            .api_base_url
            .clone()
            .context("api_base_url is not configured")?;
        Self::with_base_url(base_url, config)
    }

    /// Create a new API source for an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>, config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    fn build_request(&self, query: &QuerySpec) -> Result<Request> {
        let mut params = query.to_query_pairs();
        params.push(("limit", self.page_size.to_string()));

        self.client
            .get(format!("{}/api/properties", self.base_url))
            .query(&params)
            .build()
            .context("Failed to build listings request")
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self, query: &QuerySpec) -> Result<ListingPage<Property>> {
        let request = self.build_request(query)?;
        debug!("Fetching URL: {}", request.url());

        let response = self
            .client
            .execute(request)
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let page: ListingPage<Property> = response
            .json()
            .await
            .context("Failed to decode listings response")?;

        info!(
            "Fetched {} listings (page {} of {})",
            page.items.len(),
            query.page,
            page.pagination.total_pages
        );
        Ok(page)
    }

    fn source_name(&self) -> &'static str {
        "listings-api"
    }
}
