use crate::filters::QuerySpec;
use crate::models::{ListingPage, Property};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can answer a listing query
/// (the listings API, an in-memory catalogue in tests and demos).
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch one page of listings matching the query
    async fn fetch(&self, query: &QuerySpec) -> Result<ListingPage<Property>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
