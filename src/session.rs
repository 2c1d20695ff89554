//! Fetching results for the latest search only.
//!
//! A refresh started for an older state may complete after a newer one; its
//! result is dropped so the grid never shows stale listings.

use anyhow::Result;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::filters::{FilterState, ViewCap};
use crate::models::Property;
use crate::sources::ListingSource;

/// What the presentation layer renders for one refresh
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub items: Vec<Property>,
    pub at_cap: bool,
    pub total: usize,
    pub total_pages: usize,
    pub page: u32,
}

/// Runs fetches against a source, last request wins
pub struct SearchSession<S: ListingSource> {
    source: Arc<S>,
    generation: AtomicU64,
}

impl<S: ListingSource> SearchSession<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches the page for `state` and applies the viewing allowance.
    ///
    /// Returns `Ok(None)` when another refresh was started before this one
    /// finished.
    pub async fn refresh(
        &self,
        state: &FilterState,
        cap: ViewCap,
    ) -> Result<Option<SearchResults>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = state.to_query_spec();

        let page = self.source.fetch(&query).await?;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!("Discarding stale results for request {}", ticket);
            return Ok(None);
        }

        let view = cap.apply(&page.items);
        info!(
            "Showing {} of {} listings from {}",
            view.visible.len(),
            page.pagination.total,
            self.source.source_name()
        );

        Ok(Some(SearchResults {
            items: view.visible.to_vec(),
            at_cap: view.at_cap,
            total: page.pagination.total,
            total_pages: page.pagination.total_pages,
            page: query.page,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterKey, QuerySpec};
    use crate::models::ListingPage;
    use crate::sources::{sample_listings, InMemoryListingSource};
    use async_trait::async_trait;
    use std::time::Duration;

    /// Answers queries for Marseille slowly
    struct SlowSource(InMemoryListingSource);

    #[async_trait]
    impl ListingSource for SlowSource {
        async fn fetch(&self, query: &QuerySpec) -> Result<ListingPage<Property>> {
            if query.city.as_deref() == Some("Marseille") {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            self.0.fetch(query).await
        }

        fn source_name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn refresh_applies_view_cap() {
        let source = Arc::new(InMemoryListingSource::new(sample_listings(), 5));
        let session = SearchSession::new(source);

        let results = session
            .refresh(&FilterState::default(), ViewCap::limited(20, 18))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(results.items.len(), 2);
        assert!(results.at_cap);
        assert_eq!(results.total, sample_listings().len());
        assert_eq!(results.page, 1);
    }

    #[tokio::test]
    async fn newer_refresh_wins() {
        let source = Arc::new(SlowSource(InMemoryListingSource::new(sample_listings(), 5)));
        let session = SearchSession::new(source);

        let older = FilterState::default().with_field(FilterKey::City, "Marseille");
        let newer = FilterState::default().with_field(FilterKey::City, "Lyon");

        let (stale, fresh) = tokio::join!(
            session.refresh(&older, ViewCap::unlimited()),
            session.refresh(&newer, ViewCap::unlimited()),
        );

        assert_eq!(stale.unwrap(), None);
        let fresh = fresh.unwrap().unwrap();
        assert!(fresh.items.iter().all(|p| p.location.city == "Lyon"));
        assert_eq!(fresh.total, 2);
    }
}
