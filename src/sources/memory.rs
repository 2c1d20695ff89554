use crate::filters::{QuerySpec, Range, SortOrder};
use crate::models::{ListingPage, Pagination, Property};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use std::cmp::Ordering;
use tracing::debug;

/// Listing source that answers queries from an owned catalogue
pub struct InMemoryListingSource {
    listings: Vec<Property>,
    page_size: usize,
}

impl InMemoryListingSource {
    pub fn new(listings: Vec<Property>, page_size: usize) -> Self {
        Self {
            listings,
            page_size: page_size.max(1),
        }
    }

    /// Run a query synchronously
    pub fn query(&self, query: &QuerySpec) -> ListingPage<Property> {
        let mut matched: Vec<&Property> = self
            .listings
            .iter()
            .filter(|property| matches(query, property))
            .collect();
        matched.sort_by(|a, b| compare(query.sort, a, b));

        let total = matched.len();
        let total_pages = total.div_ceil(self.page_size);
        let start = (query.page.max(1) as usize - 1).saturating_mul(self.page_size);

        let items = matched
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        ListingPage {
            items,
            pagination: Pagination { total_pages, total },
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(query: &QuerySpec, property: &Property) -> bool {
    if let Some(transaction_type) = query.transaction_type {
        if property.transaction_type != transaction_type {
            return false;
        }
    }
    if let Some(property_type) = &query.property_type {
        if !property.property_type.eq_ignore_ascii_case(property_type) {
            return false;
        }
    }
    if let Some(city) = &query.city {
        if !contains_ci(&property.location.city, city) {
            return false;
        }
    }
    if let Some(neighborhood) = &query.neighborhood {
        let found = property
            .location
            .neighborhood
            .as_deref()
            .is_some_and(|n| contains_ci(n, neighborhood));
        if !found {
            return false;
        }
    }

    let price = Range {
        min: query.min_price,
        max: query.max_price,
    };
    let surface = Range {
        min: query.min_surface,
        max: query.max_surface,
    };
    if !price.contains(property.price) || !surface.contains(property.surface) {
        return false;
    }
    if query.rooms.is_some_and(|min| f64::from(property.rooms) < min) {
        return false;
    }
    if query.parking.is_some_and(|min| f64::from(property.parking) < min) {
        return false;
    }

    let year_built = Range {
        min: query.year_built_min,
        max: query.year_built_max,
    };
    if !year_built.is_unbounded() {
        match property.year_built {
            Some(year) if year_built.contains(f64::from(year)) => {}
            _ => return false,
        }
    }

    let price_per_sqft = Range {
        min: query.price_per_sqft_min,
        max: query.price_per_sqft_max,
    };
    if !price_per_sqft.is_unbounded() {
        match property.price_per_sqft() {
            Some(value) if price_per_sqft.contains(value) => {}
            _ => return false,
        }
    }

    if !query.features.iter().all(|f| property.has_feature(f)) {
        return false;
    }
    if query.verified == Some(true) && !property.verified {
        return false;
    }
    if query.featured == Some(true) && !property.featured {
        return false;
    }
    if let Some(text) = &query.query {
        if !contains_ci(&property.title, text) && !contains_ci(&property.description, text) {
            return false;
        }
    }
    if let Some(agent) = &query.agent {
        if &property.agent_id != agent {
            return false;
        }
    }
    true
}

fn compare(sort: SortOrder, a: &Property, b: &Property) -> Ordering {
    let newest = b.created_at.cmp(&a.created_at);
    let ordering = match sort {
        SortOrder::Newest => newest,
        SortOrder::Oldest => a.created_at.cmp(&b.created_at),
        SortOrder::PriceLow => a.price.total_cmp(&b.price),
        SortOrder::PriceHigh => b.price.total_cmp(&a.price),
        SortOrder::SizeLarge => b.surface.total_cmp(&a.surface),
        SortOrder::SizeSmall => a.surface.total_cmp(&b.surface),
        SortOrder::Trending => b.views.cmp(&a.views),
        SortOrder::Featured => b.featured.cmp(&a.featured),
    };
    ordering.then(newest).then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ListingSource for InMemoryListingSource {
    async fn fetch(&self, query: &QuerySpec) -> Result<ListingPage<Property>> {
        let page = self.query(query);
        debug!(
            "Matched {} of {} listings in memory",
            page.pagination.total,
            self.listings.len()
        );
        Ok(page)
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}
