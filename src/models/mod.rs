use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filters::TransactionType;

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub neighborhood: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub transaction_type: TransactionType,
    pub property_type: String,
    pub location: Location,
    pub price: f64,
    /// Surface in square feet
    pub surface: f64,
    pub rooms: u32,
    pub parking: u32,
    pub year_built: Option<u32>,
    pub features: Vec<String>,
    pub verified: bool,
    pub featured: bool,
    pub views: u64,
    pub agent_id: String,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// `None` when the surface is unknown.
    pub fn price_per_sqft(&self) -> Option<f64> {
        (self.surface > 0.0).then(|| self.price / self.surface)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.eq_ignore_ascii_case(feature))
    }
}

/// Paging metadata returned alongside a page of listings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: usize,
    pub total: usize,
}

/// One page of results from a listing source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}
