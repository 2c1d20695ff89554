//! Named searches a user can come back to.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filters::FilterState;

/// A search stored under a name and category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub name: String,
    pub category: String,
    pub filters: FilterState,
    pub created_at: DateTime<Utc>,
}

impl SavedSearch {
    pub fn new(name: impl Into<String>, category: impl Into<String>, filters: FilterState) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            filters,
            created_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize saved search")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse saved search")
    }

    /// The stored filters, back on the first page.
    pub fn replay(&self) -> FilterState {
        FilterState {
            page: 1,
            ..self.filters.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterKey;

    #[test]
    fn survives_json_storage() {
        let filters = FilterState::default()
            .with_field(FilterKey::TransactionType, "rent")
            .with_field(FilterKey::Features, "Fibre")
            .with_field(FilterKey::YearBuiltMin, 2000);
        let saved = SavedSearch::new("Bureaux récents", "location", filters);

        let json = saved.to_json().unwrap();
        assert!(json.contains(r#""transactionType":"rent""#));
        assert_eq!(SavedSearch::from_json(&json).unwrap(), saved);
    }

    #[test]
    fn rejects_garbage() {
        assert!(SavedSearch::from_json("{\"name\": 3}").is_err());
    }
}
