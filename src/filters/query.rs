use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::form_urlencoded;

use super::state::FilterState;
use super::types::{FilterKey, SortOrder, TransactionType};
use super::value::RawValue;

/// Minimal query handed to a listing source.
///
/// Only constraints that narrow the result set are present; `sort` and `page`
/// are always sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_surface: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_surface: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_sqft_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_sqft_max: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    pub sort: SortOrder,
    pub page: u32,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn fmt_number(value: f64) -> String {
    value.to_string()
}

impl FilterState {
    /// Projects the state into the shape listing sources expect.
    pub fn to_query_spec(&self) -> QuerySpec {
        QuerySpec {
            transaction_type: (self.transaction_type != TransactionType::Any)
                .then_some(self.transaction_type),
            property_type: non_blank(&self.property_type),
            city: non_blank(&self.city),
            neighborhood: non_blank(&self.neighborhood),
            min_price: self.min_price,
            max_price: self.max_price,
            min_surface: self.min_surface,
            max_surface: self.max_surface,
            rooms: self.rooms,
            parking: self.parking,
            year_built_min: self.year_built.min,
            year_built_max: self.year_built.max,
            price_per_sqft_min: self.price_per_sqft.min,
            price_per_sqft_max: self.price_per_sqft.max,
            features: self.features.iter().cloned().collect(),
            verified: self.verified.then_some(true),
            featured: self.featured.then_some(true),
            query: non_blank(&self.query),
            agent: non_blank(&self.agent),
            sort: self.sort,
            page: self.page.max(1),
        }
    }

    /// Seeds a state from URL parameters, e.g. `city=Paris&minPrice=100000`.
    pub fn from_query_str(query: &str) -> FilterState {
        let query = query.trim_start_matches('?');
        Self::from_query_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Seeds a state from decoded `(name, value)` pairs.
    ///
    /// Unknown names are skipped. Each `features` pair names one feature.
    /// `page` is applied after everything else so it is not reset.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> FilterState
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut state = FilterState::default();
        let mut features: Vec<String> = Vec::new();
        let mut page: Option<String> = None;

        for (name, value) in pairs {
            let value = value.into();
            match name.as_ref().parse::<FilterKey>() {
                Ok(FilterKey::Features) => features.push(value),
                Ok(FilterKey::Page) => page = Some(value),
                Ok(key) => state = state.with_field(key, value),
                Err(err) => debug!("Ignoring query parameter: {}", err),
            }
        }

        if !features.is_empty() {
            state = state.with_field(FilterKey::Features, RawValue::List(features));
        }
        if let Some(page) = page {
            state = state.with_field(FilterKey::Page, page);
        }
        state
    }
}

impl QuerySpec {
    /// Ordered `(name, value)` pairs for a URL query string.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut text = |name: &'static str, value: &Option<String>| {
            if let Some(value) = value {
                pairs.push((name, value.clone()));
            }
        };
        text("transactionType", &self.transaction_type.map(|t| t.as_str().to_string()));
        text("propertyType", &self.property_type);
        text("city", &self.city);
        text("neighborhood", &self.neighborhood);

        let numbers = [
            ("minPrice", self.min_price),
            ("maxPrice", self.max_price),
            ("minSurface", self.min_surface),
            ("maxSurface", self.max_surface),
            ("rooms", self.rooms),
            ("parking", self.parking),
            ("yearBuiltMin", self.year_built_min),
            ("yearBuiltMax", self.year_built_max),
            ("pricePerSqftMin", self.price_per_sqft_min),
            ("pricePerSqftMax", self.price_per_sqft_max),
        ];
        for (name, value) in numbers {
            if let Some(value) = value {
                pairs.push((name, fmt_number(value)));
            }
        }

        for feature in &self.features {
            pairs.push(("features", feature.clone()));
        }
        if self.verified == Some(true) {
            pairs.push(("verified", "true".to_string()));
        }
        if self.featured == Some(true) {
            pairs.push(("featured", "true".to_string()));
        }
        if let Some(query) = &self.query {
            pairs.push(("q", query.clone()));
        }
        if let Some(agent) = &self.agent {
            pairs.push(("agent", agent.clone()));
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs
    }

    /// URL-encoded form of [`QuerySpec::to_query_pairs`].
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }

    /// Stable JSON form, suitable as a cache key.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize query")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_only_sends_sort_and_page() {
        let spec = FilterState::default().to_query_spec();
        assert_eq!(spec.to_json().unwrap(), r#"{"sort":"newest","page":1}"#);
        assert_eq!(spec.to_query_string(), "sort=newest&page=1");
    }

    #[test]
    fn serialization_is_repeatable() {
        let state = FilterState::default()
            .with_field(FilterKey::Features, "Pool")
            .with_field(FilterKey::Features, "Elevator")
            .with_field(FilterKey::City, "Lyon")
            .with_field(FilterKey::PricePerSqftMax, "4200.5");
        let first = state.to_query_spec();
        let second = state.to_query_spec();
        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        assert_eq!(
            first.to_query_string(),
            "city=Lyon&pricePerSqftMax=4200.5&features=Elevator&features=Pool&sort=newest&page=1"
        );
    }

    #[test]
    fn blank_text_is_dropped() {
        let spec = FilterState::default()
            .with_field(FilterKey::City, "   ")
            .with_field(FilterKey::Query, "loft")
            .to_query_spec();
        assert_eq!(spec.city, None);
        assert_eq!(spec.query.as_deref(), Some("loft"));
        assert!(spec.to_json().unwrap().contains(r#""q":"loft""#));
    }

    #[test]
    fn seeds_from_url_parameters() {
        let state = FilterState::from_query_str(
            "?transactionType=rent&city=Paris&minPrice=1500&q=terrasse&page=3&features=Parking&features=Pool&utm_source=mail",
        );
        assert_eq!(state.transaction_type, TransactionType::Rent);
        assert_eq!(state.city, "Paris");
        assert_eq!(state.min_price, Some(1500.0));
        assert_eq!(state.query, "terrasse");
        assert_eq!(state.page, 3);
        assert_eq!(state.features.len(), 2);
    }

    #[test]
    fn url_round_trip_preserves_state() {
        let state = FilterState::default()
            .with_field(FilterKey::TransactionType, "sale")
            .with_field(FilterKey::Neighborhood, "Marais")
            .with_field(FilterKey::YearBuiltMin, 1990)
            .with_field(FilterKey::Features, "Parking")
            .with_field(FilterKey::Verified, true)
            .with_field(FilterKey::Sort, "price-high")
            .with_field(FilterKey::Page, 4);
        let query = state.to_query_spec().to_query_string();
        assert_eq!(FilterState::from_query_str(&query), state);
    }

    #[test]
    fn url_round_trip_keeps_commas_in_features() {
        let state = FilterState::default()
            .with_field(FilterKey::Features, "Bureaux, open space")
            .with_field(FilterKey::Features, "Fibre");
        let query = state.to_query_spec().to_query_string();
        let seeded = FilterState::from_query_str(&query);
        assert_eq!(seeded.features.len(), 2);
        assert!(seeded.features.contains("Bureaux, open space"));
        assert_eq!(seeded, state);
    }

    #[test]
    fn url_round_trip_with_padded_text() {
        let state = FilterState::default()
            .with_field(FilterKey::City, " Paris")
            .with_field(FilterKey::Query, "open space  ");
        let query = state.to_query_spec().to_query_string();
        assert_eq!(FilterState::from_query_str(&query), state);
    }
}
