use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of transaction a listing is offered under
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// No constraint
    #[default]
    #[serde(rename = "")]
    Any,
    #[serde(rename = "sale")]
    Sale,
    #[serde(rename = "rent")]
    Rent,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Any => "",
            TransactionType::Sale => "sale",
            TransactionType::Rent => "rent",
        }
    }

    /// Exact wire name only, `""` being "any".
    pub fn parse_strict(raw: &str) -> Option<Self> {
        [TransactionType::Any, TransactionType::Sale, TransactionType::Rent]
            .into_iter()
            .find(|kind| kind.as_str() == raw)
    }

    /// Unrecognized input means "any".
    pub fn parse_lenient(raw: &str) -> Self {
        Self::parse_strict(&raw.trim().to_ascii_lowercase()).unwrap_or_default()
    }
}

/// Result ordering requested from the listing source
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    SizeLarge,
    SizeSmall,
    Trending,
    Featured,
}

impl SortOrder {
    pub const ALL: [SortOrder; 8] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::SizeLarge,
        SortOrder::SizeSmall,
        SortOrder::Trending,
        SortOrder::Featured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::SizeLarge => "size-large",
            SortOrder::SizeSmall => "size-small",
            SortOrder::Trending => "trending",
            SortOrder::Featured => "featured",
        }
    }

    pub fn parse_strict(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.as_str() == raw)
    }

    /// Unrecognized input falls back to `newest`.
    pub fn parse_lenient(raw: &str) -> Self {
        Self::parse_strict(&raw.trim().to_ascii_lowercase()).unwrap_or_default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive numeric bounds, either side optional
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Range {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// True when `value` satisfies both bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Returned when a field name does not map to any filter.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter key: {0}")]
pub struct UnknownFilterKey(pub String);

/// Every settable field of a [`FilterState`](super::FilterState).
///
/// Nested range members get their own variant so that a dotted update such as
/// `yearBuilt.min` can only ever touch the named side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    TransactionType,
    PropertyType,
    City,
    Neighborhood,
    MinPrice,
    MaxPrice,
    MinSurface,
    MaxSurface,
    Rooms,
    Parking,
    YearBuiltMin,
    YearBuiltMax,
    PricePerSqftMin,
    PricePerSqftMax,
    Features,
    Verified,
    Featured,
    Query,
    Sort,
    Page,
    Agent,
}

impl FilterKey {
    pub const ALL: [FilterKey; 21] = [
        FilterKey::TransactionType,
        FilterKey::PropertyType,
        FilterKey::City,
        FilterKey::Neighborhood,
        FilterKey::MinPrice,
        FilterKey::MaxPrice,
        FilterKey::MinSurface,
        FilterKey::MaxSurface,
        FilterKey::Rooms,
        FilterKey::Parking,
        FilterKey::YearBuiltMin,
        FilterKey::YearBuiltMax,
        FilterKey::PricePerSqftMin,
        FilterKey::PricePerSqftMax,
        FilterKey::Features,
        FilterKey::Verified,
        FilterKey::Featured,
        FilterKey::Query,
        FilterKey::Sort,
        FilterKey::Page,
        FilterKey::Agent,
    ];

    /// Canonical name, dotted for nested members.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::TransactionType => "transactionType",
            FilterKey::PropertyType => "propertyType",
            FilterKey::City => "city",
            FilterKey::Neighborhood => "neighborhood",
            FilterKey::MinPrice => "minPrice",
            FilterKey::MaxPrice => "maxPrice",
            FilterKey::MinSurface => "minSurface",
            FilterKey::MaxSurface => "maxSurface",
            FilterKey::Rooms => "rooms",
            FilterKey::Parking => "parking",
            FilterKey::YearBuiltMin => "yearBuilt.min",
            FilterKey::YearBuiltMax => "yearBuilt.max",
            FilterKey::PricePerSqftMin => "pricePerSqft.min",
            FilterKey::PricePerSqftMax => "pricePerSqft.max",
            FilterKey::Features => "features",
            FilterKey::Verified => "verified",
            FilterKey::Featured => "featured",
            FilterKey::Query => "query",
            FilterKey::Sort => "sort",
            FilterKey::Page => "page",
            FilterKey::Agent => "agent",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = UnknownFilterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "yearBuiltMin" => FilterKey::YearBuiltMin,
            "yearBuiltMax" => FilterKey::YearBuiltMax,
            "pricePerSqftMin" => FilterKey::PricePerSqftMin,
            "pricePerSqftMax" => FilterKey::PricePerSqftMax,
            "q" => FilterKey::Query,
            other => FilterKey::ALL
                .into_iter()
                .find(|key| key.as_str() == other)
                .ok_or_else(|| UnknownFilterKey(other.to_string()))?,
        };
        Ok(key)
    }
}
