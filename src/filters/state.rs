use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use super::types::{FilterKey, Range, SortOrder, TransactionType};
use super::value::{parse_flag, parse_number, parse_page, RawValue};

/// Complete description of a listing search.
///
/// Every field is always present; "no constraint" is spelled as an empty
/// string, `None`, an empty set or `false`. `Default` is the cleared state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub transaction_type: TransactionType,
    pub property_type: String,
    pub city: String,
    pub neighborhood: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_surface: Option<f64>,
    pub max_surface: Option<f64>,
    /// Minimum number of rooms
    pub rooms: Option<f64>,
    /// Minimum number of parking spots
    pub parking: Option<f64>,
    pub year_built: Range,
    pub price_per_sqft: Range,
    /// Required features, all must be present
    pub features: BTreeSet<String>,
    pub verified: bool,
    pub featured: bool,
    pub query: String,
    pub sort: SortOrder,
    #[serde(deserialize_with = "deserialize_page")]
    pub page: u32,
    pub agent: String,
}

// Stored blobs go through the same page rule as live updates.
fn deserialize_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawValue::deserialize(deserializer)?;
    Ok(parse_page(&raw))
}

// Free text is stored trimmed, so a whitespace-only value reads as "any".
fn text_value(raw: &RawValue) -> String {
    raw.to_text().trim().to_string()
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            transaction_type: TransactionType::Any,
            property_type: String::new(),
            city: String::new(),
            neighborhood: String::new(),
            min_price: None,
            max_price: None,
            min_surface: None,
            max_surface: None,
            rooms: None,
            parking: None,
            year_built: Range::default(),
            price_per_sqft: Range::default(),
            features: BTreeSet::new(),
            verified: false,
            featured: false,
            query: String::new(),
            sort: SortOrder::Newest,
            page: 1,
            agent: String::new(),
        }
    }
}

/// Borrowed view of one field, used to compare a field across two states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Option<f64>),
    Flag(bool),
    Transaction(TransactionType),
    Sort(SortOrder),
    Page(u32),
    Features(&'a BTreeSet<String>),
}

impl FilterState {
    /// Returns a copy of the state with `key` updated from a raw control value.
    ///
    /// Any key other than `page` sends the search back to page 1.
    pub fn with_field(&self, key: FilterKey, raw: impl Into<RawValue>) -> FilterState {
        let mut next = self.clone();
        next.assign(key, &raw.into());
        if key != FilterKey::Page {
            next.page = 1;
        }
        next
    }

    /// Current value of a single field.
    pub fn field(&self, key: FilterKey) -> FieldValue<'_> {
        match key {
            FilterKey::TransactionType => FieldValue::Transaction(self.transaction_type),
            FilterKey::PropertyType => FieldValue::Text(&self.property_type),
            FilterKey::City => FieldValue::Text(&self.city),
            FilterKey::Neighborhood => FieldValue::Text(&self.neighborhood),
            FilterKey::Query => FieldValue::Text(&self.query),
            FilterKey::Agent => FieldValue::Text(&self.agent),
            FilterKey::Features => FieldValue::Features(&self.features),
            FilterKey::Verified => FieldValue::Flag(self.verified),
            FilterKey::Featured => FieldValue::Flag(self.featured),
            FilterKey::Sort => FieldValue::Sort(self.sort),
            FilterKey::Page => FieldValue::Page(self.page),
            numeric => FieldValue::Number(self.number_slot(numeric).flatten()),
        }
    }

    fn assign(&mut self, key: FilterKey, raw: &RawValue) {
        match key {
            FilterKey::TransactionType => {
                self.transaction_type = TransactionType::parse_lenient(&raw.to_text())
            }
            FilterKey::PropertyType => self.property_type = text_value(raw),
            FilterKey::City => self.city = text_value(raw),
            FilterKey::Neighborhood => self.neighborhood = text_value(raw),
            FilterKey::Query => self.query = text_value(raw),
            FilterKey::Agent => self.agent = text_value(raw),
            FilterKey::Features => self.assign_features(raw),
            FilterKey::Verified => self.verified = parse_flag(raw),
            FilterKey::Featured => self.featured = parse_flag(raw),
            FilterKey::Sort => self.sort = SortOrder::parse_lenient(&raw.to_text()),
            FilterKey::Page => self.page = parse_page(raw),
            numeric => {
                if let Some(slot) = self.number_slot_mut(numeric) {
                    *slot = parse_number(raw);
                }
            }
        }
    }

    // A single feature toggles, a list replaces the set wholesale.
    fn assign_features(&mut self, raw: &RawValue) {
        match raw {
            RawValue::List(items) => {
                self.features = items
                    .iter()
                    .map(|item| item.trim())
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            RawValue::Empty => self.features.clear(),
            single => {
                let feature = single.to_text();
                let feature = feature.trim();
                if feature.is_empty() {
                    return;
                }
                if !self.features.remove(feature) {
                    self.features.insert(feature.to_string());
                }
            }
        }
    }

    fn number_slot(&self, key: FilterKey) -> Option<Option<f64>> {
        let slot = match key {
            FilterKey::MinPrice => self.min_price,
            FilterKey::MaxPrice => self.max_price,
            FilterKey::MinSurface => self.min_surface,
            FilterKey::MaxSurface => self.max_surface,
            FilterKey::Rooms => self.rooms,
            FilterKey::Parking => self.parking,
            FilterKey::YearBuiltMin => self.year_built.min,
            FilterKey::YearBuiltMax => self.year_built.max,
            FilterKey::PricePerSqftMin => self.price_per_sqft.min,
            FilterKey::PricePerSqftMax => self.price_per_sqft.max,
            _ => return None,
        };
        Some(slot)
    }

    fn number_slot_mut(&mut self, key: FilterKey) -> Option<&mut Option<f64>> {
        let slot = match key {
            FilterKey::MinPrice => &mut self.min_price,
            FilterKey::MaxPrice => &mut self.max_price,
            FilterKey::MinSurface => &mut self.min_surface,
            FilterKey::MaxSurface => &mut self.max_surface,
            FilterKey::Rooms => &mut self.rooms,
            FilterKey::Parking => &mut self.parking,
            FilterKey::YearBuiltMin => &mut self.year_built.min,
            FilterKey::YearBuiltMax => &mut self.year_built.max,
            FilterKey::PricePerSqftMin => &mut self.price_per_sqft.min,
            FilterKey::PricePerSqftMax => &mut self.price_per_sqft.max,
            _ => return None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u32) -> FilterState {
        FilterState {
            page,
            ..FilterState::default()
        }
    }

    #[test]
    fn with_field_resets_page_for_every_other_key() {
        let state = on_page(9);
        for key in FilterKey::ALL.into_iter().filter(|k| *k != FilterKey::Page) {
            assert_eq!(state.with_field(key, "1").page, 1, "{key} kept the page");
        }
    }

    #[test]
    fn with_field_page_changes_nothing_else() {
        let state = FilterState::default()
            .with_field(FilterKey::City, "Lyon")
            .with_field(FilterKey::Features, "Pool");
        let paged = state.with_field(FilterKey::Page, "7");
        assert_eq!(paged.page, 7);
        assert_eq!(FilterState { page: 1, ..paged }, state);
    }

    #[test]
    fn with_field_does_not_touch_the_original() {
        let state = on_page(4);
        let _ = state.with_field(FilterKey::City, "Nice");
        assert_eq!(state.city, "");
        assert_eq!(state.page, 4);
    }

    #[test]
    fn nested_update_keeps_sibling() {
        let state = FilterState::default()
            .with_field(FilterKey::YearBuiltMin, "1990")
            .with_field(FilterKey::YearBuiltMax, 2005);
        assert_eq!(
            state.year_built,
            Range {
                min: Some(1990.0),
                max: Some(2005.0)
            }
        );

        let cleared = state.with_field(FilterKey::YearBuiltMin, "");
        assert_eq!(cleared.year_built.min, None);
        assert_eq!(cleared.year_built.max, Some(2005.0));
        assert!(cleared.price_per_sqft.is_unbounded());
    }

    #[test]
    fn features_toggle_and_replace() {
        let state = FilterState::default()
            .with_field(FilterKey::Features, "Parking")
            .with_field(FilterKey::Features, "Elevator");
        assert_eq!(state.features.len(), 2);

        let toggled = state.with_field(FilterKey::Features, "Parking");
        assert!(!toggled.features.contains("Parking"));
        assert!(toggled.features.contains("Elevator"));

        let replaced = state.with_field(FilterKey::Features, vec!["Pool".to_string()]);
        assert_eq!(replaced.features.iter().collect::<Vec<_>>(), vec!["Pool"]);

        let blank = state.with_field(FilterKey::Features, "  ");
        assert_eq!(blank.features, state.features);
    }

    #[test]
    fn flags_and_enums_normalize() {
        let state = FilterState::default()
            .with_field(FilterKey::Verified, "on")
            .with_field(FilterKey::TransactionType, "rent")
            .with_field(FilterKey::Sort, "size-small");
        assert!(state.verified);
        assert_eq!(state.transaction_type, TransactionType::Rent);
        assert_eq!(state.sort, SortOrder::SizeSmall);

        let reset = state.with_field(FilterKey::Sort, RawValue::Empty);
        assert_eq!(reset.sort, SortOrder::Newest);
    }

    #[test]
    fn deserializes_partial_blob_with_defaults() {
        let state: FilterState =
            serde_json::from_str(r#"{"city":"Paris","yearBuilt":{"min":1990,"max":null}}"#)
                .unwrap();
        assert_eq!(state.city, "Paris");
        assert_eq!(state.year_built.min, Some(1990.0));
        assert_eq!(state.page, 1);
        assert_eq!(state.sort, SortOrder::Newest);
    }

    #[test]
    fn text_is_stored_trimmed() {
        let state = FilterState::default()
            .with_field(FilterKey::City, " Paris ")
            .with_field(FilterKey::Query, "   ");
        assert_eq!(state.city, "Paris");
        assert_eq!(state.query, "");
    }

    #[test]
    fn stored_page_is_always_positive() {
        let zero: FilterState = serde_json::from_str(r#"{"page":0}"#).unwrap();
        assert_eq!(zero.page, 1);
        assert_eq!(zero.field(FilterKey::Page), FieldValue::Page(1));

        let negative: FilterState = serde_json::from_str(r#"{"page":-4}"#).unwrap();
        assert_eq!(negative.page, 1);

        let kept: FilterState = serde_json::from_str(r#"{"page":6}"#).unwrap();
        assert_eq!(kept.page, 6);
    }
}
