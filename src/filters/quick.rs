use super::state::{FieldValue, FilterState};
use super::types::{FilterKey, SortOrder, TransactionType};
use super::value::{parse_number, parse_page, RawValue};

/// Named one-click shortcut that sets a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickFilter {
    pub label: String,
    pub key: FilterKey,
    pub value: RawValue,
}

impl QuickFilter {
    pub fn new(label: impl Into<String>, key: FilterKey, value: impl Into<RawValue>) -> Self {
        Self {
            label: label.into(),
            key,
            value: value.into(),
        }
    }

    /// Whether this shortcut matches the current state.
    ///
    /// Enum, flag and text values must name the stored value exactly; a value
    /// that could only match after lenient fallback never does. Numbers are
    /// compared after normalization, so `"3"` and `3` select the same rooms
    /// filter. For `features` a membership test is used.
    pub fn is_active(&self, state: &FilterState) -> bool {
        let value = &self.value;
        match self.key {
            FilterKey::Features => {
                let wanted = value.to_text();
                let wanted = wanted.trim();
                !wanted.is_empty() && state.features.contains(wanted)
            }
            FilterKey::Page => parse_number(value).is_some() && state.page == parse_page(value),
            FilterKey::Sort => match value {
                RawValue::Text(text) => SortOrder::parse_strict(text) == Some(state.sort),
                _ => false,
            },
            FilterKey::TransactionType => match value {
                RawValue::Text(text) => {
                    TransactionType::parse_strict(text) == Some(state.transaction_type)
                }
                _ => false,
            },
            FilterKey::Verified => canonical_flag(value) == Some(state.verified),
            FilterKey::Featured => canonical_flag(value) == Some(state.featured),
            key if is_text_key(key) => match value {
                RawValue::Text(text) => state.field(key) == FieldValue::Text(text.as_str()),
                _ => false,
            },
            key => parse_number(value)
                .is_some_and(|wanted| state.field(key) == FieldValue::Number(Some(wanted))),
        }
    }
}

fn is_text_key(key: FilterKey) -> bool {
    matches!(
        key,
        FilterKey::PropertyType
            | FilterKey::City
            | FilterKey::Neighborhood
            | FilterKey::Query
            | FilterKey::Agent
    )
}

fn canonical_flag(value: &RawValue) -> Option<bool> {
    match value {
        RawValue::Flag(flag) => Some(*flag),
        RawValue::Text(text) if text == "true" => Some(true),
        RawValue::Text(text) if text == "false" => Some(false),
        _ => None,
    }
}

impl FilterState {
    /// Applies a shortcut; same page-reset rule as [`FilterState::with_field`].
    pub fn with_quick_filter(&self, quick_filter: &QuickFilter) -> FilterState {
        self.with_field(quick_filter.key, quick_filter.value.clone())
    }
}

/// Shortcuts shown above the listing grid.
pub fn default_quick_filters() -> Vec<QuickFilter> {
    vec![
        QuickFilter::new("Vérifiés", FilterKey::Verified, true),
        QuickFilter::new("En vedette", FilterKey::Featured, true),
        QuickFilter::new("Tendances", FilterKey::Sort, "trending"),
        QuickFilter::new("Prix croissant", FilterKey::Sort, "price-low"),
        QuickFilter::new("Vente", FilterKey::TransactionType, "sale"),
        QuickFilter::new("Location", FilterKey::TransactionType, "rent"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SortOrder;

    #[test]
    fn activation_is_derived_from_state() {
        let featured = QuickFilter::new("En vedette", FilterKey::Featured, true);
        let verified = QuickFilter::new("Vérifiés", FilterKey::Verified, true);

        let state = FilterState::default().with_quick_filter(&featured);
        assert!(featured.is_active(&state));
        assert!(!verified.is_active(&state));
    }

    #[test]
    fn only_matching_sort_shortcut_is_active() {
        let filters = default_quick_filters();
        let trending = filters.iter().find(|f| f.label == "Tendances").unwrap();

        let state = FilterState {
            page: 5,
            ..FilterState::default()
        }
        .with_quick_filter(trending);
        assert_eq!(state.sort, SortOrder::Trending);
        assert_eq!(state.page, 1);

        let active: Vec<_> = filters
            .iter()
            .filter(|f| f.is_active(&state))
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(active, vec!["Tendances"]);
    }

    #[test]
    fn feature_shortcut_uses_membership() {
        let parking = QuickFilter::new("Parking", FilterKey::Features, "Parking");
        let state = FilterState::default()
            .with_field(FilterKey::Features, "Pool")
            .with_quick_filter(&parking);
        assert!(parking.is_active(&state));

        let toggled_off = state.with_quick_filter(&parking);
        assert!(!parking.is_active(&toggled_off));
    }

    #[test]
    fn numeric_shortcut_matches_normalized_value() {
        let three_rooms = QuickFilter::new("3+ pièces", FilterKey::Rooms, "3");
        let state = FilterState::default().with_field(FilterKey::Rooms, 3);
        assert!(three_rooms.is_active(&state));
    }

    #[test]
    fn unknown_sort_value_is_never_active() {
        let bogus = QuickFilter::new("Moins cher", FilterKey::Sort, "cheapest");
        let newest = QuickFilter::new("Récents", FilterKey::Sort, "newest");
        let state = FilterState::default();
        assert!(!bogus.is_active(&state));
        assert!(newest.is_active(&state));

        let bogus_kind = QuickFilter::new("Bail", FilterKey::TransactionType, "lease");
        assert!(!bogus_kind.is_active(&state));
    }

    #[test]
    fn flag_shortcut_needs_a_canonical_value() {
        let state = FilterState::default().with_field(FilterKey::Verified, true);
        assert!(!QuickFilter::new("Vérifiés", FilterKey::Verified, "yes").is_active(&state));
        assert!(QuickFilter::new("Vérifiés", FilterKey::Verified, "true").is_active(&state));
    }

    #[test]
    fn empty_value_is_never_active() {
        let state = FilterState::default();
        for key in [FilterKey::Query, FilterKey::City, FilterKey::Rooms, FilterKey::Verified] {
            let shortcut = QuickFilter::new("Vide", key, RawValue::Empty);
            assert!(!shortcut.is_active(&state), "{key} matched an empty value");
        }
    }

    #[test]
    fn text_shortcut_matches_exactly() {
        let paris = QuickFilter::new("Paris", FilterKey::City, "Paris");
        let state = FilterState::default().with_quick_filter(&paris);
        assert!(paris.is_active(&state));
        assert!(!QuickFilter::new("paris", FilterKey::City, "paris").is_active(&state));
    }
}
