//! Per-session owner of the current search.

use tracing::debug;

use crate::filters::{
    apply_view_cap, CappedView, FilterKey, FilterState, QuerySpec, QuickFilter, RawValue, ViewCap,
};
use crate::saved::SavedSearch;

/// Holds the search of one UI session and applies user edits to it.
///
/// Every mutator returns a snapshot of the new state; the engine never hands
/// out a mutable reference.
#[derive(Debug, Clone, Default)]
pub struct SearchFilterEngine {
    state: FilterState,
}

impl SearchFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing state, e.g. one seeded from the URL.
    pub fn with_state(state: FilterState) -> Self {
        Self { state }
    }

    /// Starts from URL parameters.
    pub fn from_query_str(query: &str) -> Self {
        Self::with_state(FilterState::from_query_str(query))
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_field(&mut self, key: FilterKey, raw: impl Into<RawValue>) -> FilterState {
        self.state = self.state.with_field(key, raw);
        self.state.clone()
    }

    /// Untyped variant of [`SearchFilterEngine::set_field`]; unknown keys
    /// leave the state as it is.
    pub fn set_field_str(&mut self, key: &str, raw: impl Into<RawValue>) -> FilterState {
        match key.parse::<FilterKey>() {
            Ok(key) => self.set_field(key, raw),
            Err(err) => {
                debug!("Ignoring update: {}", err);
                self.state.clone()
            }
        }
    }

    pub fn apply_quick_filter(&mut self, quick_filter: &QuickFilter) -> FilterState {
        debug!("Applying quick filter {:?}", quick_filter.label);
        self.state = self.state.with_quick_filter(quick_filter);
        self.state.clone()
    }

    pub fn is_quick_filter_active(&self, quick_filter: &QuickFilter) -> bool {
        quick_filter.is_active(&self.state)
    }

    pub fn clear(&mut self) -> FilterState {
        self.state = FilterState::default();
        self.state.clone()
    }

    /// Replaces the current search with a saved one, back on page 1.
    pub fn restore(&mut self, saved: &SavedSearch) -> FilterState {
        self.state = saved.replay();
        self.state.clone()
    }

    pub fn serialize_for_fetch(&self) -> QuerySpec {
        self.state.to_query_spec()
    }

    pub fn apply_view_cap<'a, T>(&self, items: &'a [T], cap: &ViewCap) -> CappedView<'a, T> {
        apply_view_cap(items, cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SortOrder;

    #[test]
    fn mutators_return_the_new_state() {
        let mut engine = SearchFilterEngine::new();
        let returned = engine.set_field(FilterKey::City, "Paris");
        assert_eq!(&returned, engine.state());
        assert_eq!(returned.city, "Paris");
    }

    #[test]
    fn unknown_string_key_is_ignored() {
        let mut engine = SearchFilterEngine::new();
        engine.set_field(FilterKey::Page, 4);
        let state = engine.set_field_str("bedrooms", "3");
        assert_eq!(state.page, 4);
        assert_eq!(state, FilterState::default().with_field(FilterKey::Page, 4));
    }

    #[test]
    fn string_keys_reach_nested_fields() {
        let mut engine = SearchFilterEngine::new();
        let state = engine.set_field_str("pricePerSqft.max", "350");
        assert_eq!(state.price_per_sqft.max, Some(350.0));
    }

    #[test]
    fn clear_restores_defaults() {
        let mut engine = SearchFilterEngine::from_query_str("city=Nice&sort=oldest&page=6");
        assert_eq!(engine.state().sort, SortOrder::Oldest);
        assert_eq!(engine.clear(), FilterState::default());
    }

    #[test]
    fn restore_replays_from_page_one() {
        let filters = FilterState::default()
            .with_field(FilterKey::City, "Lyon")
            .with_field(FilterKey::Page, 3);
        let saved = SavedSearch::new("Lyon", "bureaux", filters);

        let mut engine = SearchFilterEngine::new();
        engine.set_field(FilterKey::Featured, true);
        let state = engine.restore(&saved);
        assert_eq!(state.city, "Lyon");
        assert!(!state.featured);
        assert_eq!(state.page, 1);
    }
}
