//! Search, filter and pagination state for commercial real-estate listings.

pub mod config;
pub mod engine;
pub mod filters;
pub mod models;
pub mod saved;
pub mod session;
pub mod sources;

pub use crate::config::SearchConfig;
pub use engine::SearchFilterEngine;
pub use filters::{FilterKey, FilterState, QuerySpec, QuickFilter, RawValue, ViewCap, ViewerRole};
pub use saved::SavedSearch;
pub use session::{SearchResults, SearchSession};
