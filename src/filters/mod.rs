//! Filter, sort and pagination state for the listing grid.
//!
//! All operations here are pure: they take a [`FilterState`] and hand back a
//! new one. Fetching is left to a [`ListingSource`](crate::sources::ListingSource).

pub mod query;
pub mod quick;
pub mod state;
pub mod types;
pub mod value;
pub mod view_cap;

pub use query::QuerySpec;
pub use quick::{default_quick_filters, QuickFilter};
pub use state::{FieldValue, FilterState};
pub use types::{FilterKey, Range, SortOrder, TransactionType, UnknownFilterKey};
pub use value::{parse_number, RawValue};
pub use view_cap::{apply_view_cap, CappedView, ViewCap, ViewerRole};
