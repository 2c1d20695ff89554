pub mod http;
pub mod memory;
pub mod sample;
pub mod traits;

pub use http::HttpListingSource;
pub use memory::InMemoryListingSource;
pub use sample::sample_listings;
pub use traits::ListingSource;
