pub mod client;
pub mod error;
pub mod model;
pub mod normalize;
pub mod placeholder;

pub use client::{ListingSource, ListingsClient};
pub use error::SearchError;
pub use model::{dedupe_by_id, Listing, SearchResults};
