use serde::{Deserialize, Serialize};

/// The normalized property record used uniformly across the result list,
/// the map, and the rendered cards. `id` is stable across repeated fetches
/// of the same listing; dedupe and card/marker correlation key off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    /// Currency units; 0 when the source had no usable price.
    pub price: u64,
    /// Comma-joined from the non-empty address/city/state parts.
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub beds: Option<u32>,
    pub baths: Option<f64>,
    pub sqft: Option<u64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image: Option<String>,
    pub days_on_market: Option<u32>,
    /// "#" when the source offers no detail link.
    pub url: String,
}

/// One page of search results as returned by the listings client.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub items: Vec<Listing>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Drop listings that repeat an id already seen, preserving first-seen
/// order. Records without an id never make it this far.
pub fn dedupe_by_id(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = std::collections::HashSet::new();
    listings
        .into_iter()
        .filter(|listing| seen.insert(listing.id.clone()))
        .collect()
}
