use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::filters::codec::to_query_string;
use crate::filters::FilterSet;
use crate::listings::error::SearchError;
use crate::listings::model::SearchResults;
use crate::listings::normalize::normalize_listing;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Anything the search controller can fetch listings from. The production
/// implementation is `ListingsClient`; tests swap in scripted sources.
pub trait ListingSource {
    fn search(&self, filters: &FilterSet) -> Result<SearchResults, SearchError>;
}

/// HTTP client for the listings search endpoint. Talks to our own search
/// proxy rather than the MLS vendor directly, so no credentials live here.
pub struct ListingsClient {
    base_url: String,
    http: Client,
}

impl ListingsClient {
    pub fn new(base_url: &str) -> Result<ListingsClient, SearchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        Ok(ListingsClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Build a client pointed at `SEARCH_API_BASE`, defaulting to the
    /// local server so a single process serves both page and proxy.
    pub fn from_env() -> Result<ListingsClient, SearchError> {
        let base = std::env::var("SEARCH_API_BASE")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
        ListingsClient::new(&base)
    }
}

impl ListingSource for ListingsClient {
    fn search(&self, filters: &FilterSet) -> Result<SearchResults, SearchError> {
        let filters = apply_page_defaults(filters);
        let endpoint = format!(
            "{}/api/website_search?{}",
            self.base_url,
            to_query_string(&filters)
        );

        let response = self
            .http
            .get(&endpoint)
            .header("Accept", "application/json")
            .send()
            .map_err(|err| {
                if err.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::Network(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .map_err(|err| SearchError::Network(err.to_string()))?;

        Ok(results_from_payload(&payload, &filters))
    }
}

/// Fill in paging defaults without touching fields the caller set.
pub fn apply_page_defaults(filters: &FilterSet) -> FilterSet {
    let mut next = filters.clone();
    if next.page.is_none() {
        next.page = Some(1);
    }
    if next.page_size.is_none() {
        next.page_size = Some(DEFAULT_PAGE_SIZE);
    }
    next
}

/// Shape a proxy response body into `SearchResults`. Records that fail to
/// normalize are skipped, and missing counters fall back to what we can
/// infer from the request.
pub fn results_from_payload(payload: &Value, filters: &FilterSet) -> SearchResults {
    let items: Vec<_> = payload
        .get("items")
        .and_then(Value::as_array)
        .map(|raw| raw.iter().filter_map(normalize_listing).collect())
        .unwrap_or_default();

    let total = payload
        .get("total")
        .and_then(Value::as_u64)
        .unwrap_or(items.len() as u64);
    let page = payload
        .get("page")
        .and_then(Value::as_u64)
        .map(|v| v as u32)
        .or(filters.page)
        .unwrap_or(1);
    let page_size = payload
        .get("pageSize")
        .and_then(Value::as_u64)
        .map(|v| v as u32)
        .or(filters.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    SearchResults {
        items,
        total,
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_defaults_fill_only_missing_fields() {
        let filters = FilterSet {
            page: Some(3),
            ..FilterSet::default()
        };
        let next = apply_page_defaults(&filters);
        assert_eq!(next.page, Some(3));
        assert_eq!(next.page_size, Some(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn payload_items_normalize_and_bad_records_drop() {
        let payload = json!({
            "items": [
                { "id": "a", "price": 900000 },
                null,
                "junk",
                { "listingId": "b", "listPrice": 750000 }
            ],
            "total": 240,
            "page": 2,
            "pageSize": 20
        });

        let results = results_from_payload(&payload, &FilterSet::default());
        assert_eq!(results.items.len(), 2);
        assert_eq!(results.items[0].id, "a");
        assert_eq!(results.items[1].id, "b");
        assert_eq!(results.total, 240);
        assert_eq!(results.page, 2);
    }

    #[test]
    fn missing_counters_fall_back_to_request_values() {
        let payload = json!({ "items": [{ "id": "a" }] });
        let filters = FilterSet {
            page: Some(4),
            page_size: Some(10),
            ..FilterSet::default()
        };

        let results = results_from_payload(&payload, &filters);
        assert_eq!(results.total, 1);
        assert_eq!(results.page, 4);
        assert_eq!(results.page_size, 10);
    }

    #[test]
    fn non_array_items_yield_empty_results() {
        let payload = json!({ "items": "oops" });
        let results = results_from_payload(&payload, &FilterSet::default());
        assert!(results.items.is_empty());
        assert_eq!(results.total, 0);
    }
}
