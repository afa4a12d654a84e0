//! Server-side proxy for the Repliers listing search. Keeps the vendor API
//! key off the client, whitelists the query parameters it will forward, and
//! reshapes the vendor payload into the `{ items, total, page, pageSize }`
//! envelope the rest of the site expects.

use std::time::Duration;

use astra::Request;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use url::form_urlencoded;

use crate::responses::{json_response, method_not_allowed, ResultResp};

const REPLIERS_ENDPOINT: &str = "https://api.repliers.io/v1/website_search";

const ALLOWED_PARAMS: [&str; 15] = [
    "q",
    "minPrice",
    "maxPrice",
    "beds",
    "baths",
    "propertyType",
    "minSqft",
    "maxHOA",
    "minYear",
    "hasPool",
    "hasView",
    "page",
    "pageSize",
    "bbox",
    "sort",
];

static UPSTREAM: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .unwrap_or_else(|_| Client::new())
});

pub fn handle_website_search(req: &Request) -> ResultResp {
    if req.method().as_str() != "GET" {
        return Ok(method_not_allowed("GET"));
    }

    let api_key = match std::env::var("REPLIERS_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            return json_response(500, &json!({ "error": "REPLIERS_API_KEY is not configured" }))
        }
    };

    let params = forwardable_params(req.uri().query().unwrap_or(""));
    let upstream_url = build_upstream_url(&params);

    let response = match UPSTREAM
        .get(&upstream_url)
        .bearer_auth(&api_key)
        .header("Accept", "application/json")
        .send()
    {
        Ok(response) => response,
        Err(err) => {
            eprintln!("Repliers proxy error: {err}");
            return json_response(502, &json!({ "error": "Failed to reach Repliers API" }));
        }
    };

    let status = response.status();
    let payload: Value = response.json().unwrap_or_else(|_| json!({}));

    if !status.is_success() {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Upstream request failed");
        return json_response(status.as_u16(), &json!({ "error": message }));
    }

    json_response(200, &normalize_payload(&payload, &params))
}

/// Keep only the whitelisted parameters, honoring the legacy snake_case
/// price aliases when the camelCase spellings are absent.
fn forwardable_params(raw_query: &str) -> Vec<(String, String)> {
    let pairs: Vec<(String, String)> = form_urlencoded::parse(raw_query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut params: Vec<(String, String)> = Vec::new();
    for allowed in ALLOWED_PARAMS {
        for (key, value) in &pairs {
            if key == allowed {
                params.push((key.clone(), value.clone()));
            }
        }
    }

    for (legacy, canonical) in [("min_price", "minPrice"), ("max_price", "maxPrice")] {
        if !params.iter().any(|(k, _)| k == canonical) {
            if let Some((_, value)) = pairs.iter().find(|(k, _)| k == legacy) {
                params.push((canonical.to_string(), value.clone()));
            }
        }
    }

    if !params.iter().any(|(k, _)| k == "page") {
        params.push(("page".to_string(), "1".to_string()));
    }
    if !params.iter().any(|(k, _)| k == "pageSize") {
        params.push(("pageSize".to_string(), "20".to_string()));
    }

    params
}

fn build_upstream_url(params: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    format!("{}?{}", REPLIERS_ENDPOINT, serializer.finish())
}

/// Vendor payloads use either items/listings and total/totalResults; the
/// site only ever sees the canonical spellings.
fn normalize_payload(payload: &Value, params: &[(String, String)]) -> Value {
    let items = payload
        .get("items")
        .or_else(|| payload.get("listings"))
        .cloned()
        .filter(Value::is_array)
        .unwrap_or_else(|| json!([]));

    let total = payload
        .get("total")
        .or_else(|| payload.get("totalResults"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let page = payload
        .get("page")
        .and_then(Value::as_u64)
        .unwrap_or_else(|| param_number(params, "page", 1));
    let page_size = payload
        .get("pageSize")
        .and_then(Value::as_u64)
        .unwrap_or_else(|| param_number(params, "pageSize", 20));

    json!({
        "items": items,
        "total": total,
        "page": page,
        "pageSize": page_size,
    })
}

fn param_number(params: &[(String, String)], key: &str, fallback: u64) -> u64 {
    params
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(fallback)
}
