//! AI property search endpoint. Accepts `{ query, filters }` over POST,
//! answers with CORS headers on every response so the marketing site can
//! call it cross-origin, and reads from the local listings table.

use astra::Request;
use serde_json::{json, Value};

use crate::db::listings::{search_listings, EdgeFilters, ListingRow};
use crate::db::Database;
use crate::responses::{cors_preflight, json_response_cors, ResultResp};

const FALLBACK_IMAGE: &str = "https://via.placeholder.com/600x400?text=Property";

pub fn handle_ai_search(req: &mut Request, db: &Database) -> ResultResp {
    if req.method().as_str() == "OPTIONS" {
        return cors_preflight();
    }

    // Body parse is best-effort: a missing or malformed body means no
    // filters, not a client error.
    let mut raw = String::new();
    let _ = std::io::Read::read_to_string(&mut req.body_mut().reader(), &mut raw);
    let body: Value = serde_json::from_str(&raw).unwrap_or_else(|_| json!({}));

    let query = body
        .get("query")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    let filters = edge_filters(body.get("filters").unwrap_or(&Value::Null));

    println!("ai-search request: query={:?} filters={:?}", query, filters);

    let rows = match search_listings(db, &filters) {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("ai-search listings query error: {err}");
            return json_response_cors(500, &json!({ "error": "Failed to fetch listings." }));
        }
    };

    let results: Vec<Value> = rows.iter().map(row_to_result).collect();
    json_response_cors(200, &json!({ "results": results }))
}

/// Pull the supported filters out of the request, coercing stringly-typed
/// numbers and dropping anything unusable.
fn edge_filters(raw: &Value) -> EdgeFilters {
    EdgeFilters {
        beds: coerce_number(raw.get("beds")),
        baths: coerce_number(raw.get("baths")),
        min_price: coerce_number(raw.get("minPrice")),
        max_price: coerce_number(raw.get("maxPrice")),
        city: raw
            .get("city")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
    }
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn row_to_result(row: &ListingRow) -> Value {
    let image = row
        .main_image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(FALLBACK_IMAGE);
    let highlights: Vec<&str> = row.highlight.as_deref().into_iter().collect();

    json!({
        "id": row.id,
        "address": row.address,
        "city": row.city,
        "state": row.state,
        "postalCode": row.postal_code,
        "neighborhood": row.neighborhood,
        "price": row.price,
        "beds": row.beds,
        "baths": row.baths,
        "sqft": row.sqft,
        "lat": row.latitude,
        "lng": row.longitude,
        "image": image,
        "url": "#",
        "highlights": highlights,
        "status": row.status.as_deref().unwrap_or("active"),
        "createdAt": row.created_at,
    })
}
