//! Normalization of raw listing records into the `Listing` shape. Upstream
//! feeds disagree on field names (MLS exports, the search proxy, seeded
//! rows), so each field is resolved through an ordered alias list and the
//! first non-null value wins.

use rand::Rng;
use serde_json::Value;

use crate::listings::model::Listing;

/// Turn one raw JSON record into a `Listing`. Returns `None` for null or
/// non-object records. A record without any id alias still normalizes; it
/// gets a random synthetic id so dedupe and card wiring keep working.
pub fn normalize_listing(raw: &Value) -> Option<Listing> {
    let obj = raw.as_object()?;
    if obj.is_empty() {
        return None;
    }

    let city = pick_str(raw, &["city"]).unwrap_or_default();
    let state = pick_str(raw, &["state"]).unwrap_or_default();
    let street = pick_str(raw, &["address"]).unwrap_or_default();

    // Display address is the comma-join of whatever parts are present.
    let address = [street.as_str(), city.as_str(), state.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    Some(Listing {
        id: pick_str(raw, &["id", "listingId", "mlsNumber", "mls_number"])
            .unwrap_or_else(generated_id),
        price: pick_u64(raw, &["price", "listPrice", "list_price"]).unwrap_or(0),
        address,
        city,
        state,
        postal_code: pick_str(raw, &["postalCode", "zip", "postal_code"]).unwrap_or_default(),
        beds: pick_u64(raw, &["beds", "bedrooms"]).map(|v| v as u32),
        baths: pick_f64(raw, &["baths", "bathrooms"]),
        sqft: pick_u64(raw, &["sqft", "squareFeet", "square_feet"]),
        lat: pick_f64(raw, &["lat", "latitude"]),
        lng: pick_f64(raw, &["lng", "longitude"]),
        image: first_image(raw),
        days_on_market: pick_u64(raw, &["daysOnMarket", "dom"]).map(|v| v as u32),
        url: pick_str(raw, &["url", "listingUrl"]).unwrap_or_else(|| "#".to_string()),
    })
}

fn generated_id() -> String {
    let token: u64 = rand::thread_rng().gen();
    format!("listing-{:016x}", token)
}

fn pick_str(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        raw.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn pick_f64(raw: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| raw.get(key).and_then(Value::as_f64))
        .filter(|v| v.is_finite())
}

fn pick_u64(raw: &Value, keys: &[&str]) -> Option<u64> {
    pick_f64(raw, keys)
        .filter(|v| *v >= 0.0)
        .map(|v| v.round() as u64)
}

/// Prefer the first entry of an `images` array, fall back to a scalar
/// `image` field, else no image.
fn first_image(raw: &Value) -> Option<String> {
    if let Some(images) = raw.get("images").and_then(Value::as_array) {
        if let Some(first) = images.iter().find_map(Value::as_str) {
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }
    pick_str(raw, &["image"])
}
