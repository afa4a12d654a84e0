use serde_json::Value;

use crate::db::connection::Database;
use crate::db::listings::{insert_listing, ListingRow};
use crate::router::handle;
use crate::tests::utils::{make_db, options, post, read_body};

fn row(id: &str, city: &str, beds: i64, price: i64, created_at: &str) -> ListingRow {
    ListingRow {
        id: id.to_string(),
        address: format!("{id} Test Ave"),
        city: city.to_string(),
        state: "CA".to_string(),
        postal_code: "92600".to_string(),
        neighborhood: None,
        price: Some(price),
        beds: Some(beds),
        baths: Some(2.0),
        sqft: Some(1500),
        main_image_url: None,
        highlight: Some("Remodeled kitchen".to_string()),
        latitude: Some(33.6),
        longitude: Some(-117.8),
        status: Some("active".to_string()),
        created_at: created_at.to_string(),
    }
}

fn seed(db: &Database) {
    insert_listing(db, &row("oc-1", "Irvine", 4, 1_200_000, "2024-03-01T00:00:00Z"), true)
        .unwrap();
    insert_listing(db, &row("oc-2", "Irvine", 2, 700_000, "2024-04-01T00:00:00Z"), true).unwrap();
    insert_listing(db, &row("oc-3", "Tustin", 4, 950_000, "2024-05-01T00:00:00Z"), true).unwrap();
    // Inactive rows never surface.
    insert_listing(db, &row("oc-4", "Irvine", 4, 999_000, "2024-06-01T00:00:00Z"), false)
        .unwrap();
}

#[test]
fn preflight_gets_cors_and_no_content() {
    let db = make_db("edge_preflight");

    let resp = handle(options("/api/ai_search"), &db).unwrap();
    assert_eq!(resp.status(), 204);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
}

#[test]
fn filters_narrow_results_and_rows_take_frontend_shape() {
    let db = make_db("edge_filters");
    seed(&db);

    let body = r#"{ "query": "family home", "filters": { "beds": "3", "city": "irv" } }"#;
    let resp = handle(post("/api/ai_search", body), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let payload: Value = serde_json::from_str(&read_body(resp)).unwrap();
    let results = payload["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "oc-1");
    assert_eq!(results[0]["postalCode"], "92600");
    assert_eq!(results[0]["url"], "#");
    assert_eq!(results[0]["highlights"][0], "Remodeled kitchen");
    // No stored image, so the shared fallback applies.
    assert!(results[0]["image"].as_str().unwrap().contains("placeholder"));
}

#[test]
fn no_filters_returns_active_listings_newest_first() {
    let db = make_db("edge_order");
    seed(&db);

    let resp = handle(post("/api/ai_search", "{}"), &db).unwrap();
    let payload: Value = serde_json::from_str(&read_body(resp)).unwrap();
    let ids: Vec<&str> = payload["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["oc-3", "oc-2", "oc-1"]);
}

#[test]
fn malformed_body_is_treated_as_no_filters() {
    let db = make_db("edge_bad_body");
    seed(&db);

    let resp = handle(post("/api/ai_search", "not json at all"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let payload: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(payload["results"].as_array().unwrap().len(), 3);
}
