use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::{Body, Request, Response};

use crate::db::connection::{init_db, Database};

/// Fresh test database on the production schema, unique per call.
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{tag}_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn post(path: &str, body: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(path)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn options(path: &str) -> Request {
    http::Request::builder()
        .method("OPTIONS")
        .uri(path)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
