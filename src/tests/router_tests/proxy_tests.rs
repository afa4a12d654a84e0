use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db, post, read_body};

#[test]
fn proxy_rejects_non_get_with_allow_header() {
    let db = make_db("proxy_method");

    let resp = handle(post("/api/website_search?q=Irvine", ""), &db).unwrap();
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.headers().get("Allow").unwrap(), "GET");

    let body = read_body(resp);
    assert!(body.contains("Method not allowed"));
}

#[test]
fn proxy_requires_the_api_key() {
    let db = make_db("proxy_key");
    std::env::remove_var("REPLIERS_API_KEY");

    let resp = handle(get("/api/website_search?q=Irvine"), &db).unwrap();
    assert_eq!(resp.status(), 500);

    let body = read_body(resp);
    assert!(body.contains("REPLIERS_API_KEY is not configured"));
}

#[test]
fn unknown_routes_are_not_found() {
    let db = make_db("router_404");

    let err = handle(get("/definitely-not-a-page"), &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
