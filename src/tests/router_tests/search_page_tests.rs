use crate::router::handle;
use crate::tests::utils::{get, make_db, read_body};

// Nothing listens on the discard port, so every fetch fails fast and the
// page exercises its sample-data fallback.
fn point_api_at_nothing() {
    std::env::set_var("SEARCH_API_BASE", "http://127.0.0.1:9");
}

#[test]
fn search_page_falls_back_to_sample_listings() {
    point_api_at_nothing();
    let db = make_db("search_page_demo");

    let resp = handle(get("/search?q=Laguna&maxPrice=1500000"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .headers()
        .get("set-cookie")
        .expect("session cookie issued")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("sid="));

    let body = read_body(resp);
    assert!(body.contains("demo-1"));
    assert!(body.contains("10 demo matches"));
    assert!(body.contains("sample listings"));
    assert!(body.contains("Laguna"));
}

#[test]
fn session_restores_filters_on_the_next_visit() {
    point_api_at_nothing();
    let db = make_db("search_page_session");

    let first = handle(get("/search?q=Newport&beds=3"), &db).unwrap();
    let cookie_header = first
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let sid_pair = cookie_header.split(';').next().unwrap().to_string();

    let mut followup = get("/search");
    followup
        .headers_mut()
        .insert("Cookie", sid_pair.parse().unwrap());

    let body = read_body(handle(followup, &db).unwrap());
    assert!(body.contains("Newport"));
    assert!(body.contains("3+ beds"));
}

#[test]
fn chat_message_refines_the_search_and_echoes_in_the_transcript() {
    point_api_at_nothing();
    let db = make_db("search_page_chat");

    let resp = handle(get("/search?chat=under+1.2M%2C+3%2B+beds"), &db).unwrap();
    let body = read_body(resp);

    assert!(body.contains("Updating your search..."));
    assert!(body.contains("under $1,200,000"));
    assert!(body.contains("3+ beds"));
}

#[test]
fn root_serves_the_search_experience_too() {
    point_api_at_nothing();
    let db = make_db("search_page_root");

    let resp = handle(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Find your place in Orange County"));
}
