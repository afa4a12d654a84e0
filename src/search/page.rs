//! HTTP binding for the search page. Each request hydrates a controller
//! from the session and URL, runs one synchronous refresh, persists the
//! resulting filters, and renders.

use std::time::Instant;

use astra::Request;
use url::form_urlencoded;

use crate::db::{sessions, Database};
use crate::errors::ServerError;
use crate::listings::ListingsClient;
use crate::responses::{html_response_with_session, ResultResp};
use crate::search::controller::SearchController;
use crate::search::map::StaticMap;
use crate::templates::pages::search_page;

pub fn handle_search_page(req: &Request, db: &Database) -> ResultResp {
    let sid = session_id_from(req).unwrap_or_else(sessions::new_session_id);
    let session_filters = sessions::load_filters(db, &sid);

    let source = ListingsClient::from_env().map_err(|err| {
        eprintln!("Search client setup failed: {err}");
        ServerError::InternalError
    })?;

    let mut ctl = SearchController::new(source, StaticMap::new());
    let query = req.uri().query().unwrap_or("");
    ctl.hydrate(query, &session_filters);

    if let Some(message) = chat_param(query) {
        ctl.submit_chat(&message, Instant::now());
    }

    // Server-side render collapses the debounce to a single fetch.
    ctl.refresh_now();

    sessions::save_filters(db, &sid, ctl.filters())?;
    html_response_with_session(search_page(&ctl), &sid)
}

fn chat_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "chat")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}

fn session_id_from(req: &Request) -> Option<String> {
    let header = req.headers().get("cookie")?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == "sid" && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}
