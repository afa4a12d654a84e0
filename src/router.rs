use astra::Request;

use crate::db::Database;
use crate::edge;
use crate::errors::ServerError;
use crate::proxy;
use crate::responses::ResultResp;
use crate::search;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") | ("GET", "/search") => search::page::handle_search_page(&req, db),
        (_, "/api/website_search") => proxy::handle_website_search(&req),
        (_, "/api/ai_search") => edge::handle_ai_search(&mut req, db),
        _ => Err(ServerError::NotFound),
    }
}
