use astra::{Body, ResponseBuilder};
use maud::Markup;

use crate::responses::ResultResp;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// HTML response that also (re-)issues the session cookie.
pub fn html_response_with_session(markup: Markup, sid: &str) -> ResultResp {
    let body = markup.into_string();
    let cookie = format!("sid={sid}; Path=/; HttpOnly; SameSite=Lax");

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Set-Cookie", cookie)
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}
