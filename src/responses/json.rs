use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

use crate::errors::ServerError;
use crate::responses::ResultResp;

pub fn json_response<T: Serialize>(status: u16, payload: &T) -> ResultResp {
    let body = serde_json::to_string(payload)
        .map_err(|e| ServerError::BadRequest(format!("JSON encode failed: {e}")))?;

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// JSON with the open CORS headers the browser-facing endpoints need.
pub fn json_response_cors<T: Serialize>(status: u16, payload: &T) -> ResultResp {
    let body = serde_json::to_string(payload)
        .map_err(|e| ServerError::BadRequest(format!("JSON encode failed: {e}")))?;

    let resp = cors_builder(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// Empty 204 reply to a CORS preflight.
pub fn cors_preflight() -> ResultResp {
    let resp = cors_builder(204).body(Body::from(String::new())).unwrap();
    Ok(resp)
}

fn cors_builder(status: u16) -> ResponseBuilder {
    ResponseBuilder::new()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header(
            "Access-Control-Allow-Headers",
            "authorization, x-client-info, apikey, content-type",
        )
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
}

/// 405 carrying the required Allow header.
pub fn method_not_allowed(allow: &str) -> Response {
    let body = serde_json::json!({ "error": "Method not allowed" }).to_string();

    ResponseBuilder::new()
        .status(405)
        .header("Content-Type", "application/json")
        .header("Allow", allow)
        .body(Body::from(body))
        .unwrap()
}
