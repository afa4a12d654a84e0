pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_to_response, html_error_response, ResultResp};
pub use html::{html_response, html_response_with_session};
pub use json::{cors_preflight, json_response, json_response_cors, method_not_allowed};
