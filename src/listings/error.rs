use std::error::Error;
use std::fmt;

/// Failure modes of a listings search, kept separate so the controller can
/// decide between retry messaging and the sample-data fallback.
#[derive(Debug)]
pub enum SearchError {
    /// The upstream did not answer within the request deadline.
    Timeout,
    /// Connection-level failure before any HTTP response arrived.
    Network(String),
    /// The upstream answered with a non-success status.
    Upstream { status: u16, body: String },
    /// The client is not configured well enough to make the request.
    Config(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::Timeout => write!(f, "Request timed out. Please try again."),
            SearchError::Network(msg) => write!(f, "Network error: {}", msg),
            SearchError::Upstream { status, body } => {
                write!(f, "Search request failed: {} {}", status, body)
            }
            SearchError::Config(msg) => write!(f, "Search client misconfigured: {}", msg),
        }
    }
}

impl Error for SearchError {}
