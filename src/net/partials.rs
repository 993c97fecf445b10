//! HTML partial fetching via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed error instead of a panic so a missing or unreachable
//! partial degrades to an inline error panel. There are no retries and no
//! timeout; a failed fetch is terminal for that navigation attempt and the
//! user recovers by navigating again.

use gloo_net::http::Request;
use web_sys::RequestCache;

/// Why a partial failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartialError {
    /// The server answered with a non-success status.
    Status(u16),
    /// Transport-level failure before any response arrived.
    Network(String),
}

impl std::fmt::Display for PartialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartialError::Status(code) => write!(f, "unexpected status {code}"),
            PartialError::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

/// GET `path` relative to the document base, bypassing the HTTP cache, and
/// return the body text.
pub async fn fetch_partial(path: &str) -> Result<String, PartialError> {
    let response = Request::get(path)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|err| PartialError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(PartialError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|err| PartialError::Network(err.to_string()))
}
