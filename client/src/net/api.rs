//! HTTP read of the company list.
//!
//! Client-side (hydrate): a real `GET` via `gloo-net`.
//! Server-side (SSR): a stub error, since the list is only ever loaded
//! after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one `FetchError` whose `Display` text is what
//! the table shows. Non-2xx responses all read "Failed to fetch data";
//! transport and decode failures carry the underlying message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Company;

/// Endpoint serving the company list as a JSON array.
pub const COMPANIES_URL: &str = "https://json-placeholder.mock.beeceptor.com/companies";

/// Failure of the company list read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("Failed to fetch data")]
    Status(u16),
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// The body was not a list of company records.
    #[error("{0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_companies(body: &str) -> Result<Vec<Company>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the company list from [`COMPANIES_URL`].
///
/// # Errors
///
/// Returns `FetchError::Status` for non-2xx responses, `Transport` when the
/// request fails, and `Decode` when the body is not a company array.
pub async fn fetch_companies() -> Result<Vec<Company>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COMPANIES_URL)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_companies(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Transport("not available on server".to_owned()))
    }
}
