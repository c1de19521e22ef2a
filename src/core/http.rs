//! HTTP utilities for ESPN box-score requests

use std::time::Duration;

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// Browser-like user agent; the game pages refuse some default agents.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/json;q=0.9,*/*;q=0.8"),
    );
    h
}

/// Build the shared client. Every request is bounded by `timeout`; a timed
/// out request surfaces as an ordinary HTTP error.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .default_headers(default_headers())
        .build()?;
    Ok(client)
}
