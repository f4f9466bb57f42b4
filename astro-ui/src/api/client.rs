//! HTTP API Client
//!
//! Functions for fetching the dashboard endpoints from the browser.

use astro_dashboard::model::{decode_list, decode_summary, ListRecord, SummaryPatch};
use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://asterixlabs.top";

/// Local storage key that overrides the API base URL
const API_URL_KEY: &str = "astro_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Remove trailing slashes, falling back to the default for blank input
fn normalize_base(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// GET a JSON endpoint and return the raw body
async fn get_body(path: &str) -> Result<Vec<u8>, String> {
    let url = format!("{}{}", get_api_base(), path);

    let response = Request::get(&url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("{} returned status {}", url, response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Read error: {}", e))
}

// ============ API Functions ============

/// Fetch the summary counters
pub async fn fetch_summary() -> Result<SummaryPatch, String> {
    let body = get_body("/dashboard/summary").await?;
    decode_summary(&body).map_err(|e| e.to_string())
}

/// Fetch the full leaderboard, indexed in fetch order
pub async fn fetch_list() -> Result<Vec<ListRecord>, String> {
    let body = get_body("/dashboard/list").await?;
    decode_list(&body).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }
}
