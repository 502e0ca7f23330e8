//! API utilities for widget-to-assistant communication
//!
//! Provides helper functions for constructing assistant service URLs.

/// Build a full API URL from a path
///
/// # Arguments
/// * `base` - The service base URL (no trailing slash)
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```ignore
/// let url = api_url("http://localhost:8000", "/ask");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
