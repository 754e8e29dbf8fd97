//! API utilities for frontend-backend communication
//!
//! By default requests go to the same origin as the page (`/api/...`), so the
//! dev server (Trunk proxy or `devserver`) decides where the backend lives.
//! A build with `QA_API_ORIGIN=http://host:port` calls that origin directly.

/// Origin baked in at compile time, if any
const API_ORIGIN: Option<&str> = option_env!("QA_API_ORIGIN");

/// Get the base URL for API requests
///
/// # Returns
/// - `"http://localhost:8000"` when built with `QA_API_ORIGIN=http://localhost:8000/`
/// - Empty string otherwise (same-origin relative URLs)
pub fn api_base() -> String {
    API_ORIGIN
        .map(|origin| origin.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/upload");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') || base.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
