//! Base URL resolution for the remote todo API.

/// Fallback when `API_URL` is unset — the backend's default local address.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Resolve the API base URL from the `API_URL` environment variable, falling
/// back to [`DEFAULT_API_URL`].
pub fn api_base_url() -> String {
    std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
