//! API utilities for frontend-backend communication
//!
//! The analysis server serves both the page and its API, so requests go to
//! the origin the page was loaded from.

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "http://localhost:5001"
/// - Empty string if window is not available (the path then stays relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(contracts::usecases::u510_image_query::UPLOAD_ENDPOINT);
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
