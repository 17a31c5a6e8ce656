//! API utilities for frontend-to-OData communication
//!
//! Resolves the configured API base against the current page.

use crate::config::app_config;

/// Base URL of the remote API, without trailing slash
///
/// A configured absolute URL is used as-is; a path is resolved against
/// `window.location.origin`.
///
/// # Example
/// ```rust,ignore
/// let url = CollectionUrl::new(&api_base(), "/Vendors");
/// ```
pub fn api_base() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    resolve_base(&app_config().api.base_url, &origin)
}

/// Join a configured base with the page origin when it is a bare path
pub fn resolve_base(configured: &str, origin: &str) -> String {
    let configured = configured.trim_end_matches('/');
    if configured.starts_with("http://") || configured.starts_with("https://") {
        configured.to_string()
    } else if configured.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), configured)
    } else {
        format!("{}/{}", origin.trim_end_matches('/'), configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_base_is_kept() {
        assert_eq!(
            resolve_base("https://erp.example.com/odata/", "http://localhost:8080"),
            "https://erp.example.com/odata"
        );
    }

    #[test]
    fn test_path_is_resolved_against_origin() {
        assert_eq!(resolve_base("/odata", "http://localhost:8080"), "http://localhost:8080/odata");
        assert_eq!(resolve_base("odata", "http://localhost:8080/"), "http://localhost:8080/odata");
    }
}
