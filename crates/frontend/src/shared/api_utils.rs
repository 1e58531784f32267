//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from config.toml when set. Otherwise constructs the
/// base URL from the current window location and the configured `api.port`.
///
/// # Returns
/// - API base URL like "http://localhost:8082", without a trailing slash
/// - Empty string if window is not available and no base URL is configured
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.trim().is_empty() {
        return normalize_base(&api.base_url);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/comptes/1");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn base_from_location(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            base_from_location("http:", "localhost", 8082),
            "http://localhost:8082"
        );
        assert_eq!(
            base_from_location("https:", "bank.example.com", 443),
            "https://bank.example.com:443"
        );
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8082/"), "http://localhost:8082");
        assert_eq!(normalize_base("  http://host/api//  "), "http://host/api");
        assert_eq!(normalize_base("http://host"), "http://host");
    }
}
