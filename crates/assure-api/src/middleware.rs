//! Security header middleware
//!
//! Every response except static-asset paths carries three fixed headers.
//! No branching beyond the path exclusion, no state.

use axum::extract::Request;
use axum::http::{header::HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// Path prefixes the middleware never touches.
pub const EXCLUDED_PREFIXES: &[&str] =
    &["/_next/static", "/_next/image", "/favicon.ico", "/public"];

/// The fixed headers and their exact values.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
];

pub async fn security_headers(request: Request, next: Next) -> Response {
    let excluded = is_excluded(request.uri().path());
    let mut response = next.run(request).await;

    if !excluded {
        let headers = response.headers_mut();
        for (name, value) in SECURITY_HEADERS {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
    }

    response
}

fn is_excluded(path: &str) -> bool {
    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_not_excluded() {
        assert!(!is_excluded("/api/v1/scans"));
        assert!(!is_excluded("/"));
        assert!(!is_excluded("/health"));
    }

    #[test]
    fn test_static_asset_paths_are_excluded() {
        assert!(is_excluded("/_next/static/chunks/app.js"));
        assert!(is_excluded("/_next/image?url=logo.png"));
        assert!(is_excluded("/favicon.ico"));
        assert!(is_excluded("/public/robots.txt"));
    }
}
