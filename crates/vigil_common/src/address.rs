//! Address classification.
//!
//! Service addresses arrive as opaque strings, either URLs
//! (`scheme://host[:port][/path]`) or bare `host:port` pairs. Nothing
//! here validates or fails; malformed input yields a best-effort
//! substring.

/// True when the address carries an explicit HTTP or HTTPS scheme.
pub fn is_http_url(addr: &str) -> bool {
    addr.starts_with("http://") || addr.starts_with("https://")
}

/// Everything after the first `://`, or the whole string when no scheme
/// separator is present. For URL-shaped addresses this is the TCP
/// fallback target, path included.
pub fn scheme_remainder(addr: &str) -> &str {
    match addr.split_once("://") {
        Some((_, rest)) => rest,
        None => addr,
    }
}

/// Extract the bare hostname, the target handed to the ping fallback.
///
/// URL-shaped addresses lose scheme, then path, then port; anything else
/// is treated as `host:port` and loses the port.
pub fn host_part(addr: &str) -> &str {
    if addr.starts_with("http") {
        let rest = scheme_remainder(addr);
        let rest = match rest.split_once('/') {
            Some((host, _)) => host,
            None => rest,
        };
        match rest.split_once(':') {
            Some((host, _)) => host,
            None => rest,
        }
    } else {
        match addr.split_once(':') {
            Some((host, _)) => host,
            None => addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("http://example.com"));
        assert!(is_http_url("https://example.com:8443/health"));
        assert!(!is_http_url("example.com:80"));
        assert!(!is_http_url("ftp://example.com"));
        // An "http" prefix without a scheme separator is not a URL
        assert!(!is_http_url("httpserver:9000"));
    }

    #[test]
    fn test_scheme_remainder() {
        assert_eq!(scheme_remainder("http://example.com:8080/health"), "example.com:8080/health");
        assert_eq!(scheme_remainder("https://example.com"), "example.com");
        assert_eq!(scheme_remainder("10.0.0.5:9000"), "10.0.0.5:9000");
    }

    #[test]
    fn test_host_part_urls() {
        assert_eq!(host_part("https://example.com:8443/health"), "example.com");
        assert_eq!(host_part("http://example.com"), "example.com");
        assert_eq!(host_part("http://example.com/path/deep"), "example.com");
        assert_eq!(host_part("https://example.com:443"), "example.com");
    }

    #[test]
    fn test_host_part_host_port() {
        assert_eq!(host_part("10.0.0.5:9000"), "10.0.0.5");
        assert_eq!(host_part("db.internal:5432"), "db.internal");
        assert_eq!(host_part("plainhost"), "plainhost");
    }

    #[test]
    fn test_host_part_is_idempotent() {
        for addr in ["https://example.com:8443/health", "10.0.0.5:9000", "plainhost"] {
            let once = host_part(addr);
            assert_eq!(host_part(once), once);
        }
    }

    #[test]
    fn test_host_part_malformed_is_best_effort() {
        // "http" prefix but no scheme separator: degrade, never panic
        assert_eq!(host_part("httpserver:9000"), "httpserver");
        assert_eq!(host_part(""), "");
        assert_eq!(host_part("http://"), "");
    }
}
