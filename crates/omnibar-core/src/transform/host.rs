//! Host, origin, and favicon derivation.

use crate::classify::is_not_url;
use crate::loose::LooseUrl;
use url::Url;

/// Returns the URL's host, including the port unless `exclude_port` is set
/// (default ports are never shown). `None` when the strict parse fails or
/// the URL has no host.
pub fn get_hostname(url: &str, exclude_port: bool) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let hostname = parsed.host_str()?.to_string();
    if exclude_port {
        return Some(hostname);
    }
    Some(match parsed.port() {
        Some(port) => format!("{hostname}:{port}"),
        None => hostname,
    })
}

/// Expands a URL's hostname into the wildcard patterns that match it: the
/// exact host, each single-label wildcard left to right, then suffix
/// wildcards dropping two or more leading labels. Empty when the URL has no
/// hostname.
pub fn get_hostname_patterns(url: &str) -> Vec<String> {
    let Some(hostname) = LooseUrl::parse(url).hostname else {
        return Vec::new();
    };

    let mut patterns = vec![hostname.clone()];
    let labels: Vec<&str> = hostname.split('.').collect();

    for i in 0..labels.len() {
        let mut wildcarded = labels.clone();
        wildcarded[i] = "*";
        patterns.push(wildcarded.join("."));
    }
    for start in 2..labels.len() {
        patterns.push(format!("*.{}", labels[start..].join(".")));
    }
    patterns
}

/// Rule pattern matching the host under both http and https.
pub fn get_host_pattern(url: &str) -> String {
    format!("https?://{url}")
}

/// Host for display: http(s) URLs show their host, anything else shows
/// as typed.
pub fn get_display_host(url: &str) -> String {
    let parts = LooseUrl::parse(url);
    if matches!(parts.protocol.as_deref(), Some("http:") | Some("https:")) {
        if let Some(host) = parts.host() {
            return host;
        }
    }
    url.to_string()
}

/// The URL's origin in ASCII serialization (`null` for opaque origins), or
/// `None` when the strict parse fails.
pub fn get_url_origin(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .map(|parsed| parsed.origin().ascii_serialization())
}

/// Default favicon location for a valid URL, empty string otherwise.
pub fn get_default_favicon_url(url: &str) -> String {
    if is_not_url(url) {
        return String::new();
    }
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let Some(hostname) = parsed.host_str() else {
        return String::new();
    };
    let host = match parsed.port() {
        Some(port) => format!("{hostname}:{port}"),
        None => hostname.to_string(),
    };
    format!("{}://{host}/favicon.ico", parsed.scheme())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_with_and_without_port() {
        assert_eq!(
            get_hostname("http://example.com:8080/x", false).as_deref(),
            Some("example.com:8080")
        );
        assert_eq!(
            get_hostname("http://example.com:8080/x", true).as_deref(),
            Some("example.com")
        );
        // default ports are elided by the parser
        assert_eq!(
            get_hostname("https://example.com:443/x", false).as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn hostname_absent_on_parse_failure() {
        assert_eq!(get_hostname("not a url", false), None);
        assert_eq!(get_hostname("data:text/html,hi", false), None);
    }

    #[test]
    fn hostname_patterns_exact_order() {
        assert_eq!(
            get_hostname_patterns("http://a.b.c.d/x"),
            vec![
                "a.b.c.d", "*.b.c.d", "a.*.c.d", "a.b.*.d", "a.b.c.*", "*.c.d", "*.d",
            ]
        );
    }

    #[test]
    fn hostname_patterns_short_hosts() {
        assert_eq!(
            get_hostname_patterns("http://example.com/"),
            vec!["example.com", "*.com", "example.*"]
        );
        assert_eq!(get_hostname_patterns("/no/host"), Vec::<String>::new());
    }

    #[test]
    fn host_pattern_literal() {
        assert_eq!(get_host_pattern("example.com"), "https?://example.com");
    }

    #[test]
    fn display_host_for_web_urls_only() {
        assert_eq!(get_display_host("https://Example.com:8080/x"), "example.com:8080");
        assert_eq!(get_display_host("http://example.com/x"), "example.com");
        assert_eq!(get_display_host("data:text/html,hi"), "data:text/html,hi");
        assert_eq!(get_display_host("plain text"), "plain text");
    }

    #[test]
    fn origin_serialization() {
        assert_eq!(
            get_url_origin("https://example.com:8443/a/b").as_deref(),
            Some("https://example.com:8443")
        );
        assert_eq!(
            get_url_origin("data:text/html,hi").as_deref(),
            Some("null")
        );
        assert_eq!(get_url_origin("not a url"), None);
    }

    #[test]
    fn favicon_for_valid_urls() {
        assert_eq!(
            get_default_favicon_url("https://example.com/deep/page?q=1"),
            "https://example.com/favicon.ico"
        );
        assert_eq!(
            get_default_favicon_url("http://example.com:8080/x"),
            "http://example.com:8080/favicon.ico"
        );
    }

    #[test]
    fn favicon_empty_for_queries_and_hostless_urls() {
        assert_eq!(get_default_favicon_url("hello world"), "");
        assert_eq!(get_default_favicon_url("data:text/html,hi"), "");
    }
}
