//! Permissive URL component splitting.
//!
//! The strict parser rejects inputs the classifier still needs to inspect
//! (bare hosts, unknown schemes, malformed authorities). [`LooseUrl`] splits
//! any string into components without ever failing and can reassemble them,
//! which is all the component-level transformations need.

/// Components of a loosely parsed URL. Absent components stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LooseUrl {
    /// Scheme with its trailing `:` (e.g. `http:`), lowercased.
    pub protocol: Option<String>,
    /// Whether the scheme was followed by `//` (an authority section).
    pub slashes: bool,
    /// Hostname without port, lowercased.
    pub hostname: Option<String>,
    /// Port digits as written.
    pub port: Option<String>,
    /// Path, including its leading `/` when one is present.
    pub pathname: Option<String>,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    /// Fragment without the leading `#`.
    pub fragment: Option<String>,
}

impl LooseUrl {
    /// Splits `input` into components. Total: never fails, never panics.
    ///
    /// An authority (hostname/port) is only recognized after `scheme://`;
    /// everything else lands in `pathname`, matching permissive parsers that
    /// treat `example.com/x` as a path.
    pub fn parse(input: &str) -> Self {
        let mut out = LooseUrl::default();

        let rest = match input.split_once('#') {
            Some((rest, fragment)) => {
                out.fragment = Some(fragment.to_string());
                rest
            }
            None => input,
        };

        let mut rest = rest;
        if let Some(len) = protocol_len(rest) {
            out.protocol = Some(rest[..len].to_ascii_lowercase());
            rest = &rest[len..];
        }

        if out.protocol.is_some() {
            if let Some(after) = rest.strip_prefix("//") {
                out.slashes = true;
                let end = after.find(['/', '?']).unwrap_or(after.len());
                let authority = &after[..end];
                rest = &after[end..];

                // userinfo is irrelevant here; keep only the host part
                let host_part = authority
                    .rsplit_once('@')
                    .map_or(authority, |(_, host)| host);
                let (hostname, port) = split_port(host_part);
                if !hostname.is_empty() {
                    out.hostname = Some(hostname.to_ascii_lowercase());
                    out.port = port.map(str::to_string);
                }
            }
        }

        let path = match rest.split_once('?') {
            Some((path, query)) => {
                out.query = Some(query.to_string());
                path
            }
            None => rest,
        };
        if !path.is_empty() {
            out.pathname = Some(path.to_string());
        }

        out
    }

    /// Hostname joined with the port when one is present.
    pub fn host(&self) -> Option<String> {
        let hostname = self.hostname.as_deref()?;
        Some(match &self.port {
            Some(port) => format!("{hostname}:{port}"),
            None => hostname.to_string(),
        })
    }

    /// Reassembles the components into a URL string.
    pub fn format(&self) -> String {
        let mut out = String::new();
        if let Some(protocol) = &self.protocol {
            out.push_str(protocol);
        }
        if self.slashes {
            out.push_str("//");
        }
        if let Some(host) = self.host() {
            out.push_str(&host);
        }
        if let Some(pathname) = &self.pathname {
            out.push_str(pathname);
        }
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    /// Returns the decoded value of query parameter `name`, if present.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key == name {
                return Some(form_decode(value));
            }
        }
        None
    }
}

/// Length of a permissive `scheme:` prefix (`[a-z0-9.+-]+:`), if present.
fn protocol_len(input: &str) -> Option<usize> {
    let mut end = 0;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-') {
            end += 1;
        } else {
            break;
        }
    }
    if end > 0 && input[end..].starts_with(':') {
        Some(end + 1)
    } else {
        None
    }
}

/// Splits a trailing `:digits` port off an authority.
fn split_port(authority: &str) -> (&str, Option<&str>) {
    match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            (host, Some(port))
        }
        _ => (authority, None),
    }
}

/// Decodes a query value: `+` as space, `%XX` as bytes, lossy UTF-8.
fn form_decode(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    let mut bytes = value.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'+' => out.push(b' '),
            b'%' => {
                let high = bytes.next().and_then(hex_digit);
                let low = bytes.next().and_then(hex_digit);
                match (high, low) {
                    (Some(high), Some(low)) => out.push(high << 4 | low),
                    _ => out.push(b'%'),
                }
            }
            other => out.push(other),
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_splits_into_components() {
        let parts = LooseUrl::parse("http://Example.COM:8080/a/b?c=d#frag");
        assert_eq!(parts.protocol.as_deref(), Some("http:"));
        assert!(parts.slashes);
        assert_eq!(parts.hostname.as_deref(), Some("example.com"));
        assert_eq!(parts.port.as_deref(), Some("8080"));
        assert_eq!(parts.pathname.as_deref(), Some("/a/b"));
        assert_eq!(parts.query.as_deref(), Some("c=d"));
        assert_eq!(parts.fragment.as_deref(), Some("frag"));
        assert_eq!(parts.host().as_deref(), Some("example.com:8080"));
    }

    #[test]
    fn opaque_scheme_has_no_authority() {
        let parts = LooseUrl::parse("mailto:user@example.com");
        assert_eq!(parts.protocol.as_deref(), Some("mailto:"));
        assert!(!parts.slashes);
        assert_eq!(parts.hostname, None);
        assert_eq!(parts.pathname.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn schemeless_input_is_all_path() {
        let parts = LooseUrl::parse("example.com/x");
        assert_eq!(parts.protocol, None);
        assert_eq!(parts.hostname, None);
        assert_eq!(parts.pathname.as_deref(), Some("example.com/x"));
    }

    #[test]
    fn userinfo_is_dropped_from_host() {
        let parts = LooseUrl::parse("http://user:pw@example.com/");
        assert_eq!(parts.hostname.as_deref(), Some("example.com"));
        assert_eq!(parts.port, None);
    }

    #[test]
    fn non_numeric_port_stays_in_hostname() {
        let parts = LooseUrl::parse("http://example.com:80a/x");
        assert_eq!(parts.hostname.as_deref(), Some("example.com:80a"));
        assert_eq!(parts.port, None);
    }

    #[test]
    fn format_round_trips_parsed_components() {
        for url in [
            "http://example.com:8080/a/b?c=d#frag",
            "https://example.com/",
            "view-source:http://x/",
            "data:text/html,hi",
        ] {
            assert_eq!(LooseUrl::parse(url).format(), url);
        }
    }

    #[test]
    fn format_lowercases_scheme_and_host() {
        assert_eq!(
            LooseUrl::parse("HTTP://EXAMPLE.com/Path").format(),
            "http://example.com/Path"
        );
    }

    #[test]
    fn query_param_decodes_percent_and_plus() {
        let parts = LooseUrl::parse("ext://id/viewer.html?file=http%3A%2F%2Fx%2Fa.pdf&b=1+2");
        assert_eq!(
            parts.query_param("file").as_deref(),
            Some("http://x/a.pdf")
        );
        assert_eq!(parts.query_param("b").as_deref(), Some("1 2"));
        assert_eq!(parts.query_param("missing"), None);
    }

    #[test]
    fn empty_input_is_all_none() {
        assert_eq!(LooseUrl::parse(""), LooseUrl::default());
    }
}
