//! PDF viewer extension URL rewrites.

use super::kind::is_file_type;
use crate::loose::LooseUrl;
use crate::scheme::is_http_or_https;

/// Path marker of the viewer page that carries its target in the query.
const VIEWER_PAGE_MARKER: &str = "content/web/viewer.html?file=";

/// Rewrites an http(s) URL ending in `.pdf` to its viewer-extension wrapped
/// form `chrome-extension://<id>/<url>`. Anything else passes through
/// unchanged.
pub fn to_pdfjs_location(url: &str, extension_id: &str) -> String {
    if is_http_or_https(url) && is_file_type(url, "pdf") {
        return format!("chrome-extension://{extension_id}/{url}");
    }
    url.to_string()
}

/// Recovers the original target from a PDF-viewer-extension URL.
///
/// The viewer page carries its target in the `file` query parameter;
/// direct-wrapped URLs embed the target after the extension base path.
/// URLs that do not point into the extension pass through unchanged.
pub fn get_location_if_pdf(url: &str, extension_id: &str) -> String {
    let base = format!("chrome-extension://{extension_id}/");
    if !url.contains(&base) {
        return url.to_string();
    }

    if url.contains(VIEWER_PAGE_MARKER) {
        if let Some(file) = LooseUrl::parse(url).query_param("file") {
            if !file.is_empty() {
                return file;
            }
        }
    }

    match embedded_absolute_url(url) {
        Some(target) => target.to_string(),
        None => url.to_string(),
    }
}

/// Finds the rightmost `scheme://…` run that follows a `/` inside a
/// `chrome-extension://` URL.
fn embedded_absolute_url(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("chrome-extension://")?;
    for (idx, _) in rest.rmatch_indices("://") {
        let scheme_start = rest[..idx]
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
            .last()
            .map(|(i, _)| i)
            .unwrap_or(idx);
        // need a nonempty scheme run, a `/` right before it, at least one
        // char before that `/`, and a nonempty remainder
        if scheme_start == idx || scheme_start < 2 {
            continue;
        }
        if rest[..scheme_start].ends_with('/') && idx + 3 < rest.len() {
            return Some(&rest[scheme_start..]);
        }
    }
    None
}
