//! `view-source:` URL wrapping and unwrapping.

use super::kind::is_image_address;
use crate::normalize::get_url_from_input;
use crate::scheme::{is_file_scheme, is_http_or_https};

const VIEW_SOURCE_PREFIX: &str = "view-source:";

/// Whether `url` requests source display.
pub fn is_view_source_url(url: &str) -> bool {
    url.to_lowercase().starts_with(VIEW_SOURCE_PREFIX)
}

/// Strips the `view-source:` prefix and re-normalizes the inner URL.
/// Inputs that are not view-source URLs pass through unchanged.
pub fn get_url_from_view_source_url(url: &str) -> String {
    if !is_view_source_url(url) {
        return url.to_string();
    }
    get_url_from_input(&url[VIEW_SOURCE_PREFIX.len()..])
}

/// Wraps a URL for source display.
///
/// An already wrapped URL comes back unchanged, so wrapping is idempotent.
/// Otherwise only http(s) and `file://` URLs that are not image addresses
/// are eligible; everything else yields `None`.
pub fn get_view_source_url_from_url(url: &str) -> Option<String> {
    if is_view_source_url(url) {
        return Some(url.to_string());
    }
    if (!is_http_or_https(url) && !is_file_scheme(url)) || is_image_address(url) {
        return None;
    }
    Some(format!("{VIEW_SOURCE_PREFIX}{}", get_url_from_input(url)))
}
