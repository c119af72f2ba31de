//! Scheme prepending and input-to-URL normalization.

use crate::classify::is_not_url;
use crate::scheme::{has_scheme, DEFAULT_SCHEME, FILE_SCHEME};
use directories_next::BaseDirs;
use std::path::Path;
use url::Url;

/// Qualifies a path-like or scheme-less input with a scheme, resolving `~/`
/// against the current user's home directory.
pub fn prepend_scheme(input: &str) -> String {
    let base = BaseDirs::new();
    prepend_scheme_with_home(input, base.as_ref().map(|b| b.home_dir()))
}

/// Pure core of [`prepend_scheme`]; the home directory is injected so tests
/// stay deterministic.
///
/// Order matters: `~/` expansion must run before the absolute-path check,
/// which must run before the default-scheme fallback, so a `~/` path becomes
/// a `file://` URL rather than a web address.
pub fn prepend_scheme_with_home(input: &str, home: Option<&Path>) -> String {
    let mut out = match home {
        Some(home) if input.starts_with("~/") => format!("{}{}", home.display(), &input[1..]),
        _ => input.to_string(),
    };

    if out.starts_with('/') {
        out = format!("{FILE_SCHEME}{out}");
    }

    if !has_scheme(&out) {
        out = format!("{DEFAULT_SCHEME}{out}");
    }

    out
}

/// Normalizes raw input into an absolute URL string.
///
/// Input the classifier rejects comes back scheme-prepended but otherwise
/// untouched, so the caller can hand it to a search engine instead.
pub fn get_url_from_input(input: &str) -> String {
    let base = BaseDirs::new();
    get_url_from_input_with_home(input, base.as_ref().map(|b| b.home_dir()))
}

/// Pure core of [`get_url_from_input`].
pub fn get_url_from_input_with_home(input: &str, home: Option<&Path>) -> String {
    let prepended = prepend_scheme_with_home(input.trim(), home);
    if is_not_url(&prepended) {
        return prepended;
    }
    match Url::parse(&prepended) {
        Ok(url) => url.to_string(),
        Err(_) => prepended,
    }
}

/// Edge entry point for optional input; absent input is the empty string.
pub fn get_url_from_opt_input(input: Option<&str>) -> String {
    match input {
        Some(input) => get_url_from_input(input),
        None => String::new(),
    }
}
