//! Scheme token extraction from raw address-bar input.

/// Scheme prepended to scheme-less input.
pub const DEFAULT_SCHEME: &str = "http://";

/// Scheme prepended to absolute filesystem paths.
pub const FILE_SCHEME: &str = "file://";

/// Extracts the scheme token from the head of `input`.
///
/// Returns one of:
/// - scheme + `:` (e.g. `mailto:`)
/// - scheme + `://` (e.g. `http://`)
/// - `None` when the input carries no scheme
///
/// Scheme characters are ASCII letters and digits, `-`, `+`, and printable
/// characters above ASCII (U+00A1..=U+FFFF). The token is never directly in
/// front of a digit, so `host:8080` and `3:30pm` yield no scheme; when `://`
/// is followed by a digit the shorter `scheme:` form is tried instead.
/// The literal token `localhost://` is a bare hostname, not a protocol, and
/// yields `None`.
pub fn get_scheme(input: &str) -> Option<&str> {
    let mut head = 0;
    for (idx, ch) in input.char_indices() {
        if !is_scheme_char(ch) {
            break;
        }
        head = idx + ch.len_utf8();
    }
    if head == 0 {
        return None;
    }

    let rest = &input[head..];
    let token_len = if rest.starts_with("://") && !digit_at(input, head + 3) {
        head + 3
    } else if rest.starts_with(':') && !digit_at(input, head + 1) {
        head + 1
    } else {
        return None;
    };

    let token = &input[..token_len];
    if token.eq_ignore_ascii_case("localhost://") {
        return None;
    }
    Some(token)
}

/// Whether `input` starts with a scheme token.
pub fn has_scheme(input: &str) -> bool {
    get_scheme(input).is_some()
}

/// Whether `input` is an http or https URL.
pub fn is_http_or_https(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Whether the extracted scheme token is exactly `file://`.
pub fn is_file_scheme(input: &str) -> bool {
    get_scheme(input) == Some(FILE_SCHEME)
}

fn is_scheme_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '+' || matches!(ch as u32, 0xa1..=0xffff)
}

fn digit_at(input: &str, idx: usize) -> bool {
    input[idx..]
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit())
}
