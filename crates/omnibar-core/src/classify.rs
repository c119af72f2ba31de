//! URL-vs-query classification of address-bar input.
//!
//! The heuristic is an ordered rule list: each rule either decides the
//! verdict or passes to the next one. Ordering is load-bearing. The quoted
//! and punctuation disqualifiers must run before the parse-based fallbacks,
//! since the strict parser happily accepts strings like `http://example.`
//! that a person typing `example.` meant as text.

use crate::normalize::prepend_scheme;
use crate::scheme::{get_scheme, FILE_SCHEME};
use url::Url;

/// Schemes that are not network locations but still parse as URLs.
const PARSEABLE_SCHEMES: &[&str] = &[
    "data:",
    "view-source:",
    "mailto:",
    "about:",
    "chrome-extension:",
    "chrome-devtools:",
    "magnet:",
    "chrome:",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Url,
    NotUrl,
}

type Rule = fn(&str) -> Option<Verdict>;

/// Rules evaluated in order against the trimmed input; first decision wins.
const RULES: &[(&str, Rule)] = &[
    ("bare-localhost", bare_localhost),
    ("quoted-literal", quoted_literal),
    ("query-punctuation", query_punctuation),
    ("no-url-characters", no_url_characters),
    ("parseable-scheme", parseable_scheme),
    ("scheme-domain-shape", scheme_domain_shape),
    ("prepend-and-parse", prepend_and_parse),
];

/// Decides that `input` should be treated as free text (a search query)
/// rather than a navigable URL.
pub fn is_not_url(input: &str) -> bool {
    let trimmed = input.trim();
    for (name, rule) in RULES {
        if let Some(verdict) = rule(trimmed) {
            tracing::trace!(rule = name, ?verdict, "classified input");
            return verdict == Verdict::NotUrl;
        }
    }
    true
}

/// Whether `input` is a navigable URL.
pub fn is_url(input: &str) -> bool {
    !is_not_url(input)
}

/// `localhost` alone is a URL even though it has no URL-ish structure.
fn bare_localhost(input: &str) -> Option<Verdict> {
    input
        .eq_ignore_ascii_case("localhost")
        .then_some(Verdict::Url)
}

/// Text wrapped in double quotes is a literal search phrase.
fn quoted_literal(input: &str) -> Option<Verdict> {
    (input.len() >= 2 && input.starts_with('"') && input.ends_with('"'))
        .then_some(Verdict::NotUrl)
}

/// Query-like or malformed punctuation disqualifies the input outright.
fn query_punctuation(input: &str) -> Option<Verdict> {
    let disqualified = input.starts_with('?')
        || question_mark_before_whitespace(input)
        || input.starts_with('.')
        || ends_with_bare_dot(input)
        || (get_scheme(input).is_none() && input.contains(char::is_whitespace));
    disqualified.then_some(Verdict::NotUrl)
}

fn question_mark_before_whitespace(input: &str) -> bool {
    input
        .split('?')
        .skip(1)
        .any(|after| after.starts_with(char::is_whitespace))
}

/// Trailing `.` with no `/` anywhere after the first `.` or `+` marks
/// truncated text like `example.` (version-like strings such as `1.2.3.`
/// match too, which is intentional).
fn ends_with_bare_dot(input: &str) -> bool {
    if !input.ends_with('.') {
        return false;
    }
    match input.find(['.', '+']) {
        Some(idx) => !input[idx..].contains('/'),
        None => true,
    }
}

/// With none of `? . / :` or whitespace there is no structural URL signal.
fn no_url_characters(input: &str) -> Option<Verdict> {
    let has_signal =
        input.contains(['?', '.', '/', ':']) || input.contains(char::is_whitespace);
    (!has_signal).then_some(Verdict::NotUrl)
}

/// Non-network schemes (`data:`, `about:`, …) are URLs exactly when the
/// strict parser accepts them.
fn parseable_scheme(input: &str) -> Option<Verdict> {
    PARSEABLE_SCHEMES
        .iter()
        .any(|scheme| input.starts_with(scheme))
        .then(|| match Url::parse(input) {
            Ok(_) => Verdict::Url,
            Err(_) => Verdict::NotUrl,
        })
}

/// A scheme-qualified input (other than `file://`) must look like
/// `scheme://host/` once a trailing slash is appended; whitespace inside the
/// host disqualifies it.
fn scheme_domain_shape(input: &str) -> Option<Verdict> {
    let scheme = get_scheme(input)?;
    if scheme == FILE_SCHEME {
        return None;
    }
    Some(if matches_domain_shape(&format!("{input}/")) {
        Verdict::Url
    } else {
        Verdict::NotUrl
    })
}

/// `scheme://host/` where the scheme run is 2–5 word characters and the host
/// is nonempty with no whitespace or `/`.
fn matches_domain_shape(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once("://") else {
        return false;
    };
    if !(2..=5).contains(&scheme.len())
        || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return false;
    }
    match rest.find('/') {
        Some(0) | None => false,
        Some(idx) => !rest[..idx].contains(char::is_whitespace),
    }
}

/// Everything else gets a scheme prepended and stands or falls with the
/// strict parser.
fn prepend_and_parse(input: &str) -> Option<Verdict> {
    let prepended = prepend_scheme(input);
    Some(match Url::parse(&prepended) {
        Ok(_) => Verdict::Url,
        Err(_) => Verdict::NotUrl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_localhost_is_a_url() {
        assert!(is_url("localhost"));
        assert!(is_url("LocalHost"));
        assert!(is_url("  localhost  "));
    }

    #[test]
    fn quoted_text_is_a_search_phrase() {
        assert!(is_not_url("\"search term\""));
        assert!(is_not_url("\"http://example.com\""));
        assert!(is_not_url("\"\""));
    }

    #[test]
    fn question_mark_inputs_are_queries() {
        assert!(is_not_url("?something"));
        assert!(is_not_url("what? is this"));
        assert!(is_not_url("http://example.com/? trailing space"));
    }

    #[test]
    fn leading_dot_is_a_query() {
        assert!(is_not_url(".hidden"));
        assert!(is_not_url(".com"));
    }

    #[test]
    fn trailing_bare_dot_is_a_query() {
        assert!(is_not_url("example."));
        assert!(is_not_url("example.com."));
        assert!(is_not_url("1.2.3."));
    }

    #[test]
    fn trailing_dot_after_a_path_is_still_a_url() {
        // a `/` after the first dot defuses the trailing-dot rule
        assert!(is_url("example.com/docs."));
    }

    #[test]
    fn schemeless_input_with_whitespace_is_a_query() {
        assert!(is_not_url("hello world"));
        assert!(is_not_url("http ://bing.com"));
    }

    #[test]
    fn plain_words_are_queries() {
        assert!(is_not_url("example"));
        assert!(is_not_url("rust-lang"));
    }

    #[test]
    fn domains_and_paths_are_urls() {
        assert!(is_url("example.com"));
        assert!(is_url("example.com/path"));
        assert!(is_url("sub.example.com:8080/path?q=1"));
    }

    #[test]
    fn parseable_schemes_use_the_strict_parser() {
        assert!(is_url("data:text/html,hello"));
        assert!(is_url("about:blank"));
        assert!(is_url("mailto:user@example.com"));
        assert!(is_url("chrome-extension://aaabbbccc/page.html"));
        assert!(is_url("view-source:http://example.com/"));
        assert!(is_url("magnet:?xt=urn:btih:deadbeef"));
    }

    #[test]
    fn scheme_with_whitespace_host_is_a_query() {
        assert!(is_not_url("http://example com/"));
    }

    #[test]
    fn scheme_longer_than_five_word_chars_fails_the_domain_shape() {
        assert!(is_not_url("gopher7://example.com"));
    }

    #[test]
    fn file_urls_fall_through_to_the_strict_parser() {
        assert!(is_url("file:///etc/hosts"));
        assert!(is_url("/etc/hosts"));
    }

    #[test]
    fn invalid_port_fails_the_prepend_parse() {
        assert!(is_not_url("3:30pm"));
    }

    #[test]
    fn is_url_negates_is_not_url_on_trimmed_input() {
        for input in ["example.com", "example", "  localhost ", "?q", "a b"] {
            assert_eq!(is_url(input), !is_not_url(input));
        }
    }
}
