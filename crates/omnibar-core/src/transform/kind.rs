//! Predicates over URL shape and content kind.

use crate::loose::LooseUrl;

/// Extensions recognized as image addresses.
const IMAGE_EXTENSIONS: &[&str] = &[".jpeg", ".jpg", ".gif", ".png", ".bmp"];

/// Origin prefixes that resolve to local content rather than the network.
const LOCAL_FILE_ORIGINS: &[&str] = &["file:", "blob:", "data:", "chrome-extension:", "chrome:"];

/// Whether `url` points at an image, judged by its extension. The match is
/// case-sensitive: `a.PNG` is not an image address.
pub fn is_image_address(url: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}

/// Whether the URL's path component ends in `.` + `ext`, case-insensitively
/// on the path side.
pub fn is_file_type(url: &str, ext: &str) -> bool {
    match LooseUrl::parse(url).pathname {
        Some(pathname) => pathname.to_lowercase().ends_with(&format!(".{ext}")),
        None => false,
    }
}

/// Whether `url` is a `data:` URL.
pub fn is_data_url(url: &str) -> bool {
    url.to_lowercase().starts_with("data:")
}

/// Whether `url` is a `data:image/...` URL.
pub fn is_image_data_url(url: &str) -> bool {
    url.to_lowercase().starts_with("data:image/")
}

/// `data:` and `blob:` URLs can spoof address-bar contents, so they deserve
/// suspicion when shown as a navigation target.
pub fn is_potential_phishing_url(url: &str) -> bool {
    let trimmed = url.trim().to_lowercase();
    matches!(
        LooseUrl::parse(&trimmed).protocol.as_deref(),
        Some("data:") | Some("blob:")
    )
}

/// Whether `origin` serves local content (files, blobs, extension pages).
pub fn is_local_file(origin: &str) -> bool {
    LOCAL_FILE_ORIGINS
        .iter()
        .any(|prefix| origin.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_addresses_by_extension() {
        assert!(is_image_address("http://x.com/cat.png"));
        assert!(is_image_address("http://x.com/cat.jpeg"));
        assert!(is_image_address("cat.bmp"));
        assert!(!is_image_address("http://x.com/cat.PNG"));
        assert!(!is_image_address("http://x.com/cat.pdf"));
    }

    #[test]
    fn file_type_matches_case_insensitively() {
        assert!(is_file_type("http://x.com/a.PDF", "pdf"));
        assert!(is_file_type("http://x.com/a.pdf?download=1", "pdf"));
        assert!(!is_file_type("http://x.com/a.pdf.html", "pdf"));
        assert!(!is_file_type("http://x.com/", "pdf"));
    }

    #[test]
    fn data_url_predicates() {
        assert!(is_data_url("data:text/html,hi"));
        assert!(is_data_url("DATA:text/html,hi"));
        assert!(!is_data_url("http://x.com/data:"));

        assert!(is_image_data_url("data:image/png;base64,AAAA"));
        assert!(!is_image_data_url("data:text/html,hi"));
    }

    #[test]
    fn phishing_protocols() {
        assert!(is_potential_phishing_url("data:text/html,login"));
        assert!(is_potential_phishing_url("  BLOB:https://x/uuid  "));
        assert!(!is_potential_phishing_url("https://example.com/"));
        assert!(!is_potential_phishing_url("plain text"));
    }

    #[test]
    fn local_file_origins() {
        assert!(is_local_file("file://"));
        assert!(is_local_file("blob:https://x"));
        assert!(is_local_file("chrome-extension://abc"));
        assert!(is_local_file("chrome://settings"));
        assert!(!is_local_file("https://example.com"));
        assert!(!is_local_file(""));
    }
}
