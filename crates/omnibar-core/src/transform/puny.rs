//! Punycode (IDNA) normalization of URL hostnames.

use crate::loose::LooseUrl;
use thiserror::Error;

/// Why a hostname could not be converted to its ASCII form.
#[derive(Debug, Error)]
enum PunycodeError {
    #[error("URL has no hostname")]
    NoHost,
    #[error("hostname is not valid IDNA")]
    Idna,
}

/// Converts the URL's hostname to its ASCII (punycode) form and reserializes
/// the URL. Returns the input unchanged when there is no hostname or the
/// conversion fails.
pub fn get_punycode_url(url: &str) -> String {
    match punycode_url(url) {
        Ok(converted) => converted,
        Err(err) => {
            tracing::trace!(url, %err, "punycode conversion left input unchanged");
            url.to_string()
        }
    }
}

fn punycode_url(url: &str) -> Result<String, PunycodeError> {
    let mut parts = LooseUrl::parse(url);
    let hostname = parts.hostname.as_deref().ok_or(PunycodeError::NoHost)?;
    let ascii = idna::domain_to_ascii(hostname).map_err(|_| PunycodeError::Idna)?;
    if ascii.is_empty() {
        return Err(PunycodeError::Idna);
    }
    parts.hostname = Some(ascii);
    Ok(parts.format())
}
