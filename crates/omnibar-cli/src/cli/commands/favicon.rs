//! `omnibar favicon <url>` – default favicon location.

use anyhow::{bail, Result};
use omnibar_core::transform::get_default_favicon_url;

pub fn run_favicon(url: &str) -> Result<()> {
    let favicon = get_default_favicon_url(url);
    if favicon.is_empty() {
        bail!("{url:?} is not a URL with a host");
    }
    println!("{favicon}");
    Ok(())
}
