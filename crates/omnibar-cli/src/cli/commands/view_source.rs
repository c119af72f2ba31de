//! `omnibar view-source <url>` – wrap or unwrap source display URLs.

use anyhow::{bail, Result};
use omnibar_core::transform::{get_url_from_view_source_url, get_view_source_url_from_url};

pub fn run_view_source(url: &str, unwrap: bool) -> Result<()> {
    if unwrap {
        println!("{}", get_url_from_view_source_url(url));
        return Ok(());
    }
    match get_view_source_url_from_url(url) {
        Some(wrapped) => {
            println!("{wrapped}");
            Ok(())
        }
        None => bail!("only http(s) and file URLs that are not images can be source-viewed"),
    }
}
