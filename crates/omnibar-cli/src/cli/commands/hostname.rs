//! `omnibar hostname <url>` / `omnibar origin <url>` – strict host and origin.

use anyhow::{bail, Result};
use omnibar_core::transform::{get_hostname, get_url_origin};

pub fn run_hostname(url: &str, exclude_port: bool) -> Result<()> {
    match get_hostname(url, exclude_port) {
        Some(host) => {
            println!("{host}");
            Ok(())
        }
        None => bail!("no host in {url:?}"),
    }
}

pub fn run_origin(url: &str) -> Result<()> {
    match get_url_origin(url) {
        Some(origin) => {
            println!("{origin}");
            Ok(())
        }
        None => bail!("{url:?} does not parse as a URL"),
    }
}
