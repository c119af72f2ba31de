//! `omnibar patterns <url>` – wildcard hostname patterns.

use anyhow::Result;
use omnibar_core::transform::get_hostname_patterns;

pub fn run_patterns(url: &str, json: bool) -> Result<()> {
    let patterns = get_hostname_patterns(url);
    if json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
    } else {
        for pattern in patterns {
            println!("{pattern}");
        }
    }
    Ok(())
}
