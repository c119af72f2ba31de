//! `omnibar pdf <url>` – PDF viewer extension rewrites.

use omnibar_core::config::OmnibarConfig;
use omnibar_core::transform::{get_location_if_pdf, to_pdfjs_location};

pub fn run_pdf(url: &str, unwrap: bool, cfg: &OmnibarConfig) {
    let id = &cfg.pdf_viewer_extension_id;
    let out = if unwrap {
        get_location_if_pdf(url, id)
    } else {
        to_pdfjs_location(url, id)
    };
    println!("{out}");
}
