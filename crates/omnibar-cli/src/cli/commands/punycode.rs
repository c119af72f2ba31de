//! `omnibar punycode <url>` – hostname to ASCII form.

use omnibar_core::transform::get_punycode_url;

pub fn run_punycode(url: &str) {
    println!("{}", get_punycode_url(url));
}
