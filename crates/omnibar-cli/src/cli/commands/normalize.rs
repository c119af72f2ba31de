//! `omnibar normalize <input>` – input to absolute URL.

use omnibar_core::normalize::get_url_from_input;

pub fn run_normalize(input: &str) {
    println!("{}", get_url_from_input(input));
}
