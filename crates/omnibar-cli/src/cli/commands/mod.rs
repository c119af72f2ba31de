//! Subcommand implementations.

mod classify;
mod favicon;
mod hostname;
mod meta;
mod normalize;
mod patterns;
mod pdf;
mod punycode;
mod view_source;

pub use classify::run_classify;
pub use favicon::run_favicon;
pub use hostname::{run_hostname, run_origin};
pub use meta::{run_completions, run_man};
pub use normalize::run_normalize;
pub use patterns::run_patterns;
pub use pdf::run_pdf;
pub use punycode::run_punycode;
pub use view_source::run_view_source;
