//! Auxiliary URL transformations built on the classifier primitives.

mod host;
mod kind;
mod pdf;
mod puny;
mod view_source;

pub use host::{
    get_default_favicon_url, get_display_host, get_host_pattern, get_hostname,
    get_hostname_patterns, get_url_origin,
};
pub use kind::{
    is_data_url, is_file_type, is_image_address, is_image_data_url, is_local_file,
    is_potential_phishing_url,
};
pub use pdf::{get_location_if_pdf, to_pdfjs_location};
pub use puny::get_punycode_url;
pub use view_source::{
    get_url_from_view_source_url, get_view_source_url_from_url, is_view_source_url,
};
